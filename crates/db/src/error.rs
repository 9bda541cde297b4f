use std::io;
use std::path::PathBuf;

use awql_fs_utils::lockfile::LockfileError;
use awql_schema::ColumnNotFound;

/// A reference document could not be read or parsed.
#[derive(thiserror::Error, Debug)]
pub enum ReferenceError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Why the views could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum ViewLoadError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("view `{view}` has the name of another table or view")]
    DuplicateName { view: String },
    #[error("view `{view}` has no name, source table or fields")]
    Incomplete { view: String },
    #[error("view `{view}` selects from unknown table `{table}`")]
    UnknownTable { view: String, table: String },
    #[error("view `{view}` selects an unknown column")]
    UnknownColumn {
        view: String,
        #[source]
        source: ColumnNotFound,
    },
}

/// Errors of [`crate::Database`].
///
/// Loading reports which phase failed, [`DatabaseError::Tables`],
/// [`DatabaseError::Views`] or [`DatabaseError::Columns`], with the cause as
/// its source.
#[derive(thiserror::Error, Debug)]
pub enum DatabaseError {
    #[error("failed to load the tables")]
    Tables(#[source] ReferenceError),
    #[error("failed to load the views")]
    Views(#[source] ViewLoadError),
    #[error("no table to index the columns of")]
    Columns,
    #[error("unknown table `{name}`")]
    UnknownTable { name: String },
    #[error(transparent)]
    UnknownColumn(#[from] ColumnNotFound),
    #[error("view `{name}` needs a name, a source table and at least one field")]
    IncompleteView { name: String },
    #[error("table `{name}` already exists")]
    AlreadyExists { name: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lock(#[from] LockfileError),
    #[error("the database is not loaded")]
    NotReady,
}

/// Coarse classification of [`DatabaseError`], stable for callers to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Tables,
    Views,
    Columns,
    Invalid,
    NotFound,
    AlreadyExists,
    Io,
    NotReady,
}

impl DatabaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Tables(_) => ErrorKind::Tables,
            Self::Views(_) => ErrorKind::Views,
            Self::Columns => ErrorKind::Columns,
            Self::IncompleteView { .. } => ErrorKind::Invalid,
            Self::UnknownTable { .. } | Self::UnknownColumn(_) => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::Io(_) | Self::Lock(_) => ErrorKind::Io,
            Self::NotReady => ErrorKind::NotReady,
        }
    }
}
