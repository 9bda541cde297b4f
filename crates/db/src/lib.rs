//! Catalog of the AWQL report tables and user views.
//!
//! A [`Database`] is created from [`DbOptions`], loaded once with
//! [`Database::load`], and then answers the name and column lookups of the
//! query planner and the autocompleter. New views are persisted with
//! [`Database::add_view`].
//!
//! ```no_run
//! use awql_db::{Database, DbOptions};
//!
//! let mut db = Database::new(DbOptions::default());
//! db.load()?;
//! let table = db.table("AD_PERFORMANCE_REPORT")?;
//! assert!(table.column_by_name("TrackingUrlTemplate").is_ok());
//! # Ok::<(), awql_db::DatabaseError>(())
//! ```

pub mod database;
pub mod error;
pub mod index;
pub mod options;

pub use awql_schema::{
    ColumnNotFound, Condition, DataSchema, DataSchemaView, Field, Limit, Ordering, TableSchema, ViewSchema,
};
pub use database::Database;
pub use error::{DatabaseError, ErrorKind, ReferenceError, ViewLoadError};
pub use options::DbOptions;
