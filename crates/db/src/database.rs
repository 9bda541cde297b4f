use std::io;

use awql_fs_utils::{atomic_write, lockfile::Lockfile};
use awql_schema::{reference, ser, DataSchema, Schema, SchemaRef, TableSchema, ViewSchema};
use log::{debug, info, warn};

use crate::error::{DatabaseError, ReferenceError, ViewLoadError};
use crate::index::ColumnIndex;
use crate::options::DbOptions;

/// The catalog of tables and views.
///
/// Nothing can be looked up before [`Database::load`] succeeded. After a failed
/// load the database must not be used.
///
/// Loading and adding views take `&mut self`; sharing a database between
/// threads requires external synchronization.
#[derive(Debug)]
pub struct Database {
    options: DbOptions,
    schema: Schema,
    columns: ColumnIndex,
    ready: bool,
}

impl Database {
    pub fn new(options: DbOptions) -> Self {
        Self {
            options,
            schema: Schema::default(),
            columns: ColumnIndex::default(),
            ready: false,
        }
    }

    /// A database over the default reference directory, for API `version`.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self::new(DbOptions {
            version: version.into(),
            ..DbOptions::default()
        })
    }

    pub fn options(&self) -> &DbOptions {
        &self.options
    }

    pub fn version(&self) -> &str {
        &self.options.version
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Load the tables, then the views, then index their columns.
    ///
    /// Does nothing once the database is loaded.
    pub fn load(&mut self) -> Result<(), DatabaseError> {
        if self.ready {
            return Ok(());
        }
        self.load_tables().map_err(DatabaseError::Tables)?;
        self.load_views().map_err(DatabaseError::Views)?;
        self.build_columns_index()?;
        self.ready = true;

        info!(
            "loaded {} tables and {} views of {}, {} columns indexed",
            self.schema.tables.len(),
            self.schema.views.len(),
            self.options.version,
            self.columns.len(),
        );
        Ok(())
    }

    fn load_tables(&mut self) -> Result<(), ReferenceError> {
        let file = self.options.reports_file();
        let yaml = file.read_to_string().map_err(|source| ReferenceError::Read {
            path: file.0.clone(),
            source,
        })?;
        self.schema.tables = reference::parse_tables(&yaml).map_err(|source| ReferenceError::Parse {
            path: file.0.clone(),
            source,
        })?;
        debug!("read {} tables from {}", self.schema.tables.len(), file.display());
        Ok(())
    }

    fn load_views(&mut self) -> Result<(), ViewLoadError> {
        let file = self.options.views_file();
        let yaml = match file.read_to_string() {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no views file at {}", file.display());
                self.schema.views = Vec::new();
                return Ok(());
            }
            Err(source) => {
                return Err(ReferenceError::Read {
                    path: file.0.clone(),
                    source,
                }
                .into());
            }
        };
        let declared = reference::parse_views(&yaml).map_err(|source| ReferenceError::Parse {
            path: file.0.clone(),
            source,
        })?;

        let mut views = Vec::with_capacity(declared.len());
        for view in declared {
            if !view.is_complete() {
                return Err(ViewLoadError::Incomplete { view: view.name });
            }
            if self.schema.table(&view.name).is_some() || views.iter().any(|v: &ViewSchema| v.name == view.name) {
                return Err(ViewLoadError::DuplicateName { view: view.name });
            }
            let Some(table) = self.schema.table(&view.source_table_name) else {
                return Err(ViewLoadError::UnknownTable {
                    table: view.source_table_name,
                    view: view.name,
                });
            };
            let name = view.name.clone();
            let view = view
                .merged_with(table)
                .map_err(|source| ViewLoadError::UnknownColumn { view: name, source })?;
            debug!("view {} selects {} columns of {}", view.name, view.fields.len(), table.name);
            views.push(view);
        }
        self.schema.views = views;
        Ok(())
    }

    fn build_columns_index(&mut self) -> Result<(), DatabaseError> {
        if self.schema.tables.is_empty() {
            return Err(DatabaseError::Columns);
        }
        self.columns = ColumnIndex::build(&self.schema);
        debug!("indexed {} columns", self.columns.len());
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), DatabaseError> {
        if self.ready { Ok(()) } else { Err(DatabaseError::NotReady) }
    }

    /// Searches return nothing on a database that is not loaded.
    fn searchable(&self, op: &str) -> bool {
        if !self.ready {
            warn!("{op} on a database that is not loaded");
        }
        self.ready
    }

    /// The table or view named `name`. Tables take precedence over views.
    pub fn table(&self, name: &str) -> Result<&dyn DataSchema, DatabaseError> {
        self.ensure_ready()?;
        self.schema
            .find(name)
            .map(|r| self.schema.get(r))
            .ok_or_else(|| DatabaseError::UnknownTable { name: name.to_owned() })
    }

    /// Tables, then views, whose name contains `pattern`.
    pub fn tables_contains(&self, pattern: &str) -> Vec<&dyn DataSchema> {
        if !self.searchable("tables_contains") {
            return Vec::new();
        }
        self.schema.filter_by_name(|name| name.contains(pattern))
    }

    /// Tables, then views, whose name starts with `pattern`.
    pub fn tables_prefixed_by(&self, pattern: &str) -> Vec<&dyn DataSchema> {
        if !self.searchable("tables_prefixed_by") {
            return Vec::new();
        }
        self.schema.filter_by_name(|name| name.starts_with(pattern))
    }

    /// Tables, then views, whose name ends with `pattern`.
    pub fn tables_suffixed_by(&self, pattern: &str) -> Vec<&dyn DataSchema> {
        if !self.searchable("tables_suffixed_by") {
            return Vec::new();
        }
        self.schema.filter_by_name(|name| name.ends_with(pattern))
    }

    /// Tables, then views, exposing `column`. Views are matched by alias when
    /// the column has one.
    pub fn tables_with_column(&self, column: &str) -> Vec<&dyn DataSchema> {
        if !self.searchable("tables_with_column") {
            return Vec::new();
        }
        self.columns.get(column).iter().map(|&r| self.schema.get(r)).collect()
    }

    /// Every indexed column name, for completion.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.columns()
    }

    pub fn tables(&self) -> &[TableSchema] {
        &self.schema.tables
    }

    pub fn views(&self) -> &[ViewSchema] {
        &self.schema.views
    }

    /// Persist `view` and add it to the database.
    ///
    /// The view needs a name, a source table and at least one field.
    /// A name already in use is an error, unless `replace` is set and the name
    /// belongs to a view, in which case that view is replaced in place.
    /// The fields of `view` are resolved against its source table first, so
    /// only loadable views are ever written.
    ///
    /// The views file is rewritten as a whole from the views in memory. If
    /// writing fails, the database is left unchanged.
    pub fn add_view(&mut self, view: ViewSchema, replace: bool) -> Result<(), DatabaseError> {
        self.ensure_ready()?;
        if !view.is_complete() {
            return Err(DatabaseError::IncompleteView { name: view.name });
        }

        let replaced = match self.schema.find(&view.name) {
            None => None,
            Some(SchemaRef::View(pos)) if replace => Some(pos),
            Some(_) => return Err(DatabaseError::AlreadyExists { name: view.name }),
        };

        let Some(table) = self.schema.table(&view.source_table_name) else {
            return Err(DatabaseError::UnknownTable {
                name: view.source_table_name,
            });
        };
        let view = view.merged_with(table)?;
        let name = view.name.clone();

        let mut views = self.schema.views.clone();
        match replaced {
            Some(pos) => views[pos] = view,
            None => views.push(view),
        }

        let file = self.options.views_file();
        {
            let _lock = Lockfile::for_file(file.as_ref())?;
            atomic_write(file.as_ref(), ser::views_to_string(&views))?;
        }
        if replaced.is_some() {
            info!("replaced view {name} in {}", file.display());
        } else {
            info!("added view {name} to {}", file.display());
        }

        self.schema.views = views;
        self.build_columns_index()
    }
}
