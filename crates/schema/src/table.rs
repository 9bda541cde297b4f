use serde::Deserialize;

use crate::error::ColumnNotFound;
use crate::field::Field;
use crate::schema::DataSchema;

/// A report source, as declared in the reports reference of an API version.
///
/// Tables are reference data: they are loaded once and never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableSchema {
    pub name: String,
    /// Column used as the primary grouping key. Empty if the report has none.
    #[serde(rename = "aggr", default)]
    pub aggregate_column: String,
    /// Columns, in declaration order.
    #[serde(rename = "cols", default)]
    pub fields: Vec<Field>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            aggregate_column: String::new(),
            fields,
        }
    }

    pub fn with_aggregate_column(mut self, column: impl Into<String>) -> Self {
        self.aggregate_column = column.into();
        self
    }
}

impl DataSchema for TableSchema {
    fn aggregate_column(&self) -> &str {
        &self.aggregate_column
    }

    /// Tables only answer to the exact column name.
    fn column_by_name(&self, column: &str) -> Result<&Field, ColumnNotFound> {
        self.fields
            .iter()
            .find(|f| f.name == column)
            .ok_or_else(|| ColumnNotFound::new(&self.name, column))
    }

    fn columns(&self) -> &[Field] {
        &self.fields
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
