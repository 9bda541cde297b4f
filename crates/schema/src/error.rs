/// A column name did not resolve against a table or view.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("column `{column}` not found in `{schema}`")]
pub struct ColumnNotFound {
    /// Name of the table or view that was searched.
    pub schema: String,
    pub column: String,
}

impl ColumnNotFound {
    pub fn new(schema: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            column: column.into(),
        }
    }
}
