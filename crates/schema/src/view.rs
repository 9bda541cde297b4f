use serde::Deserialize;

use crate::error::ColumnNotFound;
use crate::field::Field;
use crate::schema::{DataSchema, DataSchemaView};
use crate::table::TableSchema;

/// A filter of a view, e.g. `Impressions > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Condition {
    #[serde(rename = "coln")]
    pub column_name: String,
    /// Comparator token, e.g. `>`, `IN` or `STARTS_WITH`.
    #[serde(rename = "oprt")]
    pub operator: String,
    #[serde(rename = "cval", default)]
    pub values: Vec<String>,
    /// Whether `values` are literal constants rather than column references.
    #[serde(rename = "lval", default)]
    pub is_literal: bool,
}

impl Condition {
    pub fn new(column_name: impl Into<String>, operator: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            column_name: column_name.into(),
            operator: operator.into(),
            values,
            is_literal: false,
        }
    }

    pub fn literal(mut self) -> Self {
        self.is_literal = true;
        self
    }
}

/// One term of the order clause of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Ordering {
    /// 1-based position in the fields of the view.
    #[serde(rename = "cpos")]
    pub column_position: usize,
    #[serde(rename = "desc", default)]
    pub sort_descending: bool,
}

impl Ordering {
    pub fn asc(column_position: usize) -> Self {
        Self {
            column_position,
            sort_descending: false,
        }
    }

    pub fn desc(column_position: usize) -> Self {
        Self {
            column_position,
            sort_descending: true,
        }
    }
}

/// The limit clause of a view. A `row_count` of 0 means there is none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Limit {
    #[serde(rename = "oset", default)]
    pub offset: usize,
    #[serde(rename = "rcnt")]
    pub row_count: usize,
}

impl Limit {
    pub fn new(offset: usize, row_count: usize) -> Self {
        Self { offset, row_count }
    }

    pub fn is_set(&self) -> bool {
        self.row_count > 0
    }
}

/// A named projection over a single table.
///
/// As read from the views reference, `fields` only carry a name and an alias.
/// [`ViewSchema::merged_with`] completes them with the metadata of the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewSchema {
    pub name: String,
    #[serde(rename = "aggr", default)]
    pub aggregate_column: String,
    #[serde(rename = "cols", default)]
    pub fields: Vec<Field>,
    /// Name of the table this view selects from.
    #[serde(rename = "rprt")]
    pub source_table_name: String,
    #[serde(rename = "where", default)]
    pub conditions: Vec<Condition>,
    /// Date range, either a relative macro like `LAST_30_DAYS` or two dates.
    #[serde(rename = "during", default)]
    pub date_range_tokens: Vec<String>,
    /// 1-based positions in `fields`.
    #[serde(rename = "group", default)]
    pub group_by: Vec<usize>,
    #[serde(rename = "order", default)]
    pub order_by: Vec<Ordering>,
    #[serde(default)]
    pub limit: Limit,
}

impl ViewSchema {
    pub fn new(name: impl Into<String>, source_table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_table_name: source_table_name.into(),
            ..Self::default()
        }
    }

    pub fn with_aggregate_column(mut self, column: impl Into<String>) -> Self {
        self.aggregate_column = column.into();
        self
    }

    /// Select `column` from the source table, optionally renamed to `alias`.
    pub fn with_field(mut self, column: impl Into<String>, alias: Option<&str>) -> Self {
        let mut field = Field::new(column);
        if let Some(alias) = alias {
            field = field.with_alias(alias);
        }
        self.fields.push(field);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_during(mut self, token: impl Into<String>) -> Self {
        self.date_range_tokens.push(token.into());
        self
    }

    pub fn with_group_by(mut self, column_position: usize) -> Self {
        self.group_by.push(column_position);
        self
    }

    pub fn with_order_by(mut self, ordering: Ordering) -> Self {
        self.order_by.push(ordering);
        self
    }

    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    /// Whether the view has a name, a source table and at least one field.
    ///
    /// Incomplete views are never written to the views document.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.source_table_name.is_empty() && !self.fields.is_empty()
    }

    /// Resolve every declared field against `table` by name.
    ///
    /// The merged fields carry all the metadata of the table column except the
    /// alias, which is the one declared by the view.
    pub fn merged_with(mut self, table: &TableSchema) -> Result<Self, ColumnNotFound> {
        self.fields = self
            .fields
            .into_iter()
            .map(|declared| {
                let mut field = table.column_by_name(&declared.name)?.clone();
                field.alias = declared.alias;
                Ok(field)
            })
            .collect::<Result<_, ColumnNotFound>>()?;
        Ok(self)
    }
}

impl DataSchema for ViewSchema {
    fn aggregate_column(&self) -> &str {
        &self.aggregate_column
    }

    /// Views answer to the column name as well as to its alias.
    fn column_by_name(&self, column: &str) -> Result<&Field, ColumnNotFound> {
        self.fields
            .iter()
            .find(|f| f.answers_to(column))
            .ok_or_else(|| ColumnNotFound::new(&self.name, column))
    }

    fn columns(&self) -> &[Field] {
        &self.fields
    }

    fn source_name(&self) -> &str {
        &self.name
    }

    fn as_view(&self) -> Option<&dyn DataSchemaView> {
        Some(self)
    }
}

impl DataSchemaView for ViewSchema {
    fn condition_list(&self) -> &[Condition] {
        &self.conditions
    }

    fn during_list(&self) -> &[String] {
        &self.date_range_tokens
    }

    fn group_list(&self) -> &[usize] {
        &self.group_by
    }

    fn order_list(&self) -> &[Ordering] {
        &self.order_by
    }

    fn start_index(&self) -> usize {
        self.limit.offset
    }

    fn page_size(&self) -> usize {
        self.limit.row_count
    }
}
