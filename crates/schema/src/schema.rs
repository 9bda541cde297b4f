use std::fmt;

use crate::error::ColumnNotFound;
use crate::field::Field;
use crate::table::TableSchema;
use crate::view::{Condition, Ordering, ViewSchema};

/// Capabilities shared by tables and views.
pub trait DataSchema: fmt::Debug {
    /// The aggregate column, possibly empty.
    fn aggregate_column(&self) -> &str;

    /// Resolve `column` to one of the fields of this schema.
    fn column_by_name(&self, column: &str) -> Result<&Field, ColumnNotFound>;

    fn columns(&self) -> &[Field];

    /// The name of the table or view itself.
    fn source_name(&self) -> &str;

    /// The view capabilities of this schema, if it is a view.
    fn as_view(&self) -> Option<&dyn DataSchemaView> {
        None
    }
}

/// Capabilities of views on top of [`DataSchema`].
pub trait DataSchemaView: DataSchema {
    fn condition_list(&self) -> &[Condition];
    fn during_list(&self) -> &[String];
    fn group_list(&self) -> &[usize];
    fn order_list(&self) -> &[Ordering];
    /// Offset of the limit clause.
    fn start_index(&self) -> usize;
    /// Row count of the limit clause, 0 if there is none.
    fn page_size(&self) -> usize;
}

/// A handle on a table or view of a [`Schema`], by position.
///
/// Handles are only meaningful for the schema that issued them, and only until
/// its view list is next modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaRef {
    Table(usize),
    View(usize),
}

/// Every table and view known to the catalog.
///
/// Tables always come before views, and both keep their declaration order.
/// Name resolution follows the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub tables: Vec<TableSchema>,
    pub views: Vec<ViewSchema>,
}

impl Schema {
    pub fn new(tables: Vec<TableSchema>, views: Vec<ViewSchema>) -> Self {
        Self { tables, views }
    }

    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Resolve `name` against the tables, then against the views.
    pub fn find(&self, name: &str) -> Option<SchemaRef> {
        if let Some(pos) = self.tables.iter().position(|t| t.name == name) {
            return Some(SchemaRef::Table(pos));
        }
        self.views.iter().position(|v| v.name == name).map(SchemaRef::View)
    }

    /// # Panics
    ///
    /// If `r` was not issued by this schema.
    pub fn get(&self, r: SchemaRef) -> &dyn DataSchema {
        match r {
            SchemaRef::Table(pos) => &self.tables[pos],
            SchemaRef::View(pos) => &self.views[pos],
        }
    }

    /// All tables, then all views, with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (SchemaRef, &dyn DataSchema)> {
        let tables = self
            .tables
            .iter()
            .enumerate()
            .map(|(pos, t)| (SchemaRef::Table(pos), t as &dyn DataSchema));
        let views = self
            .views
            .iter()
            .enumerate()
            .map(|(pos, v)| (SchemaRef::View(pos), v as &dyn DataSchema));
        tables.chain(views)
    }

    /// All tables and views whose name satisfies `pred`, tables first.
    pub fn filter_by_name(&self, mut pred: impl FnMut(&str) -> bool) -> Vec<&dyn DataSchema> {
        self.iter()
            .map(|(_, s)| s)
            .filter(|s| pred(s.source_name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(
            vec![
                TableSchema::new("CAMPAIGN_PERFORMANCE_REPORT", vec![Field::new("CampaignId")]),
                TableSchema::new("AD_PERFORMANCE_REPORT", vec![Field::new("Id")]),
            ],
            vec![
                ViewSchema::new("CAMPAIGN_DAILY", "CAMPAIGN_PERFORMANCE_REPORT").with_field("CampaignId", None),
                ViewSchema::new("AD_PERFORMANCE_REPORT", "AD_PERFORMANCE_REPORT").with_field("Id", None),
            ],
        )
    }

    #[test]
    fn tables_shadow_views() {
        let s = schema();
        assert_eq!(s.find("AD_PERFORMANCE_REPORT"), Some(SchemaRef::Table(1)));
        assert_eq!(s.find("CAMPAIGN_DAILY"), Some(SchemaRef::View(0)));
        assert_eq!(s.find("campaign_daily"), None);
        assert!(s.get(SchemaRef::View(0)).as_view().is_some());
        assert!(s.get(SchemaRef::Table(0)).as_view().is_none());
    }

    #[test]
    fn filter_lists_tables_before_views() {
        let s = schema();
        let names: Vec<_> = s
            .filter_by_name(|n| n.starts_with("CAMPAIGN") || n.starts_with("AD_"))
            .into_iter()
            .map(|s| s.source_name())
            .collect();
        assert_eq!(
            names,
            [
                "CAMPAIGN_PERFORMANCE_REPORT",
                "AD_PERFORMANCE_REPORT",
                "CAMPAIGN_DAILY",
                "AD_PERFORMANCE_REPORT"
            ]
        );
    }
}
