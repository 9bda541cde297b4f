use awql_schema::{Schema, SchemaRef};
use indexmap::IndexMap;

/// For every column, the tables and views exposing it.
///
/// Tables are indexed under their column names, views under the alias of a
/// column when it has one. Derived from a [`Schema`] as a whole, and rebuilt
/// whenever the schema changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    owners: IndexMap<String, Vec<SchemaRef>>,
}

impl ColumnIndex {
    pub fn build(schema: &Schema) -> Self {
        let mut owners: IndexMap<String, Vec<SchemaRef>> = IndexMap::new();
        for (owner, s) in schema.iter() {
            for field in s.columns() {
                let list = owners.entry(field.display_name().to_owned()).or_default();
                // A schema exposing a name twice is only listed once.
                if list.last() != Some(&owner) {
                    list.push(owner);
                }
            }
        }
        Self { owners }
    }

    /// Owners of `column`, tables first, in declaration order.
    pub fn get(&self, column: &str) -> &[SchemaRef] {
        self.owners.get(column).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every indexed column name, in the order first seen.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.owners.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awql_schema::{Field, TableSchema, ViewSchema};
    use pretty_assertions::assert_eq;

    #[test]
    fn views_are_indexed_by_alias() {
        let table = TableSchema::new(
            "ADGROUP_PERFORMANCE_REPORT",
            vec![Field::new("AdGroupId"), Field::new("Impressions")],
        );
        let view = ViewSchema::new("ADGROUP_DAILY", "ADGROUP_PERFORMANCE_REPORT")
            .with_field("AdGroupId", Some("Id"))
            .with_field("Impressions", None)
            .merged_with(&table)
            .unwrap();
        let index = ColumnIndex::build(&Schema::new(vec![table], vec![view]));

        assert_eq!(index.get("AdGroupId"), [SchemaRef::Table(0)]);
        assert_eq!(index.get("Id"), [SchemaRef::View(0)]);
        assert_eq!(index.get("Impressions"), [SchemaRef::Table(0), SchemaRef::View(0)]);
        assert!(index.get("Clicks").is_empty());
        assert_eq!(index.columns().collect::<Vec<_>>(), ["AdGroupId", "Impressions", "Id"]);
    }

    #[test]
    fn owners_are_listed_once() {
        let table = TableSchema::new("T", vec![Field::new("Id"), Field::new("Name")]);
        let view = ViewSchema::new("V", "T")
            .with_field("Id", None)
            .with_field("Name", Some("Id"))
            .merged_with(&table)
            .unwrap();
        let index = ColumnIndex::build(&Schema::new(vec![table], vec![view]));
        assert_eq!(index.get("Id"), [SchemaRef::Table(0), SchemaRef::View(0)]);
        assert_eq!(index.len(), 2);
    }
}
