//! Documents of the reference directory.
//!
//! The reports document lists the tables of one API version under `reports`.
//! The views document lists the user views under `views`; see [`crate::ser`]
//! for the layout the views are written back with.

use serde::Deserialize;

use crate::table::TableSchema;
use crate::view::ViewSchema;

#[derive(Debug, Deserialize)]
struct ReportsDoc {
    #[serde(default)]
    reports: Option<Vec<TableSchema>>,
}

#[derive(Debug, Deserialize)]
struct ViewsDoc {
    #[serde(default)]
    views: Option<Vec<ViewSchema>>,
}

/// Parse a reports document into its tables, in declaration order.
pub fn parse_tables(yaml: &str) -> Result<Vec<TableSchema>, serde_yaml::Error> {
    let doc: ReportsDoc = serde_yaml::from_str(yaml)?;
    Ok(doc.reports.unwrap_or_default())
}

/// Parse a views document into its views, in declaration order.
///
/// The fields of the returned views only carry the declared name and alias.
pub fn parse_views(yaml: &str) -> Result<Vec<ViewSchema>, serde_yaml::Error> {
    let doc: ViewsDoc = serde_yaml::from_str(yaml)?;
    Ok(doc.views.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Condition, Limit, Ordering};
    use crate::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports() {
        let yaml = r#"
reports:
  - name: KEYWORDS_PERFORMANCE_REPORT
    aggr: Id
    cols:
      - name: Id
        kind: Long
      - name: Device
        kind: Enum
        sgmt: true
        enum: [CONNECTED_TV, DESKTOP, HIGH_END_MOBILE]
  - name: LABEL_REPORT
    cols:
      - name: LabelId
"#;
        let tables = parse_tables(yaml).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].aggregate_column, "Id");
        assert!(tables[0].fields[1].is_segment);
        assert_eq!(tables[0].fields[1].value_list.len(), 3);
        assert_eq!(tables[1].aggregate_column, "");
        assert_eq!(tables[1].fields, [Field::new("LabelId")]);
    }

    #[test]
    fn views() {
        let yaml = r#"
views:
  - name: CAMPAIGN_DAILY
    rprt: CAMPAIGN_PERFORMANCE_REPORT
    aggr: CampaignId
    cols:
      - name: CampaignId
        psnm: Id
      - name: Cost
    where:
      - coln: CampaignStatus
        oprt: IN
        cval: [ENABLED, PAUSED]
        lval: true
    during: [20161001, 20161031]
    group: [1]
    order:
      - cpos: 2
        desc: true
    limit:
      rcnt: 10
"#;
        let views = parse_views(yaml).unwrap();
        assert_eq!(
            views,
            [ViewSchema::new("CAMPAIGN_DAILY", "CAMPAIGN_PERFORMANCE_REPORT")
                .with_aggregate_column("CampaignId")
                .with_field("CampaignId", Some("Id"))
                .with_field("Cost", None)
                .with_condition(
                    Condition::new("CampaignStatus", "IN", vec!["ENABLED".into(), "PAUSED".into()]).literal()
                )
                .with_during("20161001")
                .with_during("20161031")
                .with_group_by(1)
                .with_order_by(Ordering::desc(2))
                .with_limit(Limit::new(0, 10))]
        );
    }

    #[test]
    fn empty_documents() {
        assert!(parse_views("views:\n").unwrap().is_empty());
        assert!(parse_views("views: []\n").unwrap().is_empty());
        assert!(parse_tables("reports:\n").unwrap().is_empty());
    }

    #[test]
    fn malformed_documents() {
        assert!(parse_tables("reports: [").is_err());
        // A view without its source table.
        assert!(parse_views("views:\n  - name: V\n    cols:\n      - name: Id\n").is_err());
    }
}
