use serde::{Deserialize, Deserializer};

/// Metadata of a single column.
///
/// Table fields carry the full metadata from the reports reference.
/// View fields are declared with a name and an optional alias only, and are
/// completed from the source table when the view is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Field {
    pub name: String,
    /// Display and lookup name. Only views set it.
    #[serde(rename = "psnm", default, deserialize_with = "non_empty")]
    pub alias: Option<String>,
    /// Type tag, e.g. `String`, `Long`, `Money` or `Enum`.
    #[serde(default, deserialize_with = "non_empty")]
    pub kind: Option<String>,
    #[serde(rename = "sgmt", default)]
    pub is_segment: bool,
    #[serde(rename = "zero", default)]
    pub supports_zero_impressions: bool,
    /// Allowed literal values, for enumerated columns.
    #[serde(rename = "enum", default)]
    pub value_list: Vec<String>,
    /// Columns that cannot be selected together with this one.
    #[serde(rename = "notc", default)]
    pub incompatible_columns: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The alias if there is one, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.alias().unwrap_or(&self.name)
    }

    /// Whether `column` designates this field, either by name or by alias.
    pub fn answers_to(&self, column: &str) -> bool {
        self.name == column || self.alias() == Some(column)
    }

    /// Whether this column cannot be selected together with `column`.
    pub fn is_incompatible_with(&self, column: &str) -> bool {
        self.incompatible_columns.iter().any(|c| c == column)
    }
}

/// Blank strings in the reference files mean "not set".
fn non_empty<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let s = Option::<String>::deserialize(de)?;
    Ok(s.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_record() {
        let yaml = "name: AdNetworkType1\nkind: Enum\nsgmt: true\nzero: true\nenum: [CONTENT, SEARCH, YOUTUBE_SEARCH]\nnotc: [ConversionCategoryName]\n";
        let field: Field = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            field,
            Field {
                name: "AdNetworkType1".into(),
                alias: None,
                kind: Some("Enum".into()),
                is_segment: true,
                supports_zero_impressions: true,
                value_list: vec!["CONTENT".into(), "SEARCH".into(), "YOUTUBE_SEARCH".into()],
                incompatible_columns: vec!["ConversionCategoryName".into()],
            }
        );
        assert!(field.is_incompatible_with("ConversionCategoryName"));
        assert!(!field.is_incompatible_with("Date"));
    }

    #[test]
    fn minimal_record() {
        let field: Field = serde_yaml::from_str("name: Clicks\npsnm: ''\n").unwrap();
        assert_eq!(field, Field::new("Clicks"));
        assert_eq!(field.display_name(), "Clicks");
    }

    #[test]
    fn alias() {
        let field = Field::new("AdGroupId").with_alias("Id");
        assert_eq!(field.display_name(), "Id");
        assert!(field.answers_to("AdGroupId"));
        assert!(field.answers_to("Id"));
        assert!(!field.answers_to(""));

        assert_eq!(Field::new("AdGroupId").with_alias("").alias(), None);
    }
}
