use awql_paths::{ReferenceDir, ReportsFile, ViewsFile};
use serde::Deserialize;

/// API version whose reports are loaded when none is configured.
pub const DEFAULT_VERSION: &str = "v201609";

/// [`crate::Database`] options.
///
/// Can be read from a TOML document, every key being
/// optional:
///
/// ```toml
/// version = "v201609"
/// reference_dir = "/usr/share/awql/reference"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DbOptions {
    /// Selects the reports file, `<reference_dir>/<version>/reports.yml`.
    ///
    /// Default: [`DEFAULT_VERSION`]
    pub version: String,
    /// Directory holding the reports of every version and the views file.
    ///
    /// Default: `reference`, relative to the working directory.
    pub reference_dir: ReferenceDir,
}

impl Default for DbOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_owned(),
            reference_dir: ReferenceDir::default(),
        }
    }
}

impl DbOptions {
    pub fn new(version: impl Into<String>, reference_dir: impl Into<ReferenceDir>) -> Self {
        Self {
            version: version.into(),
            reference_dir: reference_dir.into(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn reports_file(&self) -> ReportsFile {
        self.reference_dir.reports_file(&self.version)
    }

    pub fn views_file(&self) -> ViewsFile {
        self.reference_dir.views_file()
    }
}
