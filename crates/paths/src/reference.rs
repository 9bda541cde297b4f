use crate::utils::path_type;

path_type! {
    /// The root of the reference data: one reports file per API version and
    /// the shared views file.
    ReferenceDir
}

impl ReferenceDir {
    pub const VIEWS_FILE_NAME: &str = "views.yml";
    pub const REPORTS_FILE_NAME: &str = "reports.yml";

    /// `<root>/<version>/reports.yml`
    pub fn reports_file(&self, version: &str) -> ReportsFile {
        ReportsFile(self.0.join(version).join(Self::REPORTS_FILE_NAME))
    }

    /// `<root>/views.yml`
    pub fn views_file(&self) -> ViewsFile {
        ViewsFile(self.0.join(Self::VIEWS_FILE_NAME))
    }
}

impl Default for ReferenceDir {
    fn default() -> Self {
        Self("reference".into())
    }
}

path_type! {
    /// Table definitions of a single API version. Read-only.
    ReportsFile: file
}

path_type! {
    /// User-defined views, rewritten as a whole every time a view is added.
    ViewsFile: file
}
