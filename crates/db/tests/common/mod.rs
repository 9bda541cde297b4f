#![allow(dead_code)]

use std::path::{Path, PathBuf};

use awql_db::{Database, DbOptions};
use awql_paths::ReferenceDir;
use tempfile::TempDir;

pub const VERSION: &str = "v201609";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The reference data shipped with the crate.
pub fn shipped_reference() -> ReferenceDir {
    ReferenceDir(Path::new(env!("CARGO_MANIFEST_DIR")).join("reference"))
}

/// A loaded database over the shipped reference data.
pub fn shipped_db() -> Database {
    init_logging();
    let mut db = Database::new(DbOptions::new(VERSION, shipped_reference()));
    db.load().expect("shipped reference data loads");
    db
}

/// A writable copy of the shipped reference data.
pub struct Scratch {
    // Keeps the directory alive.
    _tmp: TempDir,
    pub root: ReferenceDir,
}

impl Scratch {
    pub fn new() -> Self {
        init_logging();
        let tmp = tempfile::tempdir().unwrap();
        let root = ReferenceDir(tmp.path().join("reference"));
        let shipped = shipped_reference();
        let reports = root.reports_file(VERSION);
        reports.create_parent().unwrap();
        std::fs::copy(shipped.reports_file(VERSION), &reports.0).unwrap();
        std::fs::copy(shipped.views_file(), &root.views_file().0).unwrap();
        Self { _tmp: tmp, root }
    }

    pub fn options(&self) -> DbOptions {
        DbOptions::new(VERSION, self.root.clone())
    }

    pub fn db(&self) -> Database {
        let mut db = Database::new(self.options());
        db.load().unwrap();
        db
    }

    pub fn views_path(&self) -> PathBuf {
        self.root.views_file().0
    }

    pub fn write_views(&self, yaml: &str) {
        std::fs::write(self.views_path(), yaml).unwrap();
    }
}
