//! The on-disk layout of the AWQL reference data.
//!
//! ```text
//! reference/            ReferenceDir
//! ├── views.yml         ViewsFile, shared by every API version
//! └── v201609/          one directory per API version
//!     └── reports.yml   ReportsFile
//! ```

pub mod reference;
mod utils;

pub use reference::{ReferenceDir, ReportsFile, ViewsFile};

#[doc(hidden)]
pub use serde as __serde;
