//! Table and view definitions of the AWQL report catalog.
//!
//! Tables are the raw report sources shipped as read-only reference data.
//! Views are named projections over a single table, carrying their own column
//! subset and aliases plus the filters, date range, grouping, ordering and paging
//! applied to it.
//!
//! Both implement [`DataSchema`]; views additionally implement [`DataSchemaView`].
//! Lookup code is expected to work against these traits rather than the
//! concrete types.

pub mod error;
pub mod field;
pub mod reference;
pub mod schema;
pub mod ser;
pub mod table;
pub mod view;

pub use error::ColumnNotFound;
pub use field::Field;
pub use schema::{DataSchema, DataSchemaView, Schema, SchemaRef};
pub use table::TableSchema;
pub use view::{Condition, Limit, Ordering, ViewSchema};
