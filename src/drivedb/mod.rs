//! The drivedb module holds the family catalog and the resolution logic that
//! selects and merges the rule-set applicable to one device.

pub mod builtin;
pub mod catalog;
mod resolver;

pub use builtin::{load_builtin, BUILTIN_DB, BUILTIN_DB_YAML};
pub use catalog::{AttrConv, CatalogDoc, CatalogEntry, DriveDb, DriveModel, RawAttrConv};
