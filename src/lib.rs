//! # drivedb-rs - Drive Family Database and SMART Attribute Decoding
//!
//! The drivedb-rs crate identifies a storage device's model family from its
//! ATA IDENTIFY DEVICE data and applies the matching rule-set to translate
//! the device's raw SMART attribute records into named, typed values.
//!
//! ## Features
//!
//! - Load a family catalog from parsed entries, with model patterns compiled
//!   once up front and the DEFAULT invariant validated at load time
//! - Ship a built-in default database, loaded through the same path as any
//!   external catalog document
//! - Resolve a device's family by matching catalog patterns against the raw
//!   identification bytes, merging family overrides onto the defaults
//! - Parse the fixed-size IDENTIFY DEVICE and SMART attribute page records
//! - Decode attribute vendor bytes per conversion kind (`raw48`, `raw16`,
//!   `raw16(raw16)`, `raw24(raw8)`, `raw16(avg16)`, `tempminmax`), degrading
//!   to `raw48` on anything unrecognized instead of failing
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! ```no_run
//! use drivedb_rs::{decode_device, load_builtin, DriveDbError};
//!
//! fn main() -> Result<(), DriveDbError> {
//!     let db = load_builtin()?;
//!
//!     // Raw records come from a transport collaborator (SAT, NVMe bridge, ...)
//!     let ident: Vec<u8> = std::fs::read("identify.bin").unwrap();
//!     let page: Vec<u8> = std::fs::read("smart_page.bin").unwrap();
//!
//!     let (model, attrs) = decode_device(&db, &ident, &page)?;
//!     if !model.warning.is_empty() {
//!         println!("WARNING: {}", model.warning);
//!     }
//!     for attr in attrs {
//!         println!("{attr}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod ata;
pub mod constants;
pub mod decode;
pub mod drivedb;
pub mod error;
pub mod logging;

pub use crate::error::DriveDbError;
pub use crate::logging::{init_logger, log_info};

// Record layouts
pub use ata::{AttributeFlags, IdentifyDevice, SmartAttribute, SmartPage};

// Catalog and resolution
pub use drivedb::{load_builtin, AttrConv, CatalogDoc, CatalogEntry, DriveDb, DriveModel, BUILTIN_DB};

// Attribute decoding
pub use decode::{decode_attributes, decode_raw, AuxValues, ConversionKind, DecodedAttribute};

/// Resolve a device's family and decode its SMART attributes in one call.
///
/// # Arguments
/// * `db` - Loaded family catalog
/// * `ident` - Raw 512-byte IDENTIFY DEVICE record
/// * `page` - Raw 362-byte SMART attribute page
///
/// # Returns
/// * `Ok((model, attrs))` - Merged rule-set and decoded attributes in slot order
/// * `Err(DriveDbError)` - The attribute page had the wrong shape
pub fn decode_device(
    db: &DriveDb,
    ident: &[u8],
    page: &[u8],
) -> Result<(DriveModel, Vec<DecodedAttribute>), DriveDbError> {
    let resolved = db.resolve(ident);
    let attrs = decode_raw(&resolved, page)?;
    Ok((resolved, attrs))
}
