//! # Drive Database Error Handling
//!
//! This module defines the DriveDbError enum, which represents the different
//! error types that can occur in the drivedb-rs crate.

use thiserror::Error;

/// Represents the different error types that can occur in the drive database crate.
#[derive(Debug, Error)]
pub enum DriveDbError {
    /// Indicates the catalog carries no `DEFAULT` rule-set to fall back on.
    #[error("Catalog has no DEFAULT entry")]
    MissingDefaultEntry,

    /// Indicates the catalog carries more than one `DEFAULT` rule-set.
    #[error("Catalog has {0} DEFAULT entries, expected exactly one")]
    DuplicateDefaultEntry(usize),

    /// Indicates a family's model pattern failed to compile.
    #[error("Invalid model pattern for family {family:?}: {source}")]
    PatternCompile {
        family: String,
        #[source]
        source: regex::Error,
    },

    /// Indicates an error deserializing a catalog document.
    #[error("Error parsing catalog document: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    /// Indicates an IDENTIFY DEVICE record of the wrong size.
    #[error("IDENTIFY DEVICE record is {0} bytes, expected 512")]
    IdentifyRecordLength(usize),

    /// Indicates a SMART attribute page of the wrong size.
    #[error("SMART attribute page is {0} bytes, expected 362")]
    AttributePageLength(usize),

    /// Indicates a nom parsing error on a fixed-layout record.
    #[error("Record parse error: {0}")]
    RecordParse(String),
}
