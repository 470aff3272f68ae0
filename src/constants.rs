//! ATA Command and Record-Layout Constants
//!
//! This module defines constants used when issuing SMART-related commands to
//! ATA devices and when interpreting the fixed-size records they return.

/// ATA feature register value selecting SMART READ DATA
pub const SMART_READ_DATA: u8 = 0xD0;

/// ATA SMART command opcode
pub const ATA_SMART: u8 = 0xB0;

/// ATA IDENTIFY DEVICE command opcode
pub const ATA_IDENTIFY_DEVICE: u8 = 0xEC;

// ----------------------------------------------------------------------------
// Record sizes
// ----------------------------------------------------------------------------

/// Size of the raw IDENTIFY DEVICE record
pub const IDENTIFY_RECORD_SIZE: usize = 512;

/// Number of attribute slots in a SMART data page
pub const SMART_PAGE_ATTRS: usize = 30;

/// Size of one packed SMART attribute entry
pub const SMART_ATTR_SIZE: usize = 12;

/// Size of the raw SMART data page: a version word plus 30 attribute entries
pub const SMART_PAGE_SIZE: usize = 2 + SMART_PAGE_ATTRS * SMART_ATTR_SIZE;

// ----------------------------------------------------------------------------
// Catalog sentinels
// ----------------------------------------------------------------------------

/// Family name of the fallback rule-set every catalog must carry exactly once
pub const DEFAULT_FAMILY: &str = "DEFAULT";

/// Families whose name starts with this prefix are versioning placeholders
/// and never participate in resolution
pub const PLACEHOLDER_PREFIX: char = '$';
