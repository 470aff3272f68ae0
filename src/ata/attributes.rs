//! # SMART Attribute Page Layout
//!
//! This module decodes the 362-byte data page returned by SMART READ DATA:
//! a 16-bit version word followed by exactly 30 packed 12-byte attribute
//! entries. Slots a device does not use carry id 0 and are kept in place so
//! the page preserves the on-device slot order.

use crate::constants::{SMART_PAGE_ATTRS, SMART_PAGE_SIZE};
use crate::error::DriveDbError;
use bitflags::bitflags;
use nom::bytes::complete::take;
use nom::number::complete::{be_u8, le_u16};
use nom::IResult;

bitflags! {
    /// Status flags of a SMART attribute (bytes 1-2 of the packed entry).
    ///
    /// Bits 6 and up are vendor-specific and preserved as-is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AttributeFlags: u16 {
        /// Attribute warns of imminent failure when it drops below threshold
        const PREFAILURE = 0x0001;
        /// Updated during online data collection
        const ONLINE = 0x0002;
        /// Reflects device performance
        const PERFORMANCE = 0x0004;
        /// Tracks an error rate
        const ERROR_RATE = 0x0008;
        /// Counts discrete events
        const EVENT_COUNT = 0x0010;
        /// Collected and retained by the device itself
        const SELF_PRESERVING = 0x0020;
    }
}

/// One packed SMART attribute entry (12 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartAttribute {
    /// Attribute id; 0 marks an unused slot.
    pub id: u8,
    pub flags: AttributeFlags,
    /// Current normalized value.
    pub value: u8,
    /// Worst normalized value recorded over the device lifetime.
    pub worst: u8,
    /// Vendor-specific raw bytes; meaning depends on the conversion kind.
    pub vendor: [u8; 6],
    pub reserved: u8,
}

/// Page of 30 SMART attributes as per the ATA spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartPage {
    pub version: u16,
    /// All 30 slots in on-device order, unused slots included.
    pub attrs: Vec<SmartAttribute>,
}

impl SmartPage {
    /// Parses a raw SMART data page.
    ///
    /// The input must be exactly 362 bytes; anything else fails with
    /// [`DriveDbError::AttributePageLength`] instead of reading out of bounds.
    pub fn parse(input: &[u8]) -> Result<Self, DriveDbError> {
        if input.len() != SMART_PAGE_SIZE {
            return Err(DriveDbError::AttributePageLength(input.len()));
        }
        match parse_page(input) {
            Ok((_, page)) => Ok(page),
            Err(e) => Err(DriveDbError::RecordParse(e.to_string())),
        }
    }

    /// Iterates the populated slots (id != 0) in slot order.
    pub fn populated(&self) -> impl Iterator<Item = &SmartAttribute> {
        self.attrs.iter().filter(|attr| attr.id != 0)
    }
}

fn parse_attribute(input: &[u8]) -> IResult<&[u8], SmartAttribute> {
    let (input, id) = be_u8(input)?;
    let (input, flags) = le_u16(input)?;
    let (input, value) = be_u8(input)?;
    let (input, worst) = be_u8(input)?;
    let (input, vendor_bytes) = take(6usize)(input)?;
    let (input, reserved) = be_u8(input)?;

    let mut vendor = [0u8; 6];
    vendor.copy_from_slice(vendor_bytes);

    Ok((
        input,
        SmartAttribute {
            id,
            flags: AttributeFlags::from_bits_retain(flags),
            value,
            worst,
            vendor,
            reserved,
        },
    ))
}

fn parse_page(input: &[u8]) -> IResult<&[u8], SmartPage> {
    let (mut input, version) = le_u16(input)?;
    let mut attrs = Vec::with_capacity(SMART_PAGE_ATTRS);
    for _ in 0..SMART_PAGE_ATTRS {
        let (rest, attr) = parse_attribute(input)?;
        attrs.push(attr);
        input = rest;
    }
    Ok((input, SmartPage { version, attrs }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_bytes(version: u16, entries: &[[u8; 12]]) -> Vec<u8> {
        let mut bytes = version.to_le_bytes().to_vec();
        for entry in entries {
            bytes.extend_from_slice(entry);
        }
        bytes.resize(SMART_PAGE_SIZE, 0);
        bytes
    }

    #[test]
    fn test_parse_page_layout() {
        let entry = [194, 0x22, 0x00, 100, 98, 35, 0, 20, 0, 45, 0, 0];
        let page = SmartPage::parse(&page_bytes(0x0010, &[entry])).unwrap();

        assert_eq!(page.version, 0x0010);
        assert_eq!(page.attrs.len(), SMART_PAGE_ATTRS);

        let attr = &page.attrs[0];
        assert_eq!(attr.id, 194);
        assert_eq!(attr.flags, AttributeFlags::from_bits_retain(0x0022));
        assert!(attr.flags.contains(AttributeFlags::ONLINE));
        assert!(attr.flags.contains(AttributeFlags::SELF_PRESERVING));
        assert_eq!(attr.value, 100);
        assert_eq!(attr.worst, 98);
        assert_eq!(attr.vendor, [35, 0, 20, 0, 45, 0]);
    }

    #[test]
    fn test_populated_skips_empty_slots() {
        let used = [5, 0x33, 0x00, 100, 100, 1, 0, 0, 0, 0, 0, 0];
        let page = SmartPage::parse(&page_bytes(0x0010, &[used])).unwrap();
        assert_eq!(page.populated().count(), 1);
    }

    #[test]
    fn test_parse_rejects_short_page() {
        let err = SmartPage::parse(&[0u8; 64]).unwrap_err();
        assert!(matches!(err, DriveDbError::AttributePageLength(64)));
    }
}
