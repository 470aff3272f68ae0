//! # IDENTIFY DEVICE Record Layout
//!
//! This module decodes the 512-byte record an ATA device returns for the
//! IDENTIFY DEVICE command. Only the fields relevant to drive identification
//! are carried as typed values; the remaining words are opaque here.
//!
//! ATA stores its fixed-size strings (serial number, firmware revision,
//! model number) with the two bytes of every 16-bit word swapped, so the raw
//! record reads `oThsbi a` where the device means `Toshiba `. The accessors
//! on [`IdentifyDevice`] undo the swap and trim padding.

use crate::constants::IDENTIFY_RECORD_SIZE;
use crate::error::DriveDbError;
use nom::bytes::complete::take;
use nom::number::complete::{be_u8, le_u16, le_u32};
use nom::IResult;

/// Decoded ATA IDENTIFY DEVICE record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyDevice {
    pub general_configuration: u16,
    pub num_cylinders: u16,
    pub num_heads: u16,
    pub num_sectors_per_track: u16,
    serial_number: [u8; 20],
    firmware_revision: [u8; 8],
    model_number: [u8; 40],
    pub max_block_transfer: u8,
    pub capabilities: u32,
}

impl IdentifyDevice {
    /// Parses a raw IDENTIFY DEVICE record.
    ///
    /// The input must be exactly 512 bytes; shorter or longer blobs fail with
    /// [`DriveDbError::IdentifyRecordLength`] instead of reading out of bounds.
    pub fn parse(input: &[u8]) -> Result<Self, DriveDbError> {
        if input.len() != IDENTIFY_RECORD_SIZE {
            return Err(DriveDbError::IdentifyRecordLength(input.len()));
        }
        match parse_identify(input) {
            Ok((_, ident)) => Ok(ident),
            Err(e) => Err(DriveDbError::RecordParse(e.to_string())),
        }
    }

    /// Model number with ATA word-swap undone and padding trimmed.
    pub fn model_number(&self) -> String {
        ata_string(&self.model_number)
    }

    /// Serial number with ATA word-swap undone and padding trimmed.
    pub fn serial_number(&self) -> String {
        ata_string(&self.serial_number)
    }

    /// Firmware revision with ATA word-swap undone and padding trimmed.
    pub fn firmware_revision(&self) -> String {
        ata_string(&self.firmware_revision)
    }

    /// Model number region with the word-swap undone but padding kept.
    ///
    /// Useful for byte-level pattern matching against the model string alone
    /// rather than the whole record.
    pub fn model_number_raw(&self) -> Vec<u8> {
        ata_swap(&self.model_number)
    }
}

fn parse_identify(input: &[u8]) -> IResult<&[u8], IdentifyDevice> {
    let (input, general_configuration) = le_u16(input)?;
    let (input, num_cylinders) = le_u16(input)?;
    let (input, _reserved_word2) = le_u16(input)?;
    let (input, num_heads) = le_u16(input)?;
    let (input, _retired1) = take(4usize)(input)?;
    let (input, num_sectors_per_track) = le_u16(input)?;
    let (input, _vendor_unique) = take(6usize)(input)?;
    let (input, serial) = take(20usize)(input)?;
    let (input, _retired2) = take(4usize)(input)?;
    let (input, _obsolete1) = le_u16(input)?;
    let (input, firmware) = take(8usize)(input)?;
    let (input, model) = take(40usize)(input)?;
    let (input, max_block_transfer) = be_u8(input)?;
    let (input, _vendor_unique2) = be_u8(input)?;
    let (input, _reserved_word48) = le_u16(input)?;
    let (input, capabilities) = le_u32(input)?;

    let mut serial_number = [0u8; 20];
    serial_number.copy_from_slice(serial);
    let mut firmware_revision = [0u8; 8];
    firmware_revision.copy_from_slice(firmware);
    let mut model_number = [0u8; 40];
    model_number.copy_from_slice(model);

    Ok((
        input,
        IdentifyDevice {
            general_configuration,
            num_cylinders,
            num_heads,
            num_sectors_per_track,
            serial_number,
            firmware_revision,
            model_number,
            max_block_transfer,
            capabilities,
        },
    ))
}

/// Swaps the bytes of every 16-bit word in an ATA string region.
fn ata_swap(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for pair in raw.chunks_exact(2) {
        out.push(pair[1]);
        out.push(pair[0]);
    }
    out
}

/// Decodes an ATA string region: word-swap, lossy ASCII, trimmed.
fn ata_string(raw: &[u8]) -> String {
    String::from_utf8_lossy(&ata_swap(raw)).trim().to_string()
}
