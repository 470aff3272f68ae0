//! # Attribute Decoding
//!
//! Applies a resolved family rule-set to a SMART attribute page, producing
//! one [`DecodedAttribute`] per populated slot. Decoding never fails on
//! content: attributes the rule-set does not know and conversion kinds this
//! build does not understand both degrade to a `raw48` reading so monitoring
//! stays operational.

use crate::ata::{AttributeFlags, SmartAttribute, SmartPage};
use crate::decode::conv::{AuxValues, ConversionKind};
use crate::drivedb::{AttrConv, DriveModel};
use crate::error::DriveDbError;
use crate::logging::log_debug;
use std::fmt;

/// One decoded SMART attribute reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAttribute {
    pub id: u8,
    /// Display name from the rule-set, or `Unknown_Attribute_<id>` when the
    /// rule-set has no entry for this id.
    pub name: String,
    /// Primary decoded value.
    pub value: u64,
    /// Auxiliary values for kinds that carry them.
    pub aux: Option<AuxValues>,
    /// Current normalized value as reported by the device.
    pub normalized: u8,
    /// Worst normalized value over the device lifetime.
    pub worst: u8,
    pub flags: AttributeFlags,
    /// Vendor bytes as found on the wire, preserved for diagnostics.
    pub raw: [u8; 6],
    /// True when the rule-set's conversion kind was unrecognized and the
    /// value was decoded with the `raw48` fallback layout.
    pub fallback: bool,
}

impl fmt::Display for DecodedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:3} {} = {}", self.id, self.name, self.value)?;
        match self.aux {
            Some(AuxValues::EventCount(events)) => write!(f, " ({events} events)")?,
            Some(AuxValues::SubValue(sub)) => write!(f, " ({sub})")?,
            Some(AuxValues::Average(avg)) => write!(f, " (avg {avg})")?,
            Some(AuxValues::MinMax { min, max }) => write!(f, " (min {min}, max {max})")?,
            None => {}
        }
        write!(f, " [{}]", hex::encode(self.raw))
    }
}

/// Decodes every populated slot of a SMART page per the resolved rule-set.
///
/// Output order matches slot order in the page, not attribute id order;
/// callers may rely on position correlating with the on-device table.
pub fn decode_attributes(resolved: &DriveModel, page: &SmartPage) -> Vec<DecodedAttribute> {
    page.populated()
        .map(|attr| decode_one(resolved, attr))
        .collect()
}

/// Parses a raw SMART page and decodes it in one step.
pub fn decode_raw(resolved: &DriveModel, bytes: &[u8]) -> Result<Vec<DecodedAttribute>, DriveDbError> {
    let page = SmartPage::parse(bytes)?;
    Ok(decode_attributes(resolved, &page))
}

fn decode_one(resolved: &DriveModel, attr: &SmartAttribute) -> DecodedAttribute {
    let (conv, name) = match resolved.presets.get(&attr.id.to_string()) {
        Some(AttrConv { conv, name }) => (conv.clone(), name.clone()),
        None => {
            log_debug(&format!(
                "attribute {} not in rule-set for family {}, decoding as raw48",
                attr.id, resolved.family
            ));
            (ConversionKind::Raw48, format!("Unknown_Attribute_{}", attr.id))
        }
    };

    let fallback = !conv.is_recognized();
    if fallback {
        log_debug(&format!(
            "attribute {}: unrecognized conversion kind {:?}, decoding as raw48",
            attr.id,
            conv.token()
        ));
    }
    let (value, aux) = conv.decode(&attr.vendor);

    DecodedAttribute {
        id: attr.id,
        name,
        value,
        aux,
        normalized: attr.value,
        worst: attr.worst,
        flags: attr.flags,
        raw: attr.vendor,
        fallback,
    }
}
