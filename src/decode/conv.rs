//! # Attribute Conversion Kinds
//!
//! Catalogs name a conversion kind per attribute id; the kind fixes which of
//! the 6 vendor-specific bytes make up the value and what the leftover bytes
//! mean. Layouts are little-endian words, matching how ATA devices store the
//! raw counters.
//!
//! The set of kinds is closed, with [`ConversionKind::Unrecognized`] as the
//! escape hatch: a token this build does not understand still decodes, as
//! `raw48`, so monitoring keeps working on newer catalog entries.

/// How the 6 vendor bytes of an attribute are turned into a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionKind {
    /// Plain 48-bit counter across all 6 bytes
    Raw48,
    /// 16-bit counter in the first word
    Raw16,
    /// 16-bit counter in word 0 plus an event count in word 1
    Raw16Raw16,
    /// 24-bit counter in the low 3 bytes plus an 8-bit sub-value in byte 3
    Raw24Raw8,
    /// 16-bit value in word 0 plus a running average in word 1
    Raw16Avg16,
    /// Current temperature in byte 0 with lifetime min/max in bytes 2 and 4
    TempMinMax,
    /// Catalog token this build does not understand; decodes as `Raw48`
    Unrecognized(String),
}

/// Auxiliary values some conversion kinds carry besides the primary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxValues {
    /// Event count of a `raw16(raw16)` attribute
    EventCount(u16),
    /// 8-bit sub-value of a `raw24(raw8)` attribute
    SubValue(u8),
    /// Running average of a `raw16(avg16)` attribute
    Average(u16),
    /// Lifetime temperature range of a `tempminmax` attribute
    MinMax { min: u8, max: u8 },
}

impl ConversionKind {
    /// Parses a catalog conversion token.
    ///
    /// Unknown tokens map to [`ConversionKind::Unrecognized`] rather than an
    /// error; the caller decides whether to surface them.
    pub fn from_token(token: &str) -> Self {
        match token {
            "raw48" => ConversionKind::Raw48,
            "raw16" => ConversionKind::Raw16,
            "raw16(raw16)" => ConversionKind::Raw16Raw16,
            "raw24(raw8)" => ConversionKind::Raw24Raw8,
            "raw16(avg16)" => ConversionKind::Raw16Avg16,
            "tempminmax" => ConversionKind::TempMinMax,
            other => ConversionKind::Unrecognized(other.to_string()),
        }
    }

    /// The catalog token this kind was parsed from.
    pub fn token(&self) -> &str {
        match self {
            ConversionKind::Raw48 => "raw48",
            ConversionKind::Raw16 => "raw16",
            ConversionKind::Raw16Raw16 => "raw16(raw16)",
            ConversionKind::Raw24Raw8 => "raw24(raw8)",
            ConversionKind::Raw16Avg16 => "raw16(avg16)",
            ConversionKind::TempMinMax => "tempminmax",
            ConversionKind::Unrecognized(token) => token,
        }
    }

    /// False only for [`ConversionKind::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ConversionKind::Unrecognized(_))
    }

    /// Decodes the 6-byte vendor field per this kind's byte layout.
    ///
    /// Total over all inputs; unrecognized kinds fall back to the `raw48`
    /// layout.
    pub fn decode(&self, vendor: &[u8; 6]) -> (u64, Option<AuxValues>) {
        match self {
            ConversionKind::Raw48 | ConversionKind::Unrecognized(_) => (raw48(vendor), None),
            ConversionKind::Raw16 => (word(vendor, 0) as u64, None),
            ConversionKind::Raw16Raw16 => (
                word(vendor, 0) as u64,
                Some(AuxValues::EventCount(word(vendor, 1))),
            ),
            ConversionKind::Raw24Raw8 => (
                vendor[0] as u64 | (vendor[1] as u64) << 8 | (vendor[2] as u64) << 16,
                Some(AuxValues::SubValue(vendor[3])),
            ),
            ConversionKind::Raw16Avg16 => (
                word(vendor, 0) as u64,
                Some(AuxValues::Average(word(vendor, 1))),
            ),
            ConversionKind::TempMinMax => (
                vendor[0] as u64,
                Some(AuxValues::MinMax {
                    min: vendor[2],
                    max: vendor[4],
                }),
            ),
        }
    }
}

fn raw48(vendor: &[u8; 6]) -> u64 {
    vendor
        .iter()
        .rev()
        .fold(0u64, |acc, b| (acc << 8) | (*b as u64))
}

fn word(vendor: &[u8; 6], index: usize) -> u16 {
    u16::from_le_bytes([vendor[2 * index], vendor[2 * index + 1]])
}
