//! The decode module turns the raw vendor bytes of SMART attributes into
//! typed, named values according to a resolved family rule-set.

pub mod attribute;
pub mod conv;

pub use attribute::{decode_attributes, decode_raw, DecodedAttribute};
pub use conv::{AuxValues, ConversionKind};
