//! The ata module contains the fixed-size record layouts returned by ATA
//! devices: the IDENTIFY DEVICE record and the SMART attribute data page.

pub mod attributes;
pub mod identity;

pub use attributes::{AttributeFlags, SmartAttribute, SmartPage};
pub use identity::IdentifyDevice;
