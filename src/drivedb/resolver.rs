//! # Family Resolution
//!
//! Resolution selects the rule-set applicable to one device: it starts from
//! an owned copy of the catalog's DEFAULT entry, walks the catalog in order,
//! and merges the first family whose model pattern matches the device's raw
//! identification bytes.
//!
//! Matching runs over the byte content as supplied, not a pre-decoded
//! string; patterns can therefore match non-printable regions of the
//! IDENTIFY record, which preserves the exact matching behavior catalogs
//! were written against.

use crate::drivedb::catalog::{AttrConv, DriveDb, DriveModel};
use crate::logging::log_debug;

impl DriveDb {
    /// Selects and merges the applicable rule-set for a device.
    ///
    /// Walks the catalog in order, skipping placeholder entries and the
    /// DEFAULT entry itself, and stops at the first family whose compiled
    /// model pattern matches `ident`. The result is always a fresh owned
    /// value: repeated calls are independent and never mutate catalog state.
    ///
    /// With no matching family the result equals the DEFAULT rule-set.
    pub fn resolve(&self, ident: &[u8]) -> DriveModel {
        let mut resolved = self.default_model().clone();

        for drive in self.drives() {
            if drive.is_placeholder() || drive.is_default() {
                continue;
            }
            if !drive.matches(ident) {
                continue;
            }

            log_debug(&format!("identification matched family {:?}", drive.family));

            resolved.family = drive.family.clone();
            resolved.model_regex = drive.model_regex.clone();
            resolved.firmware_regex = drive.firmware_regex.clone();
            resolved.warning = drive.warning.clone();
            resolved.matcher = drive.matcher.clone();

            for (id, preset) in &drive.presets {
                // Some families override the conversion kind without giving a
                // name; the default's name survives for that id.
                let name = if preset.name.is_empty() {
                    resolved
                        .presets
                        .get(id)
                        .map(|existing| existing.name.clone())
                        .unwrap_or_default()
                } else {
                    preset.name.clone()
                };
                resolved.presets.insert(
                    id.clone(),
                    AttrConv {
                        conv: preset.conv.clone(),
                        name,
                    },
                );
            }

            break;
        }

        resolved
    }
}
