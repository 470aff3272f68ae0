//! # Family Catalog
//!
//! The catalog is an ordered list of family rule-sets, each carrying a model
//! pattern compiled once at load time. Order is a priority order: resolution
//! walks the list and stops at the first match, so more specific families
//! must precede broader ones.
//!
//! [`CatalogEntry`] is the plain deserializable shape a catalog document
//! decodes into; [`DriveDb::load`] is the single validated path from entries
//! to a usable catalog, for the embedded database and external documents
//! alike.

use crate::constants::{DEFAULT_FAMILY, PLACEHOLDER_PREFIX};
use crate::decode::ConversionKind;
use crate::error::DriveDbError;
use crate::logging::log_warn;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Conversion rule for one attribute id, as written in a catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttrConv {
    #[serde(default)]
    pub conv: String,
    #[serde(default)]
    pub name: String,
}

/// One family rule-set as written in a catalog document.
///
/// This is the shape a collaborator's parser produces; pattern compilation
/// and token validation happen in [`DriveDb::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub family: String,
    #[serde(default)]
    pub model_regex: String,
    #[serde(default)]
    pub firmware_regex: String,
    #[serde(default)]
    pub warning: String,
    /// Keyed by the attribute id as a decimal string, e.g. `"194"`.
    #[serde(default)]
    pub presets: HashMap<String, RawAttrConv>,
}

/// A whole catalog document: an ordered list of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDoc {
    pub drives: Vec<CatalogEntry>,
}

/// SMART attribute conversion rule with its kind parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrConv {
    pub conv: ConversionKind,
    pub name: String,
}

/// One family rule-set with its compiled model matcher.
#[derive(Debug, Clone)]
pub struct DriveModel {
    pub family: String,
    pub model_regex: String,
    pub firmware_regex: String,
    /// Message to surface for matching drives, e.g. a firmware advisory.
    /// Empty when the family carries none.
    pub warning: String,
    /// Keyed by the attribute id as a decimal string. Lookup during decoding
    /// uses `id.to_string()`, so `"9"` matches and `"09"` never does.
    pub presets: HashMap<String, AttrConv>,
    /// Compiled model matcher; `None` for the DEFAULT and placeholder
    /// entries, which are never pattern-matched.
    pub(crate) matcher: Option<Regex>,
}

impl DriveModel {
    /// Whether this is a versioning placeholder record rather than a family.
    pub fn is_placeholder(&self) -> bool {
        self.family.starts_with(PLACEHOLDER_PREFIX)
    }

    /// Whether this is the catalog's fallback rule-set.
    pub fn is_default(&self) -> bool {
        self.family == DEFAULT_FAMILY
    }

    /// Tests the compiled model pattern against raw identification bytes.
    ///
    /// Always false for DEFAULT and placeholder entries.
    pub fn matches(&self, ident: &[u8]) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(ident))
    }
}

impl PartialEq for DriveModel {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.model_regex == other.model_regex
            && self.firmware_regex == other.firmware_regex
            && self.warning == other.warning
            && self.presets == other.presets
    }
}

/// Ordered, immutable catalog of family rule-sets.
///
/// Built once via [`DriveDb::load`]; afterwards it is read-only and may be
/// shared across threads for concurrent resolutions.
#[derive(Debug, Clone)]
pub struct DriveDb {
    drives: Vec<DriveModel>,
    default_index: usize,
}

impl DriveDb {
    /// Builds a catalog from parsed entries, compiling model patterns and
    /// validating the DEFAULT invariant.
    ///
    /// Fails when any non-placeholder family's model pattern does not
    /// compile, or when the entries carry zero or multiple DEFAULT
    /// rule-sets. Unknown conversion tokens are not errors: they load as
    /// [`ConversionKind::Unrecognized`] with a warning log and decode with
    /// the `raw48` fallback later.
    pub fn load(entries: Vec<CatalogEntry>) -> Result<Self, DriveDbError> {
        let mut drives = Vec::with_capacity(entries.len());
        let mut default_index = None;
        let mut default_count = 0usize;

        for entry in entries {
            let is_placeholder = entry.family.starts_with(PLACEHOLDER_PREFIX);
            let is_default = entry.family == DEFAULT_FAMILY;

            if is_default {
                default_count += 1;
                default_index.get_or_insert(drives.len());
            }

            let matcher = if is_placeholder || is_default {
                None
            } else {
                let re = Regex::new(&entry.model_regex).map_err(|source| {
                    DriveDbError::PatternCompile {
                        family: entry.family.clone(),
                        source,
                    }
                })?;
                Some(re)
            };

            let presets = entry
                .presets
                .into_iter()
                .map(|(id, raw)| {
                    let conv = ConversionKind::from_token(&raw.conv);
                    if !conv.is_recognized() {
                        log_warn(&format!(
                            "family {:?}, attribute {}: unknown conversion kind {:?}",
                            entry.family, id, raw.conv
                        ));
                    }
                    (id, AttrConv { conv, name: raw.name })
                })
                .collect();

            drives.push(DriveModel {
                family: entry.family,
                model_regex: entry.model_regex,
                firmware_regex: entry.firmware_regex,
                warning: entry.warning,
                presets,
                matcher,
            });
        }

        if default_count > 1 {
            return Err(DriveDbError::DuplicateDefaultEntry(default_count));
        }
        let default_index = default_index.ok_or(DriveDbError::MissingDefaultEntry)?;

        Ok(DriveDb {
            drives,
            default_index,
        })
    }

    /// The catalog's fallback rule-set.
    pub fn default_model(&self) -> &DriveModel {
        &self.drives[self.default_index]
    }

    /// All rule-sets in catalog order, placeholders included.
    pub fn drives(&self) -> &[DriveModel] {
        &self.drives
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }
}
