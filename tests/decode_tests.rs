//! Tests for attribute decoding: per-kind byte layouts, slot ordering, and
//! the raw48 fallback paths that keep decoding total.

use drivedb_rs::drivedb::RawAttrConv;
use drivedb_rs::{
    decode_attributes, decode_raw, AuxValues, CatalogEntry, ConversionKind, DriveDb, DriveDbError,
    DriveModel, SmartPage,
};
use proptest::prelude::*;

const PAGE_SIZE: usize = 362;

/// Builds a raw SMART page with the given (id, vendor bytes) slots populated
/// in order; remaining slots stay empty (id 0).
fn page_bytes(slots: &[(u8, [u8; 6])]) -> Vec<u8> {
    let mut bytes = vec![0u8; PAGE_SIZE];
    bytes[..2].copy_from_slice(&0x0010u16.to_le_bytes());
    for (slot, (id, vendor)) in slots.iter().enumerate() {
        let off = 2 + slot * 12;
        bytes[off] = *id;
        bytes[off + 1] = 0x03; // prefailure | online
        bytes[off + 3] = 100; // normalized
        bytes[off + 4] = 95; // worst
        bytes[off + 5..off + 11].copy_from_slice(vendor);
    }
    bytes
}

fn preset(conv: &str, name: &str) -> RawAttrConv {
    RawAttrConv {
        conv: conv.to_string(),
        name: name.to_string(),
    }
}

/// Resolves a rule-set carrying the given presets via the public load path.
fn rule_set(presets: &[(&str, RawAttrConv)]) -> DriveModel {
    let db = DriveDb::load(vec![CatalogEntry {
        family: "DEFAULT".to_string(),
        model_regex: "-".to_string(),
        firmware_regex: "-".to_string(),
        warning: String::new(),
        presets: presets
            .iter()
            .map(|(id, p)| (id.to_string(), p.clone()))
            .collect(),
    }])
    .unwrap();
    db.resolve(b"")
}

/// Tests the tempminmax layout: current in byte 0, min/max in bytes 2 and 4.
#[test]
fn test_decode_tempminmax() {
    let resolved = rule_set(&[("194", preset("tempminmax", "Temperature_Celsius"))]);
    let page = page_bytes(&[(194, [35, 0, 20, 0, 45, 0])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].id, 194);
    assert_eq!(attrs[0].name, "Temperature_Celsius");
    assert_eq!(attrs[0].value, 35);
    assert_eq!(attrs[0].aux, Some(AuxValues::MinMax { min: 20, max: 45 }));
    assert!(!attrs[0].fallback);
}

/// Tests the raw24(raw8) layout: hours in the low 3 bytes, independent of
/// the 8-bit sub-field.
#[test]
fn test_decode_raw24_raw8() {
    let resolved = rule_set(&[("9", preset("raw24(raw8)", "Power_On_Hours"))]);
    // 1234 hours, sub-field deliberately nonzero
    let page = page_bytes(&[(9, [0xD2, 0x04, 0x00, 0x2A, 0x00, 0x00])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs[0].value, 1234);
    assert_eq!(attrs[0].aux, Some(AuxValues::SubValue(0x2A)));
}

/// Tests the raw48 layout across all 6 vendor bytes.
#[test]
fn test_decode_raw48() {
    let resolved = rule_set(&[("241", preset("raw48", "Total_LBAs_Written"))]);
    let page = page_bytes(&[(241, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs[0].value, 0x0605_0403_0201);
    assert_eq!(attrs[0].aux, None);
    assert_eq!(attrs[0].raw, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
}

/// Tests the raw16(raw16) layout: primary count plus event count.
#[test]
fn test_decode_raw16_raw16() {
    let resolved = rule_set(&[("5", preset("raw16(raw16)", "Reallocated_Sector_Ct"))]);
    let page = page_bytes(&[(5, [7, 0, 2, 0, 0xFF, 0xFF])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs[0].value, 7);
    assert_eq!(attrs[0].aux, Some(AuxValues::EventCount(2)));
}

/// Tests the raw16(avg16) layout: value plus running average.
#[test]
fn test_decode_raw16_avg16() {
    let resolved = rule_set(&[("3", preset("raw16(avg16)", "Spin_Up_Time"))]);
    let page = page_bytes(&[(3, [0x40, 0x1F, 0x10, 0x1F, 0, 0])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs[0].value, 8000);
    assert_eq!(attrs[0].aux, Some(AuxValues::Average(7952)));
}

/// Tests that empty slots (id 0) produce no output and the populated ones
/// come back in slot order, not id order.
#[test]
fn test_slot_order_and_empty_slots() {
    let resolved = rule_set(&[]);
    let mut bytes = page_bytes(&[
        (199, [1, 0, 0, 0, 0, 0]),
        (9, [2, 0, 0, 0, 0, 0]),
        (194, [3, 0, 0, 0, 0, 0]),
        (5, [4, 0, 0, 0, 0, 0]),
        (12, [5, 0, 0, 0, 0, 0]),
    ]);
    // Punch a hole: clear slot 1 back to unused.
    bytes[2 + 12..2 + 24].fill(0);

    let attrs = decode_raw(&resolved, &bytes).unwrap();
    let ids: Vec<u8> = attrs.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![199, 194, 5, 12]);
}

/// Tests a fully empty page.
#[test]
fn test_empty_page_decodes_to_nothing() {
    let resolved = rule_set(&[]);
    let attrs = decode_raw(&resolved, &page_bytes(&[])).unwrap();
    assert!(attrs.is_empty());
}

/// Tests the unknown-id fallback: raw48 and a synthesized name.
#[test]
fn test_unknown_attribute_id_falls_back() {
    let resolved = rule_set(&[]);
    let page = page_bytes(&[(231, [1, 0, 0, 0, 0, 0])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs[0].name, "Unknown_Attribute_231");
    assert_eq!(attrs[0].value, 1);
    assert!(!attrs[0].fallback);
}

/// Tests the unrecognized-kind fallback: raw48 decoding plus the fallback
/// marker, never a failure.
#[test]
fn test_unrecognized_kind_falls_back_to_raw48() {
    let resolved = rule_set(&[("194", preset("temp10x", "Temperature_Celsius_x10"))]);
    let page = page_bytes(&[(194, [0x54, 0x01, 0, 0, 0, 0])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs[0].value, 0x0154);
    assert_eq!(attrs[0].name, "Temperature_Celsius_x10");
    assert!(attrs[0].fallback);
}

/// Tests that normalized/worst/flags/raw bytes ride along unchanged.
#[test]
fn test_decoded_attribute_carries_raw_fields() {
    let resolved = rule_set(&[]);
    let page = page_bytes(&[(199, [9, 8, 7, 6, 5, 4])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    assert_eq!(attrs[0].normalized, 100);
    assert_eq!(attrs[0].worst, 95);
    assert_eq!(attrs[0].raw, [9, 8, 7, 6, 5, 4]);
    assert_eq!(attrs[0].flags.bits(), 0x0003);
}

/// Tests that a wrong-size page is rejected with the shape error.
#[test]
fn test_short_page_is_rejected() {
    let resolved = rule_set(&[]);
    let err = decode_raw(&resolved, &[0u8; 100]).unwrap_err();
    assert!(matches!(err, DriveDbError::AttributePageLength(100)));
}

/// Tests the Display rendering used by diagnostic output.
#[test]
fn test_decoded_attribute_display() {
    let resolved = rule_set(&[("194", preset("tempminmax", "Temperature_Celsius"))]);
    let page = page_bytes(&[(194, [35, 0, 20, 0, 45, 0])]);

    let attrs = decode_raw(&resolved, &page).unwrap();
    let rendered = attrs[0].to_string();
    assert!(rendered.contains("Temperature_Celsius"));
    assert!(rendered.contains("35"));
    assert!(rendered.contains("min 20, max 45"));
    assert!(rendered.contains("230014002d00"));
}

proptest! {
    /// Decoding is total: arbitrary vendor bytes and any recognized or
    /// unrecognized kind never panic.
    #[test]
    fn prop_decode_never_panics(vendor in proptest::array::uniform6(any::<u8>()), token in "[a-z0-9()]{0,12}") {
        let kind = ConversionKind::from_token(&token);
        let _ = kind.decode(&vendor);
    }

    /// The raw48 value always equals the little-endian reading of the
    /// vendor field.
    #[test]
    fn prop_raw48_is_le_u48(vendor in proptest::array::uniform6(any::<u8>())) {
        let (value, aux) = ConversionKind::Raw48.decode(&vendor);
        let mut le = [0u8; 8];
        le[..6].copy_from_slice(&vendor);
        prop_assert_eq!(value, u64::from_le_bytes(le));
        prop_assert_eq!(aux, None);
    }

    /// A page built from arbitrary slot contents decodes without panicking
    /// and yields at most one output per populated slot.
    #[test]
    fn prop_page_decode_is_total(slots in proptest::collection::vec((1u8..=255, proptest::array::uniform6(any::<u8>())), 0..30)) {
        let resolved = rule_set(&[]);
        let page = SmartPage::parse(&page_bytes(&slots)).unwrap();
        let attrs = decode_attributes(&resolved, &page);
        prop_assert_eq!(attrs.len(), slots.len());
    }
}
