//! Profile text produced from full settings records.

#![allow(clippy::unwrap_used)]

use project_settings::{
    map_settings, settings_text, ProfileHeader, SettingKey, SettingValue, SettingsError,
    SettingsRecord,
};

#[test]
fn basic_record_renders_expected_profile() {
    let record = SettingsRecord::new()
        .with(SettingKey::LayerHeight, 0.2)
        .with(SettingKey::InfillDensity, 15)
        .with(SettingKey::EnableSupports, false);

    let text = settings_text(&record, &ProfileHeader::default()).unwrap();
    assert_eq!(
        text,
        "[print:IntelliSlice AI Profile]\n\
         inherits = \"0.20mm Standard @MyGenericPrinter\"\n\
         layer_height = 0.2\n\
         sparse_infill_density = 15%\n\
         support_enable = 0\n"
    );
}

#[test]
fn every_mapped_key_appears_once() {
    let record: SettingsRecord = SettingKey::ALL
        .iter()
        .filter(|key| key.external_key().is_some())
        .map(|key| (*key, sample_value(*key)))
        .collect();

    let mapped = map_settings(&record).unwrap();
    assert_eq!(mapped.len(), 57);

    let mut keys: Vec<_> = mapped.iter().map(|m| m.key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 57);
}

#[test]
fn printer_and_unknown_settings_are_dropped() {
    let record = SettingsRecord::new()
        .with(SettingKey::NozzleDiameter, 0.4)
        .with_named("notARealKey", 3)
        .with(SettingKey::WallLoops, 3);

    let mapped = map_settings(&record).unwrap();
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0].to_string(), "wall_loops = 3");
}

#[test]
fn invalid_choice_aborts_translation() {
    let record = SettingsRecord::new()
        .with(SettingKey::LayerHeight, 0.2)
        .with(SettingKey::SupportType, "Scaffold");

    let err = map_settings(&record).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::UnsupportedValue { key: "supportType", .. }
    ));
}

#[test]
fn choices_are_lowercased() {
    let record = SettingsRecord::new()
        .with(SettingKey::SupportType, "Tree")
        .with(SettingKey::SeamPosition, "Aligned");

    let text = settings_text(&record, &ProfileHeader::default()).unwrap();
    assert!(text.contains("support_type = tree\n"));
    assert!(text.contains("seam_position = aligned\n"));
}

fn sample_value(key: SettingKey) -> SettingValue {
    use project_settings::SettingKind;

    match key.kind() {
        SettingKind::Toggle => true.into(),
        SettingKind::Choice(options) => options[0].into(),
        SettingKind::Count => 2.into(),
        _ => 1.0.into(),
    }
}
