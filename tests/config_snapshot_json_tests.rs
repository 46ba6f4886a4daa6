use timerange_picker::api::{
    PICKER_SNAPSHOT_JSON_SCHEMA_V1, PickerSnapshot, RestoreModePolicy,
};
use timerange_picker::core::TimeRangeMode;
use timerange_picker::{PickerError, RangeController, RangeEvent, RangePickerConfig};

#[test]
fn config_json_roundtrip_and_defaults() {
    let config = RangePickerConfig::default()
        .with_labels("Von", "Bis")
        .with_restore_mode_policy(RestoreModePolicy::FromSnapshot);
    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"restore_mode_policy\": \"from_snapshot\""));
    assert_eq!(
        RangePickerConfig::from_json_str(&json).expect("parse config"),
        config
    );

    let sparse = RangePickerConfig::from_json_str(r#"{"from_label":"Start"}"#)
        .expect("missing keys use defaults");
    assert_eq!(sparse.from_label, "Start");
    assert_eq!(sparse.to_label, "To");
    assert_eq!(sparse.mode_field, "range");
    assert_eq!(sparse.restore_mode_policy, RestoreModePolicy::Preserve);
}

#[test]
fn config_rejects_bad_json() {
    let err = RangePickerConfig::from_json_str(r#"{"restore_mode_policy":"sometimes"}"#)
        .expect_err("unknown policy");
    assert!(matches!(err, PickerError::InvalidData(_)));
}

#[test]
fn snapshot_contract_restores_mode_and_values() {
    let mut source =
        RangeController::in_memory(RangePickerConfig::default()).expect("controller init");
    source.from_field().edit(Some("2024-01-15T00:00:00Z"));
    source.set_range(TimeRangeMode::Month).expect("month");

    let json = source
        .snapshot_json_contract_v1_pretty()
        .expect("serialize snapshot");
    assert!(json.contains(&format!("\"schema_version\": {PICKER_SNAPSHOT_JSON_SCHEMA_V1}")));

    let snapshot = PickerSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(snapshot, source.snapshot());

    let mut target =
        RangeController::in_memory(RangePickerConfig::default()).expect("controller init");
    target.restore_snapshot(&snapshot);
    assert_eq!(target.mode(), TimeRangeMode::Month);
    assert_eq!(target.get(), source.get());
    assert!(!target.is_dirty());

    target
        .dispatch(RangeEvent::StepRequested { delta: 1 })
        .expect("step restored range");
    assert_eq!(
        target.from_value().as_deref(),
        Some("2024-02-15T00:00:00Z")
    );
}

#[test]
fn snapshot_accepts_bare_payload() {
    let bare = r#"{"mode":"week","values":{"from":"2024-03-10T00:00:00Z"}}"#;
    let snapshot = PickerSnapshot::from_json_compat_str(bare).expect("bare snapshot");
    assert_eq!(snapshot.mode, TimeRangeMode::Week);
    assert_eq!(
        snapshot.values.get("from").map(String::as_str),
        Some("2024-03-10T00:00:00Z")
    );
}

#[test]
fn snapshot_rejects_unknown_schema_version() {
    let payload = r#"{"schema_version":2,"snapshot":{"mode":"day","values":{}}}"#;
    let err = PickerSnapshot::from_json_compat_str(payload).expect_err("future schema");
    assert!(matches!(err, PickerError::InvalidData(message) if message.contains("schema version")));

    let err = PickerSnapshot::from_json_compat_str(r#"{"mode":"hour"}"#)
        .expect_err("unknown mode name");
    assert!(matches!(err, PickerError::InvalidData(_)));
}

#[test]
fn events_serialize_with_kind_tag() {
    let event = RangeEvent::UnitSelected {
        unit: TimeRangeMode::Year,
    };
    let json = serde_json::to_string(&event).expect("serialize event");
    assert_eq!(json, r#"{"kind":"unit_selected","unit":"year"}"#);
    let back: RangeEvent = serde_json::from_str(&json).expect("parse event");
    assert_eq!(back, event);
}
