use std::fs;
use talent_core::{load_reference_data, save_reference_data, AgeGroup, Gender, ReferenceData, TierThresholds};

#[test]
fn test_save_and_load_reference() {
    let path = "tests/tmp_reference.json";
    let _ = fs::remove_file(path);

    let mut data = ReferenceData::default();
    data.sports.retain(|s| s.name == "Boxing");

    save_reference_data(&data, path).expect("save_reference_data failed");
    let loaded = load_reference_data(path).expect("load_reference_data failed");

    assert_eq!(loaded.sport_names(), vec!["Boxing"]);
    assert_eq!(loaded.age_groups, data.age_groups);
    assert_eq!(loaded.test_types(), data.test_types());
    assert_eq!(
        loaded.get_benchmark("Push-ups", 14, Gender::Male).metric("rep_count"),
        Some(TierThresholds::new(35.0, 25.0, 18.0, 10.0))
    );
    assert_eq!(loaded.resolve_age_group(29), AgeGroup::Senior);

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_gives_builtin() {
    let loaded = load_reference_data("tests/does_not_exist.json").unwrap();
    assert_eq!(&loaded, ReferenceData::builtin());
}

#[test]
fn test_invalid_reference_is_rejected() {
    let path = "tests/tmp_invalid_reference.json";
    let mut data = ReferenceData::default();
    for s in &mut data.sports {
        s.elite_threshold = 10.0;
    }
    save_reference_data(&data, path).unwrap();

    let err = load_reference_data(path).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("elite threshold"), "{msg}");

    fs::remove_file(path).ok();
}

#[test]
fn test_malformed_json_reports_path() {
    let path = "tests/tmp_malformed_reference.json";
    fs::write(path, r#"{"age_groups": [{"min": 12, "max": "x", "group": "Youth"}]}"#).unwrap();

    let err = load_reference_data(path).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("age_groups[0].max"), "{msg}");

    fs::remove_file(path).ok();
}
