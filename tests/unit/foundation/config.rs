use super::*;

#[test]
fn partial_json_keeps_defaults() {
    let cfg: EditorConfig = serde_json::from_str(r#"{ "captureScale": 3.0 }"#).unwrap();
    assert_eq!(cfg.capture_scale, 3.0);
    assert_eq!(cfg.long_press_ms, 250);
    assert_eq!(cfg.font_scale_ceiling, 4.0);
    assert_eq!(cfg.default_photo, DEFAULT_COUPLE_PHOTO);
}

#[test]
fn validate_rejects_bad_values() {
    let mut cfg = EditorConfig::default();
    assert!(cfg.validate().is_ok());

    cfg.capture_scale = 0.0;
    assert!(cfg.validate().is_err());

    cfg = EditorConfig {
        font_scale_ceiling: 0.1,
        ..EditorConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn load_reads_file_and_reports_missing() {
    let dir = std::env::temp_dir().join(format!("cardsmith_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cfg.json");
    std::fs::write(&path, r#"{ "nudgeStepPx": 2.0 }"#).unwrap();

    let cfg = EditorConfig::load(&path).unwrap();
    assert_eq!(cfg.nudge_step_px, 2.0);

    let missing = EditorConfig::load(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(missing, CardError::Other(_)));
}
