#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf, process, time::Duration};

    use crate::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = env::temp_dir();
        p.push(format!("hotmouse-config-{}-{}", process::id(), name));
        p
    }

    #[test]
    fn addon_json_parses() {
        let json = r#"{
            "default_enabled": false,
            "shortcuts": {
                "q_press_left_click_right": "again",
                "a_wheel_up": "good",
                "a_wheel_down": "again"
            },
            "tooltip": true,
            "z_debug": false,
            "threshold_wheel_ms": 200,
            "threshold_click_ms": 50
        }"#;
        let cfg = load_from_str(json, Format::Json).unwrap();
        assert!(!cfg.default_enabled);
        assert!(cfg.tooltip);
        assert_eq!(cfg.shortcuts.len(), 3);
        assert_eq!(cfg.shortcuts.action_for("a_wheel_up"), "good");
        assert_eq!(cfg.wheel_threshold(), Duration::from_millis(200));
        assert_eq!(cfg.click_threshold(), Duration::from_millis(50));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = load_from_str("{}", Format::Json).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.default_enabled);
        assert_eq!(cfg.threshold_wheel_ms, 350);
        assert_eq!(cfg.threshold_click_ms, 0);
        assert!(cfg.shortcuts.is_empty());
    }

    #[test]
    fn ron_parses() {
        let ron = r#"(
            shortcuts: {"o_wheel_down": "study_now", "c_click_right": "deck_browser"},
            threshold_wheel_ms: 100,
        )"#;
        let cfg = load_from_str(ron, Format::Ron).unwrap();
        assert_eq!(cfg.shortcuts.action_for("o_wheel_down"), "study_now");
        assert_eq!(cfg.threshold_wheel_ms, 100);
        assert!(cfg.default_enabled);
    }

    #[test]
    fn unknown_field_fails() {
        // misspelled threshold_wheel_ms
        let res = load_from_str(r#"{"threshold_whel_ms": 10}"#, Format::Json);
        match res {
            Err(Error::Parse { line, .. }) => assert_eq!(line, Some(1)),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn negative_threshold_fails() {
        assert!(load_from_str(r#"{"threshold_click_ms": -5}"#, Format::Json).is_err());
    }

    #[test]
    fn invalid_bindings_still_load() {
        let json = r#"{"shortcuts": {"q_wiggle": "again", "a_wheel_up": "dance"}}"#;
        let cfg = load_from_str(json, Format::Json).unwrap();
        assert_eq!(cfg.validate().len(), 2);
    }

    #[test]
    fn load_from_file_by_extension() {
        let p = temp_path("cfg.json");
        fs::write(&p, r#"{"shortcuts": {"x_click_middle": "undo"}}"#).unwrap();
        let cfg = load_from_path(&p).unwrap();
        assert_eq!(cfg.shortcuts.action_for("x_click_middle"), "undo");
        fs::remove_file(&p).ok();
    }

    #[test]
    fn unsupported_extension() {
        let p = temp_path("cfg.yaml");
        match load_from_path(&p) {
            Err(e @ Error::Format { .. }) => {
                assert!(e.pretty().contains("yaml"));
                assert_eq!(e.path(), Some(p.as_path()));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn missing_file_is_read_error() {
        let p = temp_path("absent.json");
        match load_from_path(&p) {
            Err(e @ Error::Read { .. }) => assert!(e.pretty().starts_with("Read error at")),
            other => panic!("{:?}", other),
        }
    }
}
