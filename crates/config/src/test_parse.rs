#[cfg(test)]
mod tests {
    use std::{env, fs, path::Path, process, time::Duration};

    use crate::*;

    #[test]
    fn empty_config_is_default() {
        let cfg = from_ron("()", None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.decode_policy, DecodePolicy::Lenient);
        assert_eq!(cfg.source, SourceSpec::Bundled);
        assert_eq!(cfg.toast.total(), Duration::from_millis(2500));
        assert_eq!(cfg.empty_state.title, "Failed to load");
    }

    #[test]
    fn full_config_parses() {
        let ron = r#"(
            decode_policy: Strict,
            source: Url(
                url: "https://example.com/screen.json",
                credentials: Some((username_var: "BDUI_TEST_USER", password_var: "BDUI_TEST_PASS")),
            ),
            screens: ["settings", "help"],
            toast: (visible_ms: 2000),
            empty_state: (title: "Oops"),
        )"#;
        let cfg = from_ron(ron, None).unwrap();
        assert_eq!(cfg.decode_policy, DecodePolicy::Strict);
        assert_eq!(cfg.screens, vec!["settings".to_string(), "help".to_string()]);
        assert_eq!(cfg.toast.fade_in_ms, 500);
        assert_eq!(cfg.toast.visible_ms, 2000);
        assert_eq!(cfg.empty_state.title, "Oops");
        assert_eq!(cfg.empty_state.message, "Could not load services data");
        match cfg.source {
            SourceSpec::Url { url, credentials } => {
                assert_eq!(url, "https://example.com/screen.json");
                assert_eq!(credentials.unwrap().username_var, "BDUI_TEST_USER");
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn file_source_parses() {
        let cfg = from_ron(r#"(source: File("docs/home.json"))"#, None).unwrap();
        assert_eq!(cfg.source, SourceSpec::File("docs/home.json".into()));
    }

    #[test]
    fn unknown_field_is_parse_error_with_excerpt() {
        let err = from_ron("(\n    decode_polcy: Strict,\n)", None).unwrap_err();
        match &err {
            Error::Parse { line, excerpt, .. } => {
                assert_eq!(*line, 2);
                assert!(excerpt.contains("decode_polcy"));
                assert!(excerpt.contains('^'));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(err.pretty().starts_with("config parse error at line 2"));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let err = from_ron(r#"(screens: ["ok", " "])"#, None).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("screens[1]"));

        let err = from_ron(r#"(source: Url(url: "ftp://x"))"#, None).unwrap_err();
        assert!(err.to_string().contains("http://"));

        let err = from_ron("(toast: (visible_ms: 0))", None).unwrap_err();
        assert!(err.to_string().contains("visible_ms"));
    }

    #[test]
    fn load_requires_ron_extension() {
        let err = load_from_path(Path::new("/tmp/config.json")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains(".ron"));
    }

    #[test]
    fn load_from_disk_attaches_path() {
        let dir = env::temp_dir().join(format!("bdui-config-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.ron");
        fs::write(&good, "(screens: [\"settings\"])").unwrap();
        assert_eq!(load_from_path(&good).unwrap().screens, vec!["settings"]);

        let bad = dir.join("bad.ron");
        fs::write(&bad, "(screens: [\"\"])").unwrap();
        let err = load_from_path(&bad).unwrap_err();
        assert_eq!(err.path(), Some(bad.as_path()));
        assert!(
            err.pretty()
                .starts_with(&format!("invalid config {}\n", bad.display()))
        );

        let missing = dir.join("missing.ron");
        assert!(matches!(load_from_path(&missing), Err(Error::Read { .. })));
        let _ignored = fs::remove_dir_all(&dir);
    }

    #[test]
    fn explicit_path_wins() {
        let p = Path::new("/somewhere/else.ron");
        assert_eq!(resolve_config_path(Some(p)), Some(p.to_path_buf()));
    }

    #[test]
    fn credentials_come_from_environment() {
        let creds = CredentialsEnv {
            username_var: "BDUI_TEST_SURELY_UNSET_USER".into(),
            password_var: "BDUI_TEST_SURELY_UNSET_PASS".into(),
        };
        let err = creds.resolve().unwrap_err();
        assert!(err.to_string().contains("BDUI_TEST_SURELY_UNSET_USER"));

        let auth = BasicAuth {
            username: "u".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{auth:?}").contains("hunter2"));
    }
}
