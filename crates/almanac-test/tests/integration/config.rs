use almanac_core::config::{LoggingConfig, Settings, load_config};
use almanac_core::constants::GLOBAL_REPEAT_CAP;
use almanac_core::logging::init_tracing;
use almanac_core::model::RepeatType;
use almanac_repeat::RecurrenceExpander;
use almanac_test::{date, dates_of, make_repeating};

/// ## Summary
/// The horizon comes from configuration, not from a compiled-in date.
#[test_log::test]
fn configured_cap_drives_expansion() {
    let settings = Settings::from_toml_str(
        r#"
        [recurrence]
        global_repeat_cap = "2025-11-02"
        "#,
    )
    .unwrap();
    let expander = RecurrenceExpander::from_config(&settings.recurrence);

    let event = make_repeating("cap", "2025-10-29", RepeatType::Daily, 1, Some("2026-01-10"));
    let instances = expander.generate_instances(&event, date("2025-10-29"), date("2025-11-05"));
    assert_eq!(
        dates_of(&instances),
        ["2025-10-29", "2025-10-30", "2025-10-31", "2025-11-01", "2025-11-02"]
    );
}

#[test_log::test]
fn default_settings_match_default_expander() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(
        RecurrenceExpander::from_config(&settings.recurrence),
        RecurrenceExpander::default()
    );
}

const CAP_VAR: &str = "ALMANAC__RECURRENCE__GLOBAL_REPEAT_CAP";

/// ## Summary
/// Layering is defaults, then the TOML file, then `ALMANAC__*` variables.
///
/// Kept in one test because the environment is shared by the whole process.
#[test_log::test]
fn environment_overrides_config_file() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("almanac.toml");
    std::fs::write(
        &path,
        "[recurrence]\nglobal_repeat_cap = \"2030-01-01\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    // SAFETY: no other test in this binary reads or writes this variable.
    unsafe { std::env::remove_var(CAP_VAR) };
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.recurrence.global_repeat_cap, date("2030-01-01"));
    assert_eq!(settings.logging.level, "warn");

    let missing = Settings::load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(missing.recurrence.global_repeat_cap, GLOBAL_REPEAT_CAP);

    // SAFETY: as above.
    unsafe { std::env::set_var(CAP_VAR, "2031-02-03") };
    let from_file = Settings::load_from(&path);
    let from_cwd = load_config();
    // SAFETY: as above.
    unsafe { std::env::remove_var(CAP_VAR) };

    let from_file = from_file.unwrap();
    assert_eq!(from_file.recurrence.global_repeat_cap, date("2031-02-03"));
    assert_eq!(from_file.logging.level, "warn");
    assert_eq!(from_cwd.unwrap().recurrence.global_repeat_cap, date("2031-02-03"));
}

#[test_log::test]
fn malformed_config_file_is_rejected() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("almanac.toml");
    std::fs::write(&path, "[recurrence\nglobal_repeat_cap = 2030\n").unwrap();

    assert!(Settings::load_from(&path).is_err());
}

/// ## Summary
/// Only one global subscriber can be installed per process.
#[test]
fn second_tracing_install_fails() {
    let config = LoggingConfig::default();

    // The first install may already have happened in another test.
    let _first = init_tracing(&config);
    assert!(init_tracing(&config).is_err());
}
