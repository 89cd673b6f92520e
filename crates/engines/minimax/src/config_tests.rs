use super::*;

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.time_fraction, 0.022);
    assert_eq!(config.max_depth, 64);
    assert!(config.use_opening_book);
    assert_eq!(config.opening_book_max_turn, 10);
    assert!(config.alpha_beta);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = EngineConfig::from_toml_str("max_depth = 6\nuse_opening_book = false\n").unwrap();
    assert_eq!(config.max_depth, 6);
    assert!(!config.use_opening_book);
    assert_eq!(config.time_fraction, 0.022);
    assert!(config.alpha_beta);

    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}

#[test]
fn test_round_trip_through_toml() {
    let config = EngineConfig {
        time_fraction: 0.05,
        max_depth: 4,
        use_opening_book: false,
        opening_book_max_turn: 3,
        alpha_beta: false,
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_bad_value_is_a_parse_error() {
    let err = EngineConfig::from_toml_str("max_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, EngineError::ConfigParse(_)));
}

#[test]
fn test_time_fraction_outside_unit_range_is_rejected() {
    for text in [
        "time_fraction = inf",
        "time_fraction = nan",
        "time_fraction = -0.1",
        "time_fraction = 1.5",
    ] {
        let err = EngineConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, EngineError::TimeFraction(_)), "{text}: {err}");
    }
    let whole = EngineConfig::from_toml_str("time_fraction = 1.0").unwrap();
    assert_eq!(
        whole.limits(Duration::from_secs(900)).move_time,
        Some(Duration::from_secs(900))
    );
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = EngineConfig::load(Path::new("/nonexistent/engine.toml")).unwrap_err();
    match err {
        EngineError::ConfigRead { path, .. } => {
            assert_eq!(path, Path::new("/nonexistent/engine.toml"))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_limits_from_remaining_time() {
    let config = EngineConfig::default();
    let limits = config.limits(Duration::from_secs(900));
    assert_eq!(limits.max_depth, 64);
    let budget = limits.move_time.unwrap();
    let expected = Duration::from_millis(19_800);
    assert!(budget.abs_diff(expected) < Duration::from_millis(1), "got {budget:?}");
}
