use duel_charts::ChartError;
use duel_charts::api::{CHARTS_CONFIG_JSON_SCHEMA_V1, ChartsConfig};
use duel_charts::charts::BarChartConfig;
use duel_charts::core::Viewport;
use duel_charts::data::Subjects;

#[test]
fn empty_object_yields_stock_layout() {
    let config = ChartsConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, ChartsConfig::default());
    assert_eq!(config.subjects, Subjects::new("Messi", "Ronaldo"));
    assert_eq!(config.bar.viewport, Viewport::new(850, 600));
    assert_eq!(config.scatter.viewport, Viewport::new(800, 600));
    assert_eq!(config.radar.viewport, Viewport::new(900, 1000));
    assert_eq!(config.radar.center, (430.0, 500.0));
    assert_eq!(config.radar.ring_levels.first(), Some(&312.0));
    assert_eq!(config.radar.ring_levels.last(), Some(&26.0));
    assert_eq!(config.radar.ring_levels.len(), 12);
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let input = r#"{
        "subjects": { "first": "Pele", "second": "Maradona" },
        "bar": { "factors": ["Goals"], "y_label": "Goals Total" },
        "radar": { "rescale": { "threshold": 500.0, "divisor": 5.0 } }
    }"#;
    let config = ChartsConfig::from_json_str(input).expect("partial config");

    assert_eq!(config.subjects.first, "Pele");
    assert_eq!(config.bar.factors, vec!["Goals".to_owned()]);
    assert_eq!(config.bar.y_label, "Goals Total");
    assert_eq!(config.bar.band_padding, 0.2);
    assert_eq!(config.radar.rescale.threshold, 500.0);
    assert_eq!(config.radar.point_radius, 5.0);
}

#[test]
fn contract_round_trip_preserves_config() {
    let config = ChartsConfig::default()
        .with_subjects(Subjects::new("Kane", "Son"))
        .with_bar(BarChartConfig::default().with_factors(["Shots"]));

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = ChartsConfig::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, config);

    let bare = config.to_json_pretty().expect("serialize bare");
    let restored = ChartsConfig::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored, config);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let input = format!(
        r#"{{ "schema_version": {}, "config": {{}} }}"#,
        CHARTS_CONFIG_JSON_SCHEMA_V1 + 1
    );
    let err = ChartsConfig::from_json_compat_str(&input).expect_err("future schema");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("schema version")));
}

#[test]
fn validation_catches_bad_colors_and_viewports() {
    let mut config = ChartsConfig::default();
    config.scatter.colors[0] = "blue".to_owned();
    assert!(config.validate().is_err());

    let mut config = ChartsConfig::default();
    config.radar.viewport = Viewport::new(0, 1000);
    assert!(matches!(
        config.validate(),
        Err(ChartError::InvalidViewport { width: 0, height: 1000 })
    ));

    assert!(ChartsConfig::default().validate().is_ok());
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = ChartsConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn validation_rejects_identical_subjects() {
    let config = ChartsConfig::default().with_subjects(Subjects::new("Messi", "Messi"));
    let err = config.validate().expect_err("same subject twice");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("Messi")));
}
