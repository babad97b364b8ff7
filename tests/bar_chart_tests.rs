use duel_charts::ChartError;
use duel_charts::charts::{BarChartConfig, bar_scales, render_bar_chart};
use duel_charts::data::{StatRecord, Subjects, filter_factors};
use duel_charts::render::Color;

fn records() -> Vec<StatRecord> {
    vec![
        StatRecord::new("Goals", Some(672.0), Some(700.0)),
        StatRecord::new("Shots", Some(1180.0), Some(1310.0)),
        StatRecord::new("Shots on Target", Some(590.0), Some(620.0)),
        StatRecord::new("Penalties", Some(99.0), Some(140.0)),
    ]
}

#[test]
fn bars_sit_exactly_on_scaled_values() {
    let subjects = Subjects::default();
    let config = BarChartConfig::default();
    let scene = render_bar_chart(&records(), &subjects, &config).expect("bar scene");

    let filtered = filter_factors(&records(), config.factors.as_slice());
    let scales = bar_scales(&filtered, &subjects, &config).expect("scales");
    assert_eq!(scales.y.domain(), (0.0, 1310.0));

    let half = scales.x.bandwidth() / 2.0;
    let messi = scales.x.band("Messi").expect("messi band");
    let ronaldo = scales.x.band("Ronaldo").expect("ronaldo band");
    let expected = [
        (messi, 1180.0),
        (messi, 590.0),
        (ronaldo + half, 1310.0),
        (ronaldo + half, 620.0),
    ];

    let bars = &scene.frame.rects[..4];
    for (rect, (band_x, value)) in bars.iter().zip(expected) {
        let y = scales.y.map(value).expect("y");
        assert_eq!(rect.x, scales.plot.origin_x + band_x);
        assert_eq!(rect.y, scales.plot.origin_y + y);
        assert_eq!(rect.height, scales.plot.height - y);
        assert_eq!(rect.width, half);
        assert_eq!(rect.border_color, Color::GREY);
    }

    // The tallest bar reaches the top of the plot.
    assert_eq!(bars[2].y, 10.0);
    assert_eq!(bars[2].height, 570.0);
}

#[test]
fn bars_use_subject_factor_palette() {
    let scene =
        render_bar_chart(&records(), &Subjects::default(), &BarChartConfig::default()).expect("bar scene");

    let fills: Vec<String> = scene.frame.rects[..4]
        .iter()
        .map(|rect| rect.fill_color.to_hex())
        .collect();
    assert_eq!(fills, vec!["#4794de", "#07097e", "#e35b58", "#881804"]);

    // Legend: one swatch and one label per palette key.
    assert_eq!(scene.frame.rects.len(), 8);
    let labels: Vec<&str> = scene.frame.texts.iter().map(|text| text.text.as_str()).collect();
    for label in [
        "Messi: Shots",
        "Messi: Shots on Target",
        "Ronaldo: Shots",
        "Ronaldo: Shots on Target",
        "Shots Total",
        "Messi",
        "Ronaldo",
    ] {
        assert!(labels.contains(&label), "missing label {label}");
    }
}

#[test]
fn hit_regions_carry_player_and_factor() {
    let scene =
        render_bar_chart(&records(), &Subjects::default(), &BarChartConfig::default()).expect("bar scene");

    assert_eq!(scene.hit_regions.len(), 4);
    assert_eq!(scene.hit_regions[0].content.lines(), ["Player: Messi", "Shots: 1180"]);
    assert_eq!(
        scene.hit_regions[3].content.lines(),
        ["Player: Ronaldo", "Shots on Target: 620"]
    );
    assert!(scene.control_label.is_none());
}

#[test]
fn absent_values_draw_no_bar() {
    let records = vec![
        StatRecord::new("Shots", Some(100.0), None),
        StatRecord::new("Shots on Target", None, Some(40.0)),
    ];
    let scene = render_bar_chart(&records, &Subjects::default(), &BarChartConfig::default())
        .expect("bar scene");
    assert_eq!(scene.hit_regions.len(), 2);
}

#[test]
fn missing_allow_listed_rows_is_invalid_data() {
    let records = vec![StatRecord::new("Goals", Some(672.0), Some(700.0))];
    let err = render_bar_chart(&records, &Subjects::default(), &BarChartConfig::default())
        .expect_err("no bar rows");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn rendering_is_idempotent() {
    let subjects = Subjects::default();
    let config = BarChartConfig::default().with_factors(["Shots", "Penalties"]);
    let first = render_bar_chart(&records(), &subjects, &config).expect("first");
    let second = render_bar_chart(&records(), &subjects, &config).expect("second");
    assert_eq!(first, second);
}

#[test]
fn legend_labels_keep_underscores_in_subject_names() {
    let subjects = Subjects::new("Van_Dijk", "Ramos");
    let records = vec![StatRecord::new("Shots", Some(120.0), Some(140.0))];
    let config = BarChartConfig::default().with_factors(["Shots"]);
    let scene = render_bar_chart(&records, &subjects, &config).expect("bar scene");

    let labels: Vec<&str> = scene.frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"Van_Dijk: Shots"));
    assert!(labels.contains(&"Ramos: Shots"));
    assert!(!labels.contains(&"Van: Dijk_Shots"));
}
