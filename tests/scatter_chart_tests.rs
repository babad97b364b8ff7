use duel_charts::ChartError;
use duel_charts::charts::{ScatterChartConfig, ScatterState, render_scatter_plot, scatter_scales};
use duel_charts::core::PathCommand;
use duel_charts::data::{Metric, Side, Subjects, YearlyRecord};

fn records() -> Vec<YearlyRecord> {
    vec![
        YearlyRecord::new(2015, [5.0, 6.0], [12.0, 15.0]),
        YearlyRecord::new(2005, [10.0, 2.0], [5.0, 3.0]),
        YearlyRecord::new(2010, [20.0, 4.0], [8.0, 9.0]),
    ]
}

#[test]
fn peak_season_maps_to_top_of_plot() {
    let config = ScatterChartConfig::default();
    let scene = render_scatter_plot(&records(), &Subjects::default(), &config, ScatterState::default())
        .expect("scatter scene");

    let scales = scatter_scales(&records(), &config).expect("scales");
    assert_eq!(scales.y.domain(), (0.0, 20.0));
    assert_eq!(scales.x.domain(), (2005.0, 2015.0));
    assert_eq!(scales.y.map(20.0).expect("peak"), 0.0);

    // First side circles follow year order: 2005, 2010, 2015.
    let peak = &scene.frame.circles[1];
    assert_eq!(peak.cx, scales.plot.origin_x + 325.0);
    assert_eq!(peak.cy, scales.plot.origin_y);
    assert_eq!(peak.radius, 4.0);
}

#[test]
fn every_point_equals_scaled_record_value() {
    let config = ScatterChartConfig::default();
    let state = ScatterState::new(Metric::Goals);
    let scene = render_scatter_plot(&records(), &Subjects::default(), &config, state)
        .expect("scatter scene");
    let scales = scatter_scales(&records(), &config).expect("scales");

    let mut sorted = records();
    sorted.sort_by_key(|record| record.year);
    let expected: Vec<(f64, f64)> = Side::BOTH
        .into_iter()
        .flat_map(|side| sorted.iter().map(move |record| (side, *record)))
        .map(|(side, record)| {
            (
                scales.plot.origin_x + scales.x.map(f64::from(record.year)).expect("x"),
                scales.plot.origin_y + scales.y.map(record.value(side, Metric::Goals)).expect("y"),
            )
        })
        .collect();
    let actual: Vec<(f64, f64)> = scene
        .frame
        .circles
        .iter()
        .map(|circle| (circle.cx, circle.cy))
        .collect();
    assert_eq!(actual, expected);

    // One polyline per side through the same points.
    assert_eq!(scene.frame.paths.len(), 2);
    let first_line = &scene.frame.paths[0].commands;
    assert_eq!(
        first_line[0],
        PathCommand::MoveTo {
            x: expected[0].0,
            y: expected[0].1
        }
    );
    assert_eq!(first_line.len(), 3);
}

#[test]
fn y_domain_does_not_change_with_metric() {
    let config = ScatterChartConfig::default();
    let assists = render_scatter_plot(&records(), &Subjects::default(), &config, ScatterState::default())
        .expect("assists");
    let goals = render_scatter_plot(
        &records(),
        &Subjects::default(),
        &config,
        ScatterState::default().toggle(),
    )
    .expect("goals");

    assert_eq!(assists.frame.lines, goals.frame.lines);
    assert_ne!(assists.frame.circles, goals.frame.circles);
}

#[test]
fn toggling_twice_restores_initial_frame() {
    let config = ScatterChartConfig::default();
    let subjects = Subjects::default();
    let initial = ScatterState::default();
    let toggled = initial.toggle();
    assert_eq!(toggled.metric, Metric::Goals);
    assert!(toggled.showing_goals());

    let before = render_scatter_plot(&records(), &subjects, &config, initial).expect("before");
    let after = render_scatter_plot(&records(), &subjects, &config, toggled.toggle()).expect("after");
    assert_eq!(before, after);
}

#[test]
fn labels_follow_state() {
    let config = ScatterChartConfig::default();
    let subjects = Subjects::default();

    let assists = render_scatter_plot(&records(), &subjects, &config, ScatterState::default())
        .expect("assists");
    assert_eq!(assists.control_label.as_deref(), Some("Goals by Season"));
    assert!(assists.frame.texts.iter().any(|text| text.text == "Assists" && text.rotation_deg == -90.0));
    assert!(assists.frame.texts.iter().any(|text| text.text == "Year"));
    assert!(assists.frame.texts.iter().any(|text| text.text == "2010"));

    let goals = render_scatter_plot(&records(), &subjects, &config, ScatterState::new(Metric::Goals))
        .expect("goals");
    assert_eq!(goals.control_label.as_deref(), Some("Assists by Season"));
    assert!(goals.frame.texts.iter().any(|text| text.text == "Goals" && text.rotation_deg == -90.0));
}

#[test]
fn tooltips_name_player_year_and_metric() {
    let scene = render_scatter_plot(
        &records(),
        &Subjects::default(),
        &ScatterChartConfig::default(),
        ScatterState::default(),
    )
    .expect("scene");

    assert_eq!(scene.hit_regions.len(), 6);
    assert_eq!(
        scene.hit_regions[1].content.lines(),
        ["Player: Messi", "Year: 2010", "Assists: 20"]
    );
    assert_eq!(
        scene.hit_regions[5].content.lines(),
        ["Player: Ronaldo", "Year: 2015", "Assists: 6"]
    );
}

#[test]
fn single_season_widens_year_axis() {
    let records = vec![YearlyRecord::new(2010, [3.0, 4.0], [5.0, 6.0])];
    let config = ScatterChartConfig::default();
    let scene = render_scatter_plot(&records, &Subjects::default(), &config, ScatterState::default())
        .expect("scene");

    assert_eq!(scene.frame.circles[0].cx, 50.0 + 325.0);
    assert!(scene.frame.paths.is_empty());
    let year_labels: Vec<&str> = scene
        .frame
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .filter(|text| text.starts_with("20"))
        .collect();
    assert_eq!(year_labels, vec!["2009", "2010", "2011"]);
}

#[test]
fn empty_data_is_invalid() {
    let err = render_scatter_plot(
        &[],
        &Subjects::default(),
        &ScatterChartConfig::default(),
        ScatterState::default(),
    )
    .expect_err("empty input");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
