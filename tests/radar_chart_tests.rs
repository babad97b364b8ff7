use approx::assert_abs_diff_eq;
use duel_charts::ChartError;
use duel_charts::charts::{RadarChartConfig, radar_geometry, radar_records, render_radar_chart};
use duel_charts::core::PathCommand;
use duel_charts::data::{OutlierRescale, Side, StatRecord, Subjects};
use std::f64::consts::TAU;

fn records() -> Vec<StatRecord> {
    vec![
        StatRecord::new("Goals", Some(672.0), Some(700.0)),
        StatRecord::new("MOTM", Some(236.0), Some(215.0)),
        StatRecord::new("Free Kick Goals", Some(50.0), Some(58.0)),
        StatRecord::new("Header", Some(24.0), Some(145.0)),
        StatRecord::new("Dribbles", Some(2950.0), Some(1250.0)),
        StatRecord::new("Hat-tricks", Some(48.0), Some(60.0)),
        StatRecord::new("Penalties", Some(99.0), None),
    ]
}

#[test]
fn radial_domain_uses_rescaled_maximum() {
    let config = RadarChartConfig::default();
    let prepared = radar_records(&records(), &config);
    assert_eq!(prepared.len(), 6);
    assert_eq!(prepared[3].values, [Some(295.0), Some(125.0)]);

    let geometry = radar_geometry(&prepared, &config).expect("geometry");
    assert_eq!(geometry.radial.domain(), (0.0, 295.0));
    assert_eq!(geometry.radial.range(), (0.0, 400.0));
    assert_eq!(geometry.factor_count, 6);
    assert_abs_diff_eq!(geometry.angle(1), TAU / 6.0, epsilon = 1e-12);
}

#[test]
fn spokes_and_labels_share_factor_angles() {
    let config = RadarChartConfig::default();
    let scene = render_radar_chart(&records(), &Subjects::default(), &config).expect("radar scene");
    let geometry = radar_geometry(&radar_records(&records(), &config), &config).expect("geometry");

    assert_eq!(scene.frame.lines.len(), 6);
    let first = &scene.frame.lines[0];
    assert_eq!((first.x1, first.y1), (430.0, 500.0));
    assert_abs_diff_eq!(first.x2, 430.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y2, 100.0, epsilon = 1e-9);

    for (index, line) in scene.frame.lines.iter().enumerate() {
        let tip = geometry.point(index, 295.0).expect("tip");
        assert_eq!((line.x2, line.y2), tip);
    }

    let labels: Vec<&str> = scene.frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(
        labels,
        vec!["MOTM", "Free Kick Goals", "Header", "Dribbles", "Hat-tricks", "Penalties"]
    );
    let label = &scene.frame.texts[2];
    assert_eq!((label.x, label.y), geometry.point(2, 305.0).expect("label"));
    assert_eq!(label.font_size_px, 12.0);
}

#[test]
fn markers_sit_on_scaled_values() {
    let config = RadarChartConfig::default();
    let scene = render_radar_chart(&records(), &Subjects::default(), &config).expect("radar scene");
    let prepared = radar_records(&records(), &config);
    let geometry = radar_geometry(&prepared, &config).expect("geometry");

    assert_eq!(scene.frame.circles.len(), 12);
    for (offset, side) in Side::BOTH.into_iter().enumerate() {
        for (index, record) in prepared.iter().enumerate() {
            let marker = &scene.frame.circles[offset * prepared.len() + index];
            let expected = geometry
                .point(index, record.value(side).unwrap_or(0.0))
                .expect("point");
            assert_eq!((marker.cx, marker.cy), expected);
            assert_eq!(marker.radius, 5.0);
            assert_eq!(marker.opacity, 0.8);
        }
    }
}

#[test]
fn absent_value_is_drawn_at_centre() {
    let scene = render_radar_chart(
        &records(),
        &Subjects::default(),
        &RadarChartConfig::default(),
    )
    .expect("radar scene");

    let penalties_second = &scene.frame.circles[11];
    assert_abs_diff_eq!(penalties_second.cx, 430.0, epsilon = 1e-9);
    assert_abs_diff_eq!(penalties_second.cy, 500.0, epsilon = 1e-9);
    assert_eq!(
        scene.hit_regions[11].content.lines(),
        ["Ronaldo: 0", "Factor: Penalties"]
    );
}

#[test]
fn rings_precede_filled_areas() {
    let config = RadarChartConfig::default();
    let scene = render_radar_chart(&records(), &Subjects::default(), &config).expect("radar scene");

    assert_eq!(scene.frame.paths.len(), config.ring_levels.len() + 2);
    let rings = &scene.frame.paths[..12];
    assert!(rings.iter().all(|ring| ring.fill.is_none() && ring.stroke_width == 0.5));
    // Outermost ring: level 312 on a [0, 295] -> [0, 400] scale.
    assert_eq!(
        rings[0].commands[0],
        PathCommand::MoveTo {
            x: 430.0,
            y: 500.0 - 312.0 / 295.0 * 400.0
        }
    );

    let areas = &scene.frame.paths[12..];
    for (area, marker) in areas.iter().zip([&scene.frame.circles[0], &scene.frame.circles[6]]) {
        assert_eq!(area.opacity, 0.7);
        assert_eq!(
            area.commands[0],
            PathCommand::MoveTo {
                x: marker.cx,
                y: marker.cy
            }
        );
        assert_eq!(area.commands.last(), Some(&PathCommand::Close));
    }
}

#[test]
fn tooltips_name_subject_value_and_factor() {
    let scene = render_radar_chart(
        &records(),
        &Subjects::default(),
        &RadarChartConfig::default(),
    )
    .expect("radar scene");

    assert_eq!(scene.hit_regions.len(), 12);
    assert_eq!(scene.hit_regions[0].content.lines(), ["Messi: 236", "Factor: MOTM"]);
    assert_eq!(scene.hit_regions[3].content.lines(), ["Messi: 295", "Factor: Dribbles"]);
}

#[test]
fn factor_count_drives_angles() {
    let config = RadarChartConfig::default()
        .with_factors(["MOTM", "Header", "Penalties"])
        .with_rescale(OutlierRescale {
            threshold: 100.0,
            divisor: 2.0,
        })
        .with_ring_levels(vec![50.0]);
    let scene = render_radar_chart(&records(), &Subjects::default(), &config).expect("radar scene");

    // MOTM 236 -> 118 becomes the maximum.
    let geometry = radar_geometry(&radar_records(&records(), &config), &config).expect("geometry");
    assert_eq!(geometry.max_value(), 118.0);
    assert_abs_diff_eq!(geometry.angle(1), TAU / 3.0, epsilon = 1e-12);
    assert_eq!(scene.frame.lines.len(), 3);
    assert_eq!(scene.frame.paths.len(), 3);
}

#[test]
fn no_radar_rows_is_invalid_data() {
    let records = vec![StatRecord::new("Goals", Some(1.0), Some(2.0))];
    let err = render_radar_chart(&records, &Subjects::default(), &RadarChartConfig::default())
        .expect_err("no radar rows");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
