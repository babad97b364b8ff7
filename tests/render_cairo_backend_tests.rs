#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use duel_charts::ChartError;
use duel_charts::api::{ChartView, ChartsConfig, bar_scene_from_file, radar_scene_from_file};
use duel_charts::charts::render_placeholder;
use duel_charts::core::Viewport;
use duel_charts::interaction::HitShape;
use duel_charts::render::{CairoRenderer, Color};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = CairoRenderer::for_viewport(Viewport::new(0, 0)).expect_err("empty viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn cairo_renderer_draws_every_bar_chart_primitive() {
    let config = ChartsConfig::default();
    let scene = bar_scene_from_file(fixture("factors.csv"), &config).expect("bar scene");
    let expected = (
        scene.frame.lines.len(),
        scene.frame.rects.len(),
        scene.frame.texts.len(),
    );

    let renderer = CairoRenderer::for_viewport(scene.frame.viewport).expect("renderer");
    let mut view = ChartView::new(renderer, scene);
    view.render().expect("render");
    let stats = view.into_renderer().last_stats();

    assert_eq!(
        (stats.lines_drawn, stats.rects_drawn, stats.texts_drawn),
        expected
    );
    assert!(!stats.tooltip_drawn);
}

fn png_bytes(renderer: &CairoRenderer) -> Vec<u8> {
    let mut bytes = Vec::new();
    renderer
        .surface()
        .write_to_png(&mut bytes)
        .expect("encode png");
    bytes
}

#[test]
fn cairo_tooltip_is_cleared_from_the_surface_on_leave() {
    let config = ChartsConfig::default();
    let scene = radar_scene_from_file(fixture("factors.csv"), &config).expect("radar scene");
    let HitShape::Circle { cx, cy, .. } = scene.hit_regions[0].shape else {
        panic!("radar markers are circles");
    };

    let renderer = CairoRenderer::for_viewport(scene.frame.viewport).expect("renderer");
    let mut view = ChartView::new(renderer, scene);
    view.render().expect("render");
    let frame_only = png_bytes(view.renderer());

    assert_eq!(view.pointer_move(cx, cy).expect("hover"), Some(0));
    assert!(view.renderer().last_stats().tooltip_drawn);
    let hovered = png_bytes(view.renderer());
    assert_ne!(hovered, frame_only);

    // Moving within the marker repaints a single box, not a trail.
    view.pointer_move(cx + 1.0, cy).expect("move");
    view.pointer_move(cx, cy).expect("move back");
    assert_eq!(png_bytes(view.renderer()), hovered);

    view.pointer_leave().expect("leave");
    assert!(!view.renderer().last_stats().tooltip_drawn);
    assert_eq!(png_bytes(view.renderer()), frame_only);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let config = ChartsConfig::default();
    let scene = radar_scene_from_file(fixture("factors.csv"), &config).expect("radar scene");
    let expected_circles = scene.frame.circles.len();

    let renderer = CairoRenderer::new(900, 1000).expect("renderer");
    let mut view = ChartView::new(renderer, scene);

    let surface = ImageSurface::create(Format::ARgb32, 900, 1000).expect("surface");
    let context = Context::new(&surface).expect("context");
    view.render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(
        view.renderer().last_stats().circles_drawn,
        expected_circles
    );
}

#[test]
fn cairo_renderer_png_output_is_written() {
    let scene = render_placeholder(Viewport::new(320, 200), "missing file");
    let mut renderer = CairoRenderer::for_viewport(scene.frame.viewport).expect("renderer");
    renderer
        .set_clear_color(Color::rgb(0.95, 0.95, 0.95))
        .expect("clear color");
    let mut view = ChartView::new(renderer, scene);
    view.render().expect("render");

    let path = std::env::temp_dir().join("duel_charts_placeholder_test.png");
    view.renderer().write_png(&path).expect("write png");
    let metadata = std::fs::metadata(&path).expect("png metadata");
    assert!(metadata.len() > 0);
    let _ = std::fs::remove_file(&path);
}
