use duel_charts::api::{ChartView, ChartsConfig, build_scenes};
use duel_charts::charts::{ChartScene, ScatterState};
use duel_charts::data::Metric;
use duel_charts::render::SvgRenderer;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: render_charts --factors <csv> --yearly <csv> --output <dir> [--config <json>] [--goals]";

#[derive(Debug)]
struct CliArgs {
    factors: PathBuf,
    yearly: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    goals: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = duel_charts::telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => ChartsConfig::load_json_file(path).map_err(|err| err.to_string())?,
        None => ChartsConfig::default(),
    };
    config.validate().map_err(|err| err.to_string())?;

    fs::create_dir_all(&args.output).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output.display()
        )
    })?;

    let state = if args.goals {
        ScatterState::new(Metric::Goals)
    } else {
        ScatterState::default()
    };

    for (kind, scene) in build_scenes(&args.factors, &args.yearly, &config, state) {
        let svg_path = args.output.join(format!("{}.svg", kind.file_stem()));
        write_svg(&svg_path, kind.title(), scene.clone())?;
        println!("wrote {}", svg_path.display());

        #[cfg(feature = "cairo-backend")]
        {
            let png_path = args.output.join(format!("{}.png", kind.file_stem()));
            write_png(&png_path, scene)?;
            println!("wrote {}", png_path.display());
        }
    }
    Ok(())
}

fn write_svg(path: &Path, title: &str, scene: ChartScene) -> Result<(), String> {
    let mut view = ChartView::new(SvgRenderer::new().with_title(title), scene);
    view.render().map_err(|err| err.to_string())?;
    view.into_renderer()
        .write_to(path)
        .map_err(|err| err.to_string())
}

#[cfg(feature = "cairo-backend")]
fn write_png(path: &Path, scene: ChartScene) -> Result<(), String> {
    use duel_charts::render::CairoRenderer;

    let renderer = CairoRenderer::for_viewport(scene.frame.viewport).map_err(|err| err.to_string())?;
    let mut view = ChartView::new(renderer, scene);
    view.render().map_err(|err| err.to_string())?;
    view.into_renderer()
        .write_png(path)
        .map_err(|err| err.to_string())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut factors = None::<PathBuf>;
    let mut yearly = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut goals = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--factors" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --factors".to_owned())?;
                factors = Some(PathBuf::from(value));
            }
            "--yearly" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --yearly".to_owned())?;
                yearly = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--goals" => goals = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        factors: factors.ok_or_else(|| format!("missing --factors\n{USAGE}"))?,
        yearly: yearly.ok_or_else(|| format!("missing --yearly\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
        config,
        goals,
    })
}
