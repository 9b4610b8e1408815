use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use structopt::StructOpt;

use lustre::output::write_image;
use lustre::parsing::{example_scene, load_json, SceneData};
use lustre::renderer::{render, RenderConfig};
use lustre::scene::Scene;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// JSON scene description; the built-in fixture renders when absent.
    #[structopt(long)]
    scene_file: Option<PathBuf>,
    #[structopt(short = "o", long, default_value = "screen.bmp")]
    output: String,
    /// Supersampling multiplier for both image axes.
    #[structopt(long)]
    resolution: Option<u32>,
    #[structopt(long, default_value = "warn")]
    print_log_level: String,
    #[structopt(long, default_value = "info")]
    write_log_level: String,
}

fn parse_log_level(level: String, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "trace" => LevelFilter::Trace,
        "error" => LevelFilter::Error,
        "debug" => LevelFilter::Debug,
        _ => default,
    }
}

fn main() {
    let opts = Opt::from_args();
    let term_log_level = parse_log_level(opts.print_log_level, LevelFilter::Warn);
    let write_log_level = parse_log_level(opts.write_log_level, LevelFilter::Info);

    CombinedLogger::init(vec![
        TermLogger::new(
            term_log_level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            write_log_level,
            simplelog::Config::default(),
            File::create("render.log").unwrap(),
        ),
    ])
    .unwrap();

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .build_global()
        .unwrap();

    let scene: Scene = match opts.scene_file {
        Some(path) => match load_json::<SceneData>(path) {
            Ok(data) => data.into(),
            Err(e) => {
                error!("couldn't read scene file, {:?}", e);
                return;
            }
        },
        None => example_scene(),
    };
    info!(
        "scene has {} spheres and {} lights",
        scene.spheres.len(),
        scene.lights.len()
    );

    let mut config = RenderConfig {
        progress: true,
        ..RenderConfig::default()
    };
    if let Some(factor) = opts.resolution {
        config.resolution_factor = factor;
    }

    let now = Instant::now();
    let film = render(&scene, &config);
    info!("render took {:?}", now.elapsed());

    match write_image(&film, &opts.output) {
        Ok(()) => info!("wrote {}", opts.output),
        Err(e) => error!("failed to write {}, {:?}", opts.output, e),
    }
}
