//! trifill: fills triangles into a software framebuffer and shows it
//!
//! Runs a macroquad window by default. With `--snapshot` a single frame is
//! rendered headless and written to a PNG file instead.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use macroquad::prelude::{clear_background, next_frame, Conf, BLACK};
use macroquad::Window;

use trifill::present::{PngPresenter, WindowPresenter};
use trifill::rasterizer::Framebuffer;
use trifill::scene::{load_scene, save_scene, Scene, SceneError};
use trifill::{paint, VERSION};

#[derive(Parser, Debug)]
#[command(version, about = "Minimal software triangle rasterizer")]
struct Args {
    /// RON scene file (built-in demo scene if omitted)
    #[arg(short, long, value_name = "RON")]
    scene: Option<PathBuf>,

    /// Override the framebuffer width
    #[arg(long)]
    width: Option<usize>,

    /// Override the framebuffer height
    #[arg(long)]
    height: Option<usize>,

    /// Render one frame to this PNG and exit
    #[arg(long, value_name = "PNG")]
    snapshot: Option<PathBuf>,

    /// Write the effective scene as RON and exit
    #[arg(long, value_name = "RON")]
    dump_scene: Option<PathBuf>,
}

fn build_scene(args: &Args) -> Result<Scene, SceneError> {
    let mut scene = match &args.scene {
        Some(path) => {
            let scene = load_scene(path)?;
            log::info!(
                "loaded {} ({}x{}, {} triangles)",
                path.display(),
                scene.width,
                scene.height,
                scene.triangles.len()
            );
            scene
        }
        None => {
            log::info!("no scene file given, using built-in scene");
            Scene::default()
        }
    };

    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }
    scene.validate()?;
    Ok(scene)
}

fn window_conf(scene: &Scene) -> Conf {
    Conf {
        window_title: format!("trifill v{}", VERSION),
        window_width: scene.width as i32,
        window_height: scene.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run_window(scene: Scene) {
    let mut fb = Framebuffer::new(scene.width, scene.height);
    let mut presenter = WindowPresenter::new();

    loop {
        clear_background(BLACK);
        match paint(&mut fb, &scene, &mut presenter) {
            Ok(_) => {}
            Err(never) => match never {},
        }
        next_frame().await;
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = match build_scene(&args) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &args.dump_scene {
        return match save_scene(&scene, path) {
            Ok(()) => {
                log::info!("wrote scene to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("failed to write {}: {}", path.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    if let Some(path) = &args.snapshot {
        let mut fb = Framebuffer::new(scene.width, scene.height);
        let mut presenter = PngPresenter::new(path);
        return match paint(&mut fb, &scene, &mut presenter) {
            Ok(stats) => {
                log::info!("{} pixels written", stats.written);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    log::info!("=== trifill v{} ({}x{}) ===", VERSION, scene.width, scene.height);
    Window::from_config(window_conf(&scene), run_window(scene));
    ExitCode::SUCCESS
}
