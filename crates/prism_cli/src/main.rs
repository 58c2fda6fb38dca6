//! Prism - render a demo scene to a PNG file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prism_math::{Camera, Vec3};
use prism_renderer::{FrameRenderer, RenderSettings};

mod scenes;

use scenes::DemoScene;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Whitted-style CPU ray tracer", long_about = None)]
struct Args {
    /// JSON render settings; missing fields use defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Output PNG file
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Worker threads, overrides the settings file (0 = all cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = DemoScene::Showcase)]
    scene: DemoScene,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => RenderSettings::from_json_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    if let Some(threads) = args.threads {
        settings.worker_count = threads;
    }

    let scene = args.scene.build().context("Failed to build scene")?;
    let camera = Camera::with_aspect(Vec3::ZERO, 60.0, args.width, args.height);

    let mut renderer =
        FrameRenderer::from_settings(&settings).context("Failed to create renderer")?;
    log::info!(
        "Rendering '{}' at {}x{} on {} workers",
        scene.name,
        args.width,
        args.height,
        renderer.worker_count()
    );

    let Some(frame) =
        renderer.render_if_needed(&scene, &camera, &settings, args.width, args.height)
    else {
        anyhow::bail!("Renderer skipped the frame");
    };

    image::save_buffer(
        &args.output,
        &frame.to_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("Saved {}", args.output.display());
    Ok(())
}
