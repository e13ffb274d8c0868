//! Terminal pixel engine demo (default binary).
//!
//! Frame loop: input poll -> world clear -> compositing -> camera view ->
//! differential render, paced by a fixed tick. WASD pans the camera, Ctrl+C
//! or SIGINT/SIGTERM quits.

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info};

use tengine::core::{Camera, Compositor, GameObject, World};
use tengine::input::{pan_delta, should_quit, InputListener};
use tengine::runtime::{EngineConfig, FrameClock, ShutdownSignal};
use tengine::term::TerminalRenderer;
use tengine::types::{Color, Vec2, INPUT_QUEUE_CAPACITY};

const BACKGROUND: Color = Color::WHITE;

struct Scene {
    world: World,
    camera: Camera,
    objects: Vec<GameObject>,
}

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    init_logging(&config)?;
    info!("starting: {config:?}");

    // Load assets before raw mode so failures print normally.
    let scene = build_scene(&config)?;
    let shutdown = ShutdownSignal::install()?;

    let mut term = TerminalRenderer::stdout().with_frame_delay(config.frame_delay);
    term.enter().context("terminal setup failed")?;

    let result = run(&mut term, scene, &shutdown, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        error!("failed to restore terminal: {e:#}");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    mut scene: Scene,
    shutdown: &ShutdownSignal,
    config: &EngineConfig,
) -> Result<()> {
    let mut input = InputListener::stdin(INPUT_QUEUE_CAPACITY).context("start input listener")?;
    let mut clock = FrameClock::from_fps(config.fps);
    let mut compositor = Compositor::new();

    loop {
        if shutdown.is_triggered() {
            info!("shutting down: signal");
            return Ok(());
        }
        if poll_input(&mut input, &mut scene) {
            info!("shutting down: quit key or closed input");
            return Ok(());
        }

        scene.world.clear(BACKGROUND);
        compositor.draw(&mut scene.world, &scene.objects);

        let view = scene.camera.view(&scene.world);
        term.render(&view)?;

        clock.wait();
    }
}

/// Drain pending key events. Returns true when the loop should stop.
fn poll_input(input: &mut InputListener, scene: &mut Scene) -> bool {
    while let Some(event) = input.try_recv() {
        if should_quit(&event) {
            return true;
        }
        if let Some((dx, dy)) = pan_delta(&event) {
            scene.camera.pan_within(dx, dy, &scene.world);
        }
    }
    input.is_closed()
}

fn build_scene(config: &EngineConfig) -> Result<Scene> {
    let world = World::new(config.world_width, config.world_height);
    let (w, h) = (dim(world.width()), dim(world.height()));

    let red = Color::rgb(255, 0, 0);
    let green = Color::rgb(0, 200, 0);

    let player = GameObject::from_rows(vec![vec![red; 4]; 2])?
        .with_position(Vec2::new(2, 2))
        .with_pivot(Vec2::new(1, 1))
        .with_z_index(2);
    let enemy = GameObject::from_rows(vec![vec![green; 3]; 3])?
        .with_position(Vec2::new(w - 3, h - 3))
        .with_pivot(Vec2::new(1, 1))
        .with_z_index(0);

    let mut objects = vec![player, enemy];
    if let Some(path) = &config.asset_path {
        let sprite = GameObject::from_file(path)
            .with_context(|| format!("load sprite {}", path.display()))?
            .with_position(Vec2::new(1, 1))
            .with_pivot(Vec2::new(1, 1))
            .with_z_index(1);
        objects.push(sprite);
    }

    let mut camera = Camera::new(0, 0, dim(config.camera_width), dim(config.camera_height));
    camera.fit_extent(&world);

    Ok(Scene {
        world,
        camera,
        objects,
    })
}

fn dim(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

fn init_logging(config: &EngineConfig) -> Result<()> {
    // The screen belongs to the renderer; only warnings reach stderr by default.
    let default_filter = if config.log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    builder.format_timestamp_micros();
    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
