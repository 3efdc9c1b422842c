use anyhow::Result;
use glam::Vec2;
use log::{debug, error, info, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::{AssetLoader, AssetManager, TextureHandle};
use engine::game_loop::GameLoop;
use engine::input::{InputManager, PLAYER_COUNT};
use engine::physics::{ARENA, CANVAS_HEIGHT, CANVAS_WIDTH};
use engine::renderer::{Renderer, SpriteBatch};
use game::characters::BASE_STATS;
use game::duel::{Controls, Duel};

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 600;

fn main() -> Result<()> {
    // Initialize logger
    // Info by default, RUST_LOG takes precedence
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Duel Arena...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Duel Arena")
            .with_inner_size(winit::dpi::LogicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
    ))?;
    let canvas = renderer.camera().size();
    info!("Canvas {}x{}", canvas.x, canvas.y);

    let mut assets = AssetManager::new(AssetLoader::from_env());
    info!(
        "Loading assets from {}",
        assets.loader().base_path().display()
    );
    let mut duel = Duel::load(ARENA, BASE_STATS, |path| {
        load_image(&mut assets, &renderer, path)
    })?;
    info!("{} textures loaded", assets.stats().texture_count);

    let mut input = InputManager::new(PLAYER_COUNT);
    let mut game_loop = GameLoop::new();
    let mut batch = SpriteBatch::new();
    let mut title = String::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset_all();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let steps = game_loop.begin_frame();

                for _ in 0..steps.updates {
                    let controls = [0, 1].map(|player_id| {
                        input
                            .player(player_id)
                            .map_or_else(Controls::idle, Controls::from_input)
                    });
                    duel.tick(&controls, &mut batch);
                    input.update();
                }
                for _ in 0..steps.seconds {
                    duel.tick_second();
                }

                let next_title = duel.title();
                if next_title != title {
                    window.set_title(&next_title);
                    title = next_title;
                }

                if game_loop.frame_count() % FPS_LOG_INTERVAL == 0 {
                    debug!(
                        "FPS: {:.1}, ticks: {}, draw calls: {}",
                        game_loop.fps(),
                        game_loop.update_count(),
                        renderer.draw_call_count()
                    );
                }

                match renderer.render(&batch, &assets) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        warn!("Surface lost, reconfiguring");
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory, shutting down");
                        elwt.exit();
                    }
                    Err(e) => warn!("Frame skipped: {e:?}"),
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Load one image, falling back to an empty size that draws nothing
fn load_image(assets: &mut AssetManager, renderer: &Renderer, path: &str) -> (TextureHandle, Vec2) {
    match assets.load_texture(renderer.device(), renderer.queue(), path) {
        Ok(handle) => {
            let size = assets
                .texture_size(handle)
                .map_or(Vec2::ZERO, |(w, h)| Vec2::new(w as f32, h as f32));
            (handle, size)
        }
        Err(e) => {
            warn!("Could not load {path}: {e}");
            (TextureHandle::for_path(path), Vec2::ZERO)
        }
    }
}
