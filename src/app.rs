// Ties the window, renderer, input and world together for one run

use crate::config::GameConfig;
use crate::engine::assets::AssetManager;
use crate::engine::game_loop::GameLoop;
use crate::engine::input::{InputConfig, InputManager};
use crate::engine::renderer::{DrawList, Renderer};
use crate::game::{Flow, GameContext, Sprites, World};
use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use winit::event::WindowEvent;
use winit::window::Window;

const LADYBUG_SHEET: &str = "ladybug.png";
const DICE_SHEET: &str = "dice.png";
const WALL_SHEET: &str = "wall.png";
const BACKGROUND: &str = "map.png";

/// How often the frame rate is logged, in frames
const FPS_LOG_INTERVAL: u64 = 600;

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    input: InputManager,
    world: World,
    game_loop: GameLoop,
    draw_list: DrawList,
}

impl App {
    /// Set up the GPU, load sprites and build the world
    ///
    /// Only GPU setup can fail; missing images are logged and drawn as nothing.
    pub fn new(window: Arc<Window>, config: &GameConfig) -> Result<Self> {
        let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let mut assets = AssetManager::new(&config.asset_dir);
        let sprites = {
            let (device, queue, textures) = renderer.gpu_and_textures();
            Sprites {
                ladybug: assets.load_sheet(device, queue, textures, LADYBUG_SHEET),
                dice: assets.load_sheet(device, queue, textures, DICE_SHEET),
                wall: assets.load_sheet(device, queue, textures, WALL_SHEET),
                background: assets.load_sheet(device, queue, textures, BACKGROUND),
            }
        };

        let stats = assets.stats();
        info!(
            "Assets from {}: {} loaded, {} failed",
            assets.loader().base_path().display(),
            stats.loaded,
            stats.failed
        );

        let game_loop = GameLoop::new(config.target_fps);
        info!(
            "Targeting {} FPS ({:?} per frame)",
            config.target_fps,
            game_loop.frame_budget()
        );

        let ctx = GameContext::new(config.screen_size(), config.collision);
        let world = World::new(config, sprites, ctx);

        Ok(Self {
            window,
            renderer,
            input: InputManager::new(InputConfig::with_arrow_keys(config.arrow_keys)),
            world,
            game_loop,
            draw_list: DrawList::new(),
        })
    }

    /// Feed a window event to input or the renderer
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.process_keyboard_event(event);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(*button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_moved(position.x, position.y);
            }
            WindowEvent::Resized(size) => {
                info!("Window resized to {}x{}", size.width, size.height);
                self.renderer.resize(*size);
            }
            WindowEvent::Focused(false) => {
                self.input.reset();
            }
            _ => {}
        }
    }

    /// Run one tick: update, render, present, then sleep out the frame budget
    pub fn frame(&mut self) -> Flow {
        let dt_ms = self.game_loop.begin_frame();

        let flow = self.world.tick(dt_ms, self.input.state());
        self.input.end_frame();

        self.draw_list.clear();
        self.world.draw(&mut self.draw_list);
        if let Err(e) = self.renderer.render(&self.draw_list) {
            warn!("Frame not presented: {}", e);
        }

        let slept = self.game_loop.end_frame();
        debug!("Frame {:.2} ms, slept {:?}", dt_ms, slept);

        if self.game_loop.frame_count() % FPS_LOG_INTERVAL == 0 {
            info!(
                "FPS: {:.1} ({:.0?} running) | {}",
                self.game_loop.fps(),
                self.game_loop.elapsed(),
                self.world.status()
            );
        }

        flow
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}
