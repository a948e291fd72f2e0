//! Native shell: winit window, wgpu surface, frame-paced event loop

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::IVec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::{Game, Key, PlatformError};
use crate::renderer::RenderState;
use crate::settings::Settings;

const WINDOW_TITLE: &str = "Breakout";

/// Window and GPU state, created on the first `resumed`
struct Gfx {
    window: Arc<Window>,
    render: RenderState,
}

struct App {
    settings: Settings,
    game: Game,
    gfx: Option<Gfx>,
    last_time: Instant,
    /// First fatal error; stops the loop
    error: Option<PlatformError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let game = Game::new(&settings, clock_seed());
        Self {
            settings,
            game,
            gfx: None,
            last_time: Instant::now(),
            error: None,
        }
    }

    fn init_gfx(&self, event_loop: &ActiveEventLoop) -> Result<Gfx, PlatformError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                self.settings.width as f64,
                self.settings.height as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        log::info!("Window size: {}x{}", size.width, size.height);
        let screen = IVec2::new(self.settings.width, self.settings.height);
        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            screen,
        ))?;

        Ok(Gfx { window, render })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let key = match event.physical_key {
            PhysicalKey::Code(KeyCode::ArrowLeft) => Key::Left,
            PhysicalKey::Code(KeyCode::ArrowRight) => Key::Right,
            _ => Key::Other,
        };
        match event.state {
            ElementState::Pressed => self.game.keys.key_down(key, event.repeat),
            ElementState::Released => self.game.keys.key_up(key),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        self.game.render(&mut gfx.render);
        if let Err(e) = gfx.render.present() {
            self.fail(event_loop, e.into());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.init_gfx(event_loop) {
            Ok(gfx) => {
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
                self.last_time = Instant::now();
                log::info!("Breakout running!");
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.game.keys.request_quit(),
            WindowEvent::Focused(false) => self.game.keys.release_all(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render.resize(size.width, size.height);
                    gfx.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.error.is_some() {
            return;
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_time).as_secs_f64();
        self.last_time = now;

        if self.game.update(elapsed) {
            if let Some(gfx) = &self.gfx {
                gfx.window.request_redraw();
            }
        }

        if self.game.is_finished() {
            event_loop.exit();
        } else if self.game.is_paused() {
            // Nothing moves until a key press wakes us
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            let wait = Duration::from_secs_f64(self.game.until_next_frame());
            event_loop.set_control_flow(ControlFlow::WaitUntil(now + wait));
        }
    }
}

/// Seed from the wall clock when the settings don't pin one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Open the window and run until the player quits
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => {
            log::info!("Final score: {}", app.game.state.score);
            Ok(())
        }
    }
}
