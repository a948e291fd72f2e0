//! Browser shell: canvas surface, DOM key listeners, requestAnimationFrame
//! loop

use std::cell::RefCell;
use std::rc::Rc;

use glam::IVec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

use super::{Game, Key, PlatformError};
use crate::renderer::RenderState;
use crate::settings::Settings;

const CANVAS_ID: &str = "canvas";

/// Game plus its renderer, shared between the DOM callbacks
struct WebGame {
    game: Game,
    render: RenderState,
    last_time: f64,
}

impl WebGame {
    fn frame(&mut self, time: f64) -> Result<(), PlatformError> {
        let elapsed = if self.last_time > 0.0 {
            (time - self.last_time) / 1000.0
        } else {
            0.0
        };
        self.last_time = time;

        if self.game.update(elapsed) {
            self.game.render(&mut self.render);
            self.render.present()?;
        }
        Ok(())
    }
}

fn map_key(key: &str) -> Key {
    match key {
        "ArrowLeft" => Key::Left,
        "ArrowRight" => Key::Right,
        _ => Key::Other,
    }
}

fn dom_error(what: &str) -> PlatformError {
    PlatformError::Window(what.to_string())
}

/// Attach the game to `<canvas id="canvas">` and start the frame loop
pub async fn run(settings: Settings) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or_else(|| dom_error("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| dom_error("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| dom_error("no canvas"))?
        .dyn_into()
        .map_err(|_| dom_error("not a canvas"))?;

    // Backing store in physical pixels, game drawn in logical ones
    let dpr = window.device_pixel_ratio();
    let width = (settings.width as f64 * dpr) as u32;
    let height = (settings.height as f64 * dpr) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let screen = IVec2::new(settings.width, settings.height);
    let render = RenderState::new(surface, &adapter, width, height, screen).await?;

    let seed = js_sys::Date::now() as u64;
    let game = Rc::new(RefCell::new(WebGame {
        game: Game::new(&settings, seed),
        render,
        last_time: 0.0,
    }));

    setup_input_handlers(&window, game.clone());
    request_animation_frame(game);

    log::info!("Breakout running!");
    Ok(())
}

fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<WebGame>>) {
    // Key down
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = map_key(&event.key());
            if key != Key::Other {
                // Keep arrows from scrolling the page
                event.prevent_default();
            }
            game.borrow_mut().game.keys.key_down(key, event.repeat());
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Key up
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().game.keys.key_up(map_key(&event.key()));
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Window blur: key-ups are never delivered while unfocused
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().game.keys.release_all();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<WebGame>>, time: f64) {
    let result = game.borrow_mut().frame(time);
    if let Err(e) = result {
        log::error!("Stopping: {}", e);
        return;
    }
    if game.borrow().game.is_finished() {
        log::info!("Game over");
        return;
    }
    request_animation_frame(game);
}
