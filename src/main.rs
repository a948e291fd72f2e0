//! Breakout entry point
//!
//! Sets up logging and settings, then hands off to the platform shell.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Breakout starting...");

    let settings = breakout::Settings::load();
    if let Err(e) = breakout::platform::web::run(settings).await {
        log::error!("Fatal: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout (native) starting...");

    let settings = breakout::Settings::load();
    if let Err(e) = breakout::platform::native::run(settings) {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
