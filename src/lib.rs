/// Job Scraper - browser client for extracting and saving job postings
/// Built with Rust + WASM + Yew

pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod job_data;
pub mod render;
pub mod session;
pub mod state;
pub mod timer;
pub mod ui;

#[cfg(test)]
mod testing;

use config::ClientConfig;
use wasm_bindgen::prelude::*;

// Set up panic hook and logging before anything renders
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = ClientConfig::from_env()
        .map(|config| config.log_level)
        .unwrap_or(config::DEFAULT_LOG_LEVEL);
    wasm_logger::init(wasm_logger::Config::new(level));
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    let config = ClientConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    log::info!("Using job scrape API at {}", config.api_base_url);

    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { config }).render();
    Ok(())
}
