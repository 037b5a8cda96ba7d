//! EpiView - compartment-model epidemic simulation viewer

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use epiview_app::EpiViewApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Log to stdout on native
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("EpiView"),
        ..Default::default()
    };

    eframe::run_native(
        "EpiView",
        native_options,
        Box::new(|cc| Ok(Box::new(EpiViewApp::new(cc)))),
    )
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Redirect panic messages to console.error
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        eframe::WebRunner::new()
            .start(
                "epiview-canvas",
                web_options,
                Box::new(|cc| Ok(Box::new(EpiViewApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });

    Ok(())
}
