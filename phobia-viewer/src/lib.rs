//! Headset-to-eye camera transition demo that stages a spider-in-a-jar scene.
//!
//! The interesting part lives in [`engine::loading`] (progress gate over the
//! asynchronous loads) and [`engine::camera`] (headset locator and the
//! time-driven camera transition). Everything else assembles and decorates
//! the scene around them.

pub mod engine;
pub mod rpc;

pub use engine::core::app_setup::create_app;
pub use engine::core::error::ViewerError;

/// Check the host page, build the app and hand it to the platform loop.
pub fn run() -> Result<(), ViewerError> {
    engine::core::window_config::ensure_host_container()?;

    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }

    Ok(())
}

/// Report a startup failure before any Bevy logging exists.
pub fn report_startup_error(err: &ViewerError) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!(
            "phobia-viewer failed to start: {err}"
        )));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("phobia-viewer failed to start: {err}");
    }
}
