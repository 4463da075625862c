//! Standalone orbit viewer for the spider model.

mod engine;

use engine::app::{create_app, ensure_host_container};
use engine::error::ViewerError;

fn run() -> Result<(), ViewerError> {
    ensure_host_container()?;

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

fn main() {
    if let Err(err) = run() {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!(
                "spider-viewer failed to start: {err}"
            )));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("spider-viewer failed to start: {err}");
        }
    }
}
