#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Procedural galaxy demos: a particle-field generator plus the WebGL2 glue
//! that renders it in the browser. The core modules are target-independent
//! and tested on the host; everything browser-facing compiles only for
//! wasm32.

pub mod color;
pub mod galaxy;
pub mod math;
pub mod params;
pub mod rng;
pub mod scene;
pub mod scroll;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod cube;
    mod gl;
    mod panel;
    mod render;
    mod scroll_demo;
    mod shaders;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("c")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        // The page picks a demo via <canvas data-demo="...">.
        let demo = canvas
            .get_attribute("data-demo")
            .unwrap_or_else(|| "galaxy".to_string());
        match demo.as_str() {
            "galaxy" => render::start(canvas, render::Variant::Static)?,
            "galaxy-animated" => render::start(canvas, render::Variant::Animated)?,
            "scroll" => scroll_demo::start(canvas)?,
            "cube" => cube::start(canvas)?,
            other => return Err(JsValue::from_str(&format!("unknown demo: {other}"))),
        }
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
