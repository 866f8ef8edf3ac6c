//! # Window Builder
//!
//! Creates the game window. On the web the window is bound to the page's existing
//! canvas element instead of opening a new one.

use std::sync::Arc;

#[cfg(target_family = "wasm")]
use wasm_bindgen::UnwrapThrowExt;
use winit::{dpi::LogicalSize, event_loop::ActiveEventLoop, window::Window};

use crate::config::ViewConfig;

#[cfg(target_family = "wasm")]
use crate::CANVAS_ID;

pub const WINDOW_TITLE: &str = "Blockenspiel";

/// Creates the window sized to the configured viewport.
///
/// # Arguments
/// * `event_loop` - The active event loop used to create the window
/// * `view` - Viewport size used as the initial inner size
///
/// # Returns
/// The shared window handle
pub fn create_window(event_loop: &ActiveEventLoop, view: &ViewConfig) -> Arc<Window> {
    #[allow(unused_mut)]
    let mut window_attrs = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(view.viewport_width, view.viewport_height));

    #[cfg(target_family = "wasm")]
    {
        use web_sys::wasm_bindgen::JsCast;
        use winit::platform::web::WindowAttributesExtWebSys;

        let window = web_sys::window().unwrap_throw();
        let document = window.document().unwrap_throw();
        let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
        let html_canvas_element = canvas.unchecked_into();
        window_attrs = window_attrs.with_canvas(Some(html_canvas_element));
    }

    Arc::new(
        event_loop
            .create_window(window_attrs)
            .expect("Failed to create window"),
    )
}
