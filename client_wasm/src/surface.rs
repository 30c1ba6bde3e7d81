//! Rendering surface lookup and sizing

/// Backing-store size for a canvas shown at `css_width` x `css_height`.
/// Device pixel ratios below 1 (or missing) are treated as 1.
pub fn scaled_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() {
        device_pixel_ratio.max(1.0)
    } else {
        1.0
    };
    (
        (css_width * dpr).round().max(0.0) as u32,
        (css_height * dpr).round().max(0.0) as u32,
    )
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use game_core::GameError;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    /// Find the game canvas; a missing canvas is fatal to starting a match
    pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, GameError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| GameError::MissingSurface { id: id.to_string() })
    }

    /// Resize the canvas backing store for HiDPI screens and return its size
    pub fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window()
            .map(|window| window.device_pixel_ratio())
            .unwrap_or(1.0);
        let css_width = match canvas.client_width() {
            0 => canvas.width() as f64,
            w => w as f64,
        };
        let css_height = match canvas.client_height() {
            0 => canvas.height() as f64,
            h => h as f64,
        };
        let (width, height) = super::scaled_size(css_width, css_height, dpr);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }
}
