//! Keyboard and pointer input mapping

/// `KeyboardEvent.code` that toggles pause
pub const PAUSE_KEY_CODE: &str = "Space";

/// Whether a key press toggles pause
pub fn is_pause_key(code: &str) -> bool {
    code == PAUSE_KEY_CODE
}

/// Pointer position relative to the top of the drawing surface
pub fn pointer_surface_y(client_y: i32, surface_top: f64) -> f32 {
    (f64::from(client_y) - surface_top) as f32
}
