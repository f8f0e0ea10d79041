//! Pointer and keyboard input mapping

/// Keys that restart a finished game
pub const RESTART_KEYS: [&str; 2] = ["r", "R"];

pub fn is_restart_key(key: &str) -> bool {
    RESTART_KEYS.contains(&key)
}

/// Convert a pointer's client Y into playfield units.
///
/// `rect_top`/`rect_height` are the canvas bounding box in CSS pixels; the
/// canvas may be displayed at a different size than the playfield.
pub fn pointer_to_playfield(
    client_y: f32,
    rect_top: f32,
    rect_height: f32,
    playfield_height: f32,
) -> f32 {
    let local = client_y - rect_top;
    if rect_height > 0.0 {
        local * playfield_height / rect_height
    } else {
        local
    }
}
