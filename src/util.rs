// Shared helpers used across components.

use wasm_bindgen::JsValue;

/// Format a playback position in seconds as `M:SS` (minutes unpadded,
/// seconds always two digits). Non-finite or negative input renders as
/// the fallback `0:00` so a corrupted position never breaks the display.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let m = total / 60;
    let s = total % 60;
    format!("{}:{:02}", m, s)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
