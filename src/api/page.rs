//! Control page rendering.
//!
//! The page is a single static HTML document with two script constants
//! filled in at startup: the base URL its buttons POST to and the device
//! they target. Rendering happens once; the result is served verbatim.

const TEMPLATE: &str = include_str!("control_page.html");
const API_URL_SLOT: &str = "__RELAY_API_URL__";
const DEVICE_ID_SLOT: &str = "__RELAY_DEVICE_ID__";

/// Renders the control page for `api_base_url` and `device_id`.
///
/// An empty base URL makes the page call the relay on its own origin.
/// A trailing `/` on the base URL is dropped so paths join cleanly.
#[must_use]
pub fn render_control_page(api_base_url: &str, device_id: &str) -> String {
    let base = api_base_url.trim_end_matches('/');
    TEMPLATE
        .replace(API_URL_SLOT, &js_string_literal(base))
        .replace(DEVICE_ID_SLOT, &js_string_literal(device_id))
}

/// Encodes `value` as a JavaScript string literal safe to embed in a
/// `<script>` element.
fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_both_slots() {
        let html = render_control_page("https://relay.example.com/", "ESP8266_001");
        assert!(html.contains(r#"const API_URL = "https://relay.example.com";"#));
        assert!(html.contains(r#"const DEVICE_ID = "ESP8266_001";"#));
        assert!(!html.contains(API_URL_SLOT));
        assert!(!html.contains(DEVICE_ID_SLOT));
    }

    #[test]
    fn empty_base_url_means_same_origin() {
        let html = render_control_page("", "dev");
        assert!(html.contains(r#"const API_URL = "";"#));
    }

    #[test]
    fn lists_every_led_command() {
        let html = render_control_page("", "dev");
        for cmd in ["led1_on", "led2_on", "both_on", "led1_off", "led2_off", "both_off"] {
            assert!(html.contains(&format!("sendCommand('{cmd}')")), "missing {cmd}");
        }
    }

    #[test]
    fn script_breakout_is_escaped() {
        let html = render_control_page("", "</script><script>alert(1)");
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r#""<\/script><script>alert(1)""#));
    }
}
