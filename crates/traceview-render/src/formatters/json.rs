/// Structural dump of a payload value, 2-space indented.
///
/// Falls back to the compact form if pretty serialization fails, so one
/// awkward payload never takes down a whole timeline render.
pub fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
