use serde::Serialize;

/// Runs `log_action` with a pretty-printed JSON rendering of `value`, but only
/// when DEBUG is enabled so the serialization cost is skipped otherwise.
pub(crate) fn with_pretty_json_debug<T, F>(value: &T, log_action: F)
where
    T: Serialize,
    F: FnOnce(&str),
{
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    match serde_json::to_string_pretty(value) {
        Ok(pretty) => log_action(&pretty),
        Err(error) => log_action(&format!("<pretty serialize failed: {error}>")),
    }
}
