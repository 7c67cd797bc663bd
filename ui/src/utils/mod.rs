/// Show a blocking browser alert. Falls back to the log when there is no
/// window to show it in.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                tracing::warn!("Failed to show alert {message:?}: {e:?}");
            }
        }
        None => tracing::warn!("No window for alert: {message}"),
    }
}
