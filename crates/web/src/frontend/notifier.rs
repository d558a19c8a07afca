use shopfront_loader::FailureNotifier;

/// Blocking browser alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl FailureNotifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}
