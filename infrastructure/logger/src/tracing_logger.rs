use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] adapter that forwards use-case messages to `tracing`
/// under the `analysis` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "analysis", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "analysis", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "analysis", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "analysis", "{}", message);
    }
}
