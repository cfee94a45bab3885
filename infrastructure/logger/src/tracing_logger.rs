use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Routes domain-layer log calls into the `tracing` subscriber set up by
/// the process entry point.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "grocery_api", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "grocery_api", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "grocery_api", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "grocery_api", "{}", message);
    }
}
