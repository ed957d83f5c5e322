use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shopcarts", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shopcarts", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shopcarts", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shopcarts", "{}", message);
    }
}
