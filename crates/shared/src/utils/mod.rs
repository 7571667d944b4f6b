mod logs;
mod metrics;
mod otel;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, metrics_handler, track_metrics};
pub use self::otel::Telemetry;
pub use self::shutdown::shutdown_signal;
