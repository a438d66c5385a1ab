use tracing::Level;

const MAX_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::WARN
};

/// Installs the stderr subscriber. A second call finds a global subscriber
/// already set; that error carries nothing to act on and is dropped.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(MAX_LEVEL)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
