pub mod config;
pub mod report;
pub mod seed;

// Re-export main handler functions
pub use config::handle_config;
pub use report::{handle_generate, handle_summary, parse_now};
pub use seed::handle_seed;

use tracing_subscriber::EnvFilter;
use crate::config::Config;

/// RUST_LOG가 있으면 그것을, 없으면 설정의 로그 레벨을 쓴다. 로그는 stderr로 보낸다.
pub fn init_logging(config: &Config, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
