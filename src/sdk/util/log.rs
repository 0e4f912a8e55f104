use env_logger::{Builder, Env, Target};

/// Used when `RUST_LOG` is unset. reqwest is chatty at info.
pub const DEFAULT_FILTER: &str = "info,reqwest=warn";

/// Installs env_logger on stderr, keeping stdout for the chat transcript.
/// Calling it twice is harmless.
pub fn init_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .try_init();
}
