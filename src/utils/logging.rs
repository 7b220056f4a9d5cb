use env_logger::Env;

/// Logs go to stderr; quiet unless `RUST_LOG` asks for more.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
