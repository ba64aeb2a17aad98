/// Install the global tracing subscriber, honoring RUST_LOG (default `info`).
pub fn init_tracing_from_env() {
    // Bridge log:: macros into tracing so library modules can keep using them
    let _ = tracing_log::LogTracer::init();
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
