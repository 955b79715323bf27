/// Initializes the tracing/logging infrastructure for the application.
///
/// - **Environment-based filtering**: controlled via the `RUST_LOG` environment
///   variable; without it only errors are printed
/// - **Compact format** without module paths
/// - **stderr output**, leaving stdout to the interactive menus
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
