use tracing_subscriber::{EnvFilter, fmt};

pub fn filter_for_verbosity(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

pub fn init(verbose: u8) {
    let _ = fmt()
        .with_env_filter(filter_for_verbosity(verbose))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
