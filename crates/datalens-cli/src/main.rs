use tracing_subscriber::EnvFilter;

mod command;
mod model;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    init_tracing();
    command::run()
}

/// Log to stderr so JSON written to stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
