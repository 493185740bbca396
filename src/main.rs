// src/main.rs

use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics to stderr; the report itself owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let params = match gdwatch::cli::parse() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = gdwatch::runner::run(&params) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
