//! scriptman CLI - build-time man page generation for helper scripts.
//!
//! Binary name: `scriptman`

use std::process;

mod cli;

fn main() {
    // Diagnostics go to stderr; stdout is reserved for the JSON mapping.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();
    if let Err(e) = cli::run(&matches) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {e:#}");
        }
        #[allow(clippy::exit)]
        process::exit(1);
    }
}
