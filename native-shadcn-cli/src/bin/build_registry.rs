//! build-registry - generate `registry.json` from the component catalog
//!
//! Run from the project root. Component sources are read relative to the
//! current directory and the registry is written to `./registry.json`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use native_shadcn_core::{default_catalog, BuilderConfig, RegistryBuilder};

#[derive(Parser, Debug)]
#[clap(
    name = "build-registry",
    about = "Generate registry.json from the native-shadcn component catalog",
    version
)]
struct Cli {}

fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let _cli = Cli::parse();

    initialize_tracing();

    let builder = RegistryBuilder::new(BuilderConfig::default());
    let catalog = default_catalog();

    match builder.run(&catalog) {
        Ok(outcome) => {
            println!(
                "Wrote {} of {} component(s) to {}",
                outcome.registry.components.len(),
                catalog.len(),
                builder.config().output_file.display()
            );
            if !outcome.skipped.is_empty() {
                println!("Skipped: {}", outcome.skipped.join(", "));
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            std::process::exit(1);
        }
    }
}
