//! native-shadcn - add registry components to a React Native project
//!
//! `native-shadcn add <component>` fetches the published registry, installs
//! the component's dependencies with the project's package manager and copies
//! its source files into `src/components/ui/`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use native_shadcn_core::{ComponentInstaller, InstallReport, InstallerConfig};

#[derive(Parser, Debug)]
#[clap(
    name = "native-shadcn",
    about = "Copy native-shadcn components into your project",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a component to the current project
    Add {
        /// Component name as listed in the registry (e.g. "chart")
        component: String,
    },
}

/// Initialize tracing
///
/// Logs go to stderr at `info` unless `RUST_LOG` says otherwise; stdout is
/// reserved for the command's own output.
fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    initialize_tracing();

    let code = run(cli.command, InstallerConfig::default()).await;
    std::process::exit(code);
}

/// Run a command, reporting any failure on stderr
///
/// Returns the process exit code.
async fn run(command: Command, config: InstallerConfig) -> i32 {
    let result = match command {
        Command::Add { component } => add_command(&component, config).await,
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("Error: {e:#}");
            1
        }
    }
}

async fn add_command(name: &str, config: InstallerConfig) -> Result<()> {
    let installer = ComponentInstaller::new(config)?;

    println!("Adding {name}...");
    let report = installer.add(name).await?;

    print_report(&report, installer.config());
    Ok(())
}

fn print_report(report: &InstallReport, config: &InstallerConfig) {
    if let Some(e) = &report.dependency_error {
        println!();
        println!("WARNING: Dependency installation failed: {e}");
        println!("Please install them manually:");
        println!(
            "  {}",
            config.package_manager.display_with(&report.dependencies)
        );
    }

    println!();
    println!("Successfully added {}!", report.component);
    println!("Location: {}/", report.target_dir.display());
    for path in &report.files_written {
        if let Some(file_name) = path.file_name() {
            println!("  {}", file_name.to_string_lossy());
        }
    }
}
