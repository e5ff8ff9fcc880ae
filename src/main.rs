use std::path::PathBuf;

use clap::Parser;
use setup_ts::Options;

#[derive(Parser)]
#[command(name = "setup-ts")]
#[command(version)]
#[command(
    about = "Convert a datletik template project to TypeScript",
    long_about = None
)]
struct Cli {
    /// Project root to convert
    #[arg(default_value = ".")]
    root: PathBuf,
    /// Remove the template's scaffolding scripts after converting
    #[arg(long)]
    remove_scripts: bool,
}

fn main() {
    let cli = Cli::parse();
    let options = Options { remove_scripts: cli.remove_scripts };

    match setup_ts::convert(&cli.root, options) {
        Ok(report) => {
            println!("Converted to TypeScript.");
            if report.dependency_cache_present {
                println!("\nYou will need to re-run your dependency manager to get started.");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
