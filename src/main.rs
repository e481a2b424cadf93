use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use reactscope::batch::{run_batch, BatchConfig, BatchOptions};
use reactscope::logger::LogLevel;
use reactscope::parser::ProjectRequest;
use reactscope::scanner::{CommandScanner, Scanner};

#[derive(Parser)]
#[command(name = "reactscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Batch React component usage analyzer grouping scan results by library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan one or more projects and group component usages by library
    Scan {
        /// Path to a JSON batch config (projects, log and output settings)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project root for a single ad-hoc scan (ignored with --config)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Project name for a single ad-hoc scan
        #[arg(long)]
        name: Option<String>,

        /// Source directory to crawl (defaults to {root}/src)
        #[arg(long)]
        src: Option<PathBuf>,

        /// Minimum log severity
        #[arg(long, default_value = "info")]
        log_level: LogLevel,

        /// Append logs to this file instead of stdout
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Write the batch report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// External scanner executable to invoke per project
        #[arg(long, default_value = "react-scanner")]
        scanner: String,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Scan {
            config,
            root,
            name,
            src,
            log_level,
            log_file,
            output,
            scanner,
        }) => {
            let (requests, options) = match config {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
                    let config: BatchConfig = serde_json::from_str(&content)
                        .with_context(|| format!("Invalid config '{}'", path.display()))?;
                    config.into_parts()
                }
                None => {
                    let (Some(root), Some(name)) = (root, name) else {
                        bail!("Either --config or both --root and --name are required");
                    };
                    let mut request = ProjectRequest::from_root(root, name);
                    if let Some(src) = src {
                        request = request.with_src_path(src);
                    }
                    let options = BatchOptions {
                        log_level,
                        log_destination: log_file,
                        output_destination: output,
                    };
                    (vec![request], options)
                }
            };

            let print_to_stdout = options.output_destination.is_none();
            let scanner: Arc<dyn Scanner> = Arc::new(CommandScanner::new(scanner));
            let reports = run_batch(scanner, requests, &options).await?;

            if print_to_stdout {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
        Some(Commands::Version) => {
            println!("reactscope v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("ReactScope - React component usage analyzer");
            println!("Run 'reactscope scan --config batch.json' to scan projects");
            println!("Run 'reactscope --help' for more information");
        }
    }

    Ok(())
}
