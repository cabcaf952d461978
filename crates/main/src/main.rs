use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use triage_pdf::delivery::{self, DirectoryDelivery};
use triage_pdf::{demos, DocumentRequest, PaperSize, PdfBuilder};

/// Renders triage reports as single-page PDF files.
///
/// Set `RUST_LOG=debug` to see per-document rendering details.
#[derive(Parser)]
#[command(author, version, about = "Single-page PDF reports for occupational triage")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document request (`{"title": .., "sections": [..]}`).
    Render {
        /// Path to the JSON request.
        #[arg(short, long)]
        input: PathBuf,

        /// Destination file.
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, value_enum, default_value_t = Paper::Letter)]
        paper: Paper,

        /// Reload the written file with a full PDF reader and print its lines.
        #[arg(long)]
        verify: bool,
    },

    /// Render the sample occupational triage report.
    Occupational {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Render the sample psychosocial triage report.
    Psychosocial {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Render every sample report under `target/demo_reports`.
    #[command(name = "run-all", aliases = ["run_all", "all"])]
    RunAll,
}

#[derive(Clone, Copy, ValueEnum)]
enum Paper {
    Letter,
    A4,
}

impl From<Paper> for PaperSize {
    fn from(paper: Paper) -> Self {
        match paper {
            Paper::Letter => PaperSize::Letter,
            Paper::A4 => PaperSize::A4,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = try_main() {
        eprintln!("Error: {err:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            paper,
            verify,
        } => render(&input, &output, paper.into(), verify),
        Commands::Occupational { out_dir } => {
            let path = demos::run_occupational(&out_dir)
                .context("Failed to render occupational report")?;
            println!("Generated {}", path.display());
            Ok(())
        }
        Commands::Psychosocial { out_dir } => {
            let path = demos::run_psychosocial(&out_dir)
                .context("Failed to render psychosocial report")?;
            println!("Generated {}", path.display());
            Ok(())
        }
        Commands::RunAll => {
            let written = demos::run_all_demos(Path::new(demos::run_all::OUTPUT_DIR))
                .context("Failed to render demo reports")?;
            for path in written {
                println!("Generated {}", path.display());
            }
            println!("All renders completed successfully.");
            Ok(())
        }
    }
}

fn render(input: &Path, output: &Path, paper: PaperSize, verify: bool) -> Result<()> {
    let request = DocumentRequest::from_path(input)
        .with_context(|| format!("Failed to load request {}", input.display()))?;

    let filename = output
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Output path {} has no file name", output.display()))?;
    let directory = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let builder = PdfBuilder::from_request(request).with_paper_size(paper);
    let path = delivery::download(&DirectoryDelivery::new(directory), filename, &builder)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Generated {}", path.display());

    if verify {
        print_verified_lines(&path)?;
    }
    Ok(())
}

#[cfg(feature = "verify")]
fn print_verified_lines(path: &Path) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let lines = triage_pdf::verify::extract_lines(&bytes)
        .with_context(|| format!("{} could not be reloaded", path.display()))?;
    log::debug!("reloaded {} line(s) from {}", lines.len(), path.display());
    for line in lines {
        println!("  | {line}");
    }
    Ok(())
}

#[cfg(not(feature = "verify"))]
fn print_verified_lines(_path: &Path) -> Result<()> {
    anyhow::bail!("Enable the `verify` feature to reload rendered output")
}
