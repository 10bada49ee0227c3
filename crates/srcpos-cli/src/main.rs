mod commands;

use clap::{Parser, Subcommand};
use srcpos::ByteSpan;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srcpos")]
#[command(about = "Resolve and combine source ranges", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to the nearest .srcposrc)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// What columns count, overriding the config file
    #[arg(long, value_enum, global = true)]
    columns: Option<Columns>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a byte span of a file into a range
    Locate {
        /// Source file
        file: PathBuf,

        /// Byte span, written START..END
        span: ByteSpan,
    },

    /// Intersect and enclose two byte spans of a file
    Compare {
        /// Source file
        file: PathBuf,

        /// First span (the left operand), written START..END
        a: ByteSpan,

        /// Second span, written START..END
        b: ByteSpan,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Columns {
    Bytes,
    Chars,
    Utf16,
}

impl From<Columns> for srcpos::ColumnUnit {
    fn from(columns: Columns) -> Self {
        match columns {
            Columns::Bytes => Self::Bytes,
            Columns::Chars => Self::Chars,
            Columns::Utf16 => Self::Utf16,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Output goes to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = commands::Settings::load(cli.config, cli.columns.map(Into::into))?;

    match cli.command {
        Commands::Locate { file, span } => {
            commands::locate::run(&settings, &file, span, cli.format)?;
        }
        Commands::Compare { file, a, b } => {
            commands::compare::run(&settings, &file, a, b, cli.format)?;
        }
    }

    Ok(())
}
