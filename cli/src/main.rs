//! mdfluent CLI - Markdown table generation tool
//!
//! A command-line tool for turning JSON table descriptions into Markdown.

use clap::{Parser, Subcommand};
use colored::*;
use mdfluent::{BuilderOptions, LineEnding, TableData};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Markdown table generation from JSON descriptions
#[derive(Parser)]
#[command(
    name = "mdfluent",
    author = "iyulab",
    version,
    about = "Generate Markdown tables from JSON",
    long_about = "mdfluent - Fluent Markdown generation.\n\n\
                  Renders JSON table descriptions ({\"headers\": [...], \"rows\": [[...]]})\n\
                  as Markdown pipe tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON table description as a Markdown table
    Table {
        /// Input JSON file ("-" for stdin)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use CRLF line endings
        #[arg(long)]
        crlf: bool,

        /// Fail when a row's cell count differs from the header count
        #[arg(long)]
        strict: bool,

        /// Render through the nested builders instead of the flat renderer
        #[arg(long)]
        nested: bool,
    },

    /// Show table statistics and structural problems
    Info {
        /// Input JSON file ("-" for stdin)
        input: PathBuf,
    },

    /// Print an example JSON table description
    Init {
        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Table {
            input,
            output,
            crlf,
            strict,
            nested,
        } => {
            let data = read_table(&input)?;

            let line_ending = if crlf { LineEnding::CrLf } else { LineEnding::Lf };
            let options = BuilderOptions::new()
                .with_line_ending(line_ending)
                .with_strict(strict);

            let markdown = if nested {
                data.to_markdown_nested(options)?
            } else {
                data.to_markdown(options)?
            };

            write_output(output.as_ref(), &markdown)?;

            if let Some(path) = output {
                println!(
                    "{} Rendered {} rows to {}",
                    "✓".green().bold(),
                    data.rows.len(),
                    path.display()
                );
            }
        }

        Commands::Info { input } => {
            let data = read_table(&input)?;

            println!("{}", "Table Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "Columns".bold(), data.column_count());
            println!("{}: {}", "Rows".bold(), data.rows.len());

            let violations = data.violations();
            if violations.is_empty() {
                println!("{} All rows match the header count", "✓".green().bold());
            } else {
                println!("\n{}", "Problems".yellow().bold());
                println!("{}", "─".repeat(40));
                for violation in violations {
                    println!("{} {}", "!".yellow().bold(), violation);
                }
            }
        }

        Commands::Init { compact } => {
            let example = TableData::new(["Name", "Link"])
                .with_row(["Rust", "[rust-lang.org](https://www.rust-lang.org)"])
                .with_row(["Go", "**[go.dev](https://go.dev)**"]);

            let json = if compact {
                serde_json::to_string(&example)?
            } else {
                serde_json::to_string_pretty(&example)?
            };
            println!("{}", json);
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "mdfluent".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Fluent Markdown generation with nested builders");
    println!();
    println!("Repository: https://github.com/iyulab/mdfluent");
}

fn read_table(path: &Path) -> Result<TableData, Box<dyn std::error::Error>> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(TableData::from_json(&json)?)
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write!(handle, "{}", content)?;
            handle.flush()?;
        }
    }
    Ok(())
}
