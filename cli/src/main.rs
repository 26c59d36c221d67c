//! wordh5 CLI - Word agreement to HTML5 page converter

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use wordh5::render::{footer_links, render_footer_links, FsDirectory};
use wordh5::{ContentItem, ConvertOptions, Converter, RenderOptions};

#[derive(Parser)]
#[command(name = "wordh5")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Word agreement documents to styled HTML5 pages", long_about = None)]
struct Cli {
    /// Input .docx file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .docx file to an HTML page next to it
    Convert {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Footer copyright line
        #[arg(long, env = "WORDH5_COPYRIGHT")]
        copyright: Option<String>,

        /// Render without writing the page
        #[arg(long)]
        dry_run: bool,
    },

    /// Show extracted structure without writing anything
    Inspect {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print items and metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the footer links generated for a directory
    Footer {
        /// Directory holding generated pages
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            copyright,
            dry_run,
        }) => cmd_convert(&input, copyright, dry_run),
        Some(Commands::Inspect { input, json }) => cmd_inspect(&input, json),
        Some(Commands::Footer { dir }) => cmd_footer(&dir),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, None, false)
            } else {
                println!("{}", "Usage: wordh5 <FILE>".yellow());
                println!("       wordh5 --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        report_error(e.as_ref());
        std::process::exit(1);
    }
}

/// Print an error and its source chain.
fn report_error(err: &dyn std::error::Error) {
    eprintln!("{}: {}", "Error".red().bold(), err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}

fn cmd_convert(
    input: &Path,
    copyright: Option<String>,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut render_options = RenderOptions::new();
    if let Some(copyright) = copyright {
        render_options = render_options.with_copyright(copyright);
    }
    let options = ConvertOptions::new()
        .with_render_options(render_options)
        .with_dry_run(dry_run);

    log::debug!("Converting {} (dry run: {})", input.display(), dry_run);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message("Reading Word document...");

    let result = Converter::new(options).convert(input);
    pb.finish_and_clear();
    let result = result?;

    println!(
        "{} extracted {} paragraphs",
        "[ok]".green().bold(),
        result.item_count
    );
    println!("{} {}", "Title:".bold(), result.meta.title);
    println!(
        "{} {}",
        "Effective date:".bold(),
        result
            .meta
            .effective_date
            .as_deref()
            .unwrap_or("(none, using current month)")
    );

    let separator = "=".repeat(60);
    println!("\n{}", separator.dimmed());
    if result.written {
        println!("{}", "HTML page generated".green().bold());
    } else {
        println!("{}", "Dry run, nothing written".yellow().bold());
    }
    println!("{}", separator.dimmed());
    println!("{} {}", "Word file:".bold(), input.display());

    let absolute = std::fs::canonicalize(&result.output_path)
        .unwrap_or_else(|_| result.output_path.clone());
    println!("{} {}", "HTML file:".bold(), absolute.display());
    println!("{}\n", separator.dimmed());
    if result.written {
        println!(
            "Open in a browser: file:///{}",
            absolute.display().to_string().trim_start_matches('/')
        );
    }

    Ok(())
}

fn cmd_inspect(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let extraction = wordh5::convert::extract_normalized(input)?;

    if json {
        println!("{}", extraction.to_json(true)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), extraction.meta.title);
    if let Some(ref date) = extraction.meta.effective_date {
        println!("{}: {}", "Effective date".bold(), date);
    }
    let counts = extraction.heading_counts();
    println!("{}: {}", "Paragraphs".bold(), counts[0]);
    for (level, count) in counts.iter().enumerate().skip(1) {
        if *count > 0 {
            println!("{}: {}", format!("H{} headings", level).bold(), count);
        }
    }
    println!("{}: {}", "Tables".bold(), extraction.table_count());

    println!();
    println!("{}", "Content".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for item in &extraction.items {
        match item {
            ContentItem::Paragraph {
                plain_text,
                heading_level: 0,
                ..
            } => println!("   {}", plain_text.trim().dimmed()),
            ContentItem::Paragraph {
                plain_text,
                heading_level,
                ..
            } => println!("{} {}", format!("h{}", heading_level).yellow(), plain_text.trim()),
            ContentItem::Table { .. } => println!("{}", "[table]".blue()),
        }
    }

    Ok(())
}

fn cmd_footer(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let links = footer_links(&FsDirectory, dir)?;
    if links.is_empty() {
        println!("{}", "No generated pages found".yellow());
        return Ok(());
    }
    println!("{}", "<nav class=\"footer-links\">".dimmed());
    print!("{}", render_footer_links(&links));
    println!("{}", "</nav>".dimmed());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "wordh5".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word agreement to HTML5 page converter");
}
