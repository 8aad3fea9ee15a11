//! unresume CLI - résumé structure extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unresume::{
    open_source, ExtractionStats, JsonFormat, LineSource, ParseOptions, ResumeDocument,
    ResumeParser,
};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract résumé structure to JSON and text", long_about = None)]
struct Cli {
    /// Input résumé file (PDF or text)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    parse: ParseArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every parsing command.
#[derive(Args, Clone, Default)]
struct ParseArgs {
    /// Lines after the name scanned for contact fields
    #[arg(long, global = true, env = "UNRESUME_CONTACT_LINES")]
    contact_lines: Option<usize>,

    /// Keep fallback entry bullets out of the catch-all section
    #[arg(long, global = true)]
    dedupe_fallback: bool,

    /// Let a date line fill the open experience entry's duration
    #[arg(long, global = true)]
    merge_date_lines: bool,

    /// Skip text normalization
    #[arg(long, global = true)]
    raw: bool,
}

impl ParseArgs {
    fn options(&self) -> ParseOptions {
        let mut options = ParseOptions::new();
        if let Some(lines) = self.contact_lines {
            options = options.with_contact_lines(lines);
        }
        if self.dedupe_fallback {
            options = options.dedupe_fallback();
        }
        if self.merge_date_lines {
            options = options.merge_date_lines();
        }
        if self.raw {
            options = options.without_normalization();
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a résumé to JSON
    Json {
        /// Input résumé file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert a résumé to a plain-text outline
    Text {
        /// Input résumé file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show what was extracted from a résumé
    Info {
        /// Input résumé file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show every page line with its classification cues
    Lines {
        /// Input résumé file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert many résumés to JSON in parallel
    Batch {
        /// Input résumé files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.parse.options();

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, options),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), options),
        Some(Commands::Info { input }) => cmd_info(&input, options),
        Some(Commands::Lines { input }) => cmd_lines(&input, options),
        Some(Commands::Batch {
            inputs,
            output,
            compact,
        }) => cmd_batch(&inputs, output.as_deref(), compact, options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print JSON if input is provided
            if let Some(input) = cli.input {
                cmd_json(&input, None, false, options)
            } else {
                println!("{}", "Usage: unresume <FILE>".yellow());
                println!("       unresume --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Parse one file, reporting unreadable input as an error.
fn parse(input: &Path, options: ParseOptions) -> Result<ResumeDocument, Box<dyn std::error::Error>> {
    let source = open_source(input)?;
    let parser = ResumeParser::with_options(options)?;
    Ok(parser.try_parse_source(&source)?)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse(input, options)?;
    let json = unresume::render::to_json(&doc, json_format(compact))?;
    write_or_print(output, &json)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse(input, options)?;
    let text = unresume::render::to_text(&doc);
    write_or_print(output, &text)
}

fn cmd_info(input: &Path, options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let format = unresume::detect_format_from_path(input)?;
    let doc = parse(input, options)?;
    let stats = ExtractionStats::from_document(&doc);

    println!("{}", "Résumé Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Name".bold(), doc.personal_info.name);
    for (field, value) in doc.personal_info.contact.fields() {
        if !value.is_empty() {
            println!("{}: {}", field.bold(), value);
        }
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for section in &doc.sections {
        println!(
            "{} {} ({} entries, {} points)",
            "•".dimmed(),
            section.title,
            section.entries.len(),
            section.point_count()
        );
    }
    if stats.is_empty() {
        println!("{}", "Nothing extracted".yellow());
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Entries".bold(), stats.entry_count);
    println!("{}: {}", "Points".bold(), stats.point_count);
    println!("{}: {}", "Contact fields".bold(), stats.contact_field_count);

    Ok(())
}

fn cmd_lines(input: &Path, options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let source = open_source(input)?;
    let parser = ResumeParser::with_options(options)?;
    let lines = parser.prepare_lines(source.page_lines()?);

    for line in &lines {
        let cues = parser
            .classifier()
            .cues(line)
            .iter()
            .map(|cue| cue.name())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:>3} {:>2} {:<40} {}",
            line.index.to_string().dimmed(),
            line.indent,
            line.text,
            cues.cyan()
        );
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("unresume_output"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Opening files...");
    let mut sources: Vec<Box<dyn LineSource>> = Vec::with_capacity(inputs.len());
    let mut names = Vec::with_capacity(inputs.len());
    for input in inputs {
        match open_source(input) {
            Ok(source) => {
                log::debug!("{}: queued as {}", input.display(), source.name());
                sources.push(source);
                names.push(input.as_path());
            }
            Err(e) => {
                log::warn!("{}: {}", input.display(), e);
                pb.println(format!("{} {}: {}", "Skipped".yellow(), input.display(), e));
            }
        }
        pb.inc(1);
    }

    pb.set_message("Parsing...");
    let parser = ResumeParser::with_options(options)?;
    let docs = parser.parse_many(&sources);

    pb.set_message("Writing JSON...");
    let mut total = ExtractionStats::default();
    let mut empty = 0;
    for (input, doc) in names.iter().zip(&docs) {
        let stats = ExtractionStats::from_document(doc);
        log::debug!(
            "{}: {} section(s), {} entr(y/ies)",
            input.display(),
            stats.section_count,
            stats.entry_count
        );
        if stats.is_empty() {
            empty += 1;
        }
        total.merge(&stats);

        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let json = unresume::render::to_json(doc, json_format(compact))?;
        fs::write(output_dir.join(format!("{}.json", stem)), json)?;
        pb.inc(1);
    }
    fs::write(
        output_dir.join("summary.json"),
        serde_json::to_string_pretty(&total)?,
    )?;

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} files parsed into {}",
        "Done!".green().bold(),
        docs.len(),
        inputs.len(),
        output_dir.display()
    );
    if empty > 0 {
        println!("{} {} produced no structure", "Note:".yellow(), empty);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Résumé structure extraction tool");
    println!();
    println!("License: MIT");
}
