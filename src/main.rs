use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser as ClapParser, Subcommand};
use tracing::{info, warn};

use family_parser::output::{self, Style};
use family_parser::query::{self, Filter, Summary};
use family_parser::settings::Settings;
use family_parser::{Catalog, Mode, Parsed, Parser};

#[derive(ClapParser)]
#[command(name = "family_parser", about = "Convert family directory text into structured JSON")]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalOpts {
    /// JSON catalog of professions and relationship phrases (default: built-in)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Report lines that are neither headers nor member lines
    #[arg(long, global = true)]
    strict: bool,
    /// Single-line JSON output
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one document into JSON
    Convert {
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse many documents in parallel, one <name>.json each
    Batch {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Counts plus the family and profession indexes
    Summary { input: PathBuf },
    /// List members matching a term, families or professions
    Search {
        input: PathBuf,
        /// Substring of name, profession or family (case-insensitive)
        #[arg(short, long)]
        term: Option<String>,
        #[arg(short, long = "family")]
        families: Vec<String>,
        #[arg(short, long = "profession")]
        professions: Vec<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Print the effective catalog as JSON
    Catalog,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = merge_settings(Settings::load().context("Failed to load settings")?, &cli.opts);

    let result = match cli.command {
        Commands::Convert { input, output } => {
            let parser = build_parser(&settings)?;
            let parsed = parse_file(&parser, &input)?;
            let json = output::to_json(&parsed.families, settings.style())?;
            match output {
                Some(path) => {
                    write_file(&path, &json)?;
                    let s = Summary::of(&parsed.families);
                    info!(
                        "Wrote {} families ({} members) to {}",
                        s.families,
                        s.members,
                        path.display()
                    );
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Commands::Batch { inputs, out_dir } => {
            let parser = build_parser(&settings)?;
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("Failed to create {}", out_dir.display()))?;
            let counts = process_files(&parser, &inputs, &out_dir, settings.style())?;
            counts.print();
            Ok(())
        }
        Commands::Summary { input } => {
            let parser = build_parser(&settings)?;
            let parsed = parse_file(&parser, &input)?;
            let s = Summary::of(&parsed.families);
            println!("Families:    {}", s.families);
            println!("  (empty):   {}", s.empty_families);
            println!("Members:     {}", s.members);
            println!("Connections: {}", s.connections);
            println!("Professions: {}", s.professions);
            println!("Warnings:    {}", parsed.warnings.len());

            println!("\n--- Families ---");
            for name in query::family_names(&parsed.families) {
                println!("  {}", name);
            }
            println!("\n--- Professions ---");
            for p in query::professions(&parsed.families) {
                println!("  {}", p);
            }
            Ok(())
        }
        Commands::Search {
            input,
            term,
            families,
            professions,
            limit,
        } => {
            let parser = build_parser(&settings)?;
            let parsed = parse_file(&parser, &input)?;
            let filter = Filter {
                term,
                families,
                professions,
            };
            let hits = filter.apply(&parsed.families);
            if hits.is_empty() {
                println!("No members found.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<24} | {:<20} | {:<24} | {:>5}",
                "#", "Name", "Family", "Profession", "Links"
            );
            println!("{}", "-".repeat(88));
            for (i, r) in hits.iter().take(limit).enumerate() {
                println!(
                    "{:>3} | {:<24} | {:<20} | {:<24} | {:>5}",
                    i + 1,
                    truncate(&r.member.name, 24),
                    truncate(r.family, 20),
                    truncate(&r.member.profession, 24),
                    r.member.connections.len()
                );
            }
            println!("\n{} of {} members shown", hits.len().min(limit), hits.len());
            Ok(())
        }
        Commands::Catalog => {
            let catalog = settings.catalog()?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        info!("Done in {}", format_duration(elapsed));
    }

    result
}

fn merge_settings(mut settings: Settings, opts: &GlobalOpts) -> Settings {
    if opts.catalog.is_some() {
        settings.catalog = opts.catalog.clone();
    }
    if opts.strict {
        settings.mode = Mode::Strict;
    }
    if opts.compact {
        settings.compact = true;
    }
    settings
}

fn build_parser(settings: &Settings) -> Result<Parser> {
    let catalog: Catalog = settings.catalog()?;
    info!(
        professions = catalog.professions.len(),
        relationships = catalog.relationships.len(),
        mode = ?settings.mode,
        "catalog loaded"
    );
    Ok(Parser::new(&catalog, settings.mode)?)
}

fn parse_file(parser: &Parser, path: &Path) -> Result<Parsed> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = parser.parse(&raw);
    report_warnings(path, &parsed);
    Ok(parsed)
}

fn report_warnings(path: &Path, parsed: &Parsed) {
    for w in &parsed.warnings {
        warn!(file = %path.display(), "{}", w);
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

struct BatchCounts {
    files: usize,
    families: usize,
    members: usize,
    warnings: usize,
}

impl BatchCounts {
    fn print(&self) {
        println!(
            "Converted {} files: {} families, {} members, {} warnings.",
            self.files, self.families, self.members, self.warnings,
        );
    }
}

fn process_files(
    parser: &Parser,
    inputs: &[PathBuf],
    out_dir: &Path,
    style: Style,
) -> Result<BatchCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let results: Vec<Result<Parsed>> = inputs
        .par_iter()
        .map(|input| {
            let parsed = parse_file(parser, input)?;
            let json = output::to_json(&parsed.families, style)?;
            write_file(&output_path(out_dir, input), &json)?;
            pb.inc(1);
            Ok(parsed)
        })
        .collect();
    pb.finish_and_clear();

    let mut counts = BatchCounts {
        files: 0,
        families: 0,
        members: 0,
        warnings: 0,
    };
    for parsed in results {
        let parsed = parsed?;
        let s = Summary::of(&parsed.families);
        counts.files += 1;
        counts.families += s.families;
        counts.members += s.members;
        counts.warnings += parsed.warnings.len();
    }
    Ok(counts)
}

/// `raw/kapoors.md` → `<out_dir>/kapoors.json`
fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    out_dir.join(format!("{}.json", stem))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
