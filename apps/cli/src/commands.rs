//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use specgloss_classifier::{Catalog, Rule};
use specgloss_core::{
    DocumentOutcome, ProgressReporter, RunConfig, RunReport, SilentProgress, annotate_documents,
    load_classifier,
};
use specgloss_shared::{AnnotateConfig, AppConfig, init_config, load_config};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// specgloss: attach rationales to requirement documents.
#[derive(Parser)]
#[command(
    name = "specgloss",
    version,
    about = "Insert generated rationale statements into Markdown requirement documents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Add missing rationales to requirement documents.
    Annotate(AnnotateArgs),

    /// Print the rationale chosen for a requirement ID and title.
    Classify {
        /// Requirement ID, e.g. REQ-TIME-001.
        id: String,

        /// Requirement title (remaining words are joined with spaces).
        title: Vec<String>,

        /// Also show the group and rule that produced the rationale.
        #[arg(long)]
        explain: bool,

        #[command(flatten)]
        source: CatalogSource,
    },

    /// Inspect the rationale catalog.
    Catalog {
        /// Catalog subcommand.
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `annotate`.
#[derive(Args)]
pub(crate) struct AnnotateArgs {
    /// Files or directories to annotate.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Descend into subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Extension of documents picked up from directories.
    #[arg(long)]
    pub extension: Option<String>,

    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if any requirement lacks a rationale (implies --dry-run).
    #[arg(long)]
    pub check: bool,

    /// Lines after each header searched for an existing rationale.
    #[arg(long)]
    pub lookahead: Option<usize>,

    /// Maximum documents annotated at once.
    #[arg(short = 'j', long)]
    pub concurrency: Option<u32>,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: CatalogSource,
}

/// Where the rationale catalog comes from.
#[derive(Args)]
pub(crate) struct CatalogSource {
    /// TOML catalog to use instead of the configured or built-in one.
    #[arg(long, env = "SPECGLOSS_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Catalog subcommands.
#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// Summarize groups, families and rule counts.
    Show {
        #[command(flatten)]
        source: CatalogSource,
    },
    /// Validate the catalog and list rules that can never match first.
    Check {
        /// Treat shadowed rules as an error.
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        source: CatalogSource,
    },
    /// Print the effective catalog as TOML.
    Export {
        #[command(flatten)]
        source: CatalogSource,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "specgloss=info",
        1 => "specgloss=debug",
        _ => "specgloss=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Annotate(args) => cmd_annotate(args).await,
        Command::Classify {
            id,
            title,
            explain,
            source,
        } => cmd_classify(&id, &title.join(" "), explain, &source),
        Command::Catalog { action } => match action {
            CatalogAction::Show { source } => cmd_catalog_show(&source),
            CatalogAction::Check { strict, source } => cmd_catalog_check(strict, &source),
            CatalogAction::Export { source } => cmd_catalog_export(&source),
        },
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Merge the config file with the catalog flag.
fn settings_with_source(config: &AppConfig, source: &CatalogSource) -> AnnotateConfig {
    let mut settings = AnnotateConfig::from(config);
    if let Some(path) = &source.catalog {
        settings.catalog_path = Some(path.clone());
    }
    settings
}

fn load_catalog_for(source: &CatalogSource) -> Result<Catalog> {
    let config = load_config()?;
    let settings = settings_with_source(&config, source);
    Ok(load_classifier(&settings)?.catalog().clone())
}

// ---------------------------------------------------------------------------
// annotate
// ---------------------------------------------------------------------------

async fn cmd_annotate(args: AnnotateArgs) -> Result<()> {
    let config = load_config()?;
    let mut settings = settings_with_source(&config, &args.source);
    if args.recursive {
        settings.recursive = true;
    }
    if let Some(extension) = args.extension {
        settings.extension = extension;
    }
    if let Some(lookahead) = args.lookahead {
        settings.lookahead_lines = lookahead;
    }
    if let Some(concurrency) = args.concurrency {
        settings.concurrency = concurrency;
    }

    let dry_run = args.dry_run || args.check;
    let run_config = RunConfig {
        paths: args.paths,
        settings,
        dry_run,
    };

    info!(
        paths = run_config.paths.len(),
        dry_run,
        check = args.check,
        "annotating documents"
    );

    let report = if args.json {
        annotate_documents(&run_config, &SilentProgress).await?
    } else {
        let reporter = CliProgress::new();
        annotate_documents(&run_config, &reporter).await?
    };

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_report(&report);
    }

    if report.has_failures() {
        return Err(eyre!(
            "{} of {} documents failed",
            report.totals.failed,
            report.totals.documents
        ));
    }
    if args.check && report.totals.insertions > 0 {
        return Err(eyre!(
            "{} requirements are missing a rationale",
            report.totals.insertions
        ));
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    for outcome in &report.documents {
        match outcome {
            DocumentOutcome::Annotated(doc) => {
                let summary = if report.dry_run && doc.insertion_count() > 0 {
                    format!("Would add {}", doc.insertion_count())
                } else {
                    doc.summary()
                };
                println!("{}: {summary}", doc.path.display());
                if report.dry_run {
                    for insertion in &doc.insertions {
                        println!("  + {}", insertion.requirement_id);
                    }
                }
                for id in &doc.missing_normative {
                    println!("  ! {id} has no SHALL statement");
                }
            }
            DocumentOutcome::Failed { path, error } => {
                eprintln!("{}: {error}", path.display());
            }
        }
    }

    let totals = &report.totals;
    println!();
    if totals.insertions == 0 {
        println!("No changes needed ({} documents)", totals.documents);
    } else if report.dry_run {
        println!(
            "Would add {} rationales across {} documents",
            totals.insertions, totals.documents
        );
    } else {
        println!(
            "Added {} rationales, {} of {} documents updated ({:.1}s)",
            totals.insertions,
            totals.written,
            totals.documents,
            report.elapsed_ms as f64 / 1000.0
        );
    }
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn document_done(&self, outcome: &DocumentOutcome, current: usize, total: usize) {
        self.spinner.set_message(format!(
            "Annotating [{current}/{total}] {}",
            outcome.path().display()
        ));
    }

    fn done(&self, _report: &RunReport) {
        self.spinner.finish_and_clear();
    }
}

// Runs that fail before `done` still clear the spinner.
impl Drop for CliProgress {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

fn cmd_classify(id: &str, title: &str, explain: bool, source: &CatalogSource) -> Result<()> {
    let config = load_config()?;
    let classifier = load_classifier(&settings_with_source(&config, source))?;
    let classification = classifier.explain(id, title);

    if !explain {
        println!("{}", classification.rationale);
        return Ok(());
    }

    let group = match classification.group {
        Some(name) => classifier.catalog().groups.iter().find(|g| g.name == name),
        None => None,
    };

    println!("  ID:        {id}");
    println!("  Title:     {}", title.trim());
    println!("  Group:     {}", classification.group.unwrap_or("(none, global fallback)"));
    match (group, classification.rule) {
        (Some(group), Some(index)) => {
            println!("  Rule:      #{index} when {}", describe_rule(&group.rules[index]));
        }
        (Some(_), None) => println!("  Rule:      (group fallback)"),
        _ => {}
    }
    println!("  Rationale: {}", classification.rationale);

    Ok(())
}

/// Render a rule's condition as `a & b | c`.
fn describe_rule(rule: &Rule) -> String {
    rule.when
        .iter()
        .map(|clause| {
            clause
                .iter()
                .map(|term| format!("\"{term}\""))
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

fn cmd_catalog_show(source: &CatalogSource) -> Result<()> {
    let catalog = load_catalog_for(source)?;

    println!();
    for group in &catalog.groups {
        let mut families = group.families.join(", ");
        if !group.family_prefixes.is_empty() {
            families.push_str(&format!(" (+ {}*)", group.family_prefixes.join("*, ")));
        }
        println!("  {:<22} {:>3} rules  {families}", group.name, group.rules.len());
    }
    println!();
    println!(
        "  {} groups, {} rules",
        catalog.groups.len(),
        catalog.rule_count()
    );
    println!("  Global fallback: {}", catalog.global_fallback);
    println!();

    Ok(())
}

fn cmd_catalog_check(strict: bool, source: &CatalogSource) -> Result<()> {
    let catalog = load_catalog_for(source)?;
    catalog.validate()?;

    let shadowed = catalog.shadowed_rules();
    if shadowed.is_empty() {
        println!("Catalog OK: {} rules, none shadowed", catalog.rule_count());
        return Ok(());
    }

    for entry in &shadowed {
        let Some(group) = catalog.groups.iter().find(|g| g.name == entry.group) else {
            continue;
        };
        let by: Vec<String> = entry.shadowed_by.iter().map(|i| format!("#{i}")).collect();
        println!(
            "{} rule #{} ({}) is shadowed by {}",
            entry.group,
            entry.index,
            describe_rule(&group.rules[entry.index]),
            by.join(", ")
        );
    }
    println!();
    println!("{} shadowed rules", shadowed.len());

    if strict {
        return Err(eyre!("catalog has {} shadowed rules", shadowed.len()));
    }
    Ok(())
}

fn cmd_catalog_export(source: &CatalogSource) -> Result<()> {
    let catalog = load_catalog_for(source)?;
    print!("{}", catalog.to_toml_string()?);
    Ok(())
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spinner_is_cleared_on_drop() {
        let spinner = ProgressBar::hidden();
        let reporter = CliProgress {
            spinner: spinner.clone(),
        };
        reporter.phase("Loading catalog");
        assert!(!spinner.is_finished());
        drop(reporter);
        assert!(spinner.is_finished());
    }

    #[tokio::test]
    async fn failed_run_leaves_no_spinner_running() {
        let tmp = std::env::temp_dir().join(format!("sg-cli-test-{}", uuid::Uuid::now_v7()));
        let spinner = ProgressBar::hidden();
        let run_config = RunConfig {
            paths: vec![tmp.join("missing")],
            settings: AnnotateConfig::from(&AppConfig::default()),
            dry_run: true,
        };
        {
            let reporter = CliProgress {
                spinner: spinner.clone(),
            };
            assert!(annotate_documents(&run_config, &reporter).await.is_err());
        }
        assert!(spinner.is_finished());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn annotate_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["specgloss", "annotate"]).unwrap();
        let Command::Annotate(args) = cli.command else {
            panic!("expected annotate");
        };
        assert_eq!(args.paths, vec![PathBuf::from(".")]);
        assert!(!args.dry_run && !args.check && !args.recursive);
    }

    #[test]
    fn classify_joins_title_words() {
        let cli = Cli::try_parse_from([
            "specgloss", "-v", "classify", "REQ-TIME-001", "Skill-Based", "Matching", "--explain",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Command::Classify { id, title, explain, .. } = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(id, "REQ-TIME-001");
        assert_eq!(title.join(" "), "Skill-Based Matching");
        assert!(explain);
    }

    #[test]
    fn catalog_flag_overrides_config() {
        let source = CatalogSource {
            catalog: Some(PathBuf::from("custom.toml")),
        };
        let settings = settings_with_source(&AppConfig::default(), &source);
        assert_eq!(settings.catalog_path, Some(PathBuf::from("custom.toml")));
        assert_eq!(settings.lookahead_lines, 10);
    }

    #[test]
    fn rule_description() {
        let rule = Rule::new(&[&["space", "listing"], &["land"]], "text");
        assert_eq!(describe_rule(&rule), "\"space\" & \"listing\" | \"land\"");
    }
}
