//! CLI entry point for hstspreload.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `hstspreload-app` crate.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use hstspreload_app::{
    ExplainOutput, HttpFetcher, JsonFileStore, check_header, format_explanation,
    format_not_found, group_by_policy, parse_entries, parse_report_json, record_scan,
    rule_set_for, run_explain, run_scan, serialize_report, to_renderable, verdict_exit_code,
};
use hstspreload_render::{render_github_annotations, render_markdown};
use hstspreload_settings::{EffectiveConfig, HstsConfigV1, Overrides};
use hstspreload_types::{ScanMode, ScanReport};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "hstspreload",
    version,
    about = "Check Strict-Transport-Security headers against HSTS preload list requirements"
)]
struct Cli {
    /// Path to hstspreload config TOML.
    #[arg(long, global = true, default_value = "hstspreload.toml")]
    config: PathBuf,

    /// Override policy used by `eligible` (bulk-18-weeks|bulk-1-year).
    #[arg(long, global = true)]
    policy: Option<String>,

    /// Override the request timeout in seconds.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a domain's header satisfies the preload submission requirements.
    Preloadable(ScanArgs),

    /// Check whether a domain's header satisfies the configured policy.
    Eligible(ScanArgs),

    /// Check whether a domain's header permits removal from the preload list.
    Removable(ScanArgs),

    /// Evaluate a header value offline.
    Header {
        /// The Strict-Transport-Security header value.
        value: String,

        /// Which rule set to apply.
        #[arg(long, value_enum, default_value = "preloadable")]
        mode: ModeArg,

        /// Where to write the JSON report (prints to stdout if not specified).
        #[arg(long)]
        report_out: Option<PathBuf>,
    },

    /// Group a preload list dataset by policy.
    Gather {
        /// Path to the preload list JSON (an array of entries).
        file: PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain an issue code with remediation guidance.
    Explain {
        /// The issue code (e.g., "header.preloadable.preload.missing").
        code: String,
    },
}

#[derive(clap::Args, Debug)]
struct ScanArgs {
    /// Bare domain name, e.g. example.com.
    domain: String,

    /// Where to write the JSON report (prints to stdout if not specified).
    #[arg(long)]
    report_out: Option<PathBuf>,

    /// Where to write a Markdown report.
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// JSON state file to record the scan in.
    #[arg(long)]
    state: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Preloadable,
    Eligible,
    Removable,
}

impl From<ModeArg> for ScanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Preloadable => ScanMode::Preloadable,
            ModeArg::Eligible => ScanMode::Eligible,
            ModeArg::Removable => ScanMode::Removable,
        }
    }
}

fn main() {
    init_tracing();

    // clap exits with 2 on usage errors, which would read as a failed check.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("hstspreload error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let overrides = Overrides {
        policy: cli.policy.clone(),
        timeout_secs: cli.timeout_secs,
    };

    match cli.cmd {
        Commands::Preloadable(args) => {
            cmd_scan(&load_config(&cli.config, overrides)?, ScanMode::Preloadable, args)
        }
        Commands::Eligible(args) => {
            cmd_scan(&load_config(&cli.config, overrides)?, ScanMode::Eligible, args)
        }
        Commands::Removable(args) => {
            cmd_scan(&load_config(&cli.config, overrides)?, ScanMode::Removable, args)
        }
        Commands::Header {
            value,
            mode,
            report_out,
        } => {
            let cfg = load_config(&cli.config, overrides)?;
            let report = check_header(&value, rule_set_for(mode.into(), cfg.policy));
            emit_report(&report, report_out.as_deref())?;
            Ok(verdict_exit_code(report.verdict))
        }
        Commands::Gather { file } => cmd_gather(&file),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(&report, max),
        Commands::Explain { code } => Ok(cmd_explain(&code)),
    }
}

/// Load config if present; a missing file means defaults.
fn load_config(path: &Path, overrides: Overrides) -> anyhow::Result<EffectiveConfig> {
    let cfg = match std::fs::read_to_string(path) {
        Ok(text) => hstspreload_settings::parse_config_toml(&text)
            .with_context(|| format!("parse config: {}", path.display()))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => HstsConfigV1::default(),
        Err(err) => {
            return Err(err).with_context(|| format!("read config: {}", path.display()));
        }
    };
    let resolved =
        hstspreload_settings::resolve_config(cfg, overrides).context("resolve config")?;
    Ok(resolved.effective)
}

fn cmd_scan(cfg: &EffectiveConfig, mode: ScanMode, args: ScanArgs) -> anyhow::Result<i32> {
    let fetcher = HttpFetcher::new(cfg).context("build HTTP client")?;
    let report = run_scan(&fetcher, &args.domain, rule_set_for(mode, cfg.policy))?;

    emit_report(&report, args.report_out.as_deref())?;

    if let Some(md_path) = &args.markdown {
        let md = render_markdown(&to_renderable(&report));
        write_text_file(md_path, &md).context("write markdown")?;
    }

    if let Some(state_path) = &args.state {
        let store = JsonFileStore::new(state_path);
        record_scan(&store, &args.domain, cfg.policy, &report).context("record scan")?;
    }

    Ok(verdict_exit_code(report.verdict))
}

fn cmd_gather(file: &Path) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("read preload list: {}", file.display()))?;
    let groups = group_by_policy(&parse_entries(&text)?);
    println!(
        "{}",
        serde_json::to_string_pretty(&groups).context("serialize groups")?
    );
    Ok(0)
}

fn cmd_md(report_path: &Path, output: Option<&Path>) -> anyhow::Result<i32> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }
    Ok(0)
}

fn cmd_annotations(report_path: &Path, max: usize) -> anyhow::Result<i32> {
    let report = read_report(report_path)?;
    for line in render_github_annotations(&to_renderable(&report), max) {
        println!("{line}");
    }
    Ok(0)
}

fn cmd_explain(code: &str) -> i32 {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(code, &exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!("{}", format_not_found(&identifier, available_codes));
            1
        }
    }
}

fn read_report(path: &Path) -> anyhow::Result<ScanReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read report: {}", path.display()))?;
    parse_report_json(&text)
}

fn emit_report(report: &ScanReport, out: Option<&Path>) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    match out {
        Some(path) => write_text_file(path, &data).context("write report json"),
        None => {
            print!("{data}");
            Ok(())
        }
    }
}

fn write_text_file(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write: {}", path.display()))?;
    Ok(())
}
