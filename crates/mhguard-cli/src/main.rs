//! CLI entry point for mhguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `mhguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use mhguard_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, list_questions,
    parse_report_json, render_annotations, render_markdown, render_text, run_check, run_explain,
    run_sample, serialize_report, to_renderable, verdict_exit_code,
};
use mhguard_settings::{Overrides, QuestionnaireFormat};
use mhguard_types::AssessmentReport;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for runtime errors; 1 is reserved for the attention verdict.
const EXIT_RUNTIME_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "mhguard",
    version,
    about = "Federal compliance assessment for mobile health apps"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess a questionnaire and print the compliance report.
    Check {
        /// Questionnaire file (JSON, or TOML by extension).
        questionnaire: Utf8PathBuf,

        /// Questionnaire format (json|toml); inferred from the extension if omitted.
        #[arg(long)]
        format: Option<String>,

        /// Override an answer, e.g. `--set is_low_risk=true`. Repeatable.
        #[arg(long = "set", value_name = "KEY=BOOL")]
        set: Vec<String>,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Where to write a Markdown report.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,

        /// Plain section titles without emoji.
        #[arg(long)]
        no_icons: bool,

        /// Do not print the text report.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or law name.
    Explain {
        /// The check_id (e.g., "law.hipaa") or exact law name to explain.
        identifier: String,
    },

    /// Write a starter questionnaire from a built-in sample.
    Init {
        /// Sample name (consumer-tracker, provider-portal, kids-symptom-checker, blank).
        #[arg(long, default_value = "blank")]
        sample: String,

        /// Output format (json|toml).
        #[arg(long, default_value = "json")]
        format: String,

        /// Where to write the questionnaire (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Replace an existing output file.
        #[arg(long)]
        force: bool,
    },

    /// List every question with its key.
    Questions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.cmd {
        Commands::Check {
            questionnaire,
            format,
            set,
            report_out,
            markdown_out,
            no_icons,
            quiet,
        } => cmd_check(CheckArgs {
            questionnaire,
            format,
            set,
            report_out,
            markdown_out,
            icons: !no_icons,
            quiet,
        }),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()).map(|()| 0),
        Commands::Annotations { report, max } => cmd_annotations(&report, max).map(|()| 0),
        Commands::Explain { identifier } => Ok(cmd_explain(&identifier)),
        Commands::Init {
            sample,
            format,
            output,
            force,
        } => cmd_init(&sample, &format, output.as_deref(), force).map(|()| 0),
        Commands::Questions => {
            print!("{}", list_questions());
            Ok(0)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("mhguard error: {err:#}");
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

struct CheckArgs {
    questionnaire: Utf8PathBuf,
    format: Option<String>,
    set: Vec<String>,
    report_out: Option<Utf8PathBuf>,
    markdown_out: Option<Utf8PathBuf>,
    icons: bool,
    quiet: bool,
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<u8> {
    let format = match &args.format {
        Some(f) => QuestionnaireFormat::parse(f)?,
        None => QuestionnaireFormat::from_path(args.questionnaire.as_str()),
    };
    let text = std::fs::read_to_string(&args.questionnaire)
        .with_context(|| format!("read questionnaire: {}", args.questionnaire))?;
    let overrides = Overrides::from_assignments(&args.set).context("parse --set")?;

    tracing::debug!(path = %args.questionnaire, ?format, "loaded questionnaire");

    let output = run_check(CheckInput {
        questionnaire_text: &text,
        format,
        overrides,
    })?;

    if let Some(path) = &args.report_out {
        let data = serialize_report(&output.report)?;
        write_file(path, &data).context("write report json")?;
    }

    let renderable = to_renderable(&output.report);
    if let Some(path) = &args.markdown_out {
        let md = render_markdown(&renderable);
        write_file(path, md.as_bytes()).context("write markdown")?;
    }
    if !args.quiet {
        print!("{}", render_text(&renderable, args.icons));
    }

    Ok(u8::try_from(verdict_exit_code(output.report.verdict))?)
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<AssessmentReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(path) => write_file(path, md.as_bytes()).context("write markdown output")?,
        None => print!("{}", md),
    }
    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> u8 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_laws,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_laws)
            );
            EXIT_RUNTIME_ERROR
        }
    }
}

fn cmd_init(
    sample: &str,
    format: &str,
    output: Option<&Utf8Path>,
    force: bool,
) -> anyhow::Result<()> {
    let format = QuestionnaireFormat::parse(format)?;
    let text = run_sample(sample, format)?;

    match output {
        Some(path) => {
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to replace it)", path);
            }
            write_file(path, text.as_bytes()).context("write questionnaire")?;
        }
        None => print!("{}", text),
    }
    Ok(())
}
