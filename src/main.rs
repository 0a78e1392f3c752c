//! Automanic Project Setup
//!
//! Entry point: CLI args, logging setup, and the default completion
//! consumer (a structured log of the finished plan -- nothing downstream
//! consumes setup results yet).

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use automanic::catalog::CATALOG;
use automanic::form::render::summary_panel;
use automanic::form::runner::run_form;
use automanic::plan::ProjectPlan;

/// Automanic Project Setup -- interactive project questionnaire
#[derive(Parser, Debug)]
#[command(
    name = "automanic",
    version,
    about = "Interactive project-setup questionnaire",
    long_about = "Walks through five questions about your new project and reports the answers."
)]
struct Cli {
    /// Print the question catalog instead of running the form
    #[arg(long)]
    questions: bool,

    /// Emit machine-readable JSON instead of the summary panel
    #[arg(long)]
    json: bool,
}

/// Print the full question catalog, one block per question.
fn show_questions(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(CATALOG)?);
        return Ok(());
    }

    for (i, question) in CATALOG.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt.white().bold());
        for choice in question.choices {
            println!("   - {}", choice);
        }
        println!();
    }
    Ok(())
}

/// Report the finished plan: structured log line plus a human summary
/// (or raw JSON under --json).
fn report_plan(answers: &[String], json: bool) {
    // The runner only completes with all five slots set
    let Some(plan) = ProjectPlan::from_answers(answers) else {
        return;
    };

    info!(
        project_type = %plan.project_type,
        language = %plan.language,
        framework = %plan.framework,
        build_system = %plan.build_system,
        database = %plan.database,
        "final answers"
    );

    if json {
        match serde_json::to_string_pretty(&plan) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Failed to serialize plan: {}", e),
        }
    } else {
        println!("{}", summary_panel(&plan).green());
        println!();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    if cli.questions {
        if let Err(e) = show_questions(cli.json) {
            eprintln!("Failed to print questions: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let json = cli.json;
    if let Err(e) = run_form(|answers| report_plan(answers, json)) {
        eprintln!("Setup failed: {}", e);
        std::process::exit(1);
    }
}
