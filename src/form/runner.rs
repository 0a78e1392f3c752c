//! Runner
//!
//! The interactive loop: renders progress, asks the current question with a
//! `dialoguer` picker, and feeds selections into the wizard. The picker can
//! only yield values from the question's choice list, so the wizard never
//! sees an out-of-domain answer.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Select;
use tracing::debug;

use crate::catalog::{Question, QuestionKind, CATALOG};
use crate::wizard::{Step, Wizard};

use super::banner::show_banner;
use super::render::{position_line, progress_bar};

/// Run the questionnaire start to finish and hand the collected answers to
/// `on_complete` once the final question is accepted.
pub fn run_form<F>(on_complete: F) -> Result<()>
where
    F: FnOnce(&[String]),
{
    show_banner();

    let mut wizard = Wizard::new(CATALOG);

    while let Some(question) = wizard.current_question() {
        let (current, total) = wizard.position();

        println!("  {}", progress_bar(wizard.progress_fraction()).cyan());
        println!("  {}", position_line(current, total).dimmed());
        println!();

        let choice = match question.kind {
            QuestionKind::SingleSelect => prompt_choice(question)?,
        };
        wizard.select_answer(choice);
        debug!(question = current, answer = choice, "answer recorded");

        println!("{}", format!("  {} {}\n", "\u{2713}", choice).green());

        if wizard.advance() == Step::Completed {
            break;
        }
    }

    on_complete(wizard.answers());
    Ok(())
}

/// Ask a single-select question and return the chosen value.
fn prompt_choice(question: &Question) -> Result<&'static str> {
    let index = Select::new()
        .with_prompt(format!("  {} {}", "\u{2192}".cyan(), question.prompt.white()))
        .items(question.choices)
        .default(0)
        .interact()
        .context("Failed to read selection")?;

    Ok(question.choices[index])
}
