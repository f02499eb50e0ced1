//! Classify command

use std::io::Read;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use tollgate_classifier::{ClassificationResult, CommitClassifier};
use tollgate_core::config::load_config_or_default;
use tollgate_core::{BumpLevel, ClassifyError};
use tollgate_git::GitRepo;

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Classify commit messages
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Commit messages to classify
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// Read one message from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Classify a commit from the repository (repeatable)
    #[arg(short, long = "rev", value_name = "REV")]
    pub revs: Vec<String>,

    /// Fail if any message cannot be parsed
    #[arg(long)]
    pub strict: bool,
}

/// One classified input, as printed in JSON output
#[derive(Debug, Serialize)]
struct ClassifiedInput {
    input: String,
    result: ClassificationResult,
}

impl ClassifyCommand {
    /// Execute the classify command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            messages = self.messages.len(),
            stdin = self.stdin,
            revs = self.revs.len(),
            "executing classify command"
        );
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd)?;
        debug!(config = ?config_path, "using parser configuration");

        let classifier = CommitClassifier::from_config(&config.parser);
        let mut classified = Vec::new();

        for message in &self.messages {
            classified.push(ClassifiedInput {
                input: message.clone(),
                result: classifier.classify(message),
            });
        }

        if self.stdin {
            let mut message = String::new();
            std::io::stdin()
                .read_to_string(&mut message)
                .map_err(ClassifyError::Stdin)?;
            let result = classifier.classify(&message);
            classified.push(ClassifiedInput {
                input: message.trim().to_string(),
                result,
            });
        }

        if !self.revs.is_empty() {
            let repo = GitRepo::discover(&cwd)?;
            debug!(workdir = %repo.workdir().display(), revs = self.revs.len(), "reading commits");
            for rev in &self.revs {
                let commit = repo.find_commit(rev)?;
                classified.push(ClassifiedInput {
                    input: format!("{} {}", commit.short_hash, commit.message),
                    result: classifier.classify_commit(&commit),
                });
            }
        }

        if classified.is_empty() {
            return Err(ClassifyError::NoInput.into());
        }

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&classified)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    print_text(&classified, cli.verbose);
                }
            }
        }

        let unparsed = classified
            .iter()
            .filter(|c| matches!(c.result, ClassificationResult::Unparsed { .. }))
            .count();
        if self.strict && unparsed > 0 {
            return Err(ClassifyError::Unparsed(unparsed).into());
        }

        Ok(())
    }
}

fn print_text(classified: &[ClassifiedInput], verbose: bool) {
    for entry in classified {
        println!("{}", output::header(first_line(&entry.input)));

        match &entry.result {
            ClassificationResult::Excluded { reason } => {
                println!("{}", output::key_value("Result", &style("excluded").dim().to_string()));
                println!("{}", output::key_value("Reason", reason));
            }
            ClassificationResult::Unparsed { reason } => {
                println!("{}", output::key_value("Result", &style("unparsed").red().to_string()));
                println!("{}", output::key_value("Reason", reason));
            }
            ClassificationResult::Classified(classification) => {
                println!("{}", output::key_value("Category", &classification.category));
                println!(
                    "{}",
                    output::key_value(
                        "Bump",
                        &output::bump_style(classification.bump_level)
                            .apply_to(classification.bump_level)
                            .to_string()
                    )
                );
                if let Some(scope) = &classification.scope {
                    println!("{}", output::key_value("Scope", scope));
                }
                if verbose {
                    for description in &classification.descriptions {
                        println!("{}", output::key_value("Description", description));
                    }
                    for description in &classification.breaking_descriptions {
                        println!("{}", output::key_value("Breaking", description));
                    }
                }
            }
        }
        println!();
    }

    let highest = classified
        .iter()
        .filter_map(|c| c.result.bump_level())
        .max()
        .unwrap_or(BumpLevel::None);
    output::info(&format!(
        "Highest bump: {}",
        output::bump_style(highest).apply_to(highest)
    ));
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
