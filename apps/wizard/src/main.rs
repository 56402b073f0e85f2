use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::{BiographicalField, FormState, Relationship, PRONOUN_OPTIONS, TRAIT_VOCABULARY};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wizard_core::{CommandOutcome, FormStore, Step, WizardCommand, WizardSession};

mod config;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "wizard", about = "Build an obituary from collected answers")]
struct Cli {
    /// Config file; defaults to ./wizard.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the obituary for a saved form state (JSON).
    Generate { form: PathBuf },
    /// Run a JSON array of wizard commands against a fresh session.
    Replay {
        script: PathBuf,
        /// Also print the final form state as JSON.
        #[arg(long)]
        emit_state: bool,
    },
    /// List the wizard steps.
    Steps,
    /// List the selectable personality traits.
    Traits,
    /// List biographical fields, pronoun choices and relationships.
    Fields,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_tracing(&settings);

    match cli.command {
        Command::Generate { form } => {
            let raw = fs::read_to_string(&form)
                .with_context(|| format!("failed to read form state '{}'", form.display()))?;
            let state: FormState = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse form state '{}'", form.display()))?;
            let mut store = FormStore::from_state(state);
            store.set_trait_policy(settings.trait_policy());
            if store.state().selected_traits.len() > store.trait_limit() {
                warn!(
                    selected = store.state().selected_traits.len(),
                    limit = store.trait_limit(),
                    "more traits selected than suggested"
                );
            }
            print!("{}", wizard_core::generate(store.state()));
        }
        Command::Replay { script, emit_state } => {
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script '{}'", script.display()))?;
            let commands: Vec<WizardCommand> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse script '{}'", script.display()))?;

            let mut session = WizardSession::new(settings.trait_policy());
            for (position, command) in commands.into_iter().enumerate() {
                let name = command.name();
                let outcome = session
                    .apply(command)
                    .with_context(|| format!("command #{position} ({name}) rejected"))?;
                if outcome == CommandOutcome::Ignored {
                    warn!(position, command = name, "command had no effect");
                }
            }
            info!(
                step = %session.steps().current(),
                finished = session.steps().is_finished(),
                "replay complete"
            );

            print!("{}", session.generate());
            if emit_state {
                println!("{}", serde_json::to_string_pretty(session.state())?);
            }
        }
        Command::Steps => {
            for step in Step::ALL {
                let skip = if step.is_skippable() { " (optional)" } else { "" };
                println!("{}. {}{skip}", step.number(), step.title());
            }
        }
        Command::Traits => {
            let mode = if settings.enforce_trait_cap {
                "enforced"
            } else {
                "suggested"
            };
            println!("Select up to {} traits ({mode}):", settings.trait_limit);
            for label in TRAIT_VOCABULARY {
                println!("- {label}");
            }
        }
        Command::Fields => print!("{}", field_reference()),
    }

    Ok(())
}

fn field_reference() -> String {
    let mut out = String::from("Fields:\n");
    for field in BiographicalField::ALL {
        let hint = if field.is_date() { " (YYYY-MM-DD)" } else { "" };
        out.push_str(&format!("- {} [{}]{hint}\n", field.label(), field.wire_name()));
    }
    out.push_str(&format!("Pronouns: {}\n", PRONOUN_OPTIONS.join(", ")));
    let relationships: Vec<&str> = Relationship::ALL.iter().map(|r| r.as_str()).collect();
    out.push_str(&format!("Relationships: {}\n", relationships.join(", ")));
    out
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
