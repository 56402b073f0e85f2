//! Commands a front end sends into a session, and their dispatch.

use serde::{Deserialize, Serialize};
use shared::{
    BiographicalField, FamilyMember, FamilyMemberUpdate, FormStatePatch, LifeStoryEvent,
    WizardError,
};
use tracing::debug;

use crate::{session::WizardSession, steps::Step, store::TraitToggle};

/// A form input value; checkboxes send booleans, everything else text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::Text(text) => text,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum WizardCommand {
    UpdateFormState(FormStatePatch),
    UpdateFormData {
        field: String,
        value: String,
    },
    ToggleTrait {
        label: String,
    },
    AddFamilyMember,
    UpdateFamilyMember {
        index: usize,
        field: String,
        value: FieldValue,
    },
    RemoveFamilyMember {
        index: usize,
    },
    RemoveFamilyMemberMatching(FamilyMember),
    AddEvent(LifeStoryEvent),
    UpdateEvent {
        index: usize,
        event: LifeStoryEvent,
    },
    RemoveEvent {
        index: usize,
    },
    Next,
    Back,
    Skip,
    Finish,
}

impl WizardCommand {
    pub fn name(&self) -> &'static str {
        match self {
            WizardCommand::UpdateFormState(_) => "update_form_state",
            WizardCommand::UpdateFormData { .. } => "update_form_data",
            WizardCommand::ToggleTrait { .. } => "toggle_trait",
            WizardCommand::AddFamilyMember => "add_family_member",
            WizardCommand::UpdateFamilyMember { .. } => "update_family_member",
            WizardCommand::RemoveFamilyMember { .. } => "remove_family_member",
            WizardCommand::RemoveFamilyMemberMatching(_) => "remove_family_member_matching",
            WizardCommand::AddEvent(_) => "add_event",
            WizardCommand::UpdateEvent { .. } => "update_event",
            WizardCommand::RemoveEvent { .. } => "remove_event",
            WizardCommand::Next => "next",
            WizardCommand::Back => "back",
            WizardCommand::Skip => "skip",
            WizardCommand::Finish => "finish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Out-of-range index or an action not offered on the current step.
    Ignored,
    Added { index: usize },
    Trait(TraitToggle),
    Step(Step),
    Finished,
}

impl CommandOutcome {
    fn from_flag(applied: bool) -> Self {
        if applied {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored
        }
    }
}

/// Applies one command. Only text that fails to name a field or relationship
/// produces an error; everything else is applied or silently ignored.
pub fn dispatch(
    session: &mut WizardSession,
    command: WizardCommand,
) -> Result<CommandOutcome, WizardError> {
    let command_name = command.name();
    let outcome = match command {
        WizardCommand::UpdateFormState(patch) => {
            session.store_mut().update_form_state(patch);
            CommandOutcome::Applied
        }
        WizardCommand::UpdateFormData { field, value } => {
            let field: BiographicalField = field.parse()?;
            session.store_mut().update_form_data(field, value);
            CommandOutcome::Applied
        }
        WizardCommand::ToggleTrait { label } => {
            CommandOutcome::Trait(session.store_mut().toggle_trait(&label))
        }
        WizardCommand::AddFamilyMember => CommandOutcome::Added {
            index: session.store_mut().add_family_member(),
        },
        WizardCommand::UpdateFamilyMember {
            index,
            field,
            value,
        } => {
            let update = FamilyMemberUpdate::parse(&field, &value.into_text())?;
            CommandOutcome::from_flag(session.store_mut().update_family_member(index, update))
        }
        WizardCommand::RemoveFamilyMember { index } => {
            CommandOutcome::from_flag(session.store_mut().remove_family_member(index).is_some())
        }
        WizardCommand::RemoveFamilyMemberMatching(member) => CommandOutcome::from_flag(
            session
                .store_mut()
                .remove_family_member_matching(&member)
                .is_some(),
        ),
        WizardCommand::AddEvent(event) => CommandOutcome::Added {
            index: session.store_mut().add_event(event),
        },
        WizardCommand::UpdateEvent { index, event } => {
            CommandOutcome::from_flag(session.store_mut().update_event(index, event))
        }
        WizardCommand::RemoveEvent { index } => {
            CommandOutcome::from_flag(session.store_mut().remove_event(index).is_some())
        }
        WizardCommand::Next => CommandOutcome::Step(session.steps_mut().next()),
        WizardCommand::Back => CommandOutcome::Step(session.steps_mut().back()),
        WizardCommand::Skip => {
            if session.steps_mut().skip() {
                CommandOutcome::Step(session.steps().current())
            } else {
                CommandOutcome::Ignored
            }
        }
        WizardCommand::Finish => {
            if session.steps_mut().finish() {
                CommandOutcome::Finished
            } else {
                CommandOutcome::Ignored
            }
        }
    };

    debug!(command = command_name, ?outcome, "applied wizard command");
    Ok(outcome)
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
