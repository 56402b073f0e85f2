use shared::{FormState, WizardError};

use crate::{
    command::{dispatch, CommandOutcome, WizardCommand},
    obituary,
    steps::StepController,
    store::{FormStore, TraitPolicy},
};

/// One wizard run: the form answers and where the user is in the flow.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    store: FormStore,
    steps: StepController,
}

impl WizardSession {
    pub fn new(trait_policy: TraitPolicy) -> Self {
        Self {
            store: FormStore::with_trait_policy(trait_policy),
            steps: StepController::new(),
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FormStore {
        &mut self.store
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut StepController {
        &mut self.steps
    }

    pub fn state(&self) -> &FormState {
        self.store.state()
    }

    pub fn apply(&mut self, command: WizardCommand) -> Result<CommandOutcome, WizardError> {
        dispatch(self, command)
    }

    pub fn generate(&self) -> String {
        obituary::generate(self.store.state())
    }

    pub fn into_state(self) -> FormState {
        self.store.into_state()
    }
}
