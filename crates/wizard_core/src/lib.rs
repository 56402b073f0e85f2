pub mod command;
pub mod obituary;
pub mod session;
pub mod steps;
pub mod store;

pub use command::{dispatch, CommandOutcome, FieldValue, WizardCommand};
pub use obituary::{format_long_date, generate, generate_paragraphs};
pub use session::WizardSession;
pub use steps::{Step, StepController, TOTAL_STEPS};
pub use store::{FormStore, TraitPolicy, TraitToggle};
