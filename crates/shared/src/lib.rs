pub mod domain;
pub mod error;
pub mod events;

pub use domain::{
    BiographicalField, Biography, EntryOption, FamilyMember, FamilyMemberUpdate, FormState,
    FormStatePatch, Relationship, DEFAULT_TRAIT_LIMIT, PRONOUN_OPTIONS, TRAIT_VOCABULARY,
};
pub use error::{ErrorCode, WizardError};
pub use events::{EventKind, EventSummary, LifeStoryEvent};
