//! Owned form state plus the mutations the wizard screens call.

use serde::{Deserialize, Serialize};
use shared::{
    BiographicalField, FamilyMember, FamilyMemberUpdate, FormState, FormStatePatch,
    LifeStoryEvent, DEFAULT_TRAIT_LIMIT,
};
use tracing::debug;

/// How the trait limit is applied when toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TraitPolicy {
    /// The limit is shown to the user but never refused.
    Advisory { limit: usize },
    /// Additions past the limit are refused.
    Enforced { limit: usize },
}

impl TraitPolicy {
    pub fn limit(self) -> usize {
        match self {
            TraitPolicy::Advisory { limit } | TraitPolicy::Enforced { limit } => limit,
        }
    }
}

impl Default for TraitPolicy {
    fn default() -> Self {
        TraitPolicy::Advisory {
            limit: DEFAULT_TRAIT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitToggle {
    Added,
    Removed,
    CapReached,
}

#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: FormState,
    trait_policy: TraitPolicy,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trait_policy(trait_policy: TraitPolicy) -> Self {
        Self {
            state: FormState::default(),
            trait_policy,
        }
    }

    pub fn from_state(state: FormState) -> Self {
        let mut store = Self {
            state,
            trait_policy: TraitPolicy::default(),
        };
        dedup_traits(&mut store.state.selected_traits);
        store
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn trait_policy(&self) -> TraitPolicy {
        self.trait_policy
    }

    pub fn set_trait_policy(&mut self, trait_policy: TraitPolicy) {
        self.trait_policy = trait_policy;
    }

    /// Shallow merge: each `Some` in the patch replaces the whole top-level field.
    pub fn update_form_state(&mut self, patch: FormStatePatch) {
        let FormStatePatch {
            option,
            imported_text,
            form_data,
            selected_traits,
            family_members,
            events,
        } = patch;

        if let Some(option) = option {
            self.state.option = option;
        }
        if let Some(imported_text) = imported_text {
            self.state.imported_text = imported_text;
        }
        if let Some(form_data) = form_data {
            self.state.form_data = form_data;
        }
        if let Some(mut selected_traits) = selected_traits {
            dedup_traits(&mut selected_traits);
            self.state.selected_traits = selected_traits;
        }
        if let Some(family_members) = family_members {
            self.state.family_members = family_members;
        }
        if let Some(events) = events {
            self.state.events = events;
        }
        debug!(option = ?self.state.option, "form state patched");
    }

    pub fn update_form_data(&mut self, field: BiographicalField, value: impl Into<String>) {
        self.state.form_data.set(field, value);
        debug!(field = field.wire_name(), "biographical field updated");
    }

    pub fn toggle_trait(&mut self, label: &str) -> TraitToggle {
        let traits = &mut self.state.selected_traits;
        if let Some(position) = traits.iter().position(|t| t == label) {
            traits.remove(position);
            debug!(label, "trait removed");
            return TraitToggle::Removed;
        }

        if let TraitPolicy::Enforced { limit } = self.trait_policy {
            if traits.len() >= limit {
                debug!(label, limit, "trait refused; limit reached");
                return TraitToggle::CapReached;
            }
        }

        traits.push(label.to_string());
        debug!(label, "trait added");
        TraitToggle::Added
    }

    pub fn trait_limit(&self) -> usize {
        self.trait_policy.limit()
    }

    pub fn traits_remaining(&self) -> usize {
        self.trait_limit()
            .saturating_sub(self.state.selected_traits.len())
    }

    pub fn is_trait_cap_reached(&self) -> bool {
        self.traits_remaining() == 0
    }

    /// Appends an empty member and returns its index.
    pub fn add_family_member(&mut self) -> usize {
        self.state.family_members.push(FamilyMember::default());
        let index = self.state.family_members.len() - 1;
        debug!(index, "family member added");
        index
    }

    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn update_family_member(&mut self, index: usize, update: FamilyMemberUpdate) -> bool {
        match self.state.family_members.get_mut(index) {
            Some(member) => {
                member.apply(update);
                debug!(index, "family member updated");
                true
            }
            None => ignored("update_family_member", index),
        }
    }

    pub fn remove_family_member(&mut self, index: usize) -> Option<FamilyMember> {
        if index >= self.state.family_members.len() {
            ignored("remove_family_member", index);
            return None;
        }
        let removed = self.state.family_members.remove(index);
        debug!(index, "family member removed");
        Some(removed)
    }

    /// Removes the first member equal to `member`.
    pub fn remove_family_member_matching(&mut self, member: &FamilyMember) -> Option<FamilyMember> {
        let index = self
            .state
            .family_members
            .iter()
            .position(|candidate| candidate == member)?;
        self.remove_family_member(index)
    }

    pub fn add_event(&mut self, event: LifeStoryEvent) -> usize {
        debug!(kind = %event.kind(), "event added");
        self.state.events.push(event);
        self.state.events.len() - 1
    }

    pub fn update_event(&mut self, index: usize, event: LifeStoryEvent) -> bool {
        match self.state.events.get_mut(index) {
            Some(slot) => {
                debug!(index, kind = %event.kind(), "event replaced");
                *slot = event;
                true
            }
            None => ignored("update_event", index),
        }
    }

    pub fn remove_event(&mut self, index: usize) -> Option<LifeStoryEvent> {
        if index >= self.state.events.len() {
            ignored("remove_event", index);
            return None;
        }
        let removed = self.state.events.remove(index);
        debug!(index, "event removed");
        Some(removed)
    }
}

fn ignored(operation: &str, index: usize) -> bool {
    debug!(operation, index, "index out of range; ignored");
    false
}

fn dedup_traits(traits: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(traits.len());
    traits.retain(|label| {
        if seen.contains(label) {
            false
        } else {
            seen.push(label.clone());
            true
        }
    });
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
