use super::*;
use shared::{EntryOption, Relationship};

fn named_member(store: &mut FormStore, name: &str) -> usize {
    let index = store.add_family_member();
    assert!(store.update_family_member(index, FamilyMemberUpdate::Name(name.into())));
    index
}

fn member_names(store: &FormStore) -> Vec<&str> {
    store
        .state()
        .family_members
        .iter()
        .map(|m| m.name.as_str())
        .collect()
}

#[test]
fn patch_replaces_only_given_fields() {
    let mut store = FormStore::new();
    store.update_form_data(BiographicalField::FullName, "Jane Doe");
    store.update_form_state(FormStatePatch {
        option: Some(EntryOption::Upload),
        imported_text: Some("Jane was...".into()),
        ..FormStatePatch::default()
    });

    let state = store.state();
    assert_eq!(state.option, EntryOption::Upload);
    assert_eq!(state.imported_text, "Jane was...");
    assert_eq!(state.form_data.full_name, "Jane Doe");

    store.update_form_state(FormStatePatch {
        imported_text: Some("second".into()),
        ..FormStatePatch::default()
    });
    assert_eq!(store.state().imported_text, "second");
    assert_eq!(store.state().option, EntryOption::Upload);
}

#[test]
fn patched_traits_are_deduplicated() {
    let mut store = FormStore::new();
    store.update_form_state(FormStatePatch {
        selected_traits: Some(vec!["Kind".into(), "Funny".into(), "Kind".into()]),
        ..FormStatePatch::default()
    });
    assert_eq!(store.state().selected_traits, vec!["Kind", "Funny"]);
}

#[test]
fn form_data_accepts_any_string() {
    let mut store = FormStore::new();
    store.update_form_data(BiographicalField::DateOfBirth, "not a date");
    assert_eq!(store.state().form_data.date_of_birth, "not a date");
    store.update_form_data(BiographicalField::DateOfBirth, "");
    assert_eq!(store.state().form_data.date_of_birth, "");
}

#[test]
fn toggling_a_trait_twice_restores_the_set() {
    let mut store = FormStore::new();
    store.toggle_trait("Kind");
    let before = store.state().selected_traits.clone();

    assert_eq!(store.toggle_trait("Funny"), TraitToggle::Added);
    assert_eq!(store.toggle_trait("Funny"), TraitToggle::Removed);
    assert_eq!(store.state().selected_traits, before);

    assert_eq!(store.toggle_trait("Kind"), TraitToggle::Removed);
    assert_eq!(store.toggle_trait("Kind"), TraitToggle::Added);
    assert_eq!(store.state().selected_traits, before);
}

#[test]
fn advisory_limit_never_refuses() {
    let mut store = FormStore::new();
    for label in shared::TRAIT_VOCABULARY.iter().take(6) {
        assert_eq!(store.toggle_trait(label), TraitToggle::Added);
    }
    assert_eq!(store.state().selected_traits.len(), 6);
    assert!(store.is_trait_cap_reached());
    assert_eq!(store.traits_remaining(), 0);
}

#[test]
fn enforced_limit_refuses_additions_but_allows_removal() {
    let mut store = FormStore::with_trait_policy(TraitPolicy::Enforced { limit: 2 });
    assert_eq!(store.toggle_trait("Kind"), TraitToggle::Added);
    assert_eq!(store.traits_remaining(), 1);
    assert_eq!(store.toggle_trait("Funny"), TraitToggle::Added);
    assert_eq!(store.toggle_trait("Humble"), TraitToggle::CapReached);
    assert_eq!(store.state().selected_traits, vec!["Kind", "Funny"]);

    assert_eq!(store.toggle_trait("Kind"), TraitToggle::Removed);
    assert_eq!(store.toggle_trait("Humble"), TraitToggle::Added);
    assert_eq!(store.state().selected_traits, vec!["Funny", "Humble"]);
}

#[test]
fn added_member_starts_empty_at_the_end() {
    let mut store = FormStore::new();
    named_member(&mut store, "Ann");
    let index = store.add_family_member();
    assert_eq!(index, 1);
    let member = &store.state().family_members[1];
    assert_eq!(member.relationship, Relationship::Unset);
    assert!(member.name.is_empty());
    assert!(!member.is_deceased);
}

#[test]
fn member_updates_set_one_field() {
    let mut store = FormStore::new();
    let index = store.add_family_member();
    store.update_family_member(index, FamilyMemberUpdate::Relationship(Relationship::Father));
    store.update_family_member(index, FamilyMemberUpdate::IsDeceased(true));
    let member = &store.state().family_members[index];
    assert_eq!(member.relationship, Relationship::Father);
    assert!(member.is_deceased);
    assert!(member.name.is_empty());
}

#[test]
fn out_of_range_member_operations_are_ignored() {
    let mut store = FormStore::new();
    named_member(&mut store, "Ann");
    let before = store.snapshot();

    assert!(!store.update_family_member(3, FamilyMemberUpdate::Name("Bob".into())));
    assert!(store.remove_family_member(1).is_none());
    assert_eq!(store.state(), &before);
}

#[test]
fn removal_keeps_relative_order() {
    let mut store = FormStore::new();
    for name in ["Ann", "Bob", "Cat", "Dan"] {
        named_member(&mut store, name);
    }

    let removed = store.remove_family_member(1).expect("bob");
    assert_eq!(removed.name, "Bob");
    assert_eq!(member_names(&store), vec!["Ann", "Cat", "Dan"]);

    store.remove_family_member(2);
    assert_eq!(member_names(&store), vec!["Ann", "Cat"]);
}

#[test]
fn length_tracks_adds_minus_successful_removes() {
    let mut store = FormStore::new();
    let ops: [(bool, usize); 10] = [
        (true, 0),
        (true, 0),
        (false, 5),
        (true, 0),
        (false, 0),
        (false, 9),
        (true, 0),
        (false, 2),
        (false, 2),
        (true, 0),
    ];
    let mut adds = 0;
    let mut removes = 0;
    for (is_add, index) in ops {
        if is_add {
            store.add_family_member();
            adds += 1;
        } else if store.remove_family_member(index).is_some() {
            removes += 1;
        }
    }
    assert_eq!(store.state().family_members.len(), adds - removes);
}

#[test]
fn remove_matching_takes_first_equal_member() {
    let mut store = FormStore::new();
    named_member(&mut store, "Ann");
    named_member(&mut store, "Bob");
    named_member(&mut store, "Ann");

    let target = FamilyMember::new(Relationship::Unset, "Ann", false);
    store.remove_family_member_matching(&target).expect("removed");
    assert_eq!(member_names(&store), vec!["Bob", "Ann"]);

    let stranger = FamilyMember::new(Relationship::Child, "Zed", false);
    assert!(store.remove_family_member_matching(&stranger).is_none());
    assert_eq!(store.state().family_members.len(), 2);
}

#[test]
fn events_append_replace_and_remove() {
    let mut store = FormStore::new();
    store.add_event(LifeStoryEvent::education("B.A. English", "State University", "1980"));
    let index = store.add_event(LifeStoryEvent::career("Teacher", "Lincoln High", "1971 - 1993"));
    assert_eq!(index, 1);

    let marriage = LifeStoryEvent::marriage("John Smith", "1980", "San Francisco, CA");
    assert!(store.update_event(0, marriage.clone()));
    assert_eq!(store.state().events[0], marriage);
    assert!(!store.update_event(7, marriage.clone()));

    assert!(store.remove_event(5).is_none());
    let removed = store.remove_event(0).expect("removed");
    assert_eq!(removed, marriage);
    assert_eq!(store.state().events.len(), 1);
    assert_eq!(store.state().events[0].kind(), shared::EventKind::Career);
}

#[test]
fn seeded_store_drops_duplicate_traits() {
    let state = FormState {
        selected_traits: vec!["Kind".into(), "Kind".into()],
        ..FormState::default()
    };
    let store = FormStore::from_state(state);
    assert_eq!(store.into_state().selected_traits, vec!["Kind"]);
}
