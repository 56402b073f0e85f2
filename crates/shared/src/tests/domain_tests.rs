use super::*;

#[test]
fn relationship_parses_case_insensitively() {
    assert_eq!("Mother".parse::<Relationship>().expect("mother"), Relationship::Mother);
    assert_eq!(" sibling ".parse::<Relationship>().expect("sibling"), Relationship::Sibling);
    assert_eq!("".parse::<Relationship>().expect("unset"), Relationship::Unset);
    assert!("cousin".parse::<Relationship>().is_err());
}

#[test]
fn unset_relationship_serializes_as_empty_string() {
    let member = FamilyMember::default();
    let json = serde_json::to_value(&member).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "relationship": "", "name": "", "isDeceased": false })
    );
}

#[test]
fn blank_member_detection() {
    let mut member = FamilyMember::default();
    assert!(member.is_blank());
    member.apply(FamilyMemberUpdate::Name("Ann".into()));
    assert!(!member.is_blank());

    let mut member = FamilyMember::default();
    member.apply(FamilyMemberUpdate::Relationship(Relationship::Child));
    assert!(!member.is_blank());

    let mut member = FamilyMember::default();
    member.apply(FamilyMemberUpdate::IsDeceased(true));
    assert!(member.is_blank());
}

#[test]
fn family_member_update_from_text() {
    assert_eq!(
        FamilyMemberUpdate::parse("relationship", "partner").expect("relationship"),
        FamilyMemberUpdate::Relationship(Relationship::Partner)
    );
    assert_eq!(
        FamilyMemberUpdate::parse("isDeceased", "true").expect("deceased"),
        FamilyMemberUpdate::IsDeceased(true)
    );
    let err = FamilyMemberUpdate::parse("age", "40").expect_err("unknown field");
    assert_eq!(err.code, crate::error::ErrorCode::UnknownField);
    let err = FamilyMemberUpdate::parse("isDeceased", "maybe").expect_err("not a bool");
    assert_eq!(err.code, crate::error::ErrorCode::InvalidCommand);
}

#[test]
fn biographical_field_accepts_wire_and_snake_names() {
    assert_eq!(
        "dateOfBirth".parse::<BiographicalField>().expect("camel"),
        BiographicalField::DateOfBirth
    );
    assert_eq!(
        "passing_place".parse::<BiographicalField>().expect("snake"),
        BiographicalField::PassingPlace
    );
    assert!("nickname".parse::<BiographicalField>().is_err());
}

#[test]
fn biography_get_and_set_cover_every_field() {
    let mut bio = Biography::default();
    for field in BiographicalField::ALL {
        bio.set(field, field.wire_name());
    }
    for field in BiographicalField::ALL {
        assert_eq!(bio.get(field), field.wire_name());
    }
}

#[test]
fn form_state_uses_camel_case_json_keys() {
    let raw = r#"{
        "option": "upload",
        "importedText": "pasted",
        "formData": { "fullName": "Jane Doe", "dateOfBirth": "1950-03-04" },
        "selectedTraits": ["Kind"],
        "familyMembers": [{ "relationship": "child", "name": "Sam", "isDeceased": false }],
        "events": []
    }"#;
    let state: FormState = serde_json::from_str(raw).expect("parse");
    assert_eq!(state.option, EntryOption::Upload);
    assert_eq!(state.imported_text, "pasted");
    assert_eq!(state.form_data.full_name, "Jane Doe");
    assert_eq!(state.form_data.preferred_name, "");
    assert!(state.has_trait("Kind"));
    assert_eq!(state.family_members[0].relationship, Relationship::Child);
}

#[test]
fn empty_patch_is_detected() {
    assert!(FormStatePatch::default().is_empty());
    let patch = FormStatePatch {
        imported_text: Some(String::new()),
        ..FormStatePatch::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn living_and_deceased_members_keep_relative_order() {
    let state = FormState {
        family_members: vec![
            FamilyMember::new(Relationship::Father, "Robert", true),
            FamilyMember::new(Relationship::Child, "Sam", false),
            FamilyMember::new(Relationship::Mother, "Ruth", true),
            FamilyMember::new(Relationship::Partner, "Alex", false),
        ],
        ..FormState::default()
    };
    let living: Vec<&str> = state.living_members().map(|m| m.name.as_str()).collect();
    let deceased: Vec<&str> = state.deceased_members().map(|m| m.name.as_str()).collect();
    assert_eq!(living, vec!["Sam", "Alex"]);
    assert_eq!(deceased, vec!["Robert", "Ruth"]);
}

#[test]
fn relationship_choices_exclude_unset_and_round_trip() {
    assert!(!Relationship::ALL.contains(&Relationship::Unset));
    for relationship in Relationship::ALL {
        assert_eq!(
            relationship.as_str().parse::<Relationship>().expect("parse"),
            relationship
        );
    }
}

#[test]
fn only_birth_and_passing_are_dates() {
    let dates: Vec<BiographicalField> = BiographicalField::ALL
        .into_iter()
        .filter(|field| field.is_date())
        .collect();
    assert_eq!(
        dates,
        vec![BiographicalField::DateOfBirth, BiographicalField::DateOfPassing]
    );
    assert_eq!(BiographicalField::Gender.label(), "Pronouns");
}
