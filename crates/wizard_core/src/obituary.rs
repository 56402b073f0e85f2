//! Assembles the obituary text from a [`FormState`].
//!
//! Every clause is optional and is appended only when the answers it depends
//! on are present. Generation never fails; missing or unreadable input just
//! yields a shorter document.

use chrono::{DateTime, NaiveDate};
use shared::{FamilyMember, FormState, LifeStoryEvent};

const TRAIT_FALLBACK: &str = "love and purpose";
const NAME_FALLBACK: &str = "They";
const MILESTONES_HEADER: &str = "Throughout their life, they achieved many milestones:\n";
const SURVIVED_BY_HEADER: &str = "They are survived by their loving family:\n";
const PRECEDED_BY_HEADER: &str = "They were preceded in death by:\n";

pub fn generate(state: &FormState) -> String {
    let mut obituary = String::new();
    push_opening(&mut obituary, state);
    push_birth(&mut obituary, state);
    push_description(&mut obituary, state);
    push_milestones(&mut obituary, &state.events);
    push_family(&mut obituary, state);
    obituary
}

/// The generated text split into its non-empty paragraphs.
pub fn generate_paragraphs(state: &FormState) -> Vec<String> {
    generate(state)
        .split("\n\n")
        .map(str::trim_end)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

/// Formats an ISO date (or the UTC date of an RFC 3339 timestamp) as
/// "March 4, 1950". Empty or unreadable input gives `None`.
pub fn format_long_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc().date()))?;
    Some(date.format("%B %-d, %Y").to_string())
}

pub fn format_milestone(event: &LifeStoryEvent) -> String {
    match event {
        LifeStoryEvent::Education {
            degree,
            year_completed,
            school_name,
        } => format!("- Graduated with a {degree} from {school_name} in {year_completed}"),
        LifeStoryEvent::Career {
            position,
            company,
            duration,
        } => format!("- Worked as a {position} at {company} from {duration}"),
        LifeStoryEvent::Achievement {
            title,
            description,
            year,
        } => format!("- Received {title} in {year}: {description}"),
        LifeStoryEvent::Marriage {
            spouse,
            location,
            date,
        } => format!("- Married {spouse} in {date} at {location}"),
    }
}

pub fn format_family_line(member: &FamilyMember) -> String {
    if member.relationship.is_unset() {
        format!("- {}", member.name)
    } else {
        format!("- {} ({})", member.name, member.relationship)
    }
}

fn push_opening(out: &mut String, state: &FormState) {
    let bio = &state.form_data;
    if bio.full_name.trim().is_empty() {
        return;
    }
    out.push_str(&bio.full_name);
    if !bio.preferred_name.is_empty() {
        out.push_str(&format!(", affectionately known as {},", bio.preferred_name));
    }
    out.push_str(" has passed away");
    if let Some(date) = format_long_date(&bio.date_of_passing) {
        out.push_str(&format!(" on {date}"));
    }
    if !bio.passing_place.is_empty() {
        out.push_str(&format!(" in {}", bio.passing_place));
    }
    out.push_str(".\n\n");
}

fn push_birth(out: &mut String, state: &FormState) {
    let bio = &state.form_data;
    let Some(born) = format_long_date(&bio.date_of_birth) else {
        return;
    };
    out.push_str(&format!("Born on {born}"));
    if !bio.birth_place.is_empty() {
        out.push_str(&format!(" in {}", bio.birth_place));
    }
    let first_name = bio
        .full_name
        .split_whitespace()
        .next()
        .unwrap_or(NAME_FALLBACK);
    out.push_str(&format!(", {first_name} lived a life filled with "));
    if state.selected_traits.is_empty() {
        out.push_str(TRAIT_FALLBACK);
    } else {
        out.push_str(&state.selected_traits.join(", "));
    }
    out.push_str(".\n\n");
}

fn push_description(out: &mut String, state: &FormState) {
    let description = &state.form_data.description;
    if !description.is_empty() {
        out.push_str(description);
        out.push_str("\n\n");
    }
}

fn push_milestones(out: &mut String, events: &[LifeStoryEvent]) {
    if events.is_empty() {
        return;
    }
    out.push_str(MILESTONES_HEADER);
    for event in events {
        out.push_str(&format_milestone(event));
        out.push('\n');
    }
    out.push('\n');
}

fn push_family(out: &mut String, state: &FormState) {
    let living: Vec<&FamilyMember> = state.living_members().collect();
    let deceased: Vec<&FamilyMember> = state.deceased_members().collect();
    push_member_list(out, SURVIVED_BY_HEADER, &living);
    push_member_list(out, PRECEDED_BY_HEADER, &deceased);
}

fn push_member_list(out: &mut String, header: &str, members: &[&FamilyMember]) {
    if members.is_empty() {
        return;
    }
    out.push_str(header);
    for member in members {
        out.push_str(&format_family_line(member));
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "tests/obituary_tests.rs"]
mod tests;
