//! Life story milestones. Each kind carries its own record; the JSON shape is
//! `{"type": "<kind>", "details": {...}}`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Education,
    Career,
    Achievement,
    Marriage,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Education,
        EventKind::Career,
        EventKind::Achievement,
        EventKind::Marriage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Education => "education",
            EventKind::Career => "career",
            EventKind::Achievement => "achievement",
            EventKind::Marriage => "marriage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Education => "Education",
            EventKind::Career => "Careers",
            EventKind::Achievement => "Achievement",
            EventKind::Marriage => "Marriage",
        }
    }

    /// Detail keys in the order the entry form asks for them.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            EventKind::Education => &["degree", "yearCompleted", "schoolName"],
            EventKind::Career => &["position", "company", "duration"],
            EventKind::Achievement => &["title", "description", "year"],
            EventKind::Marriage => &["spouse", "location", "date"],
        }
    }

    /// An event of this kind with every field empty, ready for editing.
    pub fn blank(self) -> LifeStoryEvent {
        match self {
            EventKind::Education => LifeStoryEvent::Education {
                degree: String::new(),
                year_completed: String::new(),
                school_name: String::new(),
            },
            EventKind::Career => LifeStoryEvent::Career {
                position: String::new(),
                company: String::new(),
                duration: String::new(),
            },
            EventKind::Achievement => LifeStoryEvent::Achievement {
                title: String::new(),
                description: String::new(),
                year: String::new(),
            },
            EventKind::Marriage => LifeStoryEvent::Marriage {
                spouse: String::new(),
                location: String::new(),
                date: String::new(),
            },
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = WizardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| WizardError::unknown_event_kind(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum LifeStoryEvent {
    #[serde(rename_all = "camelCase")]
    Education {
        #[serde(default)]
        degree: String,
        #[serde(default)]
        year_completed: String,
        #[serde(default)]
        school_name: String,
    },
    #[serde(rename_all = "camelCase")]
    Career {
        #[serde(default)]
        position: String,
        #[serde(default)]
        company: String,
        #[serde(default)]
        duration: String,
    },
    #[serde(rename_all = "camelCase")]
    Achievement {
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        year: String,
    },
    #[serde(rename_all = "camelCase")]
    Marriage {
        #[serde(default)]
        spouse: String,
        #[serde(default)]
        location: String,
        #[serde(default)]
        date: String,
    },
}

/// The three lines an event card shows: when, what, and where/with whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSummary<'a> {
    pub when: &'a str,
    pub headline: &'a str,
    pub detail: &'a str,
}

impl LifeStoryEvent {
    pub fn education(
        degree: impl Into<String>,
        school_name: impl Into<String>,
        year_completed: impl Into<String>,
    ) -> Self {
        Self::Education {
            degree: degree.into(),
            year_completed: year_completed.into(),
            school_name: school_name.into(),
        }
    }

    pub fn career(
        position: impl Into<String>,
        company: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self::Career {
            position: position.into(),
            company: company.into(),
            duration: duration.into(),
        }
    }

    pub fn achievement(
        title: impl Into<String>,
        year: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::Achievement {
            title: title.into(),
            description: description.into(),
            year: year.into(),
        }
    }

    pub fn marriage(
        spouse: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::Marriage {
            spouse: spouse.into(),
            location: location.into(),
            date: date.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Education { .. } => EventKind::Education,
            Self::Career { .. } => EventKind::Career,
            Self::Achievement { .. } => EventKind::Achievement,
            Self::Marriage { .. } => EventKind::Marriage,
        }
    }

    /// Values in the same order as [`EventKind::field_names`].
    pub fn values(&self) -> [&str; 3] {
        match self {
            Self::Education {
                degree,
                year_completed,
                school_name,
            } => [degree.as_str(), year_completed.as_str(), school_name.as_str()],
            Self::Career {
                position,
                company,
                duration,
            } => [position.as_str(), company.as_str(), duration.as_str()],
            Self::Achievement {
                title,
                description,
                year,
            } => [title.as_str(), description.as_str(), year.as_str()],
            Self::Marriage {
                spouse,
                location,
                date,
            } => [spouse.as_str(), location.as_str(), date.as_str()],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.values().iter().all(|value| !value.trim().is_empty())
    }

    pub fn summary(&self) -> EventSummary<'_> {
        match self {
            Self::Education {
                degree,
                year_completed,
                school_name,
            } => EventSummary {
                when: year_completed,
                headline: degree,
                detail: school_name,
            },
            Self::Career {
                position,
                company,
                duration,
            } => EventSummary {
                when: duration,
                headline: position,
                detail: company,
            },
            Self::Achievement {
                title,
                description,
                year,
            } => EventSummary {
                when: year,
                headline: title,
                detail: description,
            },
            Self::Marriage {
                spouse,
                location,
                date,
            } => EventSummary {
                when: date,
                headline: spouse,
                detail: location,
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
