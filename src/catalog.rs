//! Fixed content: motivational messages, breathing patterns and tips.

use thiserror::Error;

/// Number of phases in every breathing pattern.
pub const PHASE_COUNT: usize = 4;

pub const DEFAULT_MESSAGES: [&str; 15] = [
    "Take a deep breath. You've got this.",
    "Every storm runs out of rain. This too shall pass.",
    "You are stronger than you think.",
    "One step at a time. Progress, not perfection.",
    "Be kind to yourself. You're doing the best you can.",
    "Breathe in peace, breathe out stress.",
    "You have survived 100% of your worst days.",
    "Rest is not a reward. It's a necessity.",
    "Your mental health matters more than any deadline.",
    "It's okay to take a break. You deserve it.",
    "You are enough, exactly as you are.",
    "Let go of what you can't control.",
    "Small steps are still steps forward.",
    "You are worthy of calm and peace.",
    "This moment is temporary. Keep going.",
];

/// A named preset of phase durations (seconds) and labels.
///
/// An empty label means the phase shows no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingPattern {
    pub name: &'static str,
    pub durations: [u32; PHASE_COUNT],
    pub labels: [&'static str; PHASE_COUNT],
}

impl BreathingPattern {
    pub fn duration(&self, phase: usize) -> u32 {
        self.durations[phase]
    }

    pub fn label(&self, phase: usize) -> &'static str {
        self.labels[phase]
    }

    /// Length of one full breath in seconds.
    pub fn cycle_seconds(&self) -> u32 {
        self.durations.iter().sum()
    }

    /// Durations joined with dashes, e.g. `4-7-8-0`.
    pub fn timing(&self) -> String {
        self.durations
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

pub const PATTERNS: [BreathingPattern; 3] = [
    BreathingPattern {
        name: "Box Breathing",
        durations: [4, 4, 4, 4],
        labels: ["Breathe In", "Hold", "Breathe Out", "Hold"],
    },
    BreathingPattern {
        name: "4-7-8 Technique",
        durations: [4, 7, 8, 0],
        labels: ["Breathe In", "Hold", "Breathe Out", ""],
    },
    BreathingPattern {
        name: "Simple Breathing",
        durations: [5, 0, 5, 0],
        labels: ["Breathe In", "", "Breathe Out", ""],
    },
];

/// Panics when `index` is outside the catalog.
pub fn assert_pattern(index: usize) {
    assert!(
        index < PATTERNS.len(),
        "pattern index {} out of range (catalog has {})",
        index,
        PATTERNS.len()
    );
}

/// Returns the catalog pattern at `index`. Panics outside the catalog.
pub fn pattern(index: usize) -> &'static BreathingPattern {
    assert_pattern(index);
    &PATTERNS[index]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternLookupError {
    #[error("Unknown breathing pattern '{0}'")]
    Unknown(String),
}

/// Resolves a pattern by case-insensitive name or 1-based catalog number.
pub fn find_pattern(query: &str) -> Result<usize, PatternLookupError> {
    let trimmed = query.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        if (1..=PATTERNS.len()).contains(&number) {
            return Ok(number - 1);
        }
        return Err(PatternLookupError::Unknown(query.to_string()));
    }

    PATTERNS
        .iter()
        .position(|p| p.name.eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| PatternLookupError::Unknown(query.to_string()))
}

/// One line per pattern: `1. Box Breathing  4-4-4-4`.
pub fn pattern_listing() -> Vec<String> {
    PATTERNS
        .iter()
        .enumerate()
        .map(|(idx, p)| format!("{}. {}  {}", idx + 1, p.name, p.timing()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIPS: [Tip; 3] = [
    Tip {
        title: "Take Breaks",
        body: "Regular breaks improve focus and reduce stress",
    },
    Tip {
        title: "Practice Gratitude",
        body: "Focus on three things you're grateful for today",
    },
    Tip {
        title: "Be Present",
        body: "Ground yourself in the current moment",
    },
];

/// Ordered, non-empty list of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageList {
    messages: Vec<String>,
}

impl MessageList {
    /// Returns `None` for an empty list.
    pub fn new(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.messages[index]
    }
}

impl Default for MessageList {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_presets() {
        assert_eq!(PATTERNS[0].durations, [4, 4, 4, 4]);
        assert_eq!(PATTERNS[1].durations, [4, 7, 8, 0]);
        assert_eq!(PATTERNS[2].durations, [5, 0, 5, 0]);
        assert_eq!(PATTERNS[1].labels[3], "");
    }

    #[test]
    fn every_pattern_has_positive_cycle() {
        for p in PATTERNS.iter() {
            assert!(p.cycle_seconds() > 0, "{} has an empty cycle", p.name);
        }
    }

    #[test]
    fn find_pattern_by_name_or_number() {
        assert_eq!(find_pattern("box breathing"), Ok(0));
        assert_eq!(find_pattern("4-7-8 Technique"), Ok(1));
        assert_eq!(find_pattern("3"), Ok(2));
        assert!(find_pattern("0").is_err());
        assert!(find_pattern("4").is_err());
        assert_eq!(
            find_pattern("nope"),
            Err(PatternLookupError::Unknown("nope".to_string()))
        );
    }

    #[test]
    fn listing_shows_timing() {
        let listing = pattern_listing();
        assert_eq!(listing[1], "2. 4-7-8 Technique  4-7-8-0");
    }

    #[test]
    fn empty_message_list_rejected() {
        assert!(MessageList::new(Vec::new()).is_none());
        assert_eq!(MessageList::default().len(), 15);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn pattern_out_of_range_panics() {
        pattern(3);
    }

    #[test]
    fn assert_pattern_accepts_every_catalog_index() {
        for index in 0..PATTERNS.len() {
            assert_pattern(index);
        }
    }

    #[test]
    #[should_panic(expected = "pattern index 3 out of range")]
    fn assert_pattern_rejects_past_the_end() {
        assert_pattern(PATTERNS.len());
    }
}
