//! Novelty badge classification for the analysis header.

#[cfg(test)]
#[path = "novelty_test.rs"]
mod novelty_test;

/// Qualitative novelty classes derived from the AI's novelty label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoveltyClass {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl NoveltyClass {
    /// CSS modifier suffix for the badge element.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }
}

/// Classify a novelty label by case-insensitive keyword match.
///
/// The analysis model answers in Turkish or English depending on the run, so
/// both keyword sets are accepted, checked high before medium before low.
/// Unrecognized labels (including the `"Belirsiz"` placeholder) classify as
/// [`NoveltyClass::Unknown`].
#[must_use]
pub fn classify(label: &str) -> NoveltyClass {
    let lower = label.to_lowercase();
    if lower.contains("yüksek") || lower.contains("high") {
        return NoveltyClass::High;
    }
    if lower.contains("orta") || lower.contains("medium") {
        return NoveltyClass::Medium;
    }
    if lower.contains("düşük") || lower.contains("low") {
        return NoveltyClass::Low;
    }
    NoveltyClass::Unknown
}
