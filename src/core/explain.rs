use crate::models::{Component, Contribution, ScoreBreakdown};

/// Render the matched contributions of a breakdown as reason strings
///
/// Reasons keep the order of the contributions, so identical inputs always
/// produce the same explanation.
pub fn reasons(breakdown: &ScoreBreakdown) -> Vec<String> {
    breakdown
        .contributions
        .iter()
        .filter_map(describe)
        .collect()
}

/// Human-readable reason for a single contribution, if it earned one
pub fn describe(contribution: &Contribution) -> Option<String> {
    if !contribution.matched {
        return None;
    }

    let text = match contribution.component {
        Component::Product => "They offer what you need.".to_string(),
        Component::Sector => "You're in compatible sectors.".to_string(),
        Component::Geography => match &contribution.detail {
            Some(country) => format!("They are in your target market: {}.", country),
            None => "They are in your target market.".to_string(),
        },
        Component::Certifications => "You share similar certifications.".to_string(),
        Component::Size => "You're similar in size.".to_string(),
        Component::Export => "They are export-ready.".to_string(),
        Component::Partnership => "They're open to the same partnership type.".to_string(),
        Component::Activity => "They are recently active.".to_string(),
    };

    Some(text)
}
