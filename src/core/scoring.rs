use crate::core::{explain::reasons, similarity::similarity};
use crate::models::{Component, Contribution, Party, ScoreBreakdown, ScoringWeights};

/// Calculate a match score (0-100) and its explanation for a buyer/supplier pair
///
/// Scoring formula (default weights):
/// score = (
///     product_similarity * 35 +     # needs vs offers
///     sector_similarity * 15 +
///     in_target_market * 10 +       # supplier country in buyer targets
///     cert_similarity * 10 +
///     same_size * 5 +
///     export_ready * 5 +            # only when the buyer needs an exporter
///     partnership_similarity * 10 +
///     10 * 0.8                      # activity credit, unconditional
/// )
pub fn calculate_match_score(
    buyer: &Party,
    supplier: &Party,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let breakdown = score_breakdown(buyer, supplier, weights);
    let reasons = reasons(&breakdown);
    (breakdown.total, reasons)
}

/// Score a pair with the default weights
pub fn score(buyer: &Party, supplier: &Party) -> (f64, Vec<String>) {
    calculate_match_score(buyer, supplier, &ScoringWeights::default())
}

/// Compute every component contribution and the rounded total
///
/// Contributions are listed in reporting order: product, sector, geography,
/// certifications, size, export, partnership, activity.
pub fn score_breakdown(
    buyer: &Party,
    supplier: &Party,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let in_target_market = buyer.targets().contains(&supplier.country);

    let contributions = vec![
        ratio(
            Component::Product,
            weights.product,
            similarity(buyer.needs(), supplier.offers()),
        ),
        ratio(
            Component::Sector,
            weights.sector,
            similarity(&buyer.sectors, &supplier.sectors),
        ),
        Contribution {
            detail: Some(supplier.country.clone()),
            ..flag(Component::Geography, weights.geography, in_target_market)
        },
        ratio(
            Component::Certifications,
            weights.certifications,
            similarity(&buyer.certs, &supplier.certs),
        ),
        flag(Component::Size, weights.size, buyer.size == supplier.size),
        flag(
            Component::Export,
            weights.export,
            buyer.needs_exporter() && supplier.export_ready(),
        ),
        ratio(
            Component::Partnership,
            weights.partnership,
            similarity(&buyer.partner_types, &supplier.partner_types),
        ),
        Contribution {
            matched: true,
            ..ratio(Component::Activity, weights.activity, weights.activity_credit)
        },
    ];

    let sum: f64 = contributions.iter().map(|c| c.points).sum();

    ScoreBreakdown {
        total: round2(sum).clamp(0.0, 100.0),
        contributions,
    }
}

/// Weight scaled by a similarity ratio; explained only if it earned points
#[inline]
fn ratio(component: Component, weight: f64, ratio: f64) -> Contribution {
    let points = weight * ratio;
    Contribution {
        component,
        weight,
        ratio,
        points,
        matched: points > 0.0,
        detail: None,
    }
}

/// All-or-nothing component; explained whenever the condition holds
#[inline]
fn flag(component: Component, weight: f64, condition: bool) -> Contribution {
    let ratio = if condition { 1.0 } else { 0.0 };
    Contribution {
        component,
        weight,
        ratio,
        points: weight * ratio,
        matched: condition,
        detail: None,
    }
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
