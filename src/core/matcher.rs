use crate::core::{explain::reasons, scoring::score_breakdown};
use crate::models::{Party, ScoreBreakdown, ScoredMatch, ScoringWeights};

/// Result of ranking a supplier pool
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Scores suppliers against a buyer and ranks them
///
/// Holds only the weights; every call is independent.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single buyer/supplier pair
    pub fn score(&self, buyer: &Party, supplier: &Party) -> ScoreBreakdown {
        score_breakdown(buyer, supplier, &self.weights)
    }

    /// Rank suppliers for a buyer
    ///
    /// # Arguments
    /// * `buyer` - The buyer looking for suppliers
    /// * `suppliers` - Candidate suppliers, in registration order
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with matches sorted by descending score. Equal scores keep
    /// the order in which the suppliers were given.
    pub fn rank(&self, buyer: &Party, suppliers: Vec<Party>, limit: usize) -> MatchResult {
        let total_candidates = suppliers.len();

        let mut scored_matches: Vec<ScoredMatch> = suppliers
            .into_iter()
            .map(|supplier| {
                let breakdown = self.score(buyer, &supplier);
                ScoredMatch {
                    score: breakdown.total,
                    reasons: reasons(&breakdown),
                    contributions: breakdown.contributions,
                    supplier,
                }
            })
            .collect();

        // sort_by is stable
        scored_matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored_matches.truncate(limit);

        tracing::debug!(
            "Ranked {} suppliers for buyer {}, returning {}",
            total_candidates,
            buyer.id,
            scored_matches.len()
        );

        MatchResult {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank suppliers for a buyer with the default weights
pub fn rank(buyer: &Party, suppliers: Vec<Party>, limit: usize) -> Vec<ScoredMatch> {
    Matcher::with_default_weights()
        .rank(buyer, suppliers, limit)
        .matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BuyerProfile, CompanySize, PartyDraft, RoleProfile, SupplierProfile, TagSet,
    };

    fn tags(items: &[&str]) -> TagSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_buyer() -> Party {
        PartyDraft {
            name: "Kosovo Foods".to_string(),
            country: "Kosovo".to_string(),
            size: CompanySize::Small,
            sectors: tags(&["Agriculture"]),
            certs: tags(&["ISO 9001"]),
            partner_types: tags(&["buyer-supplier"]),
            role: RoleProfile::Buyer(BuyerProfile {
                needs: tags(&["packaging", "labeling"]),
                targets: tags(&["Germany", "France"]),
                needs_exporter: true,
            }),
        }
        .into_party()
    }

    fn create_supplier(name: &str, offers: &[&str], country: &str) -> Party {
        PartyDraft {
            name: name.to_string(),
            country: country.to_string(),
            size: CompanySize::Large,
            sectors: TagSet::new(),
            certs: TagSet::new(),
            partner_types: TagSet::new(),
            role: RoleProfile::Supplier(SupplierProfile {
                offers: tags(offers),
                export_ready: false,
            }),
        }
        .into_party()
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let buyer = create_buyer();

        let suppliers = vec![
            create_supplier("none", &[], "USA"),
            create_supplier("full", &["packaging", "labeling"], "Germany"),
            create_supplier("half", &["packaging"], "UK"),
        ];

        let result = matcher.rank(&buyer, suppliers, 10);

        assert_eq!(result.total_candidates, 3);
        let names: Vec<&str> = result.matches.iter().map(|m| m.supplier.name.as_str()).collect();
        assert_eq!(names, vec!["full", "half", "none"]);
        for i in 1..result.matches.len() {
            assert!(result.matches[i - 1].score >= result.matches[i].score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let buyer = create_buyer();
        let suppliers = vec![
            create_supplier("a", &["packaging"], "USA"),
            create_supplier("b", &["labeling"], "USA"),
            create_supplier("c", &["packaging"], "USA"),
        ];

        let matches = rank(&buyer, suppliers, 3);
        let names: Vec<&str> = matches.iter().map(|m| m.supplier.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_respects_limit() {
        let buyer = create_buyer();
        let suppliers: Vec<Party> = (0..20)
            .map(|i| create_supplier(&i.to_string(), &["packaging"], "USA"))
            .collect();

        assert_eq!(rank(&buyer, suppliers.clone(), 5).len(), 5);
        assert!(rank(&buyer, suppliers, 0).is_empty());
    }

    #[test]
    fn test_short_list_returns_everything() {
        let buyer = create_buyer();
        let suppliers = vec![create_supplier("only", &[], "USA")];

        let matches = rank(&buyer, suppliers, 10);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 8.0);
        assert_eq!(matches[0].contributions.len(), 8);
    }
}
