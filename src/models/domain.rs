use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;
use validator::Validate;

/// Tag drawn from one of the shared vocabularies (sector, product, country...)
pub type Tag = String;

/// Set of tags; ordered so that comparisons and JSON output are deterministic
pub type TagSet = BTreeSet<Tag>;

static EMPTY_TAGS: TagSet = BTreeSet::new();

/// Unique party identifier, assigned once at registration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(pub Uuid);

impl PartyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PartyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for PartyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Company size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [
        CompanySize::Micro,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
    ];
}

/// Role discriminant without the role-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Buyer,
    Supplier,
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleKind::Buyer => f.write_str("buyer"),
            RoleKind::Supplier => f.write_str("supplier"),
        }
    }
}

/// What a buyer is looking for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerProfile {
    #[serde(default)]
    pub needs: TagSet,
    #[serde(default)]
    pub targets: TagSet,
    #[serde(default)]
    pub needs_exporter: bool,
}

/// What a supplier provides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProfile {
    #[serde(default)]
    pub offers: TagSet,
    #[serde(default)]
    pub export_ready: bool,
}

/// Role-specific part of a party. Only the fields valid for the role exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Buyer(BuyerProfile),
    Supplier(SupplierProfile),
}

impl RoleProfile {
    pub fn kind(&self) -> RoleKind {
        match self {
            RoleProfile::Buyer(_) => RoleKind::Buyer,
            RoleProfile::Supplier(_) => RoleKind::Supplier,
        }
    }
}

/// Company profile as entered on the registration form, before it has an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartyDraft {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub country: Tag,
    pub size: CompanySize,
    #[serde(default)]
    pub sectors: TagSet,
    #[serde(default)]
    pub certs: TagSet,
    #[serde(default)]
    pub partner_types: TagSet,
    #[serde(flatten)]
    pub role: RoleProfile,
}

impl PartyDraft {
    /// Turn the draft into a registered party with a fresh id
    pub fn into_party(self) -> Party {
        Party {
            id: PartyId::new(),
            name: self.name,
            country: self.country,
            size: self.size,
            sectors: self.sectors,
            certs: self.certs,
            partner_types: self.partner_types,
            role: self.role,
            registered_at: chrono::Utc::now(),
        }
    }
}

/// Registered company, either a buyer or a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub country: Tag,
    pub size: CompanySize,
    #[serde(default)]
    pub sectors: TagSet,
    #[serde(default)]
    pub certs: TagSet,
    #[serde(default)]
    pub partner_types: TagSet,
    #[serde(flatten)]
    pub role: RoleProfile,
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

impl Party {
    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    pub fn is_buyer(&self) -> bool {
        self.kind() == RoleKind::Buyer
    }

    pub fn is_supplier(&self) -> bool {
        self.kind() == RoleKind::Supplier
    }

    /// Products/services required; empty unless the party is a buyer
    pub fn needs(&self) -> &TagSet {
        match &self.role {
            RoleProfile::Buyer(buyer) => &buyer.needs,
            RoleProfile::Supplier(_) => &EMPTY_TAGS,
        }
    }

    /// Countries sourced from; empty unless the party is a buyer
    pub fn targets(&self) -> &TagSet {
        match &self.role {
            RoleProfile::Buyer(buyer) => &buyer.targets,
            RoleProfile::Supplier(_) => &EMPTY_TAGS,
        }
    }

    pub fn needs_exporter(&self) -> bool {
        matches!(&self.role, RoleProfile::Buyer(buyer) if buyer.needs_exporter)
    }

    /// Products/services provided; empty unless the party is a supplier
    pub fn offers(&self) -> &TagSet {
        match &self.role {
            RoleProfile::Supplier(supplier) => &supplier.offers,
            RoleProfile::Buyer(_) => &EMPTY_TAGS,
        }
    }

    pub fn export_ready(&self) -> bool {
        matches!(&self.role, RoleProfile::Supplier(supplier) if supplier.export_ready)
    }
}

/// Scoring components, in the order their reasons are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Component {
    Product,
    Sector,
    Geography,
    Certifications,
    Size,
    Export,
    Partnership,
    Activity,
}

/// One weighted component of a match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub component: Component,
    pub weight: f64,
    /// Fraction of the weight earned, 0.0 to 1.0
    pub ratio: f64,
    pub points: f64,
    /// Whether this component justifies a reason in the explanation
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,
}

/// Score plus the per-component contributions it was summed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total: f64,
    pub contributions: Vec<Contribution>,
}

/// Ranked supplier for a buyer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub supplier: Party,
    pub score: f64,
    pub reasons: Vec<String>,
    pub contributions: Vec<Contribution>,
}

/// Scoring weights (points out of 100 per component)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub product: f64,
    pub sector: f64,
    pub geography: f64,
    pub certifications: f64,
    pub size: f64,
    pub export: f64,
    pub partnership: f64,
    pub activity: f64,
    /// Share of the activity weight granted to every supplier until a real
    /// recency signal exists
    pub activity_credit: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.product
            + self.sector
            + self.geography
            + self.certifications
            + self.size
            + self.export
            + self.partnership
            + self.activity
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            product: 35.0,
            sector: 15.0,
            geography: 10.0,
            certifications: 10.0,
            size: 5.0,
            export: 5.0,
            partnership: 10.0,
            activity: 10.0,
            activity_credit: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tags(items: &[&str]) -> TagSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_weights_sum_to_100() {
        assert_eq!(ScoringWeights::default().total(), 100.0);
    }

    #[test]
    fn test_role_fields_hidden_for_other_role() {
        let supplier = PartyDraft {
            name: "Acme".to_string(),
            country: "Germany".to_string(),
            size: CompanySize::Small,
            sectors: tags(&["ICT"]),
            certs: TagSet::new(),
            partner_types: TagSet::new(),
            role: RoleProfile::Supplier(SupplierProfile {
                offers: tags(&["packaging"]),
                export_ready: true,
            }),
        }
        .into_party();

        assert!(supplier.is_supplier());
        assert!(supplier.needs().is_empty());
        assert!(supplier.targets().is_empty());
        assert!(!supplier.needs_exporter());
        assert_eq!(supplier.offers(), &tags(&["packaging"]));
        assert!(supplier.export_ready());
    }

    #[test]
    fn test_draft_deserializes_with_role_tag() {
        let draft: PartyDraft = serde_json::from_value(json!({
            "name": "Kosovo Foods",
            "country": "Kosovo",
            "size": "medium",
            "sectors": ["Agriculture", "Agriculture"],
            "role": "buyer",
            "needs": ["packaging"],
            "targets": ["Germany"],
            "needsExporter": true
        }))
        .unwrap();

        assert_eq!(draft.size, CompanySize::Medium);
        assert_eq!(draft.sectors.len(), 1);
        match draft.role {
            RoleProfile::Buyer(buyer) => {
                assert!(buyer.needs_exporter);
                assert_eq!(buyer.targets, tags(&["Germany"]));
            }
            RoleProfile::Supplier(_) => panic!("expected a buyer"),
        }
    }

    #[test]
    fn test_party_id_parse() {
        let id = PartyId::new();
        let parsed: PartyId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<PartyId>().is_err());
    }
}
