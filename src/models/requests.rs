use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{PartyDraft, PartyId, RoleKind};

/// Request to find the top supplier matches for a registered buyer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(alias = "buyer_id", rename = "buyerId")]
    pub buyer_id: PartyId,
    #[validate(range(max = 1000))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a buyer/supplier pair that is not registered
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorePairRequest {
    #[validate(nested)]
    pub buyer: PartyDraft,
    #[validate(nested)]
    pub supplier: PartyDraft,
}

/// Query parameters for listing parties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPartiesQuery {
    #[serde(default)]
    pub role: Option<RoleKind>,
}
