// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BuyerProfile, CompanySize, Component, Contribution, Party, PartyDraft, PartyId, RoleKind,
    RoleProfile, ScoreBreakdown, ScoredMatch, ScoringWeights, SupplierProfile, Tag, TagSet,
};
pub use requests::{FindMatchesRequest, ListPartiesQuery, ScorePairRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, ScorePairResponse};
