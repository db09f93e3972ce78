use thiserror::Error;
use tokio::sync::RwLock;
use crate::models::{
    BuyerProfile, CompanySize, Party, PartyDraft, PartyId, RoleKind, RoleProfile,
    SupplierProfile, TagSet,
};

/// Errors that can occur when registering or looking up parties
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Party not found: {0}")]
    NotFound(PartyId),

    #[error("Party {id} is not a {expected}")]
    WrongRole { id: PartyId, expected: RoleKind },

    #[error("Unknown value for {field}: {value}")]
    UnknownTag { field: String, value: String },
}

/// In-memory store of registered companies
///
/// Owned by the application state and handed to handlers as an `Arc`. Parties
/// are kept in registration order; the scorer only ever sees clones.
#[derive(Debug, Default)]
pub struct PartyRegistry {
    parties: RwLock<Vec<Party>>,
}

impl PartyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a company and assign it a fresh id
    pub async fn register(&self, draft: PartyDraft) -> Party {
        let party = draft.into_party();
        self.parties.write().await.push(party.clone());

        tracing::info!(
            "Registered {} {} ({})",
            party.kind(),
            party.id,
            party.name
        );
        party
    }

    pub async fn get(&self, id: &PartyId) -> Result<Party, RegistryError> {
        self.parties
            .read()
            .await
            .iter()
            .find(|party| &party.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound(*id))
    }

    /// Look up a party that must be a buyer
    pub async fn buyer(&self, id: &PartyId) -> Result<Party, RegistryError> {
        let party = self.get(id).await?;
        if party.is_buyer() {
            Ok(party)
        } else {
            Err(RegistryError::WrongRole {
                id: *id,
                expected: RoleKind::Buyer,
            })
        }
    }

    /// All parties, optionally restricted to one role
    pub async fn list(&self, role: Option<RoleKind>) -> Vec<Party> {
        self.parties
            .read()
            .await
            .iter()
            .filter(|party| role.map_or(true, |kind| party.kind() == kind))
            .cloned()
            .collect()
    }

    pub async fn buyers(&self) -> Vec<Party> {
        self.list(Some(RoleKind::Buyer)).await
    }

    pub async fn suppliers(&self) -> Vec<Party> {
        self.list(Some(RoleKind::Supplier)).await
    }

    pub async fn len(&self) -> usize {
        self.parties.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.parties.read().await.is_empty()
    }

    /// Register the demo buyer and suppliers
    pub async fn seed_demo(&self) {
        for draft in demo_parties() {
            self.register(draft).await;
        }
    }
}

fn tags(items: &[&str]) -> TagSet {
    items.iter().map(|s| s.to_string()).collect()
}

fn supplier_draft(
    name: &str,
    country: &str,
    size: CompanySize,
    sectors: &[&str],
    offers: &[&str],
    export_ready: bool,
) -> PartyDraft {
    PartyDraft {
        name: name.to_string(),
        country: country.to_string(),
        size,
        sectors: tags(sectors),
        certs: tags(&["ISO 9001"]),
        partner_types: tags(&["buyer-supplier"]),
        role: RoleProfile::Supplier(SupplierProfile {
            offers: tags(offers),
            export_ready,
        }),
    }
}

/// A Kosovo buyer and a few suppliers from its target markets
pub fn demo_parties() -> Vec<PartyDraft> {
    vec![
        PartyDraft {
            name: "Prishtina Agro".to_string(),
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
        },
        supplier_draft(
            "Rhein Verpackung",
            "Germany",
            CompanySize::Medium,
            &["Agriculture", "Manufacturing"],
            &["packaging", "labeling"],
            true,
        ),
        supplier_draft(
            "Lyon Logistique",
            "France",
            CompanySize::Small,
            &["Agriculture"],
            &["logistics"],
            true,
        ),
        supplier_draft(
            "Midwest Labels",
            "USA",
            CompanySize::Large,
            &["Textiles"],
            &["labeling"],
            false,
        ),
        supplier_draft(
            "Thames IT",
            "UK",
            CompanySize::Small,
            &["ICT"],
            &["IT services"],
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_assigns_distinct_ids() {
        let registry = PartyRegistry::new();
        let drafts = demo_parties();

        let first = registry.register(drafts[0].clone()).await;
        let second = registry.register(drafts[0].clone()).await;

        assert_ne!(first.id, second.id);
        assert_eq!(registry.len().await, 2);
        assert_eq!(registry.get(&first.id).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_pools_partitioned_by_role() {
        let registry = PartyRegistry::new();
        registry.seed_demo().await;

        let buyers = registry.buyers().await;
        let suppliers = registry.suppliers().await;

        assert_eq!(buyers.len(), 1);
        assert_eq!(suppliers.len(), 4);
        assert!(suppliers.iter().all(Party::is_supplier));
        assert_eq!(suppliers[0].name, "Rhein Verpackung");
        assert_eq!(registry.list(None).await.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_party() {
        let registry = PartyRegistry::new();
        assert!(registry.is_empty().await);
        assert!(matches!(
            registry.get(&PartyId::new()).await,
            Err(RegistryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_buyer_lookup_checks_role() {
        let registry = PartyRegistry::new();
        registry.seed_demo().await;
        let supplier = registry.suppliers().await.remove(0);

        assert!(matches!(
            registry.buyer(&supplier.id).await,
            Err(RegistryError::WrongRole { expected: RoleKind::Buyer, .. })
        ));
    }
}
