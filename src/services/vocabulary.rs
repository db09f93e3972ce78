use serde::{Deserialize, Serialize};
use crate::models::{CompanySize, PartyDraft, RoleProfile, TagSet};
use crate::services::registry::RegistryError;

/// Closed tag vocabularies shared by buyer and supplier input
///
/// Buyers and suppliers pick from the same lists, so intersecting their sets
/// compares like with like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub products: TagSet,
    pub sectors: TagSet,
    pub countries: TagSet,
    pub certifications: TagSet,
    pub partner_types: TagSet,
    pub sizes: Vec<CompanySize>,
}

fn tag_set(items: &[&str]) -> TagSet {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            products: tag_set(&["packaging", "IT services", "logistics", "labeling"]),
            sectors: tag_set(&["Agriculture", "Textiles", "ICT", "Manufacturing"]),
            countries: tag_set(&["Germany", "France", "USA", "UK", "Kosovo"]),
            certifications: tag_set(&["ISO 9001", "GOTS", "CE"]),
            partner_types: tag_set(&["buyer-supplier", "JV", "reseller"]),
            sizes: CompanySize::ALL.to_vec(),
        }
    }
}

impl Vocabulary {
    /// Check every tag of a draft against the vocabularies
    ///
    /// Returns the first tag that is not part of its vocabulary.
    pub fn check(&self, draft: &PartyDraft) -> Result<(), RegistryError> {
        check_one("country", &draft.country, &self.countries)?;
        check_all("sectors", &draft.sectors, &self.sectors)?;
        check_all("certs", &draft.certs, &self.certifications)?;
        check_all("partnerTypes", &draft.partner_types, &self.partner_types)?;

        match &draft.role {
            RoleProfile::Buyer(buyer) => {
                check_all("needs", &buyer.needs, &self.products)?;
                check_all("targets", &buyer.targets, &self.countries)?;
            }
            RoleProfile::Supplier(supplier) => {
                check_all("offers", &supplier.offers, &self.products)?;
            }
        }

        Ok(())
    }
}

fn check_one(field: &str, value: &str, allowed: &TagSet) -> Result<(), RegistryError> {
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(RegistryError::UnknownTag {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_all(field: &str, values: &TagSet, allowed: &TagSet) -> Result<(), RegistryError> {
    values
        .iter()
        .try_for_each(|value| check_one(field, value, allowed))
}
