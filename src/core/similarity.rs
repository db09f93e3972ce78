use std::collections::BTreeSet;

/// Jaccard index of two tag sets: |a ∩ b| / |a ∪ b|
///
/// An empty set on either side yields 0.0. A profile that declares nothing
/// for an attribute never matches on it.
///
/// # Returns
/// Similarity in the range 0.0 to 1.0
#[inline]
pub fn similarity<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;

    shared as f64 / union as f64
}
