use super::record::Record;
use std::cmp::Ordering;

/// Business priority of a division, derived from its uppercased prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DivisionTier {
    Mens = 1,
    Womens = 2,
    Kids = 3,
    Unranked = 4,
}

impl DivisionTier {
    /// Classifies an already uppercased division name.
    pub fn classify(normalized: &str) -> Self {
        // "WOMENS" does not start with "MENS", so prefix order is irrelevant here.
        if normalized.starts_with("MENS") {
            DivisionTier::Mens
        } else if normalized.starts_with("WOMENS") {
            DivisionTier::Womens
        } else if normalized.starts_with("KIDS") {
            DivisionTier::Kids
        } else {
            DivisionTier::Unranked
        }
    }
}

/// Precomputed leading sort key: tier first, then the uppercased name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DivisionKey {
    tier: DivisionTier,
    normalized: String,
}

impl DivisionKey {
    pub fn new(division: &str) -> Self {
        let normalized = division.to_uppercase();
        let tier = DivisionTier::classify(&normalized);
        Self { tier, normalized }
    }

    pub fn tier(&self) -> DivisionTier {
        self.tier
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Orders two records that already compare equal on division.
///
/// Grouping keys ascend, gate date descends (time of day included) with missing
/// dates last, and the style number settles the rest.
pub fn compare_within_division(a: &Record, b: &Record) -> Ordering {
    a.group_section
        .cmp(&b.group_section)
        .then_with(|| a.department.cmp(&b.department))
        .then_with(|| a.sub_department.cmp(&b.sub_department))
        .then_with(|| b.gate_timestamp().cmp(&a.gate_timestamp()))
        .then_with(|| a.style_number.cmp(&b.style_number))
}

/// Full catalog ordering of two records.
pub fn compare_records(a: &Record, b: &Record) -> Ordering {
    DivisionKey::new(&a.division)
        .cmp(&DivisionKey::new(&b.division))
        .then_with(|| compare_within_division(a, b))
}
