//! Candidate scoring and ranking.
//!
//! The weights are empirically tuned; change them and previously chosen
//! arrays change with them, so they live here as named constants.

use frete_model::{ArrayCandidate, FieldDescriptor, FieldRole};

/// Points per distinct detected role.
pub const ROLE_SCORE_WEIGHT: i32 = 2;
/// Extra points when a price role was detected.
pub const PRICE_ROLE_BONUS: i32 = 3;
/// Extra points when a carrier-name role was detected.
pub const CARRIER_ROLE_BONUS: i32 = 2;
/// Extra point when the array holds more than one record.
pub const MULTI_RECORD_BONUS: i32 = 1;

/// Scores one candidate from its detected roles and record count.
pub fn score_candidate(fields: &[FieldDescriptor], record_count: usize) -> i32 {
    let has_role = |role: FieldRole| fields.iter().any(|f| f.detected_role == Some(role));

    let distinct_roles = FieldRole::ALL
        .iter()
        .filter(|role| has_role(**role))
        .count() as i32;

    let mut score = distinct_roles * ROLE_SCORE_WEIGHT;
    if has_role(FieldRole::Price) {
        score += PRICE_ROLE_BONUS;
    }
    if has_role(FieldRole::CarrierName) {
        score += CARRIER_ROLE_BONUS;
    }
    if record_count > 1 {
        score += MULTI_RECORD_BONUS;
    }
    score
}

/// Orders candidates by descending score.
///
/// The sort is stable: ties keep discovery order, so the first-found
/// candidate wins.
pub fn rank_candidates(mut candidates: Vec<ArrayCandidate>) -> Vec<ArrayCandidate> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}
