//! Presentation ordering for resolved labels.

use recy_common::ResolvedLabel;

/// Order labels by category priority, keeping input order within a priority.
///
/// Recyclable, Compost, Special Disposal, then everything else (Landfill,
/// Unknown, and excluded labels). The input slice is left untouched.
pub fn rank(resolved: &[ResolvedLabel]) -> Vec<ResolvedLabel> {
    let mut ranked = resolved.to_vec();
    // sort_by_key is stable.
    ranked.sort_by_key(ResolvedLabel::priority);
    ranked
}

/// Consuming variant of [`rank`] for pipelines that own the labels.
pub fn rank_owned(mut resolved: Vec<ResolvedLabel>) -> Vec<ResolvedLabel> {
    resolved.sort_by_key(ResolvedLabel::priority);
    resolved
}
