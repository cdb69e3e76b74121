//! Candidate ranking for draws.

use rand::{seq::SliceRandom, Rng};

use crate::model::draw::{Candidate, RankedCandidate};

/// Ranks draw candidates, best first.
///
/// Ordering, each key only breaking ties of the previous one:
/// 1. priority weight, higher first
/// 2. current win count, lower first
/// 3. roll in `1..=draw_max`, higher first
///
/// Candidates are shuffled before the stable sort so candidates equal on all three keys end
/// up in uniformly random order.
pub fn rank_candidates<R: Rng + ?Sized>(
    mut candidates: Vec<Candidate>,
    draw_max: u32,
    rng: &mut R,
) -> Vec<RankedCandidate> {
    let draw_max = draw_max.max(1);

    candidates.shuffle(rng);

    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|candidate| RankedCandidate {
            user_id: candidate.user_id,
            reason: candidate.reason,
            wins: candidate.wins,
            roll: rng.random_range(1..=draw_max),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.reason
            .weight()
            .cmp(&a.reason.weight())
            .then(a.wins.cmp(&b.wins))
            .then(b.roll.cmp(&a.roll))
    });

    ranked
}
