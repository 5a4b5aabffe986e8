//! Winner selection.
//!
//! Winners are drawn uniformly without replacement: each round picks a random index in
//! the remaining pool and swap-removes it, so a draw of `k` winners costs `O(n + k)`.

use rand::Rng;

use crate::model::giveaway::ParticipantId;

/// Draws up to `winner_count` distinct winners from `participants`.
///
/// The result has `min(winner_count, participants.len())` entries, contains no
/// duplicates and only IDs from the input. The same input and the same random source
/// state always produce the same draw. An empty pool yields an empty result.
///
/// # Arguments
/// - `participants` - Candidate pool, assumed duplicate-free
/// - `winner_count` - Requested number of winners
/// - `rng` - Random source
///
/// # Returns
/// - `Vec<ParticipantId>` - Winners in draw order
pub fn draw_winners<R: Rng + ?Sized>(
    participants: &[ParticipantId],
    winner_count: usize,
    rng: &mut R,
) -> Vec<ParticipantId> {
    let mut pool = participants.to_vec();
    let target = winner_count.min(pool.len());
    let mut winners = Vec::with_capacity(target);

    while winners.len() < target {
        let index = rng.random_range(0..pool.len());
        winners.push(pool.swap_remove(index));
    }

    winners
}
