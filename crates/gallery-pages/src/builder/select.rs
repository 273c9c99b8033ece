//! Featured video selection
//!
//! Scans the leading window of the pool for the video whose aspect ratio is
//! closest to the target. Distances within [`DISTANCE_EPSILON`] of each other
//! tie, and ties go to the earliest pool position.

use crate::constants::{DISTANCE_EPSILON, TARGET_VIDEO_ASPECT_RATIO};
use crate::types::Item;

use super::Pool;

/// Distance from an item's effective aspect ratio to the 9:16 target.
pub fn target_distance(item: &Item) -> f64 {
    (item.effective_aspect_ratio() - TARGET_VIDEO_ASPECT_RATIO).abs()
}

/// Pick the best video among the first `lookahead` pooled items.
///
/// Returns the input index of the chosen video, or `None` when the window
/// holds no video. A `lookahead` of zero examines nothing.
pub fn select_video(pool: &Pool<'_>, lookahead: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, item) in pool.iter().take(lookahead) {
        if !item.is_video() {
            continue;
        }
        let distance = target_distance(item);
        match best {
            // Strictly better by more than epsilon; otherwise the earlier one stays
            Some((_, best_distance)) if distance < best_distance - DISTANCE_EPSILON => {
                best = Some((index, distance));
            }
            Some(_) => {}
            None => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}
