//! Shared constants for page building
//!
//! Tuning values for candidate selection live here so the selector, the
//! options validation and the tests agree on them.

// =============================================================================
// Candidate Selection
// =============================================================================

/// Aspect ratio (width / height) that featured videos are ranked against: 9:16 portrait.
pub const TARGET_VIDEO_ASPECT_RATIO: f64 = 9.0 / 16.0;

/// Aspect ratio assumed for ranking when an item carries none.
pub const FALLBACK_ASPECT_RATIO: f64 = 1.0;

/// Two candidates whose distances to the target differ by less than this are
/// considered tied; the earlier one in the pool wins.
pub const DISTANCE_EPSILON: f64 = 1e-4;

// =============================================================================
// Lookahead Window
// =============================================================================

/// Default number of leading pool items scanned for a featured video.
///
/// Each page costs at most `lookahead` comparisons, so building `n` items is
/// O(n * lookahead). Raising the window towards `n` degrades the build to O(n²).
pub const DEFAULT_LOOKAHEAD: usize = 12;

/// Windows larger than this are accepted but logged, since they stop behaving
/// like a bounded lookahead for realistic gallery sizes.
pub const LOOKAHEAD_WARN_THRESHOLD: usize = 256;

// =============================================================================
// Page Shape
// =============================================================================

/// Items per page: one left hero slot plus two stacked right slots.
pub const ITEMS_PER_PAGE: usize = 3;

/// Images that must accompany a featured video on its page.
pub const IMAGES_PER_VIDEO_PAGE: usize = 2;
