//! Page assembly
//!
//! Turns a selection result into a concrete set of three pool positions.
//! Priority order:
//! 1. Featured video in the left slot with the first two pooled images
//! 2. If the video cannot be paired, the first three pooled images
//!    (the video stays pooled for a later page)
//! 3. With no video selected, the first three pooled items as they stand

use crate::constants::{IMAGES_PER_VIDEO_PAGE, ITEMS_PER_PAGE};

use super::Pool;

/// Input indices chosen for one page, by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub left: usize,
    pub right_top: usize,
    pub right_bottom: usize,
}

impl PagePlan {
    fn from_slots([left, right_top, right_bottom]: [usize; 3]) -> Self {
        Self {
            left,
            right_top,
            right_bottom,
        }
    }

    /// Pool positions this page takes out of circulation
    pub fn consumed(&self) -> [usize; 3] {
        [self.left, self.right_top, self.right_bottom]
    }
}

/// Plan the next page, or `None` when no valid page can be formed.
pub fn assemble_page(pool: &Pool<'_>, selected_video: Option<usize>) -> Option<PagePlan> {
    match selected_video {
        Some(video) => pair_with_images(pool, video).or_else(|| first_images(pool)),
        None => leading_items(pool),
    }
}

fn pair_with_images(pool: &Pool<'_>, video: usize) -> Option<PagePlan> {
    let images = collect_images::<IMAGES_PER_VIDEO_PAGE>(pool)?;
    Some(PagePlan {
        left: video,
        right_top: images[0],
        right_bottom: images[1],
    })
}

fn first_images(pool: &Pool<'_>) -> Option<PagePlan> {
    collect_images::<ITEMS_PER_PAGE>(pool).map(PagePlan::from_slots)
}

/// First `N` pooled images in order, or `None` if the pool holds fewer.
fn collect_images<const N: usize>(pool: &Pool<'_>) -> Option<[usize; N]> {
    let mut found = [0; N];
    let mut count = 0;
    for (index, item) in pool.iter() {
        if count == N {
            break;
        }
        if item.is_image() {
            found[count] = index;
            count += 1;
        }
    }
    (count == N).then_some(found)
}

/// Take the head of the pool verbatim.
///
/// Only sound when the selection window already proved the head holds no
/// video. A window narrower than a page cannot prove that, so the head is
/// re-checked and any video found there is routed through the video path.
fn leading_items(pool: &Pool<'_>) -> Option<PagePlan> {
    let mut slots = [0; ITEMS_PER_PAGE];
    let mut taken = 0;
    let mut first_video = None;

    for (index, item) in pool.iter().take(ITEMS_PER_PAGE) {
        if item.is_video() && first_video.is_none() {
            first_video = Some(index);
        }
        slots[taken] = index;
        taken += 1;
    }

    if taken < ITEMS_PER_PAGE {
        return None;
    }

    match first_video {
        Some(video) => {
            log::debug!(
                "Video {} inside page head was outside the selection window",
                pool.item(video).id
            );
            assemble_page(pool, Some(video))
        }
        None => Some(PagePlan::from_slots(slots)),
    }
}
