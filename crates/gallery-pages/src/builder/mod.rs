//! Page building
//!
//! Groups an ordered item list into three-slot pages:
//! 1. Pick the featured video from the head of the remaining pool
//! 2. Assemble a page around it (or around images alone)
//! 3. Remove exactly the placed items and repeat
//!
//! Building stops once fewer than three items remain, or when the remaining
//! items cannot form a valid page. Output is a pure function of the input
//! list and the lookahead.

mod assemble;
mod pool;
mod select;

pub use assemble::{PagePlan, assemble_page};
pub use pool::{Pool, PoolIter};
pub use select::{select_video, target_distance};

use crate::constants::ITEMS_PER_PAGE;
use crate::options::BuildOptions;
use crate::types::*;
use std::collections::HashSet;

/// Build pages after validating `options`.
pub fn build_pages<'a>(items: &'a [Item], options: &BuildOptions) -> Result<Pages<'a>> {
    options.validate()?;
    Ok(build_pages_with_lookahead(items, options.lookahead))
}

/// Build pages with an explicit lookahead window. A zero window is treated as one.
pub fn build_pages_with_lookahead(items: &[Item], lookahead: usize) -> Pages<'_> {
    let lookahead = lookahead.max(1);
    log_duplicate_ids(items);

    let mut pool = Pool::new(items);
    let mut pages = Vec::with_capacity(items.len() / ITEMS_PER_PAGE);

    let outcome = loop {
        if pool.len() < ITEMS_PER_PAGE {
            break BuildOutcome::Exhausted;
        }

        let selected = select_video(&pool, lookahead);
        let Some(plan) = assemble_page(&pool, selected) else {
            break BuildOutcome::Stalled;
        };

        let page = Page {
            left: pool.item(plan.left),
            right_top: pool.item(plan.right_top),
            right_bottom: pool.item(plan.right_bottom),
        };
        log::debug!(
            "Page {}: [{}] [{}] [{}]",
            pages.len() + 1,
            page.left.id,
            page.right_top.id,
            page.right_bottom.id
        );
        pages.push(page);

        for index in plan.consumed() {
            pool.remove(index);
        }
    };

    let leftover = pool.remaining();
    log::info!(
        "Built {} page(s) from {} item(s), {} left over ({:?})",
        pages.len(),
        items.len(),
        leftover.len(),
        outcome
    );

    Pages {
        pages,
        leftover,
        outcome,
    }
}

/// Placement is by position, so repeated ids cannot double-consume, but
/// they make [`Pages::locate`] ambiguous.
fn log_duplicate_ids(items: &[Item]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            log::debug!("Duplicate item id {} in build input", item.id);
        }
    }
}
