use crate::types::*;

/// Calculate statistics for a finished build
pub fn calculate_statistics(items: &[Item], pages: &Pages<'_>) -> BuildStatistics {
    let videos = items.iter().filter(|item| item.is_video()).count();
    let video_pages = pages.iter().filter(|page| page.video().is_some()).count();

    BuildStatistics {
        source_items: items.len(),
        images: items.len() - videos,
        videos,
        pages: pages.len(),
        video_pages,
        image_pages: pages.len() - video_pages,
        leftover_items: pages.leftover.len(),
        leftover_videos: pages.leftover.iter().filter(|item| item.is_video()).count(),
        outcome: pages.outcome,
    }
}
