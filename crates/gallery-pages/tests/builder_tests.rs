use gallery_pages::builder::target_distance;
use gallery_pages::constants::DISTANCE_EPSILON;
use gallery_pages::*;
use std::collections::HashSet;

fn image(id: &str) -> Item {
    Item::image(id, format!("img_{id}.jpg"))
}

fn video(id: &str, ar: f64) -> Item {
    Item::video(id, format!("vid_{id}.mp4")).with_aspect_ratio(ar)
}

fn portrait_video(id: &str) -> Item {
    video(id, 9.0 / 16.0)
}

fn ids<'a>(page: &Page<'a>) -> [&'a str; 3] {
    [
        page.left.id.as_str(),
        page.right_top.id.as_str(),
        page.right_bottom.id.as_str(),
    ]
}

/// Deterministic mixed item list without pulling in an RNG crate
fn mixed_items(n: usize, seed: u64) -> Vec<Item> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let roll = (state >> 33) % 100;
            let id = format!("item{i}");
            if roll < 30 {
                let ar = 0.3 + ((state >> 20) % 1000) as f64 / 1000.0;
                if roll < 5 {
                    Item::video(id, "vid.mp4")
                } else {
                    video(&id, ar)
                }
            } else {
                image(&id)
            }
        })
        .collect()
}

#[test]
fn test_all_images_fill_pages_in_order() {
    let items: Vec<Item> = (1..=6).map(|i| image(&i.to_string())).collect();
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(ids(&pages.pages[0]), ["1", "2", "3"]);
    assert_eq!(ids(&pages.pages[1]), ["4", "5", "6"]);
    assert!(pages.all_placed());
    assert_eq!(pages.outcome, BuildOutcome::Exhausted);
}

#[test]
fn test_video_goes_left() {
    let items = vec![image("1"), portrait_video("2"), image("3")];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(ids(&pages.pages[0]), ["2", "1", "3"]);
}

#[test]
fn test_closest_to_portrait_wins_over_earlier_video() {
    let items = vec![
        video("A", 1.0),
        image("1"),
        image("2"),
        image("3"),
        image("4"),
        portrait_video("B"),
        image("5"),
    ];
    let pages = build_pages(&items, &BuildOptions::with_lookahead(10)).unwrap();

    assert_eq!(ids(&pages.pages[0]), ["B", "1", "2"]);
    // A is still pooled and pairs with the next two images
    assert_eq!(ids(&pages.pages[1]), ["A", "3", "4"]);
    assert_eq!(pages.leftover.len(), 1);
    assert_eq!(pages.leftover[0].id, "5");
}

#[test]
fn test_one_video_per_page() {
    let items = vec![
        portrait_video("1"),
        portrait_video("2"),
        image("3"),
        image("4"),
    ];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(ids(&pages.pages[0]), ["1", "3", "4"]);
    assert_eq!(pages.leftover.len(), 1);
    assert_eq!(pages.leftover[0].id, "2");
}

#[test]
fn test_images_gathered_past_other_videos() {
    let items = vec![
        portrait_video("v1"),
        image("i1"),
        portrait_video("v2"),
        image("i2"),
    ];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(ids(&pages.pages[0]), ["v1", "i1", "i2"]);
}

#[test]
fn test_too_few_items() {
    let items = vec![image("1"), image("2")];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert!(pages.is_empty());
    assert_eq!(pages.outcome, BuildOutcome::Exhausted);
    assert_eq!(pages.leftover.len(), 2);
}

#[test]
fn test_empty_input() {
    let items: Vec<Item> = Vec::new();
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert!(pages.is_empty());
    assert!(pages.all_placed());
    assert_eq!(pages.outcome, BuildOutcome::Exhausted);
}

#[test]
fn test_stalls_when_videos_cannot_be_paired() {
    let items = vec![
        portrait_video("v1"),
        portrait_video("v2"),
        portrait_video("v3"),
        image("i1"),
    ];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert!(pages.is_empty());
    assert_eq!(pages.outcome, BuildOutcome::Stalled);
    assert_eq!(pages.leftover.len(), 4);
}

#[test]
fn test_stall_is_distinguishable_from_exhaustion() {
    let exact: Vec<Item> = (1..=3).map(|i| image(&i.to_string())).collect();
    let exact_pages = build_pages(&exact, &BuildOptions::default()).unwrap();
    assert_eq!(exact_pages.outcome, BuildOutcome::Exhausted);
    assert!(exact_pages.all_placed());

    let stuck = vec![
        image("1"),
        image("2"),
        image("3"),
        portrait_video("v1"),
        portrait_video("v2"),
        portrait_video("v3"),
    ];
    let stuck_pages = build_pages(&stuck, &BuildOptions::default()).unwrap();
    assert_eq!(stuck_pages.len(), 1);
    assert_eq!(stuck_pages.outcome, BuildOutcome::Stalled);
    assert!(!stuck_pages.all_placed());
}

#[test]
fn test_video_outside_window_is_not_featured() {
    let mut items: Vec<Item> = (1..=6).map(|i| image(&i.to_string())).collect();
    items.push(portrait_video("late"));
    let pages = build_pages(&items, &BuildOptions::with_lookahead(3)).unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(ids(&pages.pages[0]), ["1", "2", "3"]);
    assert_eq!(ids(&pages.pages[1]), ["4", "5", "6"]);
    assert_eq!(pages.leftover[0].id, "late");
}

#[test]
fn test_missing_aspect_ratio_ranks_as_square() {
    let items = vec![
        Item::video("unknown", "u.mp4"),
        video("wide", 16.0 / 9.0),
        image("1"),
        image("2"),
    ];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert_eq!(pages.pages[0].left.id, "unknown");
    assert_eq!(pages.pages[0].left.aspect_ratio, None);
}

#[test]
fn test_equidistant_videos_prefer_earlier() {
    // 0.5625 ± 0.1 are the same distance from the target
    let items = vec![
        video("taller", 0.4625),
        video("wider", 0.6625),
        image("1"),
        image("2"),
    ];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();
    assert_eq!(pages.pages[0].left.id, "taller");

    let swapped = vec![
        video("wider", 0.6625),
        video("taller", 0.4625),
        image("1"),
        image("2"),
    ];
    let pages = build_pages(&swapped, &BuildOptions::default()).unwrap();
    assert_eq!(pages.pages[0].left.id, "wider");
}

#[test]
fn test_narrow_window_never_doubles_videos() {
    let items = vec![
        image("1"),
        portrait_video("v1"),
        portrait_video("v2"),
        image("2"),
        image("3"),
        image("4"),
    ];
    let pages = build_pages(&items, &BuildOptions::with_lookahead(1)).unwrap();

    for page in &pages {
        assert!(page.video_count() <= 1);
    }
    // v1 sits in the page head even though the window only saw "1"
    assert_eq!(pages.len(), 2);
    assert_eq!(ids(&pages.pages[0]), ["v1", "1", "2"]);
    assert_eq!(ids(&pages.pages[1]), ["v2", "3", "4"]);
}

#[test]
fn test_zero_lookahead_rejected() {
    let items = vec![image("1"), image("2"), image("3")];
    let result = build_pages(&items, &BuildOptions::with_lookahead(0));
    match result {
        Err(GalleryError::Config(msg)) => assert!(msg.contains("Lookahead")),
        _ => panic!("Expected Config error"),
    }

    // The unchecked entry point clamps instead
    let pages = build_pages_with_lookahead(&items, 0);
    assert_eq!(pages.len(), 1);
}

#[test]
fn test_locate_reports_page_and_slot() {
    let items = vec![
        image("1"),
        portrait_video("v"),
        image("2"),
        image("3"),
        image("4"),
        image("5"),
        image("6"),
    ];
    let pages = build_pages(&items, &BuildOptions::default()).unwrap();

    assert_eq!(pages.locate("v"), Some((0, Slot::Left)));
    assert_eq!(pages.locate("2"), Some((0, Slot::RightBottom)));
    assert_eq!(pages.locate("5"), Some((1, Slot::RightBottom)));
    assert_eq!(pages.locate("6"), None);
    assert_eq!(pages.locate("missing"), None);
}

#[test]
fn test_properties_hold_for_mixed_inputs() {
    for seed in 0..50 {
        for lookahead in [1, 2, 3, 5, 12, 1000] {
            let items = mixed_items(40, seed);
            let pages = build_pages_with_lookahead(&items, lookahead);

            assert!(pages.len() <= items.len() / 3);

            let mut seen = HashSet::new();
            for page in &pages {
                assert!(page.video_count() <= 1, "seed {seed} lookahead {lookahead}");
                if let Some(video) = page.video() {
                    assert!(std::ptr::eq(video, page.left));
                }
                for item in page.items() {
                    assert!(seen.insert(item.id.clone()), "{} reused", item.id);
                }
            }

            // Placed plus leftover accounts for every input exactly once
            for item in &pages.leftover {
                assert!(seen.insert(item.id.clone()));
            }
            assert_eq!(seen.len(), items.len());

            // Leftovers keep input order
            let positions: Vec<usize> = pages
                .leftover
                .iter()
                .map(|left| items.iter().position(|item| item.id == left.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));

            let again = build_pages_with_lookahead(&items, lookahead);
            assert_eq!(pages, again);
        }
    }
}

#[test]
fn test_featured_video_is_best_in_window() {
    for seed in 0..50 {
        let items = mixed_items(30, seed);
        let lookahead = 8;
        let pages = build_pages_with_lookahead(&items, lookahead);
        let Some(first) = pages.pages.first() else {
            continue;
        };
        let Some(featured) = first.video() else {
            continue;
        };

        let best = items
            .iter()
            .take(lookahead)
            .filter(|item| item.is_video())
            .map(target_distance)
            .fold(f64::INFINITY, f64::min);
        assert!(target_distance(featured) - best < DISTANCE_EPSILON);
    }
}
