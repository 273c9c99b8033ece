use gallery_pages::*;

#[test]
fn test_effective_aspect_ratio() {
    let plain = Item::image("a", "a.jpg");
    assert_eq!(plain.effective_aspect_ratio(), 1.0);
    assert_eq!(plain.aspect_ratio, None);

    let tall = Item::video("b", "b.mp4").with_aspect_ratio(0.5625);
    assert_eq!(tall.effective_aspect_ratio(), 0.5625);
}

#[test]
fn test_item_kind_helpers() {
    assert!(Item::image("a", "a.jpg").is_image());
    assert!(!Item::image("a", "a.jpg").is_video());
    assert!(Item::video("b", "b.mp4").is_video());
}

#[test]
fn test_page_slots() {
    let left = Item::video("v", "v.mp4");
    let top = Item::image("t", "t.jpg");
    let bottom = Item::image("b", "b.jpg");
    let page = Page {
        left: &left,
        right_top: &top,
        right_bottom: &bottom,
    };

    assert_eq!(page.get(Slot::Left).id, "v");
    assert_eq!(page.slot_of("t"), Some(Slot::RightTop));
    assert_eq!(page.slot_of("b"), Some(Slot::RightBottom));
    assert_eq!(page.slot_of("x"), None);
    assert!(page.contains("v"));
    assert_eq!(page.video().map(|item| item.id.as_str()), Some("v"));
    assert_eq!(page.video_count(), 1);

    let layout = page.to_layout();
    assert_eq!(layout.left, left);
    assert_eq!(layout.right_top, top);
    assert_eq!(layout.right_bottom, bottom);
}

#[test]
fn test_image_page_has_no_video() {
    let a = Item::image("a", "a.jpg");
    let b = Item::image("b", "b.jpg");
    let c = Item::image("c", "c.jpg");
    let page = Page {
        left: &a,
        right_top: &b,
        right_bottom: &c,
    };
    assert!(page.video().is_none());
    assert_eq!(page.video_count(), 0);
}
