use crate::constants::FALLBACK_ASPECT_RATIO;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unexpected item list shape: {0}")]
    UnexpectedShape(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

/// Media kind of a gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// Still image
    Image,
    /// Video clip; at most one per page, always in the left slot
    Video,
}

/// A single gallery entry as supplied by the data source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Identifier, unique within one item list
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MediaKind,
    /// Opaque storage key, passed through untouched
    #[cfg_attr(feature = "serde", serde(rename = "src"))]
    pub source: String,
    /// Width / height
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "aspectRatio",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub aspect_ratio: Option<f64>,
}

impl Item {
    pub fn image(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: MediaKind::Image,
            source: source.into(),
            aspect_ratio: None,
        }
    }

    pub fn video(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: MediaKind::Video,
            source: source.into(),
            aspect_ratio: None,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }

    /// Aspect ratio used for ranking; a missing value counts as square.
    pub fn effective_aspect_ratio(&self) -> f64 {
        self.aspect_ratio.unwrap_or(FALLBACK_ASPECT_RATIO)
    }
}

/// Position within a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Full-height hero column
    Left,
    /// Upper half of the right column
    RightTop,
    /// Lower half of the right column
    RightBottom,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::RightTop, Slot::RightBottom];
}

/// A three-slot page borrowing its items from the build input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub left: &'a Item,
    pub right_top: &'a Item,
    pub right_bottom: &'a Item,
}

impl<'a> Page<'a> {
    /// Items in slot order: left, right top, right bottom
    pub fn items(&self) -> [&'a Item; 3] {
        [self.left, self.right_top, self.right_bottom]
    }

    pub fn get(&self, slot: Slot) -> &'a Item {
        match slot {
            Slot::Left => self.left,
            Slot::RightTop => self.right_top,
            Slot::RightBottom => self.right_bottom,
        }
    }

    /// The featured video, if this page has one
    pub fn video(&self) -> Option<&'a Item> {
        self.items().into_iter().find(|item| item.is_video())
    }

    pub fn video_count(&self) -> usize {
        self.items().iter().filter(|item| item.is_video()).count()
    }

    pub fn slot_of(&self, id: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|&slot| self.get(slot).id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slot_of(id).is_some()
    }

    pub fn to_layout(&self) -> PageLayout {
        PageLayout {
            left: self.left.clone(),
            right_top: self.right_top.clone(),
            right_bottom: self.right_bottom.clone(),
        }
    }
}

/// Owned page record handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageLayout {
    pub left: Item,
    pub right_top: Item,
    pub right_bottom: Item,
}

/// Why page production stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Fewer than three items were left over (possibly none)
    Exhausted,
    /// Three or more items remained but no valid page could be formed from them
    Stalled,
}

/// Result of a build: emitted pages plus whatever could not be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Pages<'a> {
    pub pages: Vec<Page<'a>>,
    /// Unplaced items in input order
    pub leftover: Vec<&'a Item>,
    pub outcome: BuildOutcome,
}

impl<'a> Pages<'a> {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True when every input item landed on a page.
    pub fn all_placed(&self) -> bool {
        self.leftover.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page<'a>> {
        self.pages.iter()
    }

    /// Find the page and slot holding the item with `id`.
    pub fn locate(&self, id: &str) -> Option<(usize, Slot)> {
        self.pages
            .iter()
            .enumerate()
            .find_map(|(index, page)| page.slot_of(id).map(|slot| (index, slot)))
    }

    pub fn layouts(&self) -> Vec<PageLayout> {
        self.pages.iter().map(Page::to_layout).collect()
    }
}

impl<'a, 'p> IntoIterator for &'p Pages<'a> {
    type Item = &'p Page<'a>;
    type IntoIter = std::slice::Iter<'p, Page<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq)]
pub struct BuildStatistics {
    /// Total number of input items
    pub source_items: usize,
    pub images: usize,
    pub videos: usize,
    /// Number of pages emitted
    pub pages: usize,
    /// Pages featuring a video in the left slot
    pub video_pages: usize,
    /// Pages made of three images
    pub image_pages: usize,
    pub leftover_items: usize,
    pub leftover_videos: usize,
    pub outcome: BuildOutcome,
}
