//! Quote anchors — the externally rendered elements citation tokens point at.
//!
//! The render adapter owns the element tree. This module only names anchors
//! and describes the two effects a click may apply to one.

use serde::Serialize;

use crate::models::citation::CitationIndex;

const ANCHOR_PREFIX: &str = "quote-";

/// Element id of the quote rendered at 0-based `position` in the quote feed.
pub fn quote_anchor_id(position: usize) -> String {
    format!("{ANCHOR_PREFIX}{position}")
}

/// Element id of the quote anchor a citation links to.
///
/// Citation indices are 1-based, quote positions 0-based. This is the only
/// place that offset is applied.
pub fn anchor_id(index: CitationIndex) -> String {
    quote_anchor_id((index.get() - 1) as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// What a citation click uses.
    pub const CENTERED_SMOOTH: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Center,
    };
}

/// Handle to one rendered quote anchor.
pub trait QuoteAnchor {
    fn scroll_into_view(&self, options: ScrollOptions);
    fn set_emphasis(&self, emphasized: bool);
}

/// Lookup of quote anchors by element id, implemented by the render adapter.
///
/// Returning `None` means the element is not on the page (never rendered, or
/// the view was torn down). Callers treat that as a silent no-op.
pub trait AnchorHost: Send + Sync + 'static {
    type Anchor: QuoteAnchor;

    fn find_anchor(&self, id: &str) -> Option<Self::Anchor>;
}
