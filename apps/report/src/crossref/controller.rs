//! Citation cross-reference controller — hover and click behaviour for
//! rendered citation tokens.
//!
//! One controller per rendered report. Hover is a two-state machine
//! (`Idle` / `Hovering`); click is a one-shot effect on the linked quote
//! anchor and does not touch hover state.
//!
//! Events are applied as they arrive. Nothing is queued, so a burst of
//! enter/leave events on adjacent tokens always ends in the state the last
//! event implies.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::crossref::anchors::{anchor_id, AnchorHost, QuoteAnchor, ScrollOptions};
use crate::crossref::emphasis::EmphasisTimers;
use crate::errors::Degradation;
use crate::models::citation::{CitationIndex, CitationMap};

/// Vertical gap between a token and the tooltip above it.
const TOOLTIP_OFFSET_PX: f64 = 10.0;

/// Bounding box of a rendered citation token, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the tooltip is anchored: horizontally centred, just above the token.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
}

impl From<BoundingRect> for TooltipPosition {
    fn from(rect: BoundingRect) -> Self {
        TooltipPosition {
            x: rect.left + rect.width / 2.0,
            y: rect.top - TOOLTIP_OFFSET_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering {
        index: CitationIndex,
        position: TooltipPosition,
    },
}

/// Tooltip content for the hovered citation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitationPreview {
    pub index: CitationIndex,
    pub excerpt: String,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    pub position: TooltipPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Scrolled,
    AnchorMissing,
}

pub struct CrossReferenceController<H: AnchorHost> {
    instance_id: Uuid,
    citations: CitationMap,
    host: Arc<H>,
    state: InteractionState,
    /// Target of the most recently spawned tooltip. Survives a token leave so
    /// that moving onto the tooltip can re-enter the same hover.
    last_tooltip: Option<(CitationIndex, TooltipPosition)>,
    timers: EmphasisTimers,
}

impl<H: AnchorHost> CrossReferenceController<H> {
    /// Mounts a controller for one rendered report. Starts `Idle`.
    pub fn mount(citations: CitationMap, host: Arc<H>) -> Self {
        let instance_id = Uuid::new_v4();
        debug!(%instance_id, citations = citations.len(), "Cross-reference controller mounted");
        Self {
            instance_id,
            citations,
            host,
            state: InteractionState::Idle,
            last_tooltip: None,
            timers: EmphasisTimers::default(),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Swaps in a new citation map after the narrative was re-derived.
    /// A hover on an index the new map lacks is dropped.
    pub fn update_citations(&mut self, citations: CitationMap) {
        self.citations = citations;
        if let InteractionState::Hovering { index, .. } = self.state {
            if !self.citations.contains(index) {
                self.clear_hover();
            }
        }
    }

    /// Pointer entered the token for `index`, rendered at `rect`.
    pub fn pointer_enter(&mut self, index: CitationIndex, rect: BoundingRect) {
        if !self.citations.contains(index) {
            debug!(instance_id = %self.instance_id, %index, "Hover on citation without record");
            self.state = InteractionState::Idle;
            self.last_tooltip = None;
            return;
        }

        let position = TooltipPosition::from(rect);
        self.state = InteractionState::Hovering { index, position };
        self.last_tooltip = Some((index, position));
    }

    /// Pointer left a citation token.
    pub fn pointer_leave(&mut self) {
        self.clear_hover();
    }

    /// Pointer moved onto the tooltip. Keeps (or restores) the hover the
    /// tooltip was spawned for.
    pub fn tooltip_enter(&mut self) {
        if let Some((index, position)) = self.last_tooltip {
            if self.citations.contains(index) {
                self.state = InteractionState::Hovering { index, position };
            }
        }
    }

    /// Pointer left the tooltip. The tooltip is gone after this, so a later
    /// `tooltip_enter` has nothing to restore.
    pub fn tooltip_leave(&mut self) {
        self.last_tooltip = None;
        self.clear_hover();
    }

    fn clear_hover(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Tooltip content for the current hover, if any.
    pub fn preview(&self) -> Option<CitationPreview> {
        let InteractionState::Hovering { index, position } = self.state else {
            return None;
        };
        let record = self.citations.get(index)?;

        Some(CitationPreview {
            index,
            excerpt: record.excerpt.clone(),
            source_name: record.source_name.clone(),
            source_url: record.source_url.clone(),
            display_date: record.display_date(),
            position,
        })
    }

    /// Scrolls the quote anchor for `index` into view and emphasises it for
    /// two seconds. A missing anchor is a silent no-op.
    pub fn click(&self, index: CitationIndex) -> ClickOutcome {
        let id = anchor_id(index);

        let Some(anchor) = self.host.find_anchor(&id) else {
            let degradation = Degradation::MissingAnchorElement { anchor_id: id };
            debug!(instance_id = %self.instance_id, "{degradation}");
            return ClickOutcome::AnchorMissing;
        };

        anchor.scroll_into_view(ScrollOptions::CENTERED_SMOOTH);
        if self.timers.start(Arc::clone(&self.host), id).is_some() {
            anchor.set_emphasis(true);
        }

        ClickOutcome::Scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossref::test_support::PageAnchors;
    use crate::models::citation::CitationRecord;
    use std::time::Duration;
    use tokio::time::sleep;

    fn idx(n: u32) -> CitationIndex {
        CitationIndex::new(n).unwrap()
    }

    fn citations(count: u32) -> CitationMap {
        (1..=count)
            .map(|n| {
                (
                    idx(n),
                    CitationRecord {
                        excerpt: format!("Excerpt {n}"),
                        source_name: "Glassdoor".to_string(),
                        source_url: Some(format!("https://example.com/{n}")),
                        published_date: Some("2024-03-05".to_string()),
                    },
                )
            })
            .collect()
    }

    fn rect(left: f64, top: f64) -> BoundingRect {
        BoundingRect {
            left,
            top,
            width: 20.0,
            height: 12.0,
        }
    }

    fn controller(page: &Arc<PageAnchors>) -> CrossReferenceController<PageAnchors> {
        CrossReferenceController::mount(citations(3), Arc::clone(page))
    }

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_mount_starts_idle() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let c = controller(&page);
        assert_eq!(c.state(), InteractionState::Idle);
        assert!(c.preview().is_none());
    }

    #[test]
    fn test_enter_captures_tooltip_position() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(2), rect(100.0, 50.0));
        assert_eq!(
            c.state(),
            InteractionState::Hovering {
                index: idx(2),
                position: TooltipPosition { x: 110.0, y: 40.0 },
            }
        );
    }

    #[test]
    fn test_leave_returns_to_idle() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(1), rect(0.0, 0.0));
        c.pointer_leave();
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn test_entering_another_token_switches_directly() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(1), rect(0.0, 0.0));
        c.pointer_enter(idx(3), rect(40.0, 0.0));
        assert!(matches!(
            c.state(),
            InteractionState::Hovering { index, .. } if index == idx(3)
        ));
    }

    #[test]
    fn test_tooltip_keeps_hover_alive() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(2), rect(100.0, 50.0));
        let hovering = c.state();

        // token leave followed immediately by tooltip enter must not flicker to a different index
        c.pointer_leave();
        c.tooltip_enter();
        assert_eq!(c.state(), hovering);

        c.tooltip_leave();
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn test_dismissed_tooltip_cannot_restore_hover() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(1), rect(0.0, 0.0));
        c.pointer_leave();
        c.tooltip_leave();
        c.tooltip_enter();
        assert_eq!(c.state(), InteractionState::Idle);
        assert!(c.preview().is_none());
    }

    #[test]
    fn test_unknown_citation_hover_discards_previous_tooltip() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(2), rect(0.0, 0.0));
        c.pointer_enter(idx(42), rect(0.0, 0.0));
        c.tooltip_enter();
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn test_tooltip_enter_before_any_hover_is_ignored() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.tooltip_enter();
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn test_rapid_interleaved_events_trust_the_last_one() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(1), rect(0.0, 0.0));
        c.pointer_enter(idx(2), rect(20.0, 0.0));
        c.pointer_leave();
        c.pointer_enter(idx(3), rect(40.0, 0.0));
        c.pointer_leave();
        c.pointer_enter(idx(1), rect(0.0, 0.0));
        assert!(matches!(
            c.state(),
            InteractionState::Hovering { index, .. } if index == idx(1)
        ));
        c.pointer_leave();
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn test_enter_on_unknown_citation_degrades_to_idle() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(1), rect(0.0, 0.0));
        c.pointer_enter(idx(42), rect(0.0, 0.0));
        assert_eq!(c.state(), InteractionState::Idle);
        assert!(c.preview().is_none());
    }

    #[test]
    fn test_preview_carries_record_and_position() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(2), rect(100.0, 50.0));
        let preview = c.preview().expect("hovering a known citation");
        assert_eq!(preview.index, idx(2));
        assert_eq!(preview.excerpt, "Excerpt 2");
        assert_eq!(preview.source_name, "Glassdoor");
        assert_eq!(preview.source_url.as_deref(), Some("https://example.com/2"));
        assert_eq!(preview.display_date.as_deref(), Some("Mar 5, 2024"));
        assert_eq!(preview.position, TooltipPosition { x: 110.0, y: 40.0 });
    }

    #[test]
    fn test_controllers_do_not_share_hover_state() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut first = controller(&page);
        let second = controller(&page);
        first.pointer_enter(idx(1), rect(0.0, 0.0));
        assert_eq!(second.state(), InteractionState::Idle);
        assert_ne!(first.instance_id(), second.instance_id());
    }

    #[test]
    fn test_update_citations_drops_stale_hover() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(3), rect(0.0, 0.0));
        c.update_citations(citations(2));
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_scrolls_and_emphasis_clears_after_2000ms() {
        let page = Arc::new(PageAnchors::with_quotes(5));
        let c = controller(&page);

        assert_eq!(c.click(idx(3)), ClickOutcome::Scrolled);
        let anchor = page.snapshot("quote-2").unwrap();
        assert_eq!(anchor.scrolls, vec![ScrollOptions::CENTERED_SMOOTH]);
        assert!(anchor.emphasized, "emphasis must be on at t=0");

        sleep(Duration::from_millis(1999)).await;
        settle().await;
        assert!(page.snapshot("quote-2").unwrap().emphasized, "still on at t=1999");

        sleep(Duration::from_millis(1)).await;
        settle().await;
        assert!(!page.snapshot("quote-2").unwrap().emphasized, "off at t=2000");
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_does_not_change_hover_state() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let mut c = controller(&page);
        c.pointer_enter(idx(1), rect(0.0, 0.0));
        let before = c.state();
        c.click(idx(1));
        assert_eq!(c.state(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_click_restarts_window() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let c = controller(&page);

        c.click(idx(1));
        sleep(Duration::from_millis(1500)).await;
        c.click(idx(1));

        sleep(Duration::from_millis(1000)).await; // t = 2500
        settle().await;
        assert!(
            page.snapshot("quote-0").unwrap().emphasized,
            "first timer must not clear emphasis owned by the second click"
        );
        assert_eq!(page.snapshot("quote-0").unwrap().scrolls.len(), 2);

        sleep(Duration::from_millis(1000)).await; // t = 3500
        settle().await;
        assert!(!page.snapshot("quote-0").unwrap().emphasized);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_on_missing_anchor_is_noop() {
        let page = Arc::new(PageAnchors::with_quotes(1));
        let c = controller(&page);
        assert_eq!(c.click(idx(3)), ClickOutcome::AnchorMissing);
        assert!(page.snapshot("quote-2").is_none());
        assert!(!page.snapshot("quote-0").unwrap().emphasized);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_after_teardown_is_harmless() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let c = controller(&page);
        c.click(idx(2));
        page.remove("quote-1");

        sleep(Duration::from_millis(2500)).await;
        settle().await;
        assert!(page.snapshot("quote-1").is_none());
    }

    #[test]
    fn test_click_without_runtime_scrolls_but_skips_emphasis() {
        let page = Arc::new(PageAnchors::with_quotes(3));
        let c = controller(&page);
        assert_eq!(c.click(idx(1)), ClickOutcome::Scrolled);
        let anchor = page.snapshot("quote-0").unwrap();
        assert_eq!(anchor.scrolls.len(), 1);
        assert!(!anchor.emphasized, "emphasis without a timer would never clear");
    }
}
