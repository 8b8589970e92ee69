//! In-memory page of quote anchors for controller tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::crossref::anchors::{quote_anchor_id, AnchorHost, QuoteAnchor, ScrollOptions};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSnapshot {
    pub scrolls: Vec<ScrollOptions>,
    pub emphasized: bool,
}

#[derive(Debug, Default)]
pub struct PageAnchors {
    anchors: Arc<Mutex<HashMap<String, AnchorSnapshot>>>,
}

impl PageAnchors {
    pub fn with_quotes(count: usize) -> Self {
        let anchors = (0..count)
            .map(|position| (quote_anchor_id(position), AnchorSnapshot::default()))
            .collect();
        Self {
            anchors: Arc::new(Mutex::new(anchors)),
        }
    }

    pub fn snapshot(&self, id: &str) -> Option<AnchorSnapshot> {
        self.anchors.lock().unwrap().get(id).cloned()
    }

    pub fn remove(&self, id: &str) {
        self.anchors.lock().unwrap().remove(id);
    }
}

pub struct PageAnchor {
    id: String,
    anchors: Arc<Mutex<HashMap<String, AnchorSnapshot>>>,
}

impl QuoteAnchor for PageAnchor {
    fn scroll_into_view(&self, options: ScrollOptions) {
        if let Some(anchor) = self.anchors.lock().unwrap().get_mut(&self.id) {
            anchor.scrolls.push(options);
        }
    }

    fn set_emphasis(&self, emphasized: bool) {
        if let Some(anchor) = self.anchors.lock().unwrap().get_mut(&self.id) {
            anchor.emphasized = emphasized;
        }
    }
}

impl AnchorHost for PageAnchors {
    type Anchor = PageAnchor;

    fn find_anchor(&self, id: &str) -> Option<PageAnchor> {
        self.anchors
            .lock()
            .unwrap()
            .contains_key(id)
            .then(|| PageAnchor {
                id: id.to_string(),
                anchors: Arc::clone(&self.anchors),
            })
    }
}
