//! Measured pane handles.
//!
//! A [`Pane`] is the host-side box a widget is attached to: it carries the
//! measured geometry, a set of state flags (the styling layer reads these to
//! pick visual variants) and, for content panes, the stacked content blocks.
//! Panes are cheap to clone and share their state, so a widget and its owner
//! can both hold a handle to the same box.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::geometry::Rect;

/// One block of host content with a measured vertical extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Identifier used to address the block (for example by `scroll_to`).
    pub id: String,
    /// Measured height of the block in host cells.
    pub height: u16,
}

impl ContentBlock {
    pub fn new(id: impl Into<String>, height: u16) -> Self {
        Self {
            id: id.into(),
            height,
        }
    }
}

#[derive(Debug, Default)]
struct PaneInner {
    id: String,
    rect: Rect,
    flags: HashSet<String>,
    blocks: Vec<ContentBlock>,
}

/// A measured host box with state flags and stacked content.
#[derive(Debug)]
pub struct Pane {
    inner: Arc<RwLock<PaneInner>>,
}

impl Pane {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PaneInner {
                id: id.into(),
                ..PaneInner::default()
            })),
        }
    }

    pub fn with_rect(id: impl Into<String>, rect: Rect) -> Self {
        let pane = Self::new(id);
        pane.set_rect(rect);
        pane
    }

    pub fn id(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.id.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    pub fn rect(&self) -> Rect {
        self.inner
            .read()
            .map(|guard| guard.rect)
            .unwrap_or_default()
    }

    pub fn set_rect(&self, rect: Rect) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rect = rect;
        }
    }

    pub fn set_x(&self, x: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rect.x = x;
        }
    }

    pub fn set_y(&self, y: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rect.y = y;
        }
    }

    pub fn set_width(&self, width: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rect.width = width;
        }
    }

    pub fn set_height(&self, height: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rect.height = height;
        }
    }

    // -------------------------------------------------------------------------
    // State flags (the styling layer's modifier switches)
    // -------------------------------------------------------------------------

    pub fn set_flag(&self, flag: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.flags.insert(flag.to_string());
        }
    }

    pub fn del_flag(&self, flag: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.flags.remove(flag);
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.flags.contains(flag))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Content blocks (vertical stack)
    // -------------------------------------------------------------------------

    /// Replace the pane's content blocks.
    pub fn set_blocks(&self, blocks: Vec<ContentBlock>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.blocks = blocks;
        }
    }

    pub fn child_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.blocks.len())
            .unwrap_or(0)
    }

    /// Total measured height of the stacked blocks.
    pub fn content_height(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .blocks
                    .iter()
                    .fold(0u16, |sum, block| sum.saturating_add(block.height))
            })
            .unwrap_or(0)
    }

    /// Content-space top of the block with the given id.
    pub fn block_top(&self, id: &str) -> Option<u16> {
        self.inner.read().ok().and_then(|guard| {
            let mut top = 0u16;
            for block in &guard.blocks {
                if block.id == id {
                    return Some(top);
                }
                top = top.saturating_add(block.height);
            }
            None
        })
    }

    /// Measured height of the block with the given id.
    pub fn block_height(&self, id: &str) -> Option<u16> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .blocks
                .iter()
                .find(|block| block.id == id)
                .map(|block| block.height)
        })
    }
}

impl Clone for Pane {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
