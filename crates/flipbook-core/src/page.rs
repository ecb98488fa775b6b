//! Pages and sequence construction.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PageKind {
    Content,
    /// Synthetic contentless page padding a book that cannot close, keeping
    /// left/right parity arithmetic uniform.
    HiddenCover,
}

/// One leaf surface of the book. `index` is the position in the full
/// sequence including covers; `is_first`/`is_last` are assigned once at
/// construction; the remaining flags are display state owned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub index: usize,
    pub kind: PageKind,
    pub is_first: bool,
    pub is_last: bool,
    pub is_active: bool,
    pub is_animating: bool,
    pub was_active: bool,
    pub is_calling: bool,
}

impl Page {
    fn new(index: usize, kind: PageKind) -> Self {
        Self {
            index,
            kind,
            is_first: false,
            is_last: false,
            is_active: false,
            is_animating: false,
            was_active: false,
            is_calling: false,
        }
    }

    pub fn is_content(&self) -> bool {
        self.kind == PageKind::Content
    }
}

/// Build the page sequence. A non-closable book gets one hidden cover
/// prepended and appended; a closable book marks its real first and last
/// pages instead.
pub fn build_sequence(page_count: usize, can_close: bool) -> Vec<Page> {
    let mut pages;
    if can_close {
        pages = Vec::with_capacity(page_count);
        for i in 0..page_count {
            pages.push(Page::new(i, PageKind::Content));
        }
        if let Some(first) = pages.first_mut() {
            first.is_first = true;
        }
        if let Some(last) = pages.last_mut() {
            last.is_last = true;
        }
    } else {
        pages = Vec::with_capacity(page_count + 2);
        pages.push(Page::new(0, PageKind::HiddenCover));
        for i in 0..page_count {
            pages.push(Page::new(i + 1, PageKind::Content));
        }
        pages.push(Page::new(page_count + 1, PageKind::HiddenCover));
    }
    pages
}
