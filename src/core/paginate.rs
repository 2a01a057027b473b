use super::{record::Record, sorter::OrderedCollection};
use crate::{error::GateInError, utils::util::Result};
use std::num::NonZeroUsize;

/// The records visible on one page together with the total page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a> {
    pub visible: &'a [Record],
    pub page: usize,
    pub page_count: usize,
}

/// Number of pages needed for `len` records; zero for an empty collection.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Returns the 1-based `page` of `ordered`.
///
/// Pages outside the collection, including page 0, yield an empty slice rather
/// than an error.
pub fn paginate(
    ordered: &OrderedCollection,
    page_size: NonZeroUsize,
    page: usize,
) -> PageSlice<'_> {
    let records = ordered.as_slice();
    let visible = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size.get()))
        .filter(|&start| start < records.len())
        .map(|start| {
            let end = start.saturating_add(page_size.get()).min(records.len());
            &records[start..end]
        })
        .unwrap_or(&[]);
    PageSlice {
        visible,
        page,
        page_count: page_count(records.len(), page_size),
    }
}

/// A navigation request from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Last,
    Prev,
    Next,
    Goto(i64),
}

impl std::str::FromStr for Navigation {
    type Err = GateInError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Navigation::First),
            "last" => Ok(Navigation::Last),
            "prev" | "previous" => Ok(Navigation::Prev),
            "next" => Ok(Navigation::Next),
            other => other.parse::<i64>().map(Navigation::Goto).map_err(|_| {
                crate::gatein_error!(
                    "Invalid page `{}`: expected first, last, prev, next or a page number",
                    s
                )
            }),
        }
    }
}

impl std::fmt::Display for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Navigation::First => write!(f, "first"),
            Navigation::Last => write!(f, "last"),
            Navigation::Prev => write!(f, "prev"),
            Navigation::Next => write!(f, "next"),
            Navigation::Goto(page) => write!(f, "{page}"),
        }
    }
}

/// Tracks the current page and applies navigation requests against a page count.
///
/// The current page always stays within `1..=max(page_count, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigator {
    current: usize,
    page_count: usize,
}

impl PageNavigator {
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 1,
            page_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.page_count
    }

    /// Adopts a new page count after the dataset changed, clamping the current page.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current = self.current.clamp(1, page_count.max(1));
    }

    /// Applies `navigation`; returns whether the current page changed.
    pub fn apply(&mut self, navigation: Navigation) -> bool {
        let target = match navigation {
            Navigation::First => Some(1),
            Navigation::Last => Some(self.page_count.max(1)),
            Navigation::Prev => (self.current > 1).then(|| self.current - 1),
            Navigation::Next => (self.current < self.page_count).then(|| self.current + 1),
            Navigation::Goto(page) => usize::try_from(page)
                .ok()
                .filter(|page| (1..=self.page_count).contains(page)),
        };
        match target {
            Some(page) if page != self.current => {
                self.current = page;
                true
            }
            _ => false,
        }
    }
}
