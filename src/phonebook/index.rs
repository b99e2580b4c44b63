//! # Listing and paging
//!
//! Records are listed sorted by their display name (case-insensitive) and
//! numbered from 1. The numbers are what users type to pick a record, both on
//! the command line (`phonebook view 3`) and in the interactive list.
//!
//! Numbers are positional: they are recomputed on every listing, so adding or
//! removing a record shifts the numbers of those sorting after it. A filtered
//! listing keeps the numbers of the full listing so that `3` means the same
//! record whether or not a query is active.
//!
//! The interactive list is paged by [`Pager`]; its navigation tokens are parsed
//! into [`ListCommand`].

use crate::config::{clamp_page_size, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::model::Record;
use std::ops::Range;
use std::str::FromStr;

const PAGE_SIZE_STEP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: Record,
}

/// Sorts records by display name and assigns 1-based indexes.
pub fn index_records(mut records: Vec<Record>) -> Vec<DisplayRecord> {
    records.sort_by_cached_key(|r| (r.display_name().to_lowercase(), r.file.clone()));
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record,
        })
        .collect()
}

/// A token typed in the interactive list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    Next,
    Prev,
    Grow,
    Shrink,
    Back,
    Select(usize),
}

impl FromStr for ListCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" => Ok(ListCommand::Next),
            "prev" => Ok(ListCommand::Prev),
            "+" => Ok(ListCommand::Grow),
            "-" => Ok(ListCommand::Shrink),
            "back" => Ok(ListCommand::Back),
            other => other
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(ListCommand::Select)
                .ok_or_else(|| format!("Unknown list command: {}", s.trim())),
        }
    }
}

/// Page position over a list of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    page_size: usize,
    page: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: clamp_page_size(page_size),
            page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Item positions shown on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// Adopts a new item count, staying on the current page when it still exists.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.min(self.page_count() - 1);
    }

    pub fn next(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn grow(&mut self) -> bool {
        self.resize((self.page_size + PAGE_SIZE_STEP).min(MAX_PAGE_SIZE))
    }

    pub fn shrink(&mut self) -> bool {
        self.resize(self.page_size.saturating_sub(PAGE_SIZE_STEP).max(MIN_PAGE_SIZE))
    }

    /// Changes the page size, keeping the first visible item on screen.
    fn resize(&mut self, page_size: usize) -> bool {
        if page_size == self.page_size {
            return false;
        }
        let first = self.range().start;
        self.page_size = page_size;
        self.page = first / page_size;
        true
    }
}
