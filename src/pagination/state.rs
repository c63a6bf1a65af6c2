use crate::errors::PaginationError;

/// Where a listing currently stands: the page being shown, how many pages
/// exist, and how many items each page holds.
///
/// Every navigation action produces a fresh state; nothing mutates one in
/// place. Zero total pages is a valid terminal state in which no page is
/// current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    total_pages: usize,
    page_size: usize,
}

impl PageState {
    /// Indexes are 0-based. Fails if `current_page` falls outside the page
    /// range or `page_size` is zero.
    pub fn new(
        current_page: usize,
        total_pages: usize,
        page_size: usize,
    ) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        if total_pages == 0 && current_page > 0 {
            return Err(PaginationError::OutOfRange {
                requested: current_page,
                total_pages,
            });
        }
        if total_pages > 0 && current_page >= total_pages {
            return Err(PaginationError::OutOfRange {
                requested: current_page,
                total_pages,
            });
        }
        Ok(Self {
            current_page,
            total_pages,
            page_size,
        })
    }

    /// `None` when there are no pages at all.
    #[must_use]
    pub const fn current_page(&self) -> Option<usize> {
        if self.total_pages == 0 {
            None
        } else {
            Some(self.current_page)
        }
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Maps a clicked page link to the state the listing should move to.
    ///
    /// Rejects indexes outside `0..total_pages` rather than clamping; links
    /// are only ever generated for valid pages, so an out-of-range index is
    /// a caller bug.
    pub fn request_page(&self, page: usize) -> Result<Self, PaginationError> {
        if page >= self.total_pages {
            return Err(PaginationError::OutOfRange {
                requested: page,
                total_pages: self.total_pages,
            });
        }
        Ok(Self {
            current_page: page,
            ..*self
        })
    }
}

/// Contiguous block of page indexes rendered as links, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_page: usize,
    pub end_page: usize,
}

impl PageWindow {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end_page - self.start_page + 1
    }

    /// A window always holds at least one page.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn contains(&self, page: usize) -> bool {
        self.start_page <= page && page <= self.end_page
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start_page..=self.end_page
    }
}

/// Which jump controls the paginator draws around the page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavAffordances {
    pub show_first: bool,
    pub show_prev: bool,
    pub show_next: bool,
    pub show_last: bool,
}
