use super::{NavAffordances, PageState, PageWindow};

/// How many page links a paginator block shows unless configured otherwise.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// How the visible block of page numbers tracks the current page.
///
/// The listing screens this crate grew out of shipped both shapes on
/// different pages, with neither clearly authoritative, so both are kept
/// and the caller picks one. `Block` is the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Pages partition into fixed groups of `window_size`; the window is
    /// the group the current page belongs to.
    Block,
    /// The window centers on the current page and clamps at either edge,
    /// giving the surplus back to the opposite bound so it keeps up to
    /// `window_size` entries near the first and last pages.
    SlidingCentered,
}

impl WindowPolicy {
    /// The block of page links to draw, or `None` when there are no pages.
    ///
    /// A `window_size` of zero is treated as one.
    #[must_use]
    pub fn window(self, state: &PageState, window_size: usize) -> Option<PageWindow> {
        let current = state.current_page()?;
        let total = state.total_pages();
        let window_size = window_size.max(1);

        let (start_page, end_page) = match self {
            Self::Block => {
                let start = (current / window_size) * window_size;
                (start, (start + window_size - 1).min(total - 1))
            }
            Self::SlidingCentered => {
                let lead = (window_size - 1) / 2;
                let trail = window_size / 2;
                let mut start = current.saturating_sub(lead);
                let mut end = (current + trail).min(total - 1);
                if end + 1 - start < window_size {
                    if start == 0 {
                        end = (window_size - 1).min(total - 1);
                    } else {
                        start = (end + 1).saturating_sub(window_size);
                    }
                }
                (start, end)
            }
        };

        Some(PageWindow {
            start_page,
            end_page,
        })
    }
}

/// Which first/prev/next/last controls to draw for the given state.
///
/// The first and last jumps stay hidden while the current page is within
/// one page of that end; the page block already links the boundary page,
/// so the jump would be redundant.
#[must_use]
pub fn compute_affordances(state: &PageState) -> NavAffordances {
    let Some(current) = state.current_page() else {
        return NavAffordances::default();
    };
    let total = state.total_pages();
    NavAffordances {
        show_first: current > 1,
        show_prev: current > 0,
        show_next: current + 1 < total,
        show_last: current + 2 < total,
    }
}

impl PageState {
    #[must_use]
    pub fn window(&self, policy: WindowPolicy, window_size: usize) -> Option<PageWindow> {
        policy.window(self, window_size)
    }

    #[must_use]
    pub fn affordances(&self) -> NavAffordances {
        compute_affordances(self)
    }
}
