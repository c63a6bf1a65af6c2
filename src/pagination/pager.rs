use super::{PageState, WindowPolicy, compute_affordances};

/// One control in a rendered paginator, in left-to-right draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    /// Jump to the first page.
    First,
    Prev,
    /// A numbered link; display labels are `index + 1`.
    Page { index: usize, current: bool },
    Next,
    /// Jump to the last page.
    Last,
}

impl PagerItem {
    /// The 0-based page this control navigates to, or `None` for the
    /// current-page indicator (which is not clickable).
    #[must_use]
    pub fn target(&self, state: &PageState) -> Option<usize> {
        let current = state.current_page()?;
        match self {
            Self::First => Some(0),
            Self::Prev => current.checked_sub(1),
            Self::Page { current: true, .. } => None,
            Self::Page { index, .. } => Some(*index),
            Self::Next => {
                let next = current + 1;
                (next < state.total_pages()).then_some(next)
            }
            Self::Last => Some(state.total_pages() - 1),
        }
    }
}

/// Flattens a page state into the controls a paginator should draw.
///
/// Rendering is injected rather than baked in: callers walk the items and
/// emit whatever markup (or text) they like, then feed a clicked item's
/// [`PagerItem::target`] back into [`PageState::request_page`]. One page
/// yields only the active indicator; zero pages yield nothing.
#[must_use]
pub fn pager_items(state: &PageState, policy: WindowPolicy, window_size: usize) -> Vec<PagerItem> {
    let Some(current) = state.current_page() else {
        return Vec::new();
    };
    if state.total_pages() == 1 {
        return vec![PagerItem::Page {
            index: 0,
            current: true,
        }];
    }
    let Some(window) = policy.window(state, window_size) else {
        return Vec::new();
    };
    let affordances = compute_affordances(state);

    let mut items = Vec::with_capacity(window.len() + 4);
    if affordances.show_first {
        items.push(PagerItem::First);
    }
    if affordances.show_prev {
        items.push(PagerItem::Prev);
    }
    for index in window.pages() {
        items.push(PagerItem::Page {
            index,
            current: index == current,
        });
    }
    if affordances.show_next {
        items.push(PagerItem::Next);
    }
    if affordances.show_last {
        items.push(PagerItem::Last);
    }
    items
}
