use chrono::NaiveDateTime;

use crate::errors::PaginationError;
use crate::pagination::PageState;

/// One page of results as the listing endpoint returns it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub content: Vec<T>,
    /// 0-based index of this page.
    pub number: usize,
    pub total_pages: usize,
}

impl<T> PageEnvelope<T> {
    /// Lifts the envelope's position into a validated pagination state.
    /// Fails if the server reports a page index outside its own range.
    pub fn page_state(&self, page_size: usize) -> Result<PageState, PaginationError> {
        PageState::new(self.number, self.total_pages, page_size)
    }
}

/// Listing row for a community post.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub post_id: u32,
    pub title: String,
    pub username: String,
    pub created_at: NaiveDateTime,
    pub view_count: u32,
    pub like_count: u32,
    pub comment_count: u32,
}
