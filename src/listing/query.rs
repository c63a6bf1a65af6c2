use crate::errors::ListingError;

const fn default_page_size() -> usize {
    10
}

fn default_sort() -> String {
    "createdAt,desc".to_string()
}

/// Query parameters for the board listing endpoint, under the wire names
/// the server expects. One value is built per navigation or search action
/// and the previous one is thrown away.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    pub board_id: u32,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl ListingQuery {
    /// First page of a board, default sort, no search.
    #[must_use]
    pub fn new(board_id: u32) -> Self {
        Self {
            board_id,
            page: 0,
            size: default_page_size(),
            sort: default_sort(),
            search_type: None,
            keyword: None,
        }
    }

    /// Moving to another page keeps the active search and sort.
    #[must_use]
    pub fn for_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// A new search always restarts from the first page. The keyword is
    /// trimmed; a blank one is rejected before any request goes out.
    pub fn with_search(&self, search_type: &str, keyword: &str) -> Result<Self, ListingError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ListingError::EmptyKeyword);
        }
        Ok(Self {
            page: 0,
            search_type: Some(search_type.to_string()),
            keyword: Some(keyword.to_string()),
            ..self.clone()
        })
    }

    /// Key/value pairs in the order they appear on the request line.
    /// Search pairs are present only while a search is active.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("boardId", self.board_id.to_string()),
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.clone()),
        ];
        if let (Some(search_type), Some(keyword)) = (&self.search_type, &self.keyword) {
            pairs.push(("searchType", search_type.clone()));
            pairs.push(("keyword", keyword.clone()));
        }
        pairs
    }
}

/// The address bar shows pages 1-based; everything else here is 0-based.
#[must_use]
pub const fn to_display_page(index: usize) -> usize {
    index + 1
}

/// Parses a 1-based `page` query parameter back to a 0-based index.
/// Unparseable or sub-1 input falls back to the first page.
#[must_use]
pub fn from_display_page(raw: &str) -> usize {
    raw.trim()
        .parse::<usize>()
        .map_or(0, |page| page.saturating_sub(1))
}
