#[derive(thiserror::Error, Debug)]
pub enum PaginationError {
    #[error("Page {requested} is out of range for {total_pages} total pages")]
    OutOfRange {
        requested: usize,
        total_pages: usize,
    },
    #[error("Page size must be positive")]
    ZeroPageSize,
}
