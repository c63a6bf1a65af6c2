#[derive(thiserror::Error, Debug)]
pub enum ListingError {
    #[error("Search keyword is blank")]
    EmptyKeyword,
}
