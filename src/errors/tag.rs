#[derive(thiserror::Error, Debug)]
pub enum TagError {
    #[error("Invalid tag: {0}")]
    InvalidFormat(String),
    #[error("Tag already attached: {0}")]
    Duplicate(String),
    #[error("Failed to parse tag field")]
    MalformedField(#[source] serde_json::Error),
}
