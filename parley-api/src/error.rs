#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Text must not be empty")]
    EmptyText,

    #[error("Stored comments are malformed: {0}")]
    Deserialization(String),

    #[error("Comment storage failed: {0}")]
    Storage(String),
}
