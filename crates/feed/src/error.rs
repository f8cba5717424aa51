#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Quill API error: {0}")]
    Api(#[from] quill_api::error::Error),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Not signed in")]
    Unauthenticated,
}
