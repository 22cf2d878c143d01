use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Unable to render partial: No partial view script provided")]
    MissingPartial,

    #[error(
        "Unable to render partial: A view partial supplied as a sequence must contain exactly two values (got {0})"
    )]
    InvalidPartialShape(usize),

    #[error("Render error: {0}")]
    Render(#[from] viewkit_engine::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ViewError>;
