use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to write result: {0}")]
    OutputError(String),

    #[error("Unknown selector: {0}")]
    SelectorError(String),
}
