use std::path::PathBuf;

use xq_lexer::StartError;

#[derive(Debug, thiserror::Error)]
pub enum XqlexError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no input: pass a file or --text")]
    NoInput,
    #[error(transparent)]
    Start(#[from] StartError),
    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}
