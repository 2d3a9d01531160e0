#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry data error: {0}")]
    Data(#[from] serde_json::Error),

    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid component name: {0:?}")]
    InvalidName(String),

    #[error("duplicate component name: {duplicate} collides with {existing}")]
    DuplicateName { duplicate: String, existing: String },
}
