use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] pricedesk_core::ValidationError),

    #[error(transparent)]
    Table(#[from] pricedesk_core::TableError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Table(_) => 3,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
