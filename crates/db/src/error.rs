use storedvd_core::error::CoreError;

/// Error type returned by the repository layer.
///
/// Domain-rule failures surface as `Core`; constraint violations and
/// connection problems surface as `Sqlx`.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),
}
