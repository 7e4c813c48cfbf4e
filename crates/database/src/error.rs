use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the directory and statistics services
///
/// Store errors are kept as the source for logging; the messages are what
/// callers get to see.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Student not found")]
    NotFound(String),

    #[error("Failed to fetch students")]
    Retrieval(#[source] DbErr),

    #[error("Failed to fetch student")]
    FetchFailed(#[source] DbErr),

    #[error("Failed to create student")]
    CreateFailed(#[source] DbErr),

    #[error("Failed to update student")]
    UpdateFailed(#[source] DbErr),

    #[error("Failed to fetch statistics")]
    Statistics(#[source] DbErr),
}

impl ServiceError {
    /// The underlying store error, if any
    pub fn store_error(&self) -> Option<&DbErr> {
        match self {
            Self::NotFound(_) => None,
            Self::Retrieval(err)
            | Self::FetchFailed(err)
            | Self::CreateFailed(err)
            | Self::UpdateFailed(err)
            | Self::Statistics(err) => Some(err),
        }
    }
}
