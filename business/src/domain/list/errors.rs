#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("list.name_empty")]
    NameEmpty,
    /// Covers both an absent list and a caller without entitlement; the two
    /// are kept indistinguishable so list ids cannot be enumerated.
    #[error("list.not_found")]
    NotFound,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
