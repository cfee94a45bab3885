#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    /// Creation names its target list explicitly, so a missing entitlement
    /// can be reported as such without leaking anything.
    #[error("item.forbidden")]
    Forbidden,
    /// Absent item and inaccessible parent list collapse into one answer.
    #[error("item.not_found")]
    NotFound,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
