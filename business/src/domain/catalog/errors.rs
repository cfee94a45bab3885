#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
