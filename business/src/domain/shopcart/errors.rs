#[derive(Debug, thiserror::Error)]
pub enum ShopCartError {
    #[error("ShopCart with id '{0}' was not found")]
    NotFound(i32),
    #[error("database error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
