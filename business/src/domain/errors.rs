/// Repository errors for the domain layer.
/// Adapters collapse driver-level failures into these variants.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record was not found")]
    NotFound,
    #[error("database error")]
    DatabaseError,
}
