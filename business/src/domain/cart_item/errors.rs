#[derive(Debug, thiserror::Error)]
pub enum CartItemError {
    #[error("CartItem with id '{0}' was not found")]
    NotFound(i32),
    #[error("ShopCart with id '{0}' was not found")]
    CartNotFound(i32),
    #[error("Invalid CartItem: item_name is required")]
    NameEmpty,
    #[error("Invalid CartItem: item_name longer than 64 characters")]
    NameTooLong,
    #[error("Invalid CartItem: sku is required")]
    SkuEmpty,
    #[error("Invalid CartItem: sku longer than 16 characters")]
    SkuTooLong,
    #[error("Invalid CartItem: quantity cannot be negative")]
    QuantityNegative,
    #[error("Invalid CartItem: price cannot be negative")]
    PriceNegative,
    #[error("database error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
