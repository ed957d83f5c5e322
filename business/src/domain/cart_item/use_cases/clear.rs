use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;

pub struct ClearCartItemsParams {
    pub shopcart_id: i32,
}

#[async_trait]
pub trait ClearCartItemsUseCase: Send + Sync {
    /// Removes every item from one cart; returns the number removed.
    async fn execute(&self, params: ClearCartItemsParams) -> Result<u64, CartItemError>;
}
