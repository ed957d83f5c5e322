use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;

pub struct DeleteCartItemParams {
    pub shopcart_id: i32,
    pub id: i32,
}

#[async_trait]
pub trait DeleteCartItemUseCase: Send + Sync {
    /// Deleting an absent item is a successful no-op.
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartItemError>;
}
