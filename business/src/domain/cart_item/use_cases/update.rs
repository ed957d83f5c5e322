use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::{CartItem, NewCartItem};

pub struct UpdateCartItemParams {
    pub shopcart_id: i32,
    pub id: i32,
    /// Replacement fields; `id` and `shopcart_id` are preserved.
    pub item: NewCartItem,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartItemError>;
}
