use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;

pub struct GetCartItemByIdParams {
    /// Cart from the request path; the item must belong to it.
    pub shopcart_id: i32,
    pub id: i32,
}

#[async_trait]
pub trait GetCartItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartItemError>;
}
