use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;

pub struct GetAllCartItemsParams {
    pub shopcart_id: i32,
}

#[async_trait]
pub trait GetAllCartItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCartItemsParams) -> Result<Vec<CartItem>, CartItemError>;
}
