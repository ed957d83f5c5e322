use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::{CartItem, NewCartItem};

pub struct CreateCartItemParams {
    /// Owning cart, taken from the request path; must already exist.
    pub shopcart_id: i32,
    pub item: NewCartItem,
}

#[async_trait]
pub trait CreateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartItemError>;
}
