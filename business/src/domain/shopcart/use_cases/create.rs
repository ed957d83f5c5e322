use async_trait::async_trait;

use crate::domain::cart_item::model::NewCartItem;
use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::ShopCart;

pub struct CreateShopCartParams {
    pub customer_id: i32,
    /// Items to persist with the cart in the same transaction.
    pub items: Vec<NewCartItem>,
}

#[async_trait]
pub trait CreateShopCartUseCase: Send + Sync {
    async fn execute(&self, params: CreateShopCartParams) -> Result<ShopCart, ShopCartError>;
}
