use async_trait::async_trait;

use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::ShopCart;

pub struct GetShopCartByIdParams {
    pub id: i32,
}

#[async_trait]
pub trait GetShopCartByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetShopCartByIdParams) -> Result<ShopCart, ShopCartError>;
}
