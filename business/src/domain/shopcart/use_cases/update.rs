use async_trait::async_trait;

use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::ShopCart;

pub struct UpdateShopCartParams {
    pub id: i32,
    pub customer_id: i32,
}

#[async_trait]
pub trait UpdateShopCartUseCase: Send + Sync {
    async fn execute(&self, params: UpdateShopCartParams) -> Result<ShopCart, ShopCartError>;
}
