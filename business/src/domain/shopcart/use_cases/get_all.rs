use async_trait::async_trait;

use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::ShopCart;

pub struct GetAllShopCartsParams {
    /// When present, restricts the listing to the cart with this id.
    pub id: Option<i32>,
}

#[async_trait]
pub trait GetAllShopCartsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllShopCartsParams) -> Result<Vec<ShopCart>, ShopCartError>;
}
