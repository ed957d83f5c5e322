use async_trait::async_trait;

use crate::domain::shopcart::errors::ShopCartError;

pub struct DeleteShopCartParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteShopCartUseCase: Send + Sync {
    /// Deleting an absent cart is a successful no-op.
    async fn execute(&self, params: DeleteShopCartParams) -> Result<(), ShopCartError>;
}
