use async_trait::async_trait;

use crate::domain::shopcart::errors::ShopCartError;

#[async_trait]
pub trait ClearAllShopCartsUseCase: Send + Sync {
    /// Removes every cart and item; returns the number of carts removed.
    async fn execute(&self) -> Result<u64, ShopCartError>;
}
