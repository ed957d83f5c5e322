use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::repository::ShopCartRepository;
use crate::domain::shopcart::use_cases::clear_all::ClearAllShopCartsUseCase;

/// Maintenance reset used to wipe state between test runs.
pub struct ClearAllShopCartsUseCaseImpl {
    pub repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearAllShopCartsUseCase for ClearAllShopCartsUseCaseImpl {
    async fn execute(&self) -> Result<u64, ShopCartError> {
        self.logger.warn("Clearing all shopcarts");

        let count = self.repository.delete_all().await?;

        self.logger
            .info(&format!("Cleared {} shopcarts", count));
        Ok(count)
    }
}
