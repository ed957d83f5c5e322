use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::clear::{ClearCartItemsParams, ClearCartItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shopcart::repository::ShopCartRepository;

pub struct ClearCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub cart_repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartItemsUseCase for ClearCartItemsUseCaseImpl {
    async fn execute(&self, params: ClearCartItemsParams) -> Result<u64, CartItemError> {
        self.logger
            .info(&format!("Clearing items of shopcart {}", params.shopcart_id));

        self.cart_repository
            .find_by_id(params.shopcart_id)
            .await?
            .ok_or(CartItemError::CartNotFound(params.shopcart_id))?;

        let count = self.repository.delete_by_cart(params.shopcart_id).await?;

        self.logger.info(&format!(
            "Cleared {} items from shopcart {}",
            count, params.shopcart_id
        ));
        Ok(count)
    }
}
