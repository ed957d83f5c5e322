use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::delete::{DeleteCartItemParams, DeleteCartItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartItemError> {
        self.logger
            .info(&format!("Deleting cart item: {}", params.id));

        // Absent items and items of other carts are both no-ops; the
        // endpoint is idempotent.
        match self.repository.find_by_id(params.id).await? {
            Some(item) if item.shopcart_id == params.shopcart_id => {
                self.repository.delete(params.id).await?;
                self.logger
                    .info(&format!("CartItem deleted: {}", params.id));
            }
            _ => {
                self.logger
                    .debug(&format!("CartItem {} not present, nothing to delete", params.id));
            }
        }

        Ok(())
    }
}
