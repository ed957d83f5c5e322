use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::update::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartItemError> {
        self.logger
            .info(&format!("Updating cart item: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartItemError::NotFound(params.id),
                other => CartItemError::Repository(other),
            })?;

        if existing.shopcart_id != params.shopcart_id {
            return Err(CartItemError::NotFound(params.id));
        }

        // Replace the payload fields; id and owner never change on update.
        let updated = CartItem::from_repository(
            existing.id,
            existing.shopcart_id,
            params.item.item_name,
            params.item.sku,
            params.item.quantity,
            params.item.price,
        );
        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("CartItem updated: {}", updated.id));
        Ok(updated)
    }
}
