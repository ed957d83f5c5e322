use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::create::{CreateCartItemParams, CreateCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shopcart::repository::ShopCartRepository;

pub struct CreateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub cart_repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartItemUseCase for CreateCartItemUseCaseImpl {
    async fn execute(&self, params: CreateCartItemParams) -> Result<CartItem, CartItemError> {
        self.logger.info(&format!(
            "Adding item '{}' to shopcart {}",
            params.item.item_name, params.shopcart_id
        ));

        // The owning cart must exist before an item can reference it.
        self.cart_repository
            .find_by_id(params.shopcart_id)
            .await?
            .ok_or(CartItemError::CartNotFound(params.shopcart_id))?;

        let item = self
            .repository
            .create(params.shopcart_id, &params.item)
            .await?;

        self.logger.info(&format!("CartItem created: {}", item.id));
        Ok(item)
    }
}
