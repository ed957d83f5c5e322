use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::ShopCart;
use crate::domain::shopcart::repository::ShopCartRepository;
use crate::domain::shopcart::use_cases::update::{UpdateShopCartParams, UpdateShopCartUseCase};

pub struct UpdateShopCartUseCaseImpl {
    pub repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShopCartUseCase for UpdateShopCartUseCaseImpl {
    async fn execute(&self, params: UpdateShopCartParams) -> Result<ShopCart, ShopCartError> {
        self.logger
            .info(&format!("Updating shopcart: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShopCartError::NotFound(params.id),
                other => ShopCartError::Repository(other),
            })?;

        // Items are managed through the item routes; only cart fields change.
        let updated =
            ShopCart::from_repository(existing.id, params.customer_id, existing.items);
        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("ShopCart updated: {}", updated.id));
        Ok(updated)
    }
}
