use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::ShopCart;
use crate::domain::shopcart::repository::ShopCartRepository;
use crate::domain::shopcart::use_cases::get_by_id::{GetShopCartByIdParams, GetShopCartByIdUseCase};

pub struct GetShopCartByIdUseCaseImpl {
    pub repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShopCartByIdUseCase for GetShopCartByIdUseCaseImpl {
    async fn execute(&self, params: GetShopCartByIdParams) -> Result<ShopCart, ShopCartError> {
        self.logger
            .info(&format!("Fetching shopcart: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShopCartError::NotFound(params.id),
                other => ShopCartError::Repository(other),
            })
    }
}
