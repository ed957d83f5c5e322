use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::ShopCart;
use crate::domain::shopcart::repository::ShopCartRepository;
use crate::domain::shopcart::use_cases::get_all::{GetAllShopCartsParams, GetAllShopCartsUseCase};

pub struct GetAllShopCartsUseCaseImpl {
    pub repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShopCartsUseCase for GetAllShopCartsUseCaseImpl {
    async fn execute(&self, params: GetAllShopCartsParams) -> Result<Vec<ShopCart>, ShopCartError> {
        self.logger.info("Listing shopcarts");

        // An id filter narrows the listing to zero or one cart.
        let carts = match params.id {
            Some(id) => self
                .repository
                .find_by_id(id)
                .await?
                .into_iter()
                .collect(),
            None => self.repository.get_all().await?,
        };

        self.logger
            .info(&format!("Retrieved {} shopcarts", carts.len()));
        Ok(carts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shopcart::model::NewShopCart;
    use mockall::mock;

    mock! {
        pub ShopCartRepo {}

        #[async_trait]
        impl ShopCartRepository for ShopCartRepo {
            async fn create(&self, cart: &NewShopCart) -> Result<ShopCart, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<ShopCart>, RepositoryError>;
            async fn find_by_id(&self, id: i32) -> Result<Option<ShopCart>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<ShopCart, RepositoryError>;
            async fn save(&self, cart: &ShopCart) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_every_cart_without_filter() {
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                ShopCart::from_repository(1, 7, vec![]),
                ShopCart::from_repository(2, 9, vec![]),
            ])
        });

        let use_case = GetAllShopCartsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllShopCartsParams { id: None }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_singleton_when_filter_matches() {
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(ShopCart::from_repository(id, 7, vec![]))));

        let use_case = GetAllShopCartsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllShopCartsParams { id: Some(3) })
            .await;

        assert!(result.is_ok());
        let carts = result.unwrap();
        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].id, 3);
    }

    #[tokio::test]
    async fn should_return_empty_when_filter_misses() {
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetAllShopCartsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllShopCartsParams { id: Some(42) })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
