use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::get_by_id::{
    GetCartItemByIdParams, GetCartItemByIdUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCartItemByIdUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemByIdUseCase for GetCartItemByIdUseCaseImpl {
    async fn execute(&self, params: GetCartItemByIdParams) -> Result<CartItem, CartItemError> {
        self.logger
            .info(&format!("Fetching cart item: {}", params.id));

        let item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartItemError::NotFound(params.id),
                other => CartItemError::Repository(other),
            })?;

        // An item reached through the wrong cart's URL does not exist there.
        if item.shopcart_id != params.shopcart_id {
            return Err(CartItemError::NotFound(params.id));
        }

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart_item::model::NewCartItem;
    use mockall::mock;

    mock! {
        pub CartItemRepo {}

        #[async_trait]
        impl CartItemRepository for CartItemRepo {
            async fn create(&self, shopcart_id: i32, item: &NewCartItem) -> Result<CartItem, RepositoryError>;
            async fn find_by_id(&self, id: i32) -> Result<Option<CartItem>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<CartItem, RepositoryError>;
            async fn get_by_cart(&self, shopcart_id: i32) -> Result<Vec<CartItem>, RepositoryError>;
            async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
            async fn delete_by_cart(&self, shopcart_id: i32) -> Result<u64, RepositoryError>;
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
    async fn should_return_item_owned_by_cart() {
        let mut mock_repo = MockCartItemRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(CartItem::from_repository(
                id,
                1,
                "shoes".to_string(),
                "1A3B".to_string(),
                2,
                19.99,
            ))
        });

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                shopcart_id: 1,
                id: 5,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 5);
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_absent() {
        let mut mock_repo = MockCartItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                shopcart_id: 1,
                id: 5,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartItemError::NotFound(5)));
    }

    #[tokio::test]
    async fn should_hide_item_owned_by_another_cart() {
        let mut mock_repo = MockCartItemRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(CartItem::from_repository(
                id,
                2,
                "shoes".to_string(),
                "1A3B".to_string(),
                2,
                19.99,
            ))
        });

        let use_case = GetCartItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartItemByIdParams {
                shopcart_id: 1,
                id: 5,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartItemError::NotFound(5)));
    }
}
