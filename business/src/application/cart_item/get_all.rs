use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_item::errors::CartItemError;
use crate::domain::cart_item::model::CartItem;
use crate::domain::cart_item::repository::CartItemRepository;
use crate::domain::cart_item::use_cases::get_all::{GetAllCartItemsParams, GetAllCartItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shopcart::repository::ShopCartRepository;

pub struct GetAllCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartItemRepository>,
    pub cart_repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCartItemsUseCase for GetAllCartItemsUseCaseImpl {
    async fn execute(&self, params: GetAllCartItemsParams) -> Result<Vec<CartItem>, CartItemError> {
        self.logger
            .info(&format!("Listing items of shopcart {}", params.shopcart_id));

        self.cart_repository
            .find_by_id(params.shopcart_id)
            .await?
            .ok_or(CartItemError::CartNotFound(params.shopcart_id))?;

        let items = self.repository.get_by_cart(params.shopcart_id).await?;

        self.logger
            .info(&format!("Retrieved {} cart items", items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart_item::model::NewCartItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shopcart::model::{NewShopCart, ShopCart};
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
    async fn should_list_items_of_existing_cart() {
        let mut mock_cart_repo = MockShopCartRepo::new();
        mock_cart_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(ShopCart::from_repository(id, 7, vec![]))));

        let mut mock_repo = MockCartItemRepo::new();
        mock_repo.expect_get_by_cart().returning(|shopcart_id| {
            Ok(vec![CartItem::from_repository(
                1,
                shopcart_id,
                "shoes".to_string(),
                "1A3B".to_string(),
                2,
                19.99,
            )])
        });

        let use_case = GetAllCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart_repository: Arc::new(mock_cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllCartItemsParams { shopcart_id: 1 })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_when_cart_does_not_exist() {
        let mut mock_cart_repo = MockShopCartRepo::new();
        mock_cart_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetAllCartItemsUseCaseImpl {
            repository: Arc::new(MockCartItemRepo::new()),
            cart_repository: Arc::new(mock_cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllCartItemsParams { shopcart_id: 8 })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartItemError::CartNotFound(8)));
    }
}
