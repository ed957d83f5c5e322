use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::model::{NewShopCart, ShopCart};
use crate::domain::shopcart::repository::ShopCartRepository;
use crate::domain::shopcart::use_cases::create::{CreateShopCartParams, CreateShopCartUseCase};

pub struct CreateShopCartUseCaseImpl {
    pub repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShopCartUseCase for CreateShopCartUseCaseImpl {
    async fn execute(&self, params: CreateShopCartParams) -> Result<ShopCart, ShopCartError> {
        self.logger.info(&format!(
            "Creating shopcart for customer {}",
            params.customer_id
        ));

        let cart = NewShopCart::new(params.customer_id, params.items);
        let created = self.repository.create(&cart).await?;

        self.logger.info(&format!(
            "ShopCart created: {} ({} items)",
            created.id,
            created.items.len()
        ));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart_item::model::{CartItem, NewCartItem};
    use crate::domain::errors::RepositoryError;
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
    async fn should_create_empty_cart() {
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo
            .expect_create()
            .returning(|cart| Ok(ShopCart::from_repository(1, cart.customer_id, vec![])));

        let use_case = CreateShopCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShopCartParams {
                customer_id: 7,
                items: vec![],
            })
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.id, 1);
        assert_eq!(cart.customer_id, 7);
        assert!(cart.items.is_empty());
    }

    #[tokio::test]
    async fn should_persist_initial_items_with_cart() {
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo.expect_create().returning(|cart| {
            let items = cart
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    CartItem::from_repository(
                        i as i32 + 1,
                        1,
                        item.item_name.clone(),
                        item.sku.clone(),
                        item.quantity,
                        item.price,
                    )
                })
                .collect();
            Ok(ShopCart::from_repository(1, cart.customer_id, items))
        });

        let use_case = CreateShopCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let item = NewCartItem::new("shoes".to_string(), "1A3B".to_string(), 2, 19.99).unwrap();
        let result = use_case
            .execute(CreateShopCartParams {
                customer_id: 7,
                items: vec![item],
            })
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].shopcart_id, cart.id);
        assert_eq!(cart.items[0].item_name, "shoes");
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateShopCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShopCartParams {
                customer_id: 7,
                items: vec![],
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ShopCartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
