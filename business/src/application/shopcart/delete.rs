use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopcart::errors::ShopCartError;
use crate::domain::shopcart::repository::ShopCartRepository;
use crate::domain::shopcart::use_cases::delete::{DeleteShopCartParams, DeleteShopCartUseCase};

pub struct DeleteShopCartUseCaseImpl {
    pub repository: Arc<dyn ShopCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShopCartUseCase for DeleteShopCartUseCaseImpl {
    async fn execute(&self, params: DeleteShopCartParams) -> Result<(), ShopCartError> {
        self.logger
            .info(&format!("Deleting shopcart: {}", params.id));

        // No existence check: deleting an absent cart stays a no-op.
        self.repository.delete(params.id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shopcart::model::{NewShopCart, ShopCart};
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
    async fn should_delete_cart() {
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteShopCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteShopCartParams { id: 1 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_cart_never_existed() {
        // The repository delete is a no-op on absent rows, so repeated
        // deletes both succeed.
        let mut mock_repo = MockShopCartRepo::new();
        mock_repo.expect_delete().times(2).returning(|_| Ok(()));

        let use_case = DeleteShopCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DeleteShopCartParams { id: 1 }).await.is_ok());
        assert!(use_case.execute(DeleteShopCartParams { id: 1 }).await.is_ok());
    }
}
