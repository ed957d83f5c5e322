use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CartItem, NewCartItem};

#[async_trait]
pub trait CartItemRepository: Send + Sync {
    /// Inserts the item under the given cart; the database assigns the id.
    async fn create(
        &self,
        shopcart_id: i32,
        item: &NewCartItem,
    ) -> Result<CartItem, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CartItem>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<CartItem, RepositoryError>;
    /// All items owned by one cart, in insertion order.
    async fn get_by_cart(&self, shopcart_id: i32) -> Result<Vec<CartItem>, RepositoryError>;
    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn delete_by_cart(&self, shopcart_id: i32) -> Result<u64, RepositoryError>;
}
