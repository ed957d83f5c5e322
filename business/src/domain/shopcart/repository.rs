use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewShopCart, ShopCart};

#[async_trait]
pub trait ShopCartRepository: Send + Sync {
    /// Inserts the cart and any attached items in one transaction; the
    /// database assigns every id.
    async fn create(&self, cart: &NewShopCart) -> Result<ShopCart, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<ShopCart>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ShopCart>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<ShopCart, RepositoryError>;
    /// Persists mutations to the cart's own fields; items are managed
    /// through the item repository.
    async fn save(&self, cart: &ShopCart) -> Result<(), RepositoryError>;
    /// Removes the cart and its items; no-op when the cart is absent.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// Maintenance reset: removes every cart and every item.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
