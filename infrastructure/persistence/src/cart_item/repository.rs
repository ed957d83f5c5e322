use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart_item::model::{CartItem, NewCartItem};
use business::domain::cart_item::repository::CartItemRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;

pub struct CartItemRepositoryPostgres {
    pool: PgPool,
}

impl CartItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartItemRepository for CartItemRepositoryPostgres {
    async fn create(
        &self,
        shopcart_id: i32,
        item: &NewCartItem,
    ) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "INSERT INTO cart_item (shopcart_id, item_name, sku, quantity, price) VALUES ($1, $2, $3, $4, $5) RETURNING id, shopcart_id, item_name, sku, quantity, price",
        )
        .bind(shopcart_id)
        .bind(&item.item_name)
        .bind(&item.sku)
        .bind(item.quantity)
        .bind(item.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CartItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, shopcart_id, item_name, sku, quantity, price FROM cart_item WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_id(&self, id: i32) -> Result<CartItem, RepositoryError> {
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn get_by_cart(&self, shopcart_id: i32) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, shopcart_id, item_name, sku, quantity, price FROM cart_item WHERE shopcart_id = $1 ORDER BY id",
        )
        .bind(shopcart_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE cart_item SET item_name = $2, sku = $3, quantity = $4, price = $5 WHERE id = $1",
        )
        .bind(item.id)
        .bind(&item.item_name)
        .bind(&item.sku)
        .bind(item.quantity)
        .bind(item.price)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_item WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_by_cart(&self, shopcart_id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_item WHERE shopcart_id = $1")
            .bind(shopcart_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
