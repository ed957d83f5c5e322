use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart_item::model::CartItem;
use business::domain::errors::RepositoryError;
use business::domain::shopcart::model::{NewShopCart, ShopCart};
use business::domain::shopcart::repository::ShopCartRepository;

use crate::cart_item::entity::CartItemEntity;

use super::entity::ShopCartEntity;

pub struct ShopCartRepositoryPostgres {
    pool: PgPool,
}

impl ShopCartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn items_of(&self, shopcart_id: i32) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, shopcart_id, item_name, sku, quantity, price FROM cart_item WHERE shopcart_id = $1 ORDER BY id",
        )
        .bind(shopcart_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

#[async_trait]
impl ShopCartRepository for ShopCartRepositoryPostgres {
    async fn create(&self, cart: &NewShopCart) -> Result<ShopCart, RepositoryError> {
        // Cart row and initial items commit or roll back together.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let entity = sqlx::query_as::<_, ShopCartEntity>(
            "INSERT INTO shopcart (customer_id) VALUES ($1) RETURNING id, customer_id",
        )
        .bind(cart.customer_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut items = Vec::with_capacity(cart.items.len());
        for item in &cart.items {
            let row = sqlx::query_as::<_, CartItemEntity>(
                "INSERT INTO cart_item (shopcart_id, item_name, sku, quantity, price) VALUES ($1, $2, $3, $4, $5) RETURNING id, shopcart_id, item_name, sku, quantity, price",
            )
            .bind(entity.id)
            .bind(&item.item_name)
            .bind(&item.sku)
            .bind(item.quantity)
            .bind(item.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
            items.push(row.into_domain());
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain(items))
    }

    async fn get_all(&self) -> Result<Vec<ShopCart>, RepositoryError> {
        let carts = sqlx::query_as::<_, ShopCartEntity>(
            "SELECT id, customer_id FROM shopcart ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        // One pass over all items instead of a query per cart.
        let items = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, shopcart_id, item_name, sku, quantity, price FROM cart_item ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut by_cart: HashMap<i32, Vec<CartItem>> = HashMap::new();
        for item in items {
            by_cart
                .entry(item.shopcart_id)
                .or_default()
                .push(item.into_domain());
        }

        Ok(carts
            .into_iter()
            .map(|cart| {
                let items = by_cart.remove(&cart.id).unwrap_or_default();
                cart.into_domain(items)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ShopCart>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShopCartEntity>(
            "SELECT id, customer_id FROM shopcart WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        match entity {
            Some(entity) => {
                let items = self.items_of(entity.id).await?;
                Ok(Some(entity.into_domain(items)))
            }
            None => Ok(None),
        }
    }

    async fn get_by_id(&self, id: i32) -> Result<ShopCart, RepositoryError> {
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, cart: &ShopCart) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE shopcart SET customer_id = $2 WHERE id = $1")
            .bind(cart.id)
            .bind(cart.customer_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // Explicit cascade: items go first, in the same transaction.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM cart_item WHERE shopcart_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM shopcart WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM cart_item")
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let result = sqlx::query("DELETE FROM shopcart")
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
