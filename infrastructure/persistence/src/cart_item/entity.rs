use sqlx::FromRow;

use business::domain::cart_item::model::CartItem;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: i32,
    pub shopcart_id: i32,
    pub item_name: String,
    pub sku: String,
    pub quantity: i32,
    pub price: f64,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.id,
            self.shopcart_id,
            self.item_name,
            self.sku,
            self.quantity,
            self.price,
        )
    }
}
