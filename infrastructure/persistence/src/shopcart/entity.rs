use sqlx::FromRow;

use business::domain::cart_item::model::CartItem;
use business::domain::shopcart::model::ShopCart;

#[derive(Debug, FromRow)]
pub struct ShopCartEntity {
    pub id: i32,
    pub customer_id: i32,
}

impl ShopCartEntity {
    /// Items are loaded separately; the cart row itself carries no item data.
    pub fn into_domain(self, items: Vec<CartItem>) -> ShopCart {
        ShopCart::from_repository(self.id, self.customer_id, items)
    }
}
