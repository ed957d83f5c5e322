use poem_openapi::Object;

use business::domain::cart_item::errors::CartItemError;
use business::domain::cart_item::model::{CartItem, NewCartItem};

/// Body of item create and update requests. The owning cart comes from the
/// request path; the `shopcart_id` key is required for wire compatibility
/// but the path always wins.
#[derive(Debug, Clone, Object)]
pub struct CartItemRequest {
    /// Owning cart id (informational; the path is authoritative)
    pub shopcart_id: i32,
    /// Product name (max 64 characters)
    pub item_name: String,
    /// Stock-keeping unit (max 16 characters)
    pub sku: String,
    /// Number of units
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

impl CartItemRequest {
    /// Runs domain validation over the payload fields.
    pub fn into_domain(self) -> Result<NewCartItem, CartItemError> {
        NewCartItem::new(self.item_name, self.sku, self.quantity, self.price)
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Item unique identifier
    pub id: i32,
    /// Owning cart id
    pub shopcart_id: i32,
    /// Product name
    pub item_name: String,
    /// Stock-keeping unit
    pub sku: String,
    /// Number of units
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            shopcart_id: item.shopcart_id,
            item_name: item.item_name,
            sku: item.sku,
            quantity: item.quantity,
            price: item.price,
        }
    }
}
