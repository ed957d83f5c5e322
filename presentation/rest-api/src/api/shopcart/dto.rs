use poem_openapi::Object;

use business::domain::shopcart::model::ShopCart;

use crate::api::cart_item::dto::{CartItemRequest, CartItemResponse};

#[derive(Debug, Clone, Object)]
pub struct CreateShopCartRequest {
    /// Owning customer
    pub customer_id: i32,
    /// Items to persist with the cart (defaults to none)
    #[oai(default)]
    pub items: Vec<CartItemRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateShopCartRequest {
    /// Replacement customer id
    pub customer_id: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ShopCartResponse {
    /// Cart unique identifier
    pub id: i32,
    /// Owning customer
    pub customer_id: i32,
    /// Items in insertion order
    pub items: Vec<CartItemResponse>,
}

impl From<ShopCart> for ShopCartResponse {
    fn from(cart: ShopCart) -> Self {
        Self {
            id: cart.id,
            customer_id: cart.customer_id,
            items: cart.items.into_iter().map(Into::into).collect(),
        }
    }
}
