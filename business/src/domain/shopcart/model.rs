use crate::domain::cart_item::model::{CartItem, NewCartItem};

/// A persisted shopping cart with its owned line items.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopCart {
    pub id: i32,
    pub customer_id: i32,
    pub items: Vec<CartItem>,
}

/// A cart that has not been persisted yet; the database assigns every id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShopCart {
    pub customer_id: i32,
    pub items: Vec<NewCartItem>,
}

impl ShopCart {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, customer_id: i32, items: Vec<CartItem>) -> Self {
        Self {
            id,
            customer_id,
            items,
        }
    }
}

impl NewShopCart {
    pub fn new(customer_id: i32, items: Vec<NewCartItem>) -> Self {
        Self { customer_id, items }
    }
}
