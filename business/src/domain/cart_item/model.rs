use super::errors::CartItemError;

/// Column widths of the `cart_item` table.
pub const ITEM_NAME_MAX_LEN: usize = 64;
pub const SKU_MAX_LEN: usize = 16;

/// A persisted line item. Always carries the id the database assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i32,
    pub shopcart_id: i32,
    pub item_name: String,
    pub sku: String,
    pub quantity: i32,
    pub price: f64,
}

/// Line-item fields before the database has assigned an id or an owner.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub item_name: String,
    pub sku: String,
    pub quantity: i32,
    pub price: f64,
}

impl NewCartItem {
    pub fn new(
        item_name: String,
        sku: String,
        quantity: i32,
        price: f64,
    ) -> Result<Self, CartItemError> {
        if item_name.trim().is_empty() {
            return Err(CartItemError::NameEmpty);
        }
        if item_name.len() > ITEM_NAME_MAX_LEN {
            return Err(CartItemError::NameTooLong);
        }
        if sku.trim().is_empty() {
            return Err(CartItemError::SkuEmpty);
        }
        if sku.len() > SKU_MAX_LEN {
            return Err(CartItemError::SkuTooLong);
        }
        if quantity < 0 {
            return Err(CartItemError::QuantityNegative);
        }
        if price < 0.0 {
            return Err(CartItemError::PriceNegative);
        }

        Ok(Self {
            item_name,
            sku,
            quantity,
            price,
        })
    }
}

impl CartItem {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        shopcart_id: i32,
        item_name: String,
        sku: String,
        quantity: i32,
        price: f64,
    ) -> Self {
        Self {
            id,
            shopcart_id,
            item_name,
            sku,
            quantity,
            price,
        }
    }
}
