use crate::cart::store::{CartStore, MemoryCartStore};
use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// One line of the cart: a product snapshot plus the quantity the user
/// intends to order. While a line exists its quantity is at least 1 and
/// never exceeds the snapshot's stock as observed at the last mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
}

/// The set of products the current user intends to purchase. Owned by the
/// session layer; every mutation writes the full snapshot through the
/// injected store so the cart survives restarts.
///
/// Quantity handling clamps rather than errors: stock can change between
/// page load and interaction, so out-of-range requests are a normal event,
/// not a caller bug.
pub struct CartManager {
    items: Vec<CartItem>,
    store: Box<dyn CartStore + Send>,
}

impl CartManager {
    pub fn new(store: Box<dyn CartStore + Send>) -> Self {
        let items = store.load().unwrap_or_else(|e| {
            tracing::warn!("Could not load persisted cart: {e}");
            Vec::new()
        });
        CartManager { items, store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryCartStore::new()))
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_for(&self, product_id: i32) -> i32 {
        self.items
            .iter()
            .find(|item| item.product.product_id == product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Stock still available to add on top of what the cart already holds.
    /// This is the figure shown next to the "add" control, distinct from the
    /// product's raw stock.
    pub fn available_stock(&self, product: &Product) -> i32 {
        (product.stock_quantity - self.quantity_for(product.product_id)).max(0)
    }

    /// Adds `quantity` units, merging with an existing line. The resulting
    /// line quantity is clamped to the product's stock. Returns false when
    /// nothing could be added (already at stock, or stock is zero) so the
    /// caller can tell the user; this is a signal, not an error.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i32) -> bool {
        let current = self.quantity_for(product.product_id);
        let clamped = (current + quantity).min(product.stock_quantity);

        if clamped <= current {
            return false;
        }

        match self
            .items
            .iter_mut()
            .find(|item| item.product.product_id == product.product_id)
        {
            Some(item) => item.quantity = clamped,
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: clamped,
            }),
        }

        self.persist();
        true
    }

    /// Sets an existing line to an exact quantity. Rejects (returns false)
    /// when the request exceeds stock; a request of zero or less removes the
    /// line instead.
    pub fn update_quantity(&mut self, product_id: i32, quantity: i32) -> bool {
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.product.product_id == product_id)
        else {
            return false;
        };

        if quantity > self.items[index].product.stock_quantity {
            return false;
        }

        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return true;
        }

        self.items[index].quantity = quantity;
        self.persist();
        true
    }

    /// Like `update_quantity` but for free-text entry fields: out-of-range
    /// input is clamped into `[1, stock]` instead of rejected. Returns the
    /// quantity actually applied (0 when the line does not exist or was
    /// removed because the product has no stock left).
    pub fn set_quantity_with_auto_correct(&mut self, product_id: i32, quantity: i32) -> i32 {
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.product.product_id == product_id)
        else {
            return 0;
        };

        let corrected = quantity
            .max(1)
            .min(self.items[index].product.stock_quantity);

        if corrected <= 0 {
            self.remove_from_cart(product_id);
            return 0;
        }

        self.items[index].quantity = corrected;
        self.persist();
        corrected
    }

    pub fn remove_from_cart(&mut self, product_id: i32) {
        self.items
            .retain(|item| item.product.product_id != product_id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of `price * quantity` across all lines, at snapshot prices.
    pub fn total(&self) -> BigDecimal {
        self.items.iter().fold(BigDecimal::from(0), |acc, item| {
            acc + &item.product.price * BigDecimal::from(item.quantity)
        })
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            tracing::warn!("Cart persistence failed: {e}");
        }
    }
}
