/// Capability the storefront needs from a cart.
///
/// The UI only adds items and reads the item count for the header badge.
/// Pricing, checkout and persistence belong to whatever backs this trait.
pub trait CartService {
    /// Add `quantity` units of a product.
    fn add(&mut self, product_id: i64, quantity: u32);

    /// Total number of units in the cart.
    fn count(&self) -> u32;
}

/// One product in the cart with its accumulated quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CartLine {
    product_id: i64,
    quantity: u32,
}

/// In-memory cart scoped to the current session.
///
/// Lines keep the order in which products were first added. Nothing is
/// persisted; a reload starts with an empty cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCart {
    lines: Vec<CartLine>,
}

impl SessionCart {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartService for SessionCart {
    fn add(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product_id,
                quantity,
            }),
        }
    }

    fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }
}
