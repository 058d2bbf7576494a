//! Basket and checkout flow

use rand::{Rng, RngCore};
use serde::Serialize;

use super::menu::MenuItem;
use crate::error::CafeError;

/// Flat service charge added to any non-empty basket
pub const SERVICE_FEE_CENTS: u32 = 50;

/// `€3.50`
pub fn format_price(cents: u32) -> String {
    format!("€{}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    #[default]
    Basket,
    Checkout,
    Success,
}

impl CheckoutStep {
    pub fn title(self) -> &'static str {
        match self {
            CheckoutStep::Basket => "Το καλάθι σου",
            CheckoutStep::Checkout => "Στοιχεία Παραγγελίας",
            CheckoutStep::Success => "Η παραγγελία στάλθηκε",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Κάρτα",
            PaymentMethod::Cash => "Μετρητά",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PaymentMethod::Card => PaymentMethod::Cash,
            PaymentMethod::Cash => PaymentMethod::Card,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartLine {
    pub item: &'static MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> u32 {
        self.item.price_cents * self.quantity
    }
}

/// Items keyed by menu id, in the order they were first added
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn add(&mut self, item: &'static MenuItem) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// Take one unit away; the line disappears at zero
    pub fn remove(&mut self, item_id: &str) {
        if let Some(pos) = self.lines.iter().position(|line| line.item.id == item_id) {
            if self.lines[pos].quantity <= 1 {
                self.lines.remove(pos);
            } else {
                self.lines[pos].quantity -= 1;
            }
        }
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item.id == item_id)
            .map_or(0, |line| line.quantity)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Units across all lines
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal_cents(&self) -> u32 {
        self.lines.iter().map(CartLine::line_total_cents).sum()
    }

    pub fn service_fee_cents(&self) -> u32 {
        if self.subtotal_cents() > 0 {
            SERVICE_FEE_CENTS
        } else {
            0
        }
    }

    pub fn total_cents(&self) -> u32 {
        self.subtotal_cents() + self.service_fee_cents()
    }
}

/// Who the order is for and how it is paid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderDetails {
    pub customer_name: String,
    pub seat_number: String,
    pub notes: String,
    pub payment: PaymentMethod,
}

impl OrderDetails {
    /// `name · seat`, with placeholders for blanks
    pub fn recipient(&self) -> String {
        let name = self.customer_name.trim();
        let seat = self.seat_number.trim();
        format!(
            "{} · {}",
            if name.is_empty() { "Επιβάτης" } else { name },
            if seat.is_empty() { "Θέση" } else { seat }
        )
    }
}

/// One passenger's order, from basket to confirmation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CafeOrder {
    cart: Cart,
    step: CheckoutStep,
    pub details: OrderDetails,
    order_number: Option<String>,
}

impl CafeOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Set once the order has been placed
    pub fn order_number(&self) -> Option<&str> {
        self.order_number.as_deref()
    }

    /// Add one unit; a placed order is frozen
    pub fn add(&mut self, item: &'static MenuItem) -> bool {
        if self.step == CheckoutStep::Success {
            return false;
        }
        self.cart.add(item);
        true
    }

    pub fn remove(&mut self, item_id: &str) -> bool {
        if self.step == CheckoutStep::Success {
            return false;
        }
        self.cart.remove(item_id);
        true
    }

    pub fn proceed_to_checkout(&mut self) -> Result<(), CafeError> {
        self.expect_step(CheckoutStep::Basket)?;
        if self.cart.is_empty() {
            return Err(CafeError::EmptyCart);
        }
        self.step = CheckoutStep::Checkout;
        Ok(())
    }

    pub fn back_to_basket(&mut self) -> Result<(), CafeError> {
        self.expect_step(CheckoutStep::Checkout)?;
        self.step = CheckoutStep::Basket;
        Ok(())
    }

    /// Send the order and return its number (`#1000`..`#9999`)
    pub fn place_order(&mut self, rng: &mut dyn RngCore) -> Result<&str, CafeError> {
        self.expect_step(CheckoutStep::Checkout)?;
        if self.cart.is_empty() {
            return Err(CafeError::EmptyCart);
        }

        let number = format!("#{}", rng.gen_range(1000..10000));
        tracing::info!(
            order = %number,
            items = self.cart.count(),
            total_cents = self.cart.total_cents(),
            payment = ?self.details.payment,
            "Cafe order placed"
        );
        self.step = CheckoutStep::Success;
        Ok(self.order_number.insert(number).as_str())
    }

    /// Start over with an empty basket
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn expect_step(&self, expected: CheckoutStep) -> Result<(), CafeError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CafeError::WrongStep {
                expected,
                found: self.step,
            })
        }
    }
}
