//! Passenger cafe ordering
//!
//! Passengers browse a small menu, fill a basket and send an order to their
//! seat. Prices are whole euro cents.
//!
//! ```
//! use tourbus_core::cafe::{find_item, CafeOrder, CheckoutStep};
//! use rand::SeedableRng;
//!
//! let mut order = CafeOrder::new();
//! let espresso = find_item("espresso").unwrap();
//! order.add(espresso);
//! order.add(espresso);
//! assert_eq!(order.cart().total_cents(), 2 * espresso.price_cents + 50);
//!
//! order.proceed_to_checkout().unwrap();
//! order.details.seat_number = "12B".into();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! order.place_order(&mut rng).unwrap();
//! assert_eq!(order.step(), CheckoutStep::Success);
//! ```

mod menu;
mod order;

pub use menu::{find_item, items_in, Category, MenuItem, MENU};
pub use order::{
    format_price, Cart, CartLine, CafeOrder, CheckoutStep, OrderDetails, PaymentMethod,
    SERVICE_FEE_CENTS,
};
