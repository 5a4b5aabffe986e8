//! Business logic layer.
//!
//! Services orchestrate the data layer and the delivery sinks. They validate input,
//! commit state transitions and decide which deliveries to attempt, but never talk to
//! Discord directly.
//!
//! - `giveaway` - Giveaway lifecycle, enrollment and winner selection
//! - `product_key` - Product key generation, validation and redemption

pub mod giveaway;
pub mod product_key;
