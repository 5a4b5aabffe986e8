//! State holders for all domain entities.
//!
//! This module contains the structures that own the application's state: the in-memory
//! giveaway store and resolved-giveaway cache, and the JSON-backed product key table.
//! Services only reach this state through the narrow interfaces defined here.

pub mod giveaway;
pub mod product_key;
pub mod resolved_giveaway;

#[cfg(test)]
mod test;
