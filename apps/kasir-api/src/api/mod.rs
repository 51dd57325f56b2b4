//! HTTP handlers, one module per resource. Each exposes `router()`.

pub mod categories;
pub mod health;
pub mod products;
pub mod reports;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_support;
