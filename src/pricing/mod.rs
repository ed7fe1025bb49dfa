//! Quote pricing module.
//!
//! Normalizes loosely-typed quote requests and prices them for structural
//! detailing work. The calculator itself is pure; `routes` exposes it over
//! HTTP.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{calculate_quote, price_quote, round_money};
pub use models::QuoteInput;
pub use requests::QuoteRequest;
pub use responses::QuoteResult;
pub use routes::router;
