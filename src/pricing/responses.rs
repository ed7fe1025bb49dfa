//! Response DTOs for the quote API.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::QuoteInput;

/// Disclosures attached to every quote
pub const ASSUMPTIONS: [&str; 3] = [
    "Quote is based on preliminary inputs and standard detailing productivity.",
    "Final commercial quote may vary after model quality and scope review.",
    "Engineering changes and client revisions are priced separately.",
];

/// Fully computed quote
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub currency: &'static str,
    pub total: i64,
    pub breakdown: QuoteBreakdown,
    pub assumptions: [&'static str; 3],
    #[serde(with = "rust_decimal::serde::float")]
    pub ai_confidence: Decimal,
    pub normalized_input: QuoteInput,
}

/// Intermediate values behind a quote total
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub base_price: i64,
    pub multipliers: AppliedMultipliers,
    pub optional_services: OptionalServiceCosts,
    pub optional_total: i64,
    pub subtotal: i64,
}

/// Multipliers looked up for the normalized tiers, at full precision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedMultipliers {
    #[serde(with = "rust_decimal::serde::float")]
    pub complexity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub connection_density: Decimal,
}

/// Flat fees for add-on deliverables, zero when not requested
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalServiceCosts {
    pub erection_drawings: i64,
    pub bill_of_materials: i64,
    pub fabrication_drawings: i64,
}

impl OptionalServiceCosts {
    pub fn total(&self) -> i64 {
        self.erection_drawings + self.bill_of_materials + self.fabrication_drawings
    }
}

/// Response for `POST /api/quote`
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub quote: QuoteResult,
}

/// Response for `GET /api/defaults`
#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub defaults: QuoteInput,
}

/// Generic failure payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
