//! Request DTOs for the quote API.
//!
//! The quote body is deliberately loose: every field is kept as raw JSON so
//! that wrong types and unknown tiers fall back to defaults instead of
//! failing deserialization.

use rust_decimal::prelude::*;
use serde::Deserialize;
use serde_json::Value;

use super::models::{
    Complexity, ConnectionDensity, DeliverySpeed, QuoteInput, DEFAULT_TONNAGE, MAX_TONNAGE,
    MIN_TONNAGE,
};

/// Raw body of `POST /api/quote`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub tonnage: Option<Value>,
    pub complexity: Option<Value>,
    pub delivery: Option<Value>,
    pub connection_density: Option<Value>,
    pub include_erection_drawings: Option<Value>,
    #[serde(rename = "includeBOM")]
    pub include_bom: Option<Value>,
    pub include_fab_drawings: Option<Value>,
}

impl QuoteRequest {
    /// Build a request from any JSON value.
    ///
    /// Non-object values carry no fields and yield an empty request.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                let field = |key: &str| map.get(key).cloned();
                Self {
                    tonnage: field("tonnage"),
                    complexity: field("complexity"),
                    delivery: field("delivery"),
                    connection_density: field("connectionDensity"),
                    include_erection_drawings: field("includeErectionDrawings"),
                    include_bom: field("includeBOM"),
                    include_fab_drawings: field("includeFabDrawings"),
                }
            }
            _ => Self::default(),
        }
    }

    /// Coerce the raw fields into a valid [`QuoteInput`]. Never fails.
    pub fn normalize(&self) -> QuoteInput {
        let tonnage = self
            .tonnage
            .as_ref()
            .and_then(to_finite_number)
            .unwrap_or(DEFAULT_TONNAGE)
            .clamp(MIN_TONNAGE, MAX_TONNAGE);

        let complexity = self
            .complexity
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Complexity::from_key)
            .unwrap_or_default();

        let delivery = self
            .delivery
            .as_ref()
            .and_then(Value::as_str)
            .and_then(DeliverySpeed::from_key)
            .unwrap_or_default();

        let connection_density = self
            .connection_density
            .as_ref()
            .and_then(Value::as_str)
            .and_then(ConnectionDensity::from_key)
            .unwrap_or_default();

        QuoteInput {
            tonnage: Decimal::from_f64(tonnage).unwrap_or_else(|| QuoteInput::default().tonnage),
            complexity,
            delivery,
            connection_density,
            include_erection_drawings: self
                .include_erection_drawings
                .as_ref()
                .is_some_and(is_truthy),
            include_bom: !is_explicit_false(self.include_bom.as_ref()),
            include_fab_drawings: !is_explicit_false(self.include_fab_drawings.as_ref()),
        }
    }
}

/// Read a finite number from a JSON number or numeric string
fn to_finite_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Loose truthiness: false, null, zero and the empty string are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_explicit_false(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(false)))
}
