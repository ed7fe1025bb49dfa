//! Pricing tables and the normalized quote input.
//!
//! Every categorical input maps onto a fixed multiplier table. The tables
//! are closed enums, so a normalized input can never reference a tier that
//! has no multiplier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Detailing rate charged per ton of structural steel (USD)
pub const RATE_PER_TON: Decimal = dec!(1450);

/// Currency every quote is issued in
pub const CURRENCY: &str = "USD";

/// Flat fee for erection drawings
pub const ERECTION_DRAWINGS_FEE: i64 = 1800;

/// Flat fee for a bill of materials
pub const BILL_OF_MATERIALS_FEE: i64 = 900;

/// Flat fee for fabrication drawings
pub const FABRICATION_DRAWINGS_FEE: i64 = 1500;

/// Lower bound applied to tonnage
pub const MIN_TONNAGE: f64 = 1.0;

/// Upper bound applied to tonnage
pub const MAX_TONNAGE: f64 = 5000.0;

/// Tonnage used when the request carries no usable number
pub const DEFAULT_TONNAGE: f64 = 20.0;

/// Project complexity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

impl Complexity {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }

    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Low => dec!(0.9),
            Self::Medium => dec!(1),
            Self::High => dec!(1.2),
            Self::Extreme => dec!(1.4),
        }
    }
}

/// Turnaround speed requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverySpeed {
    #[default]
    Standard,
    Rush,
    Urgent,
}

impl DeliverySpeed {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "standard" => Some(Self::Standard),
            "rush" => Some(Self::Rush),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Standard => dec!(1),
            Self::Rush => dec!(1.18),
            Self::Urgent => dec!(1.32),
        }
    }
}

/// How connection-heavy the structure is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionDensity {
    Low,
    #[default]
    Medium,
    High,
}

impl ConnectionDensity {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Low => dec!(0.9),
            Self::Medium => dec!(1),
            Self::High => dec!(1.15),
        }
    }
}

/// Quote input after normalization.
///
/// Only [`QuoteRequest::normalize`](super::requests::QuoteRequest::normalize)
/// and [`QuoteInput::default`] produce values of this type, so `tonnage` is
/// always within `[MIN_TONNAGE, MAX_TONNAGE]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    #[serde(with = "rust_decimal::serde::float")]
    pub tonnage: Decimal,
    pub complexity: Complexity,
    pub delivery: DeliverySpeed,
    pub connection_density: ConnectionDensity,
    pub include_erection_drawings: bool,
    #[serde(rename = "includeBOM")]
    pub include_bom: bool,
    pub include_fab_drawings: bool,
}

impl Default for QuoteInput {
    fn default() -> Self {
        Self {
            tonnage: dec!(20),
            complexity: Complexity::default(),
            delivery: DeliverySpeed::default(),
            connection_density: ConnectionDensity::default(),
            include_erection_drawings: false,
            include_bom: true,
            include_fab_drawings: true,
        }
    }
}
