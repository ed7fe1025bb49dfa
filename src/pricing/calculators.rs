//! Core quote calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state. Identical
//! input always produces an identical [`QuoteResult`].

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{
    Complexity, DeliverySpeed, QuoteInput, BILL_OF_MATERIALS_FEE, CURRENCY,
    ERECTION_DRAWINGS_FEE, FABRICATION_DRAWINGS_FEE, RATE_PER_TON,
};
use super::requests::QuoteRequest;
use super::responses::{
    AppliedMultipliers, OptionalServiceCosts, QuoteBreakdown, QuoteResult, ASSUMPTIONS,
};

const BASE_CONFIDENCE: Decimal = dec!(0.78);
const LOW_COMPLEXITY_BONUS: Decimal = dec!(0.08);
const URGENT_DELIVERY_PENALTY: Decimal = dec!(0.10);
const MIN_CONFIDENCE: Decimal = dec!(0.65);
const MAX_CONFIDENCE: Decimal = dec!(0.95);

/// Round to specified decimal places, halves away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use project_quote_backend::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to a whole number for display fields
fn round_whole(amount: Decimal) -> i64 {
    round_money(amount, 0).to_i64().unwrap_or(i64::MAX)
}

/// Normalize a raw request and price it.
pub fn calculate_quote(request: &QuoteRequest) -> QuoteResult {
    price_quote(request.normalize())
}

/// Price an already-normalized input.
///
/// The subtotal is `tonnage * RATE_PER_TON` scaled by the three tier
/// multipliers; optional service fees are added on top before the total is
/// rounded.
pub fn price_quote(input: QuoteInput) -> QuoteResult {
    let base_price = input.tonnage * RATE_PER_TON;

    let multipliers = AppliedMultipliers {
        complexity: input.complexity.multiplier(),
        delivery: input.delivery.multiplier(),
        connection_density: input.connection_density.multiplier(),
    };

    let subtotal = base_price
        * multipliers.complexity
        * multipliers.delivery
        * multipliers.connection_density;

    let optional_services = optional_service_costs(&input);
    let optional_total = optional_services.total();

    let total = round_whole(subtotal + Decimal::from(optional_total));

    QuoteResult {
        currency: CURRENCY,
        total,
        breakdown: QuoteBreakdown {
            base_price: round_whole(base_price),
            multipliers,
            optional_services,
            optional_total,
            subtotal: round_whole(subtotal),
        },
        assumptions: ASSUMPTIONS,
        ai_confidence: confidence_score(input.complexity, input.delivery),
        normalized_input: input,
    }
}

/// Flat fees for the add-on deliverables that were requested
pub fn optional_service_costs(input: &QuoteInput) -> OptionalServiceCosts {
    let fee = |requested: bool, amount: i64| if requested { amount } else { 0 };

    OptionalServiceCosts {
        erection_drawings: fee(input.include_erection_drawings, ERECTION_DRAWINGS_FEE),
        bill_of_materials: fee(input.include_bom, BILL_OF_MATERIALS_FEE),
        fabrication_drawings: fee(input.include_fab_drawings, FABRICATION_DRAWINGS_FEE),
    }
}

/// Heuristic confidence shown next to a quote.
///
/// Low-complexity work raises it, urgent delivery lowers it. The result is
/// clamped to `[0.65, 0.95]` and rounded to two places.
pub fn confidence_score(complexity: Complexity, delivery: DeliverySpeed) -> Decimal {
    let mut score = BASE_CONFIDENCE;
    if complexity == Complexity::Low {
        score += LOW_COMPLEXITY_BONUS;
    }
    if delivery == DeliverySpeed::Urgent {
        score -= URGENT_DELIVERY_PENALTY;
    }
    round_money(score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::ConnectionDensity;
    use serde_json::json;

    fn quote(body: serde_json::Value) -> QuoteResult {
        calculate_quote(&QuoteRequest::from_value(body))
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_halves_away_from_zero() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(5));
        assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(0.685), 2), dec!(0.69));
        assert_eq!(round_money(dec!(123456.789), 0), dec!(123457));
    }

    // ==================== calculate_quote tests ====================

    #[test]
    fn test_default_quote() {
        let result = quote(json!({}));

        assert_eq!(result.currency, "USD");
        assert_eq!(result.breakdown.base_price, 29000);
        assert_eq!(result.breakdown.subtotal, 29000);
        assert_eq!(result.breakdown.optional_services.erection_drawings, 0);
        assert_eq!(result.breakdown.optional_services.bill_of_materials, 900);
        assert_eq!(result.breakdown.optional_services.fabrication_drawings, 1500);
        assert_eq!(result.breakdown.optional_total, 2400);
        assert_eq!(result.total, 31400);
        assert_eq!(result.ai_confidence, dec!(0.78));
        assert_eq!(result.normalized_input, QuoteInput::default());
        assert_eq!(result.assumptions.len(), 3);
    }

    #[test]
    fn test_extreme_urgent_quote() {
        let result = quote(json!({
            "tonnage": 50,
            "complexity": "extreme",
            "delivery": "urgent",
            "connectionDensity": "high",
            "includeErectionDrawings": true
        }));

        // 72500 * 1.4 * 1.32 * 1.15 = 154077
        assert_eq!(result.breakdown.base_price, 72500);
        assert_eq!(result.breakdown.multipliers.complexity, dec!(1.4));
        assert_eq!(result.breakdown.multipliers.delivery, dec!(1.32));
        assert_eq!(result.breakdown.multipliers.connection_density, dec!(1.15));
        assert_eq!(result.breakdown.subtotal, 154077);
        assert_eq!(result.breakdown.optional_total, 4200);
        assert_eq!(result.total, 158277);
        assert_eq!(result.ai_confidence, dec!(0.68));
    }

    #[test]
    fn test_total_rounds_fractional_subtotal() {
        // 12.3 * 1450 = 17835; * 0.9 * 1.18 * 0.9 = 17046.693
        let result = quote(json!({
            "tonnage": 12.3,
            "complexity": "low",
            "delivery": "rush",
            "connectionDensity": "low",
            "includeBOM": false,
            "includeFabDrawings": false
        }));

        assert_eq!(result.breakdown.base_price, 17835);
        assert_eq!(result.breakdown.subtotal, 17047);
        assert_eq!(result.breakdown.optional_total, 0);
        assert_eq!(result.total, 17047);
        assert_eq!(result.ai_confidence, dec!(0.86));
    }

    #[test]
    fn test_bom_toggle() {
        let without = quote(json!({ "includeBOM": false }));
        assert_eq!(without.breakdown.optional_services.bill_of_materials, 0);
        assert_eq!(without.total, 30500);

        let omitted = quote(json!({ "tonnage": 20 }));
        assert_eq!(omitted.breakdown.optional_services.bill_of_materials, 900);
    }

    #[test]
    fn test_clamped_tonnage_is_priced() {
        assert_eq!(quote(json!({ "tonnage": 0 })).breakdown.base_price, 1450);
        assert_eq!(quote(json!({ "tonnage": 10000 })).breakdown.base_price, 7_250_000);
    }

    #[test]
    fn test_quote_is_deterministic() {
        let body = json!({ "tonnage": 77.7, "complexity": "high", "delivery": "rush" });
        let first = quote(body.clone());
        let second = quote(body);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_quote_serializes_wire_shape() {
        let json = serde_json::to_value(quote(json!({}))).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["total"], 31400);
        assert_eq!(json["aiConfidence"], 0.78);
        assert_eq!(json["breakdown"]["basePrice"], 29000);
        assert_eq!(json["breakdown"]["multipliers"]["connectionDensity"], 1.0);
        assert_eq!(json["breakdown"]["optionalServices"]["billOfMaterials"], 900);
        assert_eq!(json["breakdown"]["optionalTotal"], 2400);
        assert_eq!(json["normalizedInput"]["includeBOM"], true);
        assert_eq!(json["assumptions"].as_array().map(Vec::len), Some(3));
    }

    // ==================== confidence_score tests ====================

    #[test]
    fn test_confidence_score_adjustments() {
        assert_eq!(
            confidence_score(Complexity::Medium, DeliverySpeed::Standard),
            dec!(0.78)
        );
        assert_eq!(
            confidence_score(Complexity::Low, DeliverySpeed::Standard),
            dec!(0.86)
        );
        assert_eq!(
            confidence_score(Complexity::Low, DeliverySpeed::Urgent),
            dec!(0.76)
        );
        assert_eq!(
            confidence_score(Complexity::Extreme, DeliverySpeed::Urgent),
            dec!(0.68)
        );
    }

    #[test]
    fn test_confidence_score_stays_in_bounds() {
        for complexity in [
            Complexity::Low,
            Complexity::Medium,
            Complexity::High,
            Complexity::Extreme,
        ] {
            for delivery in [DeliverySpeed::Standard, DeliverySpeed::Rush, DeliverySpeed::Urgent] {
                let score = confidence_score(complexity, delivery);
                assert!(score >= dec!(0.65) && score <= dec!(0.95));
            }
        }
    }

    #[test]
    fn test_optional_service_costs() {
        let input = QuoteInput {
            include_erection_drawings: true,
            connection_density: ConnectionDensity::High,
            ..QuoteInput::default()
        };
        let costs = optional_service_costs(&input);
        assert_eq!(costs.erection_drawings, 1800);
        assert_eq!(costs.total(), 4200);
    }
}
