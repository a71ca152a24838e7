//! # Quote Calculation
//!
//! Validates a quote request and produces a priced quote. One
//! deterministic arithmetic pass per submission: no retries, no side
//! effects, no state carried between submissions.
//!
//! ## Billing rules
//!
//! - Heights under 1.0 m are billed as 1.0 m (the height floor). This is
//!   intentional pricing policy; the floored value is what the customer
//!   sees on the breakdown.
//! - The optional discount is a fixed 5% off the base cost.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::{FurnitureType, Material, PanelKind};
//! use quote_core::pricing::price_table;
//! use quote_core::quote::{calculate, QuoteRequest};
//! use quote_core::units::Meters;
//!
//! let request = QuoteRequest {
//!     furniture_type: Some(FurnitureType::Wardrobe),
//!     panel_kind: PanelKind::Plain,
//!     height_m: Meters(2.0),
//!     width_m: Meters(3.0),
//!     material: Some(Material::White),
//!     apply_discount: false,
//! };
//!
//! let quote = calculate(&request, price_table()).unwrap();
//! assert_eq!(quote.final_cost.0, 6300.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{FurnitureType, Material, PanelKind};
use crate::errors::{QuoteError, QuoteResult};
use crate::pricing::PriceTable;
use crate::units::{Meters, Money, PricePerSquareMeter, SquareMeters};

/// Fixed discount rate applied when the customer opts in
pub const DISCOUNT_RATE: f64 = 0.05;

/// Heights below this are billed at this value
pub const MIN_BILLED_HEIGHT: Meters = Meters(1.0);

/// Accepted height range in meters
pub const HEIGHT_RANGE_M: (f64, f64) = (0.5, 5.0);

/// Accepted width range in meters
pub const WIDTH_RANGE_M: (f64, f64) = (0.5, 10.0);

/// One quote form submission.
///
/// `furniture_type` and `material` are `None` when the form selection
/// was left blank; the calculator rejects those before any pricing
/// lookup. `panel_kind` always carries a value (the form defaults it to
/// Plain) but only matters for panels.
///
/// ## JSON Example
///
/// ```json
/// {
///   "furniture_type": "Panel",
///   "panel_kind": "Slatted",
///   "height_m": 0.5,
///   "width_m": 2.0,
///   "material": "White",
///   "apply_discount": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Selected furniture type, or None when left blank
    pub furniture_type: Option<FurnitureType>,

    /// Panel construction style; ignored unless the type is Panel
    #[serde(default)]
    pub panel_kind: PanelKind,

    /// Piece height in meters, accepted range [0.5, 5.0]
    pub height_m: Meters,

    /// Piece width in meters, accepted range [0.5, 10.0]
    pub width_m: Meters,

    /// Selected finish material, or None when left blank
    pub material: Option<Material>,

    /// Apply the fixed 5% discount
    #[serde(default)]
    pub apply_discount: bool,
}

impl QuoteRequest {
    /// Validate selections and dimensions.
    ///
    /// Selection checks run first so an empty form reports
    /// `MissingSelection` rather than a dimension error.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.furniture_type.is_none() {
            return Err(QuoteError::missing_selection("furniture_type"));
        }
        if self.material.is_none() {
            return Err(QuoteError::missing_selection("material"));
        }
        let (h_min, h_max) = HEIGHT_RANGE_M;
        if self.height_m.0 < h_min || self.height_m.0 > h_max {
            return Err(QuoteError::invalid_dimension(
                "height_m",
                self.height_m.0.to_string(),
                format!("Height must be between {h_min} and {h_max} m"),
            ));
        }
        let (w_min, w_max) = WIDTH_RANGE_M;
        if self.width_m.0 < w_min || self.width_m.0 > w_max {
            return Err(QuoteError::invalid_dimension(
                "width_m",
                self.width_m.0.to_string(),
                format!("Width must be between {w_min} and {w_max} m"),
            ));
        }
        Ok(())
    }
}

/// A priced quote, derived from one request.
///
/// Held only long enough to render and optionally export; nothing
/// persists between submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Quoted furniture type
    pub furniture_type: FurnitureType,

    /// Quoted finish material
    pub material: Material,

    /// Panel construction style, Some only for panels
    pub panel_kind: Option<PanelKind>,

    /// Billed height after the 1.0 m floor
    pub effective_height_m: Meters,

    /// Billed width, as entered
    pub width_m: Meters,

    /// Billed surface area
    pub area_m2: SquareMeters,

    /// Catalog unit price for the selection
    pub unit_price: PricePerSquareMeter,

    /// Area times unit price, before discount
    pub base_cost: Money,

    /// Whether the 5% discount was applied
    pub discount_applied: bool,

    /// Amount due
    pub final_cost: Money,
}

impl Quote {
    /// Customer-facing discount label, fixed wording for export
    pub fn discount_label(&self) -> &'static str {
        if self.discount_applied {
            "Discount applied of 5%"
        } else {
            "No discount"
        }
    }
}

/// Calculate a quote from a validated request and a price table.
///
/// Fails with a structured [`QuoteError`] when selections are missing,
/// dimensions are out of range, or the price table has no entry for the
/// selection. Price table failures propagate unchanged.
pub fn calculate(request: &QuoteRequest, table: &PriceTable) -> QuoteResult<Quote> {
    request.validate()?;

    // validate() guarantees both selections are present
    let furniture_type = request
        .furniture_type
        .ok_or_else(|| QuoteError::missing_selection("furniture_type"))?;
    let material = request
        .material
        .ok_or_else(|| QuoteError::missing_selection("material"))?;

    let effective_height = request.height_m.max(MIN_BILLED_HEIGHT);
    let area = effective_height * request.width_m;

    let unit_price = table.unit_price(furniture_type, material, request.panel_kind)?;
    let base_cost = area * unit_price;

    let final_cost = if request.apply_discount {
        base_cost * (1.0 - DISCOUNT_RATE)
    } else {
        base_cost
    };

    Ok(Quote {
        furniture_type,
        material,
        panel_kind: (furniture_type == FurnitureType::Panel).then_some(request.panel_kind),
        effective_height_m: effective_height,
        width_m: request.width_m,
        area_m2: area,
        unit_price,
        base_cost,
        discount_applied: request.apply_discount,
        final_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price_table;

    fn request(
        furniture_type: Option<FurnitureType>,
        panel_kind: PanelKind,
        height: f64,
        width: f64,
        material: Option<Material>,
        apply_discount: bool,
    ) -> QuoteRequest {
        QuoteRequest {
            furniture_type,
            panel_kind,
            height_m: Meters(height),
            width_m: Meters(width),
            material,
            apply_discount,
        }
    }

    #[test]
    fn test_wardrobe_white_no_discount() {
        let req = request(
            Some(FurnitureType::Wardrobe),
            PanelKind::Plain,
            2.0,
            3.0,
            Some(Material::White),
            false,
        );
        let quote = calculate(&req, price_table()).unwrap();

        assert_eq!(quote.effective_height_m, Meters(2.0));
        assert_eq!(quote.area_m2, SquareMeters(6.0));
        assert_eq!(quote.unit_price, PricePerSquareMeter(1050.0));
        assert_eq!(quote.base_cost, Money(6300.0));
        assert_eq!(quote.final_cost, Money(6300.0));
        assert_eq!(quote.panel_kind, None);
        assert_eq!(quote.discount_label(), "No discount");
    }

    #[test]
    fn test_slatted_panel_with_discount_and_height_floor() {
        let req = request(
            Some(FurnitureType::Panel),
            PanelKind::Slatted,
            0.5,
            2.0,
            Some(Material::White),
            true,
        );
        let quote = calculate(&req, price_table()).unwrap();

        assert_eq!(quote.effective_height_m, Meters(1.0));
        assert_eq!(quote.area_m2, SquareMeters(2.0));
        assert_eq!(quote.unit_price, PricePerSquareMeter(560.0));
        assert_eq!(quote.base_cost, Money(1120.0));
        assert_eq!(quote.final_cost, Money(1064.0));
        assert_eq!(quote.panel_kind, Some(PanelKind::Slatted));
        assert_eq!(quote.discount_label(), "Discount applied of 5%");
    }

    #[test]
    fn test_height_floor_boundary() {
        // 0.5 m is billed as 1.0 m; 2.0 m is billed as-is
        for (entered, billed) in [(0.5, 1.0), (0.99, 1.0), (1.0, 1.0), (2.0, 2.0), (5.0, 5.0)] {
            let req = request(
                Some(FurnitureType::Wardrobe),
                PanelKind::Plain,
                entered,
                3.0,
                Some(Material::White),
                false,
            );
            let quote = calculate(&req, price_table()).unwrap();
            assert_eq!(quote.effective_height_m, Meters(billed));
        }
    }

    #[test]
    fn test_discount_is_five_percent() {
        for furniture_type in FurnitureType::ALL {
            for material in Material::ALL {
                let base = request(
                    Some(furniture_type),
                    PanelKind::Slatted,
                    2.5,
                    4.0,
                    Some(material),
                    false,
                );
                let mut discounted = base.clone();
                discounted.apply_discount = true;

                let plain = calculate(&base, price_table()).unwrap();
                let with = calculate(&discounted, price_table()).unwrap();
                assert!((with.final_cost.0 - plain.final_cost.0 * 0.95).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_missing_furniture_type() {
        let req = request(None, PanelKind::Plain, 2.0, 3.0, Some(Material::White), false);
        let err = calculate(&req, price_table()).unwrap_err();
        assert_eq!(err, QuoteError::missing_selection("furniture_type"));
    }

    #[test]
    fn test_missing_material() {
        let req = request(
            Some(FurnitureType::Panel),
            PanelKind::Plain,
            2.0,
            3.0,
            None,
            false,
        );
        let err = calculate(&req, price_table()).unwrap_err();
        assert_eq!(err, QuoteError::missing_selection("material"));
    }

    #[test]
    fn test_missing_selection_reported_before_dimensions() {
        // Both the selection and the height are bad; selection wins
        let req = request(None, PanelKind::Plain, 0.1, 3.0, None, false);
        let err = calculate(&req, price_table()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_SELECTION");
    }

    #[test]
    fn test_dimension_bounds() {
        let too_short = request(
            Some(FurnitureType::Wardrobe),
            PanelKind::Plain,
            0.4,
            3.0,
            Some(Material::White),
            false,
        );
        assert_eq!(
            calculate(&too_short, price_table()).unwrap_err().error_code(),
            "INVALID_DIMENSION"
        );

        let too_wide = request(
            Some(FurnitureType::Wardrobe),
            PanelKind::Plain,
            2.0,
            10.5,
            Some(Material::White),
            false,
        );
        assert_eq!(
            calculate(&too_wide, price_table()).unwrap_err().error_code(),
            "INVALID_DIMENSION"
        );
    }

    #[test]
    fn test_panel_kind_does_not_affect_other_furniture() {
        for kind in PanelKind::ALL {
            let req = request(
                Some(FurnitureType::KitchenCabinet),
                kind,
                2.0,
                3.0,
                Some(Material::Laminate),
                false,
            );
            let quote = calculate(&req, price_table()).unwrap();
            assert_eq!(quote.unit_price, PricePerSquareMeter(1250.0));
            assert_eq!(quote.panel_kind, None);
        }
    }

    #[test]
    fn test_unsupported_panel_material_propagates() {
        let mut table = price_table().clone();
        table.panel.remove(&Material::Woodgrain);

        let req = request(
            Some(FurnitureType::Panel),
            PanelKind::Plain,
            2.0,
            3.0,
            Some(Material::Woodgrain),
            false,
        );
        let err = calculate(&req, &table).unwrap_err();
        assert_eq!(err, QuoteError::unsupported_material_for_panel("Woodgrain"));
    }

    #[test]
    fn test_request_serialization() {
        let req = request(
            Some(FurnitureType::Panel),
            PanelKind::Slatted,
            0.5,
            2.0,
            Some(Material::White),
            true,
        );
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"furniture_type\":\"Panel\""));
        let parsed: QuoteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.height_m, Meters(0.5));
        assert!(parsed.apply_discount);
    }

    #[test]
    fn test_request_defaults_from_partial_json() {
        let json = r#"{
            "furniture_type": "Wardrobe",
            "height_m": 2.0,
            "width_m": 3.0,
            "material": "White"
        }"#;
        let parsed: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.panel_kind, PanelKind::Plain);
        assert!(!parsed.apply_discount);
    }
}
