//! # Price Table
//!
//! Static per-square-meter pricing for the furniture catalog. Two
//! lookups: a standard table keyed by material for volumetric furniture
//! (wardrobes, kitchen cabinets), and a panel table keyed by material
//! and construction style.
//!
//! The table is immutable, process-wide constant data; [`price_table`]
//! returns the default built once on first use.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::{FurnitureType, Material, PanelKind};
//! use quote_core::pricing::price_table;
//!
//! let price = price_table()
//!     .unit_price(FurnitureType::Wardrobe, Material::White, PanelKind::Plain)
//!     .unwrap();
//! assert_eq!(price.0, 1050.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{FurnitureType, Material, PanelKind};
use crate::errors::{QuoteError, QuoteResult};
use crate::units::PricePerSquareMeter;

/// Per-square-meter price tables for all quotable furniture.
///
/// Invariant: every catalog material is present in both tables. A lookup
/// for a material absent from the relevant table fails with a structured
/// error, never a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTable {
    /// Unit prices for non-panel furniture, by material
    pub standard: HashMap<Material, PricePerSquareMeter>,
    /// Unit prices for panels, by material and construction style
    pub panel: HashMap<Material, HashMap<PanelKind, PricePerSquareMeter>>,
}

static DEFAULT_PRICE_TABLE: Lazy<PriceTable> = Lazy::new(PriceTable::versatto_catalog);

/// Get the process-wide default price table
pub fn price_table() -> &'static PriceTable {
    &DEFAULT_PRICE_TABLE
}

impl PriceTable {
    /// Build the current Versatto catalog pricing
    pub fn versatto_catalog() -> Self {
        let standard = HashMap::from([
            (Material::White, PricePerSquareMeter(1050.0)),
            (Material::Woodgrain, PricePerSquareMeter(1150.0)),
            (Material::Laminate, PricePerSquareMeter(1250.0)),
        ]);

        let panel = HashMap::from([
            (
                Material::White,
                HashMap::from([
                    (PanelKind::Plain, PricePerSquareMeter(500.0)),
                    (PanelKind::Slatted, PricePerSquareMeter(560.0)),
                ]),
            ),
            (
                Material::Laminate,
                HashMap::from([
                    (PanelKind::Plain, PricePerSquareMeter(640.0)),
                    (PanelKind::Slatted, PricePerSquareMeter(710.0)),
                ]),
            ),
            (
                Material::Woodgrain,
                HashMap::from([
                    (PanelKind::Plain, PricePerSquareMeter(560.0)),
                    (PanelKind::Slatted, PricePerSquareMeter(660.0)),
                ]),
            ),
        ]);

        PriceTable { standard, panel }
    }

    /// Look up the unit price for a catalog selection.
    ///
    /// Panels price by material and construction style; everything else
    /// prices by material alone, and `panel_kind` is ignored.
    pub fn unit_price(
        &self,
        furniture_type: FurnitureType,
        material: Material,
        panel_kind: PanelKind,
    ) -> QuoteResult<PricePerSquareMeter> {
        match furniture_type {
            FurnitureType::Panel => self
                .panel
                .get(&material)
                .and_then(|kinds| kinds.get(&panel_kind))
                .copied()
                .ok_or_else(|| QuoteError::unsupported_material_for_panel(material.display_name())),
            _ => self
                .standard
                .get(&material)
                .copied()
                .ok_or_else(|| QuoteError::unknown_material(material.display_name())),
        }
    }

    /// Materials the panel table carries, in catalog order
    pub fn panel_materials(&self) -> Vec<Material> {
        Material::ALL
            .into_iter()
            .filter(|m| self.panel.contains_key(m))
            .collect()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        PriceTable::versatto_catalog()
    }
}
