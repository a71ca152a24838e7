//! # Export Record
//!
//! Flattens a [`Quote`](crate::quote::Quote) into the tabular record the
//! Form Host downloads as `furniture_quote.csv`. The column set and
//! order are a compatibility contract with downstream consumers; change
//! them and existing spreadsheets break.
//!
//! Encoding and delimiter are the Form Host's concern. This module only
//! defines the headers and the formatted cell values.

use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// Number of columns in the export record
pub const COLUMN_COUNT: usize = 8;

/// One exportable quote row with fixed column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub furniture_type: String,
    pub material: String,
    pub height_m: String,
    pub width_m: String,
    pub area_m2: String,
    pub unit_price: String,
    pub discount: String,
    pub final_cost: String,
}

impl ExportRecord {
    /// Column headers, in export order
    pub const HEADERS: [&'static str; COLUMN_COUNT] = [
        "Furniture Type",
        "Material",
        "Height (m)",
        "Width (m)",
        "Area (m²)",
        "Unit Price (R$)",
        "Discount",
        "Final Cost (R$)",
    ];

    /// Build the record for a quote.
    ///
    /// The height column carries the billed (floored) height, matching
    /// what the breakdown displays. Numeric cells use two decimals.
    pub fn from_quote(quote: &Quote) -> Self {
        ExportRecord {
            furniture_type: quote.furniture_type.display_name().to_string(),
            material: quote.material.display_name().to_string(),
            height_m: format!("{:.2}", quote.effective_height_m.0),
            width_m: format!("{:.2}", quote.width_m.0),
            area_m2: format!("{:.2}", quote.area_m2.0),
            unit_price: format!("{:.2}", quote.unit_price.0),
            discount: quote.discount_label().to_string(),
            final_cost: format!("{:.2}", quote.final_cost.0),
        }
    }

    /// Cell values, in the same order as [`ExportRecord::HEADERS`]
    pub fn row(&self) -> [String; COLUMN_COUNT] {
        [
            self.furniture_type.clone(),
            self.material.clone(),
            self.height_m.clone(),
            self.width_m.clone(),
            self.area_m2.clone(),
            self.unit_price.clone(),
            self.discount.clone(),
            self.final_cost.clone(),
        ]
    }
}
