//! # quote_core - Furniture Quote Pricing Engine
//!
//! `quote_core` is the computational heart of the Versatto quote tool:
//! a stateless pricing engine that turns one form submission into a
//! priced, exportable quote.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: each submission is computed from scratch
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::catalog::{FurnitureType, Material, PanelKind};
//! use quote_core::pricing::price_table;
//! use quote_core::quote::{calculate, QuoteRequest};
//! use quote_core::units::Meters;
//!
//! let request = QuoteRequest {
//!     furniture_type: Some(FurnitureType::Panel),
//!     panel_kind: PanelKind::Slatted,
//!     height_m: Meters(0.5),
//!     width_m: Meters(2.0),
//!     material: Some(Material::White),
//!     apply_discount: true,
//! };
//!
//! let quote = calculate(&request, price_table()).unwrap();
//! assert_eq!(quote.final_cost.0, 1064.0);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Furniture types, materials, and panel styles
//! - [`pricing`] - Static per-square-meter price tables
//! - [`quote`] - Request validation and quote calculation
//! - [`export`] - Fixed-order tabular record for CSV download
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod export;
pub mod pricing;
pub mod quote;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{FurnitureType, Material, PanelKind};
pub use errors::{QuoteError, QuoteResult};
pub use export::ExportRecord;
pub use pricing::{price_table, PriceTable};
pub use quote::{calculate, Quote, QuoteRequest};
