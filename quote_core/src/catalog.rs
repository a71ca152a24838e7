//! # Furniture Catalog
//!
//! The enumerated choices a customer makes on the quote form: furniture
//! type, finish material, and panel construction style.
//!
//! Each enum exposes an `ALL` array for UI selection, a `display_name()`,
//! and flexible string parsing for hosts that collect free-form text.

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// Furniture types available for quoting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnitureType {
    /// Flat panel (room divider, wall cladding); priced by construction style
    Panel,
    /// Wardrobe
    Wardrobe,
    /// Kitchen cabinet
    KitchenCabinet,
}

impl FurnitureType {
    /// All furniture type variants for UI selection
    pub const ALL: [FurnitureType; 3] = [
        FurnitureType::Panel,
        FurnitureType::Wardrobe,
        FurnitureType::KitchenCabinet,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "PANEL" => Ok(FurnitureType::Panel),
            "WARDROBE" => Ok(FurnitureType::Wardrobe),
            "KITCHEN-CABINET" | "KITCHENCABINET" | "CABINET" => Ok(FurnitureType::KitchenCabinet),
            _ => Err(QuoteError::missing_selection("furniture_type")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FurnitureType::Panel => "Panel",
            FurnitureType::Wardrobe => "Wardrobe",
            FurnitureType::KitchenCabinet => "Kitchen Cabinet",
        }
    }
}

impl std::fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Finish materials
///
/// The same three materials appear in both the standard and the panel
/// price tables, at different unit prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    White,
    Laminate,
    Woodgrain,
}

impl Material {
    /// All material variants for UI selection
    pub const ALL: [Material; 3] = [
        Material::White,
        Material::Laminate,
        Material::Woodgrain,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "WHITE" => Ok(Material::White),
            "LAMINATE" | "LACQUER" => Ok(Material::Laminate),
            "WOODGRAIN" | "WOOD-GRAIN" => Ok(Material::Woodgrain),
            _ => Err(QuoteError::unknown_material(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::White => "White",
            Material::Laminate => "Laminate",
            Material::Woodgrain => "Woodgrain",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Panel construction styles
///
/// Only meaningful when the furniture type is [`FurnitureType::Panel`];
/// ignored for every other type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelKind {
    /// Flat, unadorned face
    #[default]
    Plain,
    /// Slatted (ripped) face
    Slatted,
}

impl PanelKind {
    /// All panel kind variants for UI selection
    pub const ALL: [PanelKind; 2] = [PanelKind::Plain, PanelKind::Slatted];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "PLAIN" | "COMMON" | "FLAT" => Ok(PanelKind::Plain),
            "SLATTED" | "RIPPED" => Ok(PanelKind::Slatted),
            _ => Err(QuoteError::missing_selection("panel_kind")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::Plain => "Plain",
            PanelKind::Slatted => "Slatted",
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(FurnitureType::KitchenCabinet.display_name(), "Kitchen Cabinet");
        assert_eq!(Material::Woodgrain.display_name(), "Woodgrain");
        assert_eq!(PanelKind::Slatted.display_name(), "Slatted");
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            FurnitureType::from_str_flexible("kitchen cabinet").unwrap(),
            FurnitureType::KitchenCabinet
        );
        assert_eq!(Material::from_str_flexible("white").unwrap(), Material::White);
        assert_eq!(Material::from_str_flexible("wood grain").unwrap(), Material::Woodgrain);
        assert_eq!(PanelKind::from_str_flexible("slatted").unwrap(), PanelKind::Slatted);
        assert!(Material::from_str_flexible("granite").is_err());
    }

    #[test]
    fn test_default_panel_kind() {
        assert_eq!(PanelKind::default(), PanelKind::Plain);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FurnitureType::Wardrobe).unwrap();
        assert_eq!(json, "\"Wardrobe\"");
        let parsed: FurnitureType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FurnitureType::Wardrobe);
    }
}
