//! Product records and categories.

use serde::Serialize;

use crate::price::PriceNode;

/// Menu category for a product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Cupcakes,
    Cakes,
    CakeTins,
    DiyKits,
    BakingEquipment,
    #[default]
    General,
}

impl Category {
    /// Stable identifier as used in the catalog data.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Cupcakes => "cupcakes",
            Category::Cakes => "cakes",
            Category::CakeTins => "cake tins",
            Category::DiyKits => "diy-kits",
            Category::BakingEquipment => "baking-equipment",
            Category::General => "general",
        }
    }

    /// Heading used when a category is shown to the customer.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Cupcakes => "Cupcakes",
            Category::Cakes => "Cakes",
            Category::CakeTins => "Cake Tins",
            Category::DiyKits => "DIY Kits",
            Category::BakingEquipment => "Baking Equipment",
            Category::General => "Products",
        }
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

/// One static catalog entry: an image reference, the keywords it matches
/// on, the menu copy, and an optional nested price table.
///
/// Records are loaded once at startup and never mutated; scoring works on
/// shared references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    /// Opaque image reference, e.g. `4-basic-cakes.jpeg`.
    pub filename: String,
    /// Lowercase tokens and phrases the matcher scores against.
    pub keywords: Vec<String>,
    /// Free-text menu copy; may span multiple paragraphs.
    pub description: String,
    pub category: Category,
    /// Always a `Group` at the root when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<PriceNode>,
}

impl ProductRecord {
    /// First sentence of the description (up to the first period).
    pub fn summary_sentence(&self) -> &str {
        self.description.split('.').next().unwrap_or("")
    }
}
