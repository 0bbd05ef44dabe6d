use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel used in catalog files for coatings that are not offered.
const NOT_OFFERED: &str = "-";

/// Price of one coating within a range row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// Offered at the given amount, in whole currency units.
    Amount(u32),
    /// Not offered for this range (`"-"` in catalog files).
    NotOffered,
}

impl Price {
    /// Returns the amount when the coating is offered.
    pub fn amount(&self) -> Option<u32> {
        match self {
            Price::Amount(value) => Some(*value),
            Price::NotOffered => None,
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Amount(value) => serializer.serialize_u32(*value),
            Price::NotOffered => serializer.serialize_str(NOT_OFFERED),
        }
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a non-negative price or the string \"-\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Price, E> {
        u32::try_from(value)
            .map(Price::Amount)
            .map_err(|_| E::custom(format!("price {value} out of range")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Price, E> {
        u32::try_from(value)
            .map(Price::Amount)
            .map_err(|_| E::custom(format!("price {value} out of range")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Price, E> {
        if value == NOT_OFFERED {
            Ok(Price::NotOffered)
        } else {
            Err(E::custom(format!("unexpected price string {value:?}")))
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Price, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

/// One coating entry of a range row. Entry order within a row is the
/// catalog authoring order and is preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Short coating code, e.g. `HC` or `BLUCUT`.
    pub code: String,
    /// Price or the not-offered sentinel.
    pub price: Price,
}

/// A priced prescription range within one catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRow {
    /// Range string in the grammar mandated by the owning category.
    pub range: String,
    /// Coating prices in authoring order.
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
}

/// The three single vision tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SingleVisionTables {
    /// Minus power ranges.
    #[serde(default)]
    pub minus_comp: Vec<RangeRow>,
    /// Plus power ranges.
    #[serde(default)]
    pub plus_comp: Vec<RangeRow>,
    /// Cross cylinder ranges (sphere and cylinder of opposite sign).
    #[serde(default)]
    pub cross_comp: Vec<RangeRow>,
}

/// A brand's priced range catalog.
///
/// Categories the brand does not stock are simply empty lists; the matcher
/// skips them. The catalog is immutable once loaded and carries no state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Brand the catalog belongs to.
    pub brand: String,
    /// Single vision tables.
    #[serde(default)]
    pub single_vision: SingleVisionTables,
    /// Cylinder-with-axis ranges (near-zero sphere).
    #[serde(default)]
    pub cyl_kt: Vec<RangeRow>,
    /// Compound sphere/cylinder ranges.
    #[serde(default)]
    pub comp_kt: Vec<RangeRow>,
    /// Bifocal sphere/ADD ranges.
    #[serde(default)]
    pub bifocal_kt: Vec<RangeRow>,
    /// Progressive sphere/ADD ranges.
    #[serde(default)]
    pub progressive_sph: Vec<RangeRow>,
    /// Progressive cylinder-with-axis ranges.
    #[serde(default)]
    pub progressive_cyl: Vec<RangeRow>,
    /// Progressive compound ranges.
    #[serde(default)]
    pub progressive_comp: Vec<RangeRow>,
}

impl Catalog {
    /// Returns the rows stored under the given category slot.
    pub fn rows(&self, id: CategoryId) -> &[RangeRow] {
        match id {
            CategoryId::SvMinusComp => &self.single_vision.minus_comp,
            CategoryId::SvPlusComp => &self.single_vision.plus_comp,
            CategoryId::SvCrossComp => &self.single_vision.cross_comp,
            CategoryId::CylKt => &self.cyl_kt,
            CategoryId::CompKt => &self.comp_kt,
            CategoryId::BifocalKt => &self.bifocal_kt,
            CategoryId::ProgressiveSph => &self.progressive_sph,
            CategoryId::ProgressiveCyl => &self.progressive_cyl,
            CategoryId::ProgressiveComp => &self.progressive_comp,
        }
    }

    /// Iterates every category slot with its rows, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (CategoryId, &[RangeRow])> {
        CategoryId::ALL.iter().map(move |id| (*id, self.rows(*id)))
    }

    /// Total number of range rows across all categories.
    pub fn row_count(&self) -> usize {
        self.categories().map(|(_, rows)| rows.len()).sum()
    }
}

/// Identifier for one of the nine recognized category slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    /// `single_vision` / `Minus Comp`.
    SvMinusComp,
    /// `single_vision` / `Plus Comp`.
    SvPlusComp,
    /// `single_vision` / `SV Cross Comp`.
    SvCrossComp,
    /// `CYL_KT`.
    CylKt,
    /// `COMP_KT`.
    CompKt,
    /// `Bifocal KT`.
    BifocalKt,
    /// `PROGRESSIVE_SPH`.
    ProgressiveSph,
    /// `PROGRESSIVE__CYL`.
    ProgressiveCyl,
    /// `PROGRESSIVE_COMP`.
    ProgressiveComp,
}

/// Range-string grammar family a category's rows are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeGrammar {
    /// Sphere band with cylinder tier, plain sphere, or sphere/ADD form.
    Band,
    /// `"<cyl>, <axis>°"` pairs for near-zero spheres.
    CylAxis,
    /// `"<sph>/<cyl> <axis>°"` compound form.
    Compound,
}

impl CategoryId {
    /// All category slots in catalog declaration order.
    pub const ALL: [CategoryId; 9] = [
        CategoryId::SvMinusComp,
        CategoryId::SvPlusComp,
        CategoryId::SvCrossComp,
        CategoryId::CylKt,
        CategoryId::CompKt,
        CategoryId::BifocalKt,
        CategoryId::ProgressiveSph,
        CategoryId::ProgressiveCyl,
        CategoryId::ProgressiveComp,
    ];

    /// Legacy top-level category label used in serialized results.
    pub fn category(&self) -> &'static str {
        match self {
            CategoryId::SvMinusComp | CategoryId::SvPlusComp | CategoryId::SvCrossComp => {
                "single_vision"
            }
            CategoryId::CylKt => "CYL_KT",
            CategoryId::CompKt => "COMP_KT",
            CategoryId::BifocalKt => "Bifocal KT",
            CategoryId::ProgressiveSph => "PROGRESSIVE_SPH",
            CategoryId::ProgressiveCyl => "PROGRESSIVE__CYL",
            CategoryId::ProgressiveComp => "PROGRESSIVE_COMP",
        }
    }

    /// Legacy subcategory label used in serialized results.
    pub fn subcategory(&self) -> &'static str {
        match self {
            CategoryId::SvMinusComp => "Minus Comp",
            CategoryId::SvPlusComp => "Plus Comp",
            CategoryId::SvCrossComp => "SV Cross Comp",
            other => other.category(),
        }
    }

    /// Grammar family this category's range strings are parsed with.
    pub fn grammar(&self) -> RangeGrammar {
        match self {
            CategoryId::SvMinusComp
            | CategoryId::SvPlusComp
            | CategoryId::SvCrossComp
            | CategoryId::BifocalKt
            | CategoryId::ProgressiveSph => RangeGrammar::Band,
            CategoryId::CylKt | CategoryId::ProgressiveCyl => RangeGrammar::CylAxis,
            CategoryId::CompKt | CategoryId::ProgressiveComp => RangeGrammar::Compound,
        }
    }
}
