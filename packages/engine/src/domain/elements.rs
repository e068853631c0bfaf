//! Element ids and categories
//!
//! Ids 0–9 are reserved for technical particles that the engine defines itself;
//! catalog bundles may not redefine them. The ranges below follow the palette
//! grouping (solids 10–99, liquids 100–199, gases 200–299, sands 300–399,
//! electronics 400–499).

use serde::{Deserialize, Serialize};

pub type ElementId = u16;

/// First id available to catalog content.
pub const FIRST_CONTENT_ID: ElementId = 10;

// --- Technical ---
pub const EL_EMPTY: ElementId = 0;

// --- Solids ---
pub const EL_STONE: ElementId = 11;
pub const EL_WALL: ElementId = 12;
pub const EL_WOOD: ElementId = 13;
pub const EL_METAL: ElementId = 14;
pub const EL_ICE: ElementId = 15;
pub const EL_GLASS: ElementId = 16;

// --- Liquids ---
pub const EL_WATER: ElementId = 100;
pub const EL_OIL: ElementId = 101;
pub const EL_LAVA: ElementId = 102;
pub const EL_MUD: ElementId = 103;
pub const EL_ACID: ElementId = 104;
pub const EL_STEAM: ElementId = 105;
pub const EL_ALCOHOL: ElementId = 106;

// --- Gases ---
pub const EL_SMOKE: ElementId = 200;
pub const EL_FIRE: ElementId = 201;
pub const EL_CHLORINE: ElementId = 202;
pub const EL_HYDROGEN: ElementId = 203;
pub const EL_VAPOR: ElementId = 204;

// --- Sands ---
pub const EL_SAND: ElementId = 300;
pub const EL_WET_SAND: ElementId = 301;
pub const EL_DUST: ElementId = 302;
pub const EL_GRAVEL: ElementId = 303;
pub const EL_VOLCANIC_ASH: ElementId = 304;
pub const EL_COARSE_GRAVEL: ElementId = 305;
pub const EL_QUARTZ_SAND: ElementId = 306;

// --- Electronics ---
pub const EL_POWER: ElementId = 400;
pub const EL_OUTLET: ElementId = 401;
pub const EL_GROUND: ElementId = 402;
pub const EL_SOURCE: ElementId = 403;
pub const EL_DRAIN: ElementId = 404;
pub const EL_BASE: ElementId = 405;
pub const EL_TERMINAL: ElementId = 406;
pub const EL_WIRE: ElementId = 407;
pub const EL_COPPER_WIRE: ElementId = 408;
pub const EL_SILVER_WIRE: ElementId = 409;
pub const EL_RESISTOR: ElementId = 411;
pub const EL_CAPACITOR: ElementId = 412;
pub const EL_INDUCTOR: ElementId = 413;
pub const EL_DIODE: ElementId = 414;
pub const EL_TRANSISTOR: ElementId = 415;
pub const EL_LED: ElementId = 416;
pub const EL_BATTERY: ElementId = 417;

/// Coarse particle classification, selects the physics rule.
///
/// `Any` doubles as the wildcard in neighbour filters. An element whose category is
/// `Any` has no rule and stays inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Solid,
    Liquid,
    Gas,
    Sand,
    Electronics,
    Any,
}

impl Category {
    pub const COUNT: usize = 6;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Solid,
        Category::Liquid,
        Category::Gas,
        Category::Sand,
        Category::Electronics,
        Category::Any,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wildcard-aware comparison used by neighbour filters.
    #[inline]
    pub fn matches(self, other: Category) -> bool {
        self == Category::Any || self == other
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Solid => "solid",
            Category::Liquid => "liquid",
            Category::Gas => "gas",
            Category::Sand => "sand",
            Category::Electronics => "electronics",
            Category::Any => "any",
        }
    }
}
