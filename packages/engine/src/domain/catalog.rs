use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::builtin::builtin_kinds;
use crate::domain::color::Color;
use crate::domain::elements::{Category, ElementId, EL_EMPTY, FIRST_CONTENT_ID};
use crate::domain::repose::{repose_table, DirectionTable};
use crate::error::{EngineError, Result};

pub const DEFAULT_REPOSE_ANGLE: f32 = 45.0;
pub const DEFAULT_MAX_CONCENTRATION: u8 = 1;

const EMPTY_COLOR: Color = Color::rgba(0x0E, 0x0E, 0x11, 0xFF);

/// Category-specific catalog parameters.
#[derive(Clone, Debug)]
pub enum KindParams {
    None,
    Liquid { max_concentration: u8 },
    Sand { repose_angle: f32, directions: DirectionTable },
}

/// One immutable catalog entry.
#[derive(Clone, Debug)]
pub struct ElementKind {
    pub id: ElementId,
    pub name: String,
    pub category: Category,
    pub base_color: Color,
    pub variant_color: Color,
    pub density: f32,
    pub movable: bool,
    pub params: KindParams,
}

impl ElementKind {
    pub fn new(
        id: ElementId,
        name: impl Into<String>,
        category: Category,
        base_color: Color,
        variant_color: Color,
        density: f32,
        movable: bool,
    ) -> Self {
        let params = match category {
            Category::Liquid => KindParams::Liquid {
                max_concentration: DEFAULT_MAX_CONCENTRATION,
            },
            Category::Sand => KindParams::Sand {
                repose_angle: DEFAULT_REPOSE_ANGLE,
                directions: repose_table(DEFAULT_REPOSE_ANGLE),
            },
            _ => KindParams::None,
        };

        Self {
            id,
            name: name.into(),
            category,
            base_color,
            variant_color,
            density,
            movable,
            params,
        }
    }

    /// The technical empty particle: density 0 and movable, so anything denser falls into it.
    pub fn empty() -> Self {
        Self::new(EL_EMPTY, "Empty", Category::Solid, EMPTY_COLOR, EMPTY_COLOR, 0.0, true)
    }

    /// Only meaningful for liquids; other categories ignore it.
    pub fn with_max_concentration(mut self, max_concentration: u8) -> Self {
        if let KindParams::Liquid { .. } = self.params {
            self.params = KindParams::Liquid {
                max_concentration: max_concentration.max(1),
            };
        }
        self
    }

    /// Only meaningful for sands; recomputes the shared direction table.
    pub fn with_repose_angle(mut self, repose_angle: f32) -> Self {
        if let KindParams::Sand { .. } = self.params {
            self.params = KindParams::Sand {
                repose_angle,
                directions: repose_table(repose_angle),
            };
        }
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id == EL_EMPTY
    }

    pub fn max_concentration(&self) -> Option<u8> {
        match self.params {
            KindParams::Liquid { max_concentration } => Some(max_concentration),
            _ => None,
        }
    }
}

/// Read-only table of every particle type the world can instantiate.
///
/// Built once (from the built-in table or a JSON bundle) and shared by `Arc`.
#[derive(Clone, Debug)]
pub struct ParticleCatalog {
    empty: ElementKind,
    kinds: BTreeMap<ElementId, ElementKind>,
}

impl ParticleCatalog {
    pub fn builtin() -> Self {
        Self::from_kinds(builtin_kinds())
    }

    /// Ids below `FIRST_CONTENT_ID` are reserved and skipped; for duplicate ids the
    /// first definition wins.
    pub fn from_kinds(kinds: impl IntoIterator<Item = ElementKind>) -> Self {
        let mut table = BTreeMap::new();

        for kind in kinds {
            if kind.id < FIRST_CONTENT_ID {
                engine_warn!("element {} ({}) uses a reserved id, ignoring it", kind.id, kind.name);
                continue;
            }
            if table.contains_key(&kind.id) {
                engine_warn!("duplicate element id {} ({}), keeping the first definition", kind.id, kind.name);
                continue;
            }
            table.insert(kind.id, kind);
        }

        Self {
            empty: ElementKind::empty(),
            kinds: table,
        }
    }

    pub fn from_bundle_json(json: &str) -> Result<Self> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(EngineError::CatalogParse)?;

        let kinds: Vec<ElementKind> = bundle
            .elements
            .into_iter()
            .filter_map(|el| match el.into_kind() {
                Ok(kind) => Some(kind),
                Err(reason) => {
                    engine_warn!("skipping malformed element block: {}", reason);
                    None
                }
            })
            .collect();

        let catalog = Self::from_kinds(kinds);
        if catalog.kinds.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(catalog)
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementKind> {
        if id == EL_EMPTY {
            Some(&self.empty)
        } else {
            self.kinds.get(&id)
        }
    }

    #[inline]
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn empty_kind(&self) -> &ElementKind {
        &self.empty
    }

    /// Number of definitions including the empty particle.
    pub fn len(&self) -> usize {
        self.kinds.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Empty first, then content in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementKind> {
        std::iter::once(&self.empty).chain(self.kinds.values())
    }

    pub fn manifest_json(&self) -> String {
        let elements: Vec<ManifestElement<'_>> = self
            .iter()
            .map(|kind| ManifestElement {
                id: kind.id,
                name: &kind.name,
                category: kind.category,
                color: kind.base_color.to_hex(),
                variant_color: kind.variant_color.to_hex(),
                hidden: kind.is_empty(),
            })
            .collect();

        let out = Manifest {
            format_version: 1,
            elements,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for ParticleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    format_version: u32,
    elements: Vec<ManifestElement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestElement<'a> {
    id: ElementId,
    name: &'a str,
    category: Category,
    color: String,
    variant_color: String,
    hidden: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    elements: Vec<BundleElement>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleElement {
    id: ElementId,
    name: String,
    category: String,
    base_color: String,
    #[serde(default)]
    variant_color: Option<String>,
    movable: bool,
    density: f32,
    #[serde(default)]
    max_concentration: Option<u8>,
    #[serde(default)]
    repose_angle: Option<f32>,
}

impl BundleElement {
    fn into_kind(self) -> std::result::Result<ElementKind, String> {
        let category = category_from_str(&self.category)
            .ok_or_else(|| format!("element {} has unknown category {:?}", self.id, self.category))?;

        let base = Color::from_hex(&self.base_color)
            .ok_or_else(|| format!("element {} has malformed baseColor {:?}", self.id, self.base_color))?;
        let variant = match self.variant_color.as_deref() {
            None => base,
            Some(hex) => Color::from_hex(hex)
                .ok_or_else(|| format!("element {} has malformed variantColor {:?}", self.id, hex))?,
        };

        if !self.density.is_finite() {
            return Err(format!("element {} has non-finite density", self.id));
        }

        let mut kind = ElementKind::new(self.id, self.name, category, base, variant, self.density, self.movable);
        if let Some(max) = self.max_concentration {
            kind = kind.with_max_concentration(max);
        }
        if let Some(angle) = self.repose_angle {
            kind = kind.with_repose_angle(angle);
        }
        Ok(kind)
    }
}

fn category_from_str(s: &str) -> Option<Category> {
    match s.trim().to_ascii_lowercase().as_str() {
        "solid" => Some(Category::Solid),
        "liquid" => Some(Category::Liquid),
        "gas" => Some(Category::Gas),
        "sand" => Some(Category::Sand),
        "electronics" => Some(Category::Electronics),
        "any" => Some(Category::Any),
        _ => None,
    }
}
