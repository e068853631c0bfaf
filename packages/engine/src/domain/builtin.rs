//! Built-in particle table
//!
//! The palette shipped with the engine. A JSON bundle passed to
//! `ParticleCatalog::from_bundle_json` replaces it entirely.

use crate::domain::catalog::ElementKind;
use crate::domain::color::Color;
use crate::domain::elements::*;

/// Category-specific extra column: max concentration for liquids, repose angle for sands.
#[derive(Clone, Copy)]
enum Extra {
    None,
    MaxConcentration(u8),
    ReposeAngle(f32),
}

struct Row {
    id: ElementId,
    name: &'static str,
    category: Category,
    base: &'static str,
    variant: &'static str,
    movable: bool,
    density: f32,
    extra: Extra,
}

const fn solid(id: ElementId, name: &'static str, base: &'static str, variant: &'static str, density: f32) -> Row {
    Row { id, name, category: Category::Solid, base, variant, movable: false, density, extra: Extra::None }
}

const fn liquid(id: ElementId, name: &'static str, base: &'static str, variant: &'static str, density: f32, max: u8) -> Row {
    Row { id, name, category: Category::Liquid, base, variant, movable: true, density, extra: Extra::MaxConcentration(max) }
}

const fn gas(id: ElementId, name: &'static str, base: &'static str, variant: &'static str, density: f32) -> Row {
    Row { id, name, category: Category::Gas, base, variant, movable: true, density, extra: Extra::None }
}

const fn sand(id: ElementId, name: &'static str, base: &'static str, variant: &'static str, density: f32, angle: f32) -> Row {
    Row { id, name, category: Category::Sand, base, variant, movable: true, density, extra: Extra::ReposeAngle(angle) }
}

const fn electronic(id: ElementId, name: &'static str, base: &'static str, variant: &'static str) -> Row {
    Row { id, name, category: Category::Electronics, base, variant, movable: false, density: 0.0, extra: Extra::None }
}

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // Solids
    solid(EL_STONE, "Stone", "#7C7872", "#5E5A55", 100.0),
    solid(EL_WALL,  "Wall",  "#9A9A9A", "#7E7E7E", 9999.0),
    solid(EL_WOOD,  "Wood",  "#9B6430", "#70461F", 50.0),
    solid(EL_METAL, "Metal", "#B7B9C0", "#8A8C91", 200.0),
    solid(EL_ICE,   "Ice",   "#C6E7F1", "#A1D2E0", 90.0),
    solid(EL_GLASS, "Glass", "#A5E0E8", "#79C6D0", 150.0),

    // Liquids
    liquid(EL_WATER,   "Water",   "#3BA9E0", "#2A8AC0", 1.0,  10),
    liquid(EL_OIL,     "Oil",     "#4B3A22", "#3B2E1B", 0.8,  15),
    liquid(EL_LAVA,    "Lava",    "#FF6B1A", "#D13A00", 3.5,  5),
    liquid(EL_MUD,     "Mud",     "#7A4E26", "#54361B", 1.5,  8),
    liquid(EL_ACID,    "Acid",    "#7EF14E", "#5DC93A", 1.1,  12),
    liquid(EL_STEAM,   "Steam",   "#DADADA", "#B9B9B9", 0.5,  20),
    liquid(EL_ALCOHOL, "Alcohol", "#D9F0FA", "#CBE4F2", 0.78, 10),

    // Gases
    gas(EL_SMOKE,    "Smoke",    "#5A4740", "#3E302A", 0.1),
    gas(EL_FIRE,     "Fire",     "#FF8C33", "#E25822", -0.1),
    gas(EL_CHLORINE, "Chlorine", "#D6E64C", "#C1D136", 2.0),
    gas(EL_HYDROGEN, "Hydrogen", "#E1F2FF", "#D1EBFF", -0.5),
    gas(EL_VAPOR,    "Vapor",    "#BFBFBF", "#AFAFAF", 0.05),

    // Sands
    sand(EL_SAND,          "Sand",          "#E2C661", "#C6A84D", 2.0, 45.0),
    sand(EL_WET_SAND,      "Wet Sand",      "#C4A74D", "#8D7A3A", 3.0, 55.0),
    sand(EL_DUST,          "Dust",          "#CFCBB8", "#BEB8A3", 1.0, 20.0),
    sand(EL_GRAVEL,        "Gravel",        "#6A635A", "#3F3B35", 4.0, 30.0),
    sand(EL_VOLCANIC_ASH,  "Volcanic Ash",  "#474241", "#2F2C2B", 1.5, 15.0),
    sand(EL_COARSE_GRAVEL, "Coarse Gravel", "#7C7469", "#686155", 2.7, 50.0),
    sand(EL_QUARTZ_SAND,   "Quartz Sand",   "#E1E0DA", "#CBC9C2", 2.3, 70.0),

    // Electronics
    electronic(EL_POWER,       "Power",       "#E03A3A", "#B62E2E"),
    electronic(EL_OUTLET,      "Outlet",      "#FF9F1C", "#D67A00"),
    electronic(EL_GROUND,      "Ground",      "#6E6A73", "#504D54"),
    electronic(EL_SOURCE,      "Source",      "#E27A3F", "#B75C29"),
    electronic(EL_DRAIN,       "Drain",       "#3F7AE2", "#295CB7"),
    electronic(EL_BASE,        "Base",        "#9B5F93", "#7A3E73"),
    electronic(EL_TERMINAL,    "Terminal",    "#B3733A", "#8F532B"),
    electronic(EL_WIRE,        "Wire",        "#B7B7B7", "#8E8E8E"),
    electronic(EL_COPPER_WIRE, "Copper Wire", "#B87333", "#995C28"),
    electronic(EL_SILVER_WIRE, "Silver Wire", "#E0E0E0", "#BFBFBF"),
    electronic(EL_RESISTOR,    "Resistor",    "#E8D04C", "#C2AA38"),
    electronic(EL_CAPACITOR,   "Capacitor",   "#345995", "#26406E"),
    electronic(EL_INDUCTOR,    "Inductor",    "#8B5E3C", "#6C462C"),
    electronic(EL_DIODE,       "Diode",       "#C0392B", "#962D22"),
    electronic(EL_TRANSISTOR,  "Transistor",  "#222831", "#1A1E25"),
    electronic(EL_LED,         "LED",         "#E6E940", "#C4C72F"),
    electronic(EL_BATTERY,     "Battery",     "#FFB84C", "#E0A040"),
];

pub fn builtin_kinds() -> Vec<ElementKind> {
    ROWS.iter()
        .map(|row| {
            let base = Color::from_hex(row.base).unwrap_or(Color::BLACK);
            let variant = Color::from_hex(row.variant).unwrap_or(base);
            let kind = ElementKind::new(row.id, row.name, row.category, base, variant, row.density, row.movable);
            match row.extra {
                Extra::None => kind,
                Extra::MaxConcentration(max) => kind.with_max_concentration(max),
                Extra::ReposeAngle(angle) => kind.with_repose_angle(angle),
            }
        })
        .collect()
}
