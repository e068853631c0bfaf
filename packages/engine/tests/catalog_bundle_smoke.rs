use std::fs;
use std::path::Path;

use grainfall_engine::domain::catalog::{KindParams, ParticleCatalog};
use grainfall_engine::domain::elements::{Category, EL_EMPTY, EL_SAND, EL_WATER, EL_WET_SAND};
use grainfall_engine::domain::repose::Offset;

#[test]
fn catalog_bundle_smoke_parses_and_has_core_invariants() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/base_catalog.json");
    let json = fs::read_to_string(&path).expect("base_catalog.json should exist");

    let catalog = ParticleCatalog::from_bundle_json(&json).expect("base_catalog.json should parse");

    assert_eq!(catalog.len(), 10);
    let empty = catalog.get(EL_EMPTY).expect("empty is always present");
    assert!(empty.movable);
    assert_eq!(empty.density, 0.0);

    assert_eq!(catalog.get(EL_WATER).and_then(|k| k.max_concentration()), Some(10));

    // Steep sand drops tan(55) = 1 row beside itself; shallow dust reaches cot(20) = 3 cells.
    match &catalog.get(EL_WET_SAND).unwrap().params {
        KindParams::Sand { directions, .. } => {
            assert_eq!(directions.len(), 2);
            assert_eq!(directions[1], vec![Offset::new(1, 1), Offset::new(-1, 1)]);
        }
        other => panic!("wet sand should be granular, got {:?}", other),
    }
    match &catalog.get(302).unwrap().params {
        KindParams::Sand { directions, .. } => {
            assert_eq!(directions[2], vec![Offset::new(3, 1), Offset::new(-3, 1)]);
        }
        other => panic!("dust should be granular, got {:?}", other),
    }

    let manifest: serde_json::Value = serde_json::from_str(&catalog.manifest_json()).unwrap();
    let sand = manifest["elements"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == EL_SAND)
        .expect("sand in manifest");
    assert_eq!(sand["category"], "sand");
    assert_eq!(sand["color"], "#E2C661");
}

#[test]
fn builtin_catalog_agrees_with_bundle_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/base_catalog.json");
    let json = fs::read_to_string(&path).unwrap();
    let bundle = ParticleCatalog::from_bundle_json(&json).unwrap();
    let builtin = ParticleCatalog::builtin();

    for kind in bundle.iter() {
        let twin = builtin.get(kind.id).expect("bundle ids exist in the builtin table");
        assert_eq!(twin.name, kind.name);
        assert_eq!(twin.category, kind.category);
        assert_eq!(twin.density, kind.density);
        assert_eq!(twin.movable, kind.movable);
        assert_eq!(twin.base_color, kind.base_color);
        assert_eq!(twin.max_concentration(), kind.max_concentration());
    }
    assert!(builtin.iter().any(|k| k.category == Category::Electronics));
}
