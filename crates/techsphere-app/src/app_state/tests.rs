use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use techsphere_atlas::{AtlasImage, AtlasLookup, AtlasMapping};
use techsphere_catalog::{Catalog, Category};
use techsphere_common::TechsphereError;
use techsphere_config::{TechsphereConfig, DEFAULT_BACKGROUND_COLOR};
use techsphere_layout::ViewMode;

use super::*;

const CATALOG: &str = r##"{
    "technologies": [
        {"id": "react", "name": "React", "categories": ["web"], "backgroundColor": "#20232a"},
        {"id": "kotlin", "name": "Kotlin", "categories": ["languages", "java/jvm"]},
        {"id": "docker", "name": "Docker", "categories": ["devops", "tools"]},
        {"id": "typescript", "name": "TypeScript", "categories": ["web", "languages"]},
        {"id": "junit", "name": "JUnit", "categories": ["quality", "java/jvm"]}
    ]
}"##;

const ATLAS: &str = r#"{
    "textureSize": [2582, 2582],
    "cellSize": 256,
    "gridSize": 10,
    "padding": 2,
    "textures": {
        "react": {"uvOffset": [0.000774593, 0.900077459], "uvRepeat": [0.099147947, 0.099147947]},
        "kotlin": {"uvOffset": [0.100697134, 0.900077459], "uvRepeat": [0.099147947, 0.099147947]}
    }
}"#;

fn scene() -> SceneState {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let mapping = AtlasMapping::from_json_str(ATLAS).unwrap();
    let image = Arc::new(AtlasImage::for_mapping(Path::new("atlas.webp"), &mapping));
    SceneState::new(TechsphereConfig::default(), catalog, AtlasLookup::new(mapping, image))
}

fn visible_ids(scene: &SceneState) -> Vec<String> {
    scene
        .frames()
        .into_iter()
        .filter_map(|f| f.item.map(|t| t.id.clone()))
        .collect()
}

#[test]
fn starts_unfiltered_on_sphere() {
    let scene = scene();
    assert_eq!(scene.view_mode(), ViewMode::Sphere);
    assert_eq!(scene.filter(), None);
    assert_eq!(scene.frames().len(), 5);
    assert_eq!(scene.assignment().visible_count(), 5);
}

#[test]
fn filter_hides_tiles_but_keeps_slot_count() {
    let mut scene = scene();
    scene.set_filter(Some(Category::JavaJvm));
    let frames = scene.frames();
    assert_eq!(frames.len(), 5);
    assert_eq!(frames.iter().filter(|f| f.visible).count(), 2);
    assert_eq!(visible_ids(&scene), ["kotlin", "junit"]);
}

#[test]
fn radius_follows_visible_count() {
    let mut scene = scene();
    let all = scene.target_radius();
    scene.set_filter(Some(Category::Quality));
    assert!((scene.target_radius() - scene.config().sphere.base_radius).abs() < f32::EPSILON);
    assert!(scene.target_radius() <= all);
}

#[test]
fn reverting_filter_restores_frames() {
    let mut scene = scene();
    let before = scene.frames();
    scene.set_filter(Some(Category::Web));
    scene.set_filter(None);
    assert_eq!(scene.frames(), before);
}

#[test]
fn redundant_updates_are_harmless() {
    let mut scene = scene();
    scene.set_filter(Some(Category::Languages));
    let once = scene.frames();
    scene.set_filter(Some(Category::Languages));
    scene.set_view_mode(ViewMode::Sphere);
    assert_eq!(scene.frames(), once);
}

#[test]
fn switching_view_rebuilds_pool() {
    let mut scene = scene();
    scene.set_view_mode(ViewMode::Flat);
    assert_eq!(scene.pool().mode(), ViewMode::Flat);
    assert_eq!(scene.pool().len(), 5);
    let visuals = scene.visuals();
    assert!(visuals.iter().all(|v| v.rotation == glam::Vec3::ZERO));
    assert!(visuals.iter().all(|v| v.world_position == v.frame.position));
}

#[test]
fn sphere_visuals_sit_on_the_radius() {
    let scene = scene();
    let expected = scene.target_radius() + scene.config().tile.depth / 2.0;
    for visual in scene.visuals() {
        assert!((visual.world_position.length() - expected).abs() < 1e-4);
    }
}

#[test]
fn visuals_use_texture_or_fallback_color() {
    let scene = scene();
    let visuals = scene.visuals();
    let react = &visuals[0];
    assert!(react.texture.is_some());
    assert_eq!(react.background_color, "#20232a");

    let docker = &visuals[2];
    assert!(docker.texture.is_none());
    assert_eq!(docker.background_color, DEFAULT_BACKGROUND_COLOR);
}

#[test]
fn visuals_serialize_flat() {
    let scene = scene();
    let json = serde_json::to_value(scene.visuals()).unwrap();
    let first = &json[0];
    assert_eq!(first["slot"], 0);
    assert_eq!(first["visible"], true);
    assert_eq!(first["item"]["id"], "react");
    assert!(first["worldPosition"].is_array());
    assert!(first["texture"]["uv"]["uvOffset"].is_array());
}

#[test]
fn load_reads_assets_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("techstack.json");
    let atlas_path = dir.path().join("atlas.json");
    std::fs::File::create(&catalog_path)
        .unwrap()
        .write_all(CATALOG.as_bytes())
        .unwrap();
    std::fs::File::create(&atlas_path)
        .unwrap()
        .write_all(ATLAS.as_bytes())
        .unwrap();

    let paths = AssetPaths::from_config(&TechsphereConfig::default()).with_overrides(
        catalog_path.to_str(),
        atlas_path.to_str(),
    );
    let scene = SceneState::load(TechsphereConfig::default(), &paths).unwrap();
    assert_eq!(scene.catalog().len(), 5);
}

#[test]
fn load_fails_on_missing_catalog() {
    let paths = AssetPaths::from_config(&TechsphereConfig::default())
        .with_overrides(Some("/nonexistent/techstack.json"), None);
    let err = SceneState::load(TechsphereConfig::default(), &paths)
        .err()
        .unwrap();
    assert!(matches!(err, TechsphereError::Catalog(_)));
}

#[test]
fn bundled_data_loads_and_every_icon_is_packed() {
    let catalog = Catalog::from_json_str(include_str!("../../../../data/techstack.json")).unwrap();
    let mapping =
        AtlasMapping::from_json_str(include_str!("../../../../data/techstack-atlas-mapping.json"))
            .unwrap();
    for tech in catalog.technologies() {
        if !tech.icon.is_empty() {
            assert!(mapping.get(&tech.id).is_some(), "{} is not packed", tech.id);
        }
    }
    for uv in mapping.textures.values() {
        assert!(uv.is_within_unit_square(1e-6));
    }
}
