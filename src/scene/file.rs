//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::{Scene, MAX_DIMENSION};

/// Error type for scene loading
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("framebuffer size {width}x{height} outside 1..={}", MAX_DIMENSION)]
    InvalidSize { width: usize, height: usize },
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Load a scene from a RON string
pub fn load_scene_from_str(s: &str) -> Result<Scene, SceneError> {
    let scene: Scene = ron::from_str(s)?;
    scene.validate()?;
    Ok(scene)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), SceneError> {
    fs::write(path, scene_to_string(scene)?)?;
    Ok(())
}

pub fn scene_to_string(scene: &Scene) -> Result<String, SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(scene, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Color;
    use crate::scene::Shape;

    #[test]
    fn test_parse_handwritten_scene() {
        let src = r#"
            (
                width: 10,
                height: 10,
                background: (r: 255, g: 255, b: 255),
                triangles: [
                    (
                        p1: (x: 1, y: 1),
                        p2: (x: 8, y: 1),
                        p3: (x: 1, y: 8),
                        color: (r: 0, g: 0, b: 255),
                    ),
                ],
            )
        "#;
        let scene = load_scene_from_str(src).unwrap();
        assert_eq!((scene.width, scene.height), (10, 10));
        assert_eq!(scene.background, Color::WHITE);
        assert_eq!(scene.triangles, vec![Shape::new((1, 1), (8, 1), (1, 8), Color::BLUE)]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let scene = load_scene_from_str("(width: 32)").unwrap();
        assert_eq!(scene.width, 32);
        assert_eq!(scene.height, Scene::default().height);
        assert_eq!(scene.triangles, Scene::default().triangles);
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        let err = load_scene_from_str("(width: 0, height: 4)").unwrap_err();
        assert!(matches!(err, SceneError::InvalidSize { width: 0, height: 4 }));
    }

    #[test]
    fn test_parse_error() {
        let err = load_scene_from_str("(width: \"wide\")").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("trifill-scene-{}.ron", std::process::id()));
        let mut scene = Scene::empty(64, 48);
        scene.background = Color::new(30, 30, 35);
        scene.triangles.push(Shape::new((-4, 2), (70, 10), (20, 60), Color::RED));

        save_scene(&scene, &path).unwrap();
        let loaded = load_scene(&path).unwrap();
        assert_eq!(loaded, scene);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scene("/nonexistent/trifill/scene.ron").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
