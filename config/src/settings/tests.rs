//! Tests for the validated pipeline settings.

use super::*;

#[test]
fn default_settings_are_valid() {
    let cfg = PipelineConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.subdivision, Subdivision::Adaptive);
    assert!(cfg.delaunay);
    assert!(cfg.texture.is_none());
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        PipelineConfig::new(0.0, 1.0).unwrap_err(),
        ConfigError::InvalidFlatness(0.0)
    );
    assert_eq!(
        PipelineConfig::new(0.1, -1.0).unwrap_err(),
        ConfigError::InvalidDepth(-1.0)
    );
    assert!(matches!(
        PipelineConfig::new(f64::NAN, 1.0),
        Err(ConfigError::InvalidFlatness(_))
    ));
    assert!(matches!(
        PipelineConfig::new(0.1, f64::INFINITY),
        Err(ConfigError::InvalidDepth(_))
    ));
}

#[test]
fn zero_depth_is_accepted() {
    let cfg = PipelineConfig::new(0.1, 0.0).unwrap();
    assert_eq!(cfg.extrusion_depth, 0.0);
}

#[test]
fn uniform_subdivision_needs_segments() {
    let cfg = PipelineConfig::default().with_subdivision(Subdivision::Uniform { segments: 0 });
    assert_eq!(cfg.validate().unwrap_err(), ConfigError::InvalidSegments(0));

    let cfg = PipelineConfig::default().with_subdivision(Subdivision::Uniform { segments: 8 });
    assert!(cfg.validate().is_ok());
}

#[test]
fn default_uniform_subdivision_is_valid() {
    let cfg = PipelineConfig::default().with_subdivision(Subdivision::uniform());
    assert_eq!(
        cfg.subdivision,
        Subdivision::Uniform {
            segments: crate::constants::DEFAULT_UNIFORM_SUBDIVISIONS
        }
    );
    assert!(cfg.validate().is_ok());
}

#[test]
fn builder_setters_apply() {
    let cfg = PipelineConfig::default()
        .with_delaunay(false)
        .with_drop_leading_origin(false)
        .with_texture("brick");
    assert!(!cfg.delaunay);
    assert_eq!(cfg.drop_leading_origin, Some(false));
    assert_eq!(cfg.texture.as_deref(), Some("brick"));
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        ConfigError::InvalidDepth(-2.0).to_string(),
        "extrusion depth must be >= 0 and finite: -2"
    );
}
