//! Configuration of a [`Pen`](crate::Pen).
//!
//! The configuration is owned by whatever drives the pen (a UI, the command line, javascript)
//! and pushed into it on change. It can also be loaded from a TOML file.

use crate::reduce::Reduction;
use crate::render::Style;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Smallest number of control points a curve can consist of
pub const MIN_ORDER: usize = 2;

/// Smallest number of guide points per segment
pub const MIN_GUIDE_COUNT: usize = 1;

/// Smallest edge length of the drawing surface
pub const MIN_SURFACE_SIZE: f64 = 300.0;

/// Share of the viewport the drawing surface may cover
pub const SURFACE_VIEWPORT_SHARE: f64 = 0.8;

/// Errors raised by invalid configurations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A curve needs at least two control points
    #[error("order must be at least 2, got {order}")]
    OrderTooSmall {
        /// The rejected order
        order: usize,
    },

    /// Every segment needs at least one guide point
    #[error("guide count must be at least 1, got {guide_count}")]
    GuideCountTooSmall {
        /// The rejected guide count
        guide_count: usize,
    },

    /// The configuration file couldn't be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file isn't valid TOML or has the wrong shape
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything the user can change about the pen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfiguration {
    /// Number of control points which make up a curve
    pub order: usize,

    /// Number of guide points per segment, also the number of samples drawn
    pub guide_count: usize,

    /// Whether the last control point is connected back to the first
    pub closed: bool,

    /// Display the black segments between control points
    pub show_control_segments: bool,

    /// Display the curve's segments instead of its dots
    pub show_curve_segments: bool,

    /// How guide levels are reduced
    pub reduction: Reduction,
}

impl Default for EngineConfiguration {
    fn default() -> Self {
        EngineConfiguration {
            order: 4,
            guide_count: 10,
            closed: false,
            show_control_segments: true,
            show_curve_segments: false,
            reduction: Reduction::Pairwise,
        }
    }
}

impl EngineConfiguration {
    /// Check the numeric fields' lower bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_order(self.order)?;
        check_guide_count(self.guide_count)?;
        Ok(())
    }

    /// The visibility part of the configuration
    pub fn style(&self) -> Style {
        Style {
            show_control_segments: self.show_control_segments,
            show_curve_segments: self.show_curve_segments,
        }
    }

    /// Parse and validate a configuration from TOML.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfiguration = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

pub(crate) fn check_order(order: usize) -> Result<(), ConfigError> {
    if order < MIN_ORDER {
        return Err(ConfigError::OrderTooSmall { order });
    }
    Ok(())
}

pub(crate) fn check_guide_count(guide_count: usize) -> Result<(), ConfigError> {
    if guide_count < MIN_GUIDE_COUNT {
        return Err(ConfigError::GuideCountTooSmall { guide_count });
    }
    Ok(())
}

/// Edge length of the square drawing surface for a viewport of the given size.
pub fn surface_size(viewport_width: f64, viewport_height: f64) -> f64 {
    (viewport_width * SURFACE_VIEWPORT_SHARE)
        .min(viewport_height * SURFACE_VIEWPORT_SHARE)
        .max(MIN_SURFACE_SIZE)
}
