#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod curve;
pub mod draw;
pub mod geometry;
pub mod guides;
pub mod pen;
pub mod reduce;
pub mod render;

pub use crate::config::{ConfigError, EngineConfiguration};
pub use crate::curve::Curve;
pub use crate::geometry::{lerp, Point};
pub use crate::pen::{Pen, Phase};
pub use crate::reduce::Reduction;
pub use crate::render::{RenderPrimitive, Style};
