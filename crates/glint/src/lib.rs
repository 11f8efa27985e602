//! 2D rendering.

mod backend;
mod canvas;
mod color;
mod context;
mod layer;
mod path;
mod types;

pub use backend::{
    command::{Command, CommandStream},
    Backend, BackendLayer, ErasedBackend,
};
pub use canvas::{Canvas, Fill, Stroke};
pub use color::Color;
pub use context::Context;
pub use glam::Vec2;
pub use layer::Layer;
pub use path::{Path, PathBuilder, PathSegment};
pub use types::{FillRule, LineCap, LineJoin, StrokeSettings};

pub extern crate glam;
