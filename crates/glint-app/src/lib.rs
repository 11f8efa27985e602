//! Utility for using `glint` with `winit`: a small stage of image
//! nodes composited to a window, plus event plumbing.
//!
//! Supports the `tiny-skia` backend.

use glint::ErasedBackend;
#[cfg(feature = "backend-tiny-skia")]
use glint_tiny_skia::TinySkiaBackend;

mod app;
mod event;
mod presenter;
mod stage;

pub use app::{run, Application};
pub use event::{Event, KeyEvent};
pub use presenter::Presenter;
pub use stage::{ImageNode, ImageNodeId, MissingNode, Stage};

pub extern crate winit;

/// The rendering backend in use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BackendType {
    #[cfg(feature = "backend-tiny-skia")]
    TinySkia,
    Other,
}

/// Selects the optimal available `Backend`.
///
/// # Panics
/// Panics if no backend is available.
pub fn select_optimal_backend() -> Box<dyn ErasedBackend> {
    #[cfg(feature = "backend-tiny-skia")]
    {
        Box::new(TinySkiaBackend::new())
    }
    #[cfg(not(feature = "backend-tiny-skia"))]
    {
        panic!("no working rendering backend is available")
    }
}
