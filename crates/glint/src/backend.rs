use std::any::Any;

use glam::Vec2;

use crate::Color;

use self::command::CommandStream;

pub mod command;

/// A drawing backend that implements the `glint` rendering model.
pub trait Backend: 'static {
    type Layer: BackendLayer;

    fn create_layer(
        &self,
        physical_width: u32,
        physical_height: u32,
        hidpi_factor: f32,
    ) -> Self::Layer;

    fn render_to_layer(&mut self, layer: &mut Self::Layer, commands: CommandStream);

    /// Copies `source` onto `target`, placing its top-left corner at
    /// `position` (in physical pixels of `target`) and scaling it by `scale`.
    fn blit_layer(
        &mut self,
        target: &mut Self::Layer,
        source: &Self::Layer,
        position: Vec2,
        scale: f32,
    );
}

/// A target surface for a rendering backend.
///
/// A type implementing `BackendLayer` contains a 2D image
/// representing the rendered pixels.
pub trait BackendLayer: 'static {
    fn fill(&mut self, color: Color);

    fn to_argb(&self) -> Vec<u32>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Type-erased version of `Backend`.
pub trait ErasedBackend: 'static {
    fn create_layer(
        &self,
        physical_width: u32,
        physical_height: u32,
        hidpi_factor: f32,
    ) -> Box<dyn BackendLayer>;

    fn render_to_layer(&mut self, layer: &mut dyn BackendLayer, commands: CommandStream);

    fn blit_layer(
        &mut self,
        target: &mut dyn BackendLayer,
        source: &dyn BackendLayer,
        position: Vec2,
        scale: f32,
    );

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> ErasedBackend for T
where
    T: Backend,
{
    fn create_layer(
        &self,
        physical_width: u32,
        physical_height: u32,
        hidpi_factor: f32,
    ) -> Box<dyn BackendLayer> {
        let layer =
            <T as Backend>::create_layer(self, physical_width, physical_height, hidpi_factor);
        Box::new(layer)
    }

    fn render_to_layer(&mut self, layer: &mut dyn BackendLayer, commands: CommandStream) {
        <T as Backend>::render_to_layer(
            self,
            layer
                .as_any_mut()
                .downcast_mut()
                .expect("layer type does not correspond to this backend"),
            commands,
        )
    }

    fn blit_layer(
        &mut self,
        target: &mut dyn BackendLayer,
        source: &dyn BackendLayer,
        position: Vec2,
        scale: f32,
    ) {
        <T as Backend>::blit_layer(
            self,
            target
                .as_any_mut()
                .downcast_mut()
                .expect("layer type does not correspond to this backend"),
            source
                .as_any()
                .downcast_ref()
                .expect("layer type does not correspond to this backend"),
            position,
            scale,
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
