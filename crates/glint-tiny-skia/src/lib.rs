//! A software rendering backend for `glint` that uses [`tiny-skia`](https://docs.rs/tiny-skia).

use std::mem;

use glint::{
    glam::Affine2, Backend, BackendLayer, Color, Command, CommandStream, FillRule, LineCap,
    LineJoin, PathSegment, StrokeSettings, Vec2,
};
use tiny_skia::{
    FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Shader, Stroke, Transform,
};

/// A `tiny-skia` rendering backend.
#[derive(Default)]
pub struct TinySkiaBackend {
    renderer: Renderer,
}

impl TinySkiaBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for TinySkiaBackend {
    type Layer = TinySkiaLayer;

    fn create_layer(
        &self,
        physical_width: u32,
        physical_height: u32,
        hidpi_factor: f32,
    ) -> TinySkiaLayer {
        TinySkiaLayer {
            pixmap: Pixmap::new(physical_width, physical_height)
                .expect("invalid layer dimensions"),
            hidpi_factor,
        }
    }

    fn render_to_layer(&mut self, layer: &mut TinySkiaLayer, commands: CommandStream) {
        self.renderer.render_to_layer(layer, commands);
    }

    fn blit_layer(
        &mut self,
        target: &mut TinySkiaLayer,
        source: &TinySkiaLayer,
        position: Vec2,
        scale: f32,
    ) {
        let transform = Transform::from_row(scale, 0., 0., scale, position.x, position.y);
        target.pixmap.draw_pixmap(
            0,
            0,
            source.pixmap.as_ref(),
            &PixmapPaint {
                quality: FilterQuality::Bilinear,
                ..Default::default()
            },
            transform,
            None,
        );
    }
}

/// A layer of pixels owned by the [`TinySkiaBackend`].
pub struct TinySkiaLayer {
    pixmap: Pixmap,
    hidpi_factor: f32,
}

impl BackendLayer for TinySkiaLayer {
    fn fill(&mut self, color: Color) {
        self.pixmap.fill(convert_color(color));
    }

    fn to_argb(&self) -> Vec<u32> {
        self.pixmap
            .pixels()
            .iter()
            .map(|pixel| {
                let pixel = pixel.demultiply();
                u32::from(pixel.alpha()) << 24
                    | u32::from(pixel.red()) << 16
                    | u32::from(pixel.green()) << 8
                    | u32::from(pixel.blue())
            })
            .collect()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

struct Renderer {
    paint_color: tiny_skia::Color,
    object_transform: Transform,
    path_builder: PathBuilder,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            paint_color: tiny_skia::Color::BLACK,
            object_transform: Transform::identity(),
            path_builder: PathBuilder::new(),
        }
    }
}

impl Renderer {
    pub fn render_to_layer(&mut self, layer: &mut TinySkiaLayer, commands: CommandStream) {
        for command in commands {
            self.execute_command(layer, command);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.path_builder.clear();
        self.object_transform = Transform::identity();
        self.paint_color = tiny_skia::Color::BLACK;
    }

    fn paint(&self) -> Paint {
        Paint {
            anti_alias: true,
            shader: Shader::SolidColor(self.paint_color),
            ..Default::default()
        }
    }

    /// The full transform mapping logical path coordinates to
    /// physical layer pixels: the object transform first, then
    /// the hidpi scale.
    fn object_transform(&self, hidpi_factor: f32) -> Transform {
        self.object_transform.post_scale(hidpi_factor, hidpi_factor)
    }

    fn execute_command(&mut self, layer: &mut TinySkiaLayer, command: Command) {
        match command {
            Command::UseSolidPaint(color) => {
                self.paint_color = convert_color(color);
            }
            Command::SetObjectTransform(trans) => self.object_transform = convert_transform(trans),
            Command::ClearPath => self.path_builder.clear(),
            Command::PushPathSegment(segment) => match segment {
                PathSegment::MoveTo(pos) => self.path_builder.move_to(pos.x, pos.y),
                PathSegment::LineTo(pos) => self.path_builder.line_to(pos.x, pos.y),
                PathSegment::QuadTo { control, end } => self
                    .path_builder
                    .quad_to(control.x, control.y, end.x, end.y),
                PathSegment::CubicTo {
                    control1,
                    control2,
                    end,
                } => self
                    .path_builder
                    .cubic_to(control1.x, control1.y, control2.x, control2.y, end.x, end.y),
                PathSegment::Close => self.path_builder.close(),
            },
            Command::FillPath { fill_rule } => self.fill_path(layer, fill_rule),
            Command::StrokePath { stroke_settings } => self.stroke_path(&stroke_settings, layer),
        }
    }

    fn fill_path(&mut self, layer: &mut TinySkiaLayer, fill_rule: FillRule) {
        self.with_current_path(|this, path| {
            layer.pixmap.fill_path(
                &path,
                &this.paint(),
                convert_fill_rule(fill_rule),
                this.object_transform(layer.hidpi_factor),
                None,
            );
            path
        });
    }

    fn stroke_path(&mut self, settings: &StrokeSettings, layer: &mut TinySkiaLayer) {
        self.with_current_path(|this, path| {
            layer.pixmap.stroke_path(
                &path,
                &this.paint(),
                &Stroke {
                    width: settings.width,
                    line_cap: convert_line_cap(settings.line_cap),
                    line_join: convert_line_join(settings.line_join),
                    ..Default::default()
                },
                this.object_transform(layer.hidpi_factor),
                None,
            );
            path
        });
    }

    fn with_current_path(
        &mut self,
        callback: impl FnOnce(&mut Self, tiny_skia::Path) -> tiny_skia::Path,
    ) {
        let builder = mem::take(&mut self.path_builder);
        let mut path = builder.finish().expect("attempted to render invalid path");
        path = callback(self, path);

        // Reuse the path builder's allocated space.
        // Note that this clears the builder, meaning a subsequent
        // draw command will use an empty path. However, the Canvas
        // always stages a path before every draw command, so
        // we need not worry.
        self.path_builder = path.clear();
    }
}

fn convert_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red(), color.green(), color.blue(), color.alpha())
}

fn convert_transform(transform: Affine2) -> Transform {
    let cols = transform.to_cols_array();
    Transform::from_row(cols[0], cols[1], cols[2], cols[3], cols[4], cols[5])
}

fn convert_line_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
        LineCap::Square => tiny_skia::LineCap::Square,
    }
}

fn convert_line_join(join: LineJoin) -> tiny_skia::LineJoin {
    match join {
        LineJoin::Miter => tiny_skia::LineJoin::Miter,
        LineJoin::Round => tiny_skia::LineJoin::Round,
        LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
    }
}

fn convert_fill_rule(rule: FillRule) -> tiny_skia::FillRule {
    match rule {
        FillRule::EvenOdd => tiny_skia::FillRule::EvenOdd,
        FillRule::NonZero => tiny_skia::FillRule::Winding,
    }
}

#[cfg(test)]
mod tests {
    use glint::{glam::vec2, Canvas, Context, Path};

    use super::*;

    fn context() -> Context {
        Context::new(Box::new(TinySkiaBackend::new()))
    }

    fn square(size: f32) -> Path {
        Path::builder()
            .move_to(vec2(0., 0.))
            .line_to(vec2(size, 0.))
            .line_to(vec2(size, size))
            .line_to(vec2(0., size))
            .close()
    }

    fn pixel(argb: &[u32], width: u32, x: u32, y: u32) -> u32 {
        argb[(y * width + x) as usize]
    }

    #[test]
    fn fill_covers_the_path_interior() {
        let mut context = context();
        let mut layer = context.create_layer(4, 4, 1.);
        let mut canvas = Canvas::new();

        canvas
            .fill_path(&square(2.))
            .solid_color(Color::rgb(255, 0, 0))
            .draw();
        canvas.render_to_layer(&mut context, &mut layer);

        let argb = layer.to_argb();
        assert_eq!(pixel(&argb, 4, 0, 0), 0xffff0000);
        assert_eq!(pixel(&argb, 4, 1, 1), 0xffff0000);
        assert_eq!(pixel(&argb, 4, 3, 3), 0);
    }

    #[test]
    fn hidpi_factor_scales_logical_coordinates() {
        let mut context = context();
        // 2 logical units across, 4 physical pixels.
        let mut layer = context.create_layer(4, 4, 2.);
        let mut canvas = Canvas::new();

        canvas
            .fill_path(&square(2.))
            .solid_color(Color::WHITE)
            .draw();
        canvas.render_to_layer(&mut context, &mut layer);

        let argb = layer.to_argb();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(pixel(&argb, 4, x, y), 0xffffffff, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn object_transform_offsets_drawing() {
        let mut context = context();
        let mut layer = context.create_layer(4, 4, 1.);
        let mut canvas = Canvas::new();

        canvas.translate(vec2(2., 2.));
        canvas
            .fill_path(&square(2.))
            .solid_color(Color::rgb(0, 255, 0))
            .draw();
        canvas.render_to_layer(&mut context, &mut layer);

        let argb = layer.to_argb();
        assert_eq!(pixel(&argb, 4, 0, 0), 0);
        assert_eq!(pixel(&argb, 4, 2, 2), 0xff00ff00);
        assert_eq!(pixel(&argb, 4, 3, 3), 0xff00ff00);
    }

    #[test]
    fn layer_fill_replaces_all_pixels() {
        let context = context();
        let mut layer = context.create_layer(2, 2, 1.);

        layer.fill(Color::rgb(0, 0, 255));
        assert!(layer.to_argb().iter().all(|&pixel| pixel == 0xff0000ff));

        layer.fill(Color::TRANSPARENT);
        assert!(layer.to_argb().iter().all(|&pixel| pixel == 0));
    }

    #[test]
    fn blit_places_and_scales_the_source() {
        let mut context = context();
        let mut target = context.create_layer(8, 8, 1.);
        let mut source = context.create_layer(2, 2, 1.);
        source.fill(Color::rgb(0, 0, 255));

        // Scale the 2x2 source to 4x4, placed at (2, 2).
        context
            .backend_mut()
            .blit_layer(target.inner_mut(), source.inner(), vec2(2., 2.), 2.);

        let argb = target.to_argb();
        assert_eq!(pixel(&argb, 8, 0, 0), 0);
        assert_eq!(pixel(&argb, 8, 3, 3), 0xff0000ff);
        assert_eq!(pixel(&argb, 8, 4, 4), 0xff0000ff);
        assert_eq!(pixel(&argb, 8, 7, 7), 0);
    }
}
