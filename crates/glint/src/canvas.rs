use glam::{Affine2, Vec2};

use crate::{
    backend::command::{Command, CommandBuffer},
    types::StrokeSettings,
    Color, Context, FillRule, Layer, LineCap, LineJoin, Path,
};

/// A canvas to draw to.
///
/// Records a sequence of draw commands, then passes those
/// commands to the renderer.
///
/// The canvas maintains a _current transform_, which makes it stateful.
/// As a result, you want to ensure drawing operations happen in isolation.
/// A function that draws to a canvas, thus updating the canvas state, should
/// not affect any functions that come after it. To solve this problem, `glint`
/// offers a save/restore API to create a stack of canvas states. See the methods
/// [`save`](Canvas::save) and [`restore`](Canvas::restore).
///
/// Many methods return `self` to enable method chaining.
pub struct Canvas {
    commands: CommandBuffer,

    state_stack: Vec<State>,
    state: State,
}

impl Canvas {
    /// Creates a new canvas.
    pub fn new() -> Self {
        Self {
            commands: CommandBuffer::new(),
            state_stack: Vec::new(),
            state: State::default(),
        }
    }

    /// Translates the canvas.
    ///
    /// The translation is expressed in the current coordinate space,
    /// so it composes with any scale or rotation already applied.
    pub fn translate(&mut self, translation: Vec2) -> &mut Self {
        self.state.transform = self.state.transform * Affine2::from_translation(translation);
        self.emit_transform();
        self
    }

    /// Scales the canvas.
    pub fn scale(&mut self, scale: Vec2) -> &mut Self {
        self.state.transform = self.state.transform * Affine2::from_scale(scale);
        self.emit_transform();
        self
    }

    /// Rotates the canvas by the given angle in radians.
    pub fn rotate(&mut self, angle_in_radians: f32) -> &mut Self {
        self.state.transform = self.state.transform * Affine2::from_angle(angle_in_radians);
        self.emit_transform();
        self
    }

    /// Pushes the current transform onto the transform stack,
    /// allowing it to be restored later.
    pub fn save(&mut self) -> &mut Self {
        self.state_stack.push(self.state);
        self
    }

    /// Restores the next saved transform in the canvas's state stack.
    ///
    /// # Panics
    /// Panics if there is no state to pop. This happens only when
    /// `restore()` is called more times than `save()`.
    pub fn restore(&mut self) -> &mut Self {
        self.state = self
            .state_stack
            .pop()
            .expect("called Canvas::restore() at the top of the state stack");
        self.emit_transform();
        self
    }

    /// Calls `save()`, executes the closure, and then calls `restore()`.
    pub fn with_save(&mut self, f: impl FnOnce(&mut Self)) {
        self.save();
        f(self);
        self.restore();
    }

    /// Creates a builder to fill the given path.
    pub fn fill_path(&mut self, path: &Path) -> Fill {
        self.set_path(path);
        Fill::new(self)
    }

    /// Creates a builder to stroke the given path.
    pub fn stroke_path(&mut self, path: &Path) -> Stroke {
        self.set_path(path);
        Stroke::new(self)
    }

    /// Renders the canvas to the given `Layer`, flushing
    /// the draw command buffer.
    ///
    /// The canvas can be reused after this call; its transform
    /// state is reset.
    pub fn render_to_layer(&mut self, context: &mut Context, layer: &mut Layer) {
        context
            .backend_mut()
            .render_to_layer(layer.inner_mut(), self.commands.to_stream());
        self.commands.clear();
        self.reset();
    }

    fn reset(&mut self) {
        self.state_stack.clear();
        self.state = State::default();
    }

    fn set_path(&mut self, path: &Path) {
        self.cmd(Command::ClearPath);
        for segment in path.segments() {
            self.cmd(Command::PushPathSegment(segment));
        }
    }

    fn set_solid_paint(&mut self, color: Color) {
        self.cmd(Command::UseSolidPaint(color));
    }

    fn emit_transform(&mut self) {
        let transform = self.state.transform;
        self.cmd(Command::SetObjectTransform(transform));
    }

    fn cmd(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    #[cfg(test)]
    fn take_commands(&mut self) -> Vec<Command> {
        let commands = self.commands.to_stream().collect();
        self.commands.clear();
        commands
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder-like API to fill a path.
///
/// Allows configuring the following:
/// * the paint to use - defaults to solid black
/// * the fill rule - defaults to EvenOdd
///
/// Call `draw()` to finish the draw operation.
#[must_use = "call Fill::draw() to finish the builder"]
pub struct Fill<'cv> {
    canvas: &'cv mut Canvas,
    set_paint: bool,
    fill_rule: FillRule,
}

impl<'cv> Fill<'cv> {
    fn new(canvas: &'cv mut Canvas) -> Self {
        Self {
            canvas,
            set_paint: false,
            fill_rule: FillRule::default(),
        }
    }

    /// Uses a solid color for the fill.
    pub fn solid_color(mut self, color: impl Into<Color>) -> Self {
        self.canvas.set_solid_paint(color.into());
        self.set_paint = true;
        self
    }

    /// Sets the fill rule.
    pub fn fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Draws the path.
    ///
    /// (Or rather, emits the command that causes the path to be drawn
    /// when the canvas is rendered.)
    pub fn draw(mut self) {
        if !self.set_paint {
            self = self.solid_color(Color::BLACK);
        }

        let fill_rule = self.fill_rule;
        self.canvas.cmd(Command::FillPath { fill_rule });
    }
}

/// Builder-like API to stroke a path.
///
/// Allows configuring the following:
/// * the paint - defaults to solid black
/// * the stroke width - defaults to 1.0
/// * the line cap - defaults to Butt
/// * the line join - defaults to Miter
///
/// Call `draw()` to finish the draw operation.
#[must_use = "call Stroke::draw() to finish the builder"]
pub struct Stroke<'cv> {
    canvas: &'cv mut Canvas,
    settings: StrokeSettings,
    set_paint: bool,
}

impl<'cv> Stroke<'cv> {
    fn new(canvas: &'cv mut Canvas) -> Self {
        Self {
            canvas,
            settings: StrokeSettings::default(),
            set_paint: false,
        }
    }

    /// Uses a solid color for the stroke.
    pub fn solid_color(mut self, color: impl Into<Color>) -> Self {
        self.canvas.set_solid_paint(color.into());
        self.set_paint = true;
        self
    }

    /// Sets the stroke width.
    pub fn width(mut self, stroke_width: f32) -> Self {
        self.settings.width = stroke_width;
        self
    }

    /// Sets the line cap.
    pub fn line_cap(mut self, line_cap: LineCap) -> Self {
        self.settings.line_cap = line_cap;
        self
    }

    /// Sets the line join.
    pub fn line_join(mut self, line_join: LineJoin) -> Self {
        self.settings.line_join = line_join;
        self
    }

    /// Draws the stroke.
    ///
    /// (Or rather, emits the command that causes the path to be drawn
    /// when the canvas is rendered.)
    pub fn draw(mut self) {
        if !self.set_paint {
            self = self.solid_color(Color::BLACK);
        }

        let stroke_settings = self.settings;
        self.canvas.cmd(Command::StrokePath { stroke_settings });
    }
}

/// The state of the canvas.
#[derive(Debug, Default, Copy, Clone)]
struct State {
    transform: Affine2,
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use crate::path::PathSegment;

    use super::*;

    #[test]
    fn fill_path() {
        let mut canvas = Canvas::new();

        let path = Path::builder()
            .move_to(vec2(500., 500.))
            .line_to(vec2(1000., 1000.))
            .build();

        canvas.fill_path(&path).draw();

        assert_eq!(
            canvas.take_commands(),
            vec![
                Command::ClearPath,
                Command::PushPathSegment(PathSegment::MoveTo(vec2(500., 500.))),
                Command::PushPathSegment(PathSegment::LineTo(vec2(1000., 1000.))),
                Command::UseSolidPaint(Color::BLACK),
                Command::FillPath {
                    fill_rule: FillRule::default()
                }
            ]
        );
    }

    #[test]
    fn stroke_path_with_settings() {
        let mut canvas = Canvas::new();

        let path = Path::builder()
            .move_to(vec2(0., 0.))
            .line_to(vec2(10., 0.))
            .build();

        canvas
            .stroke_path(&path)
            .width(2.)
            .line_cap(LineCap::Square)
            .solid_color(Color::WHITE)
            .draw();

        assert_eq!(
            canvas.take_commands(),
            vec![
                Command::ClearPath,
                Command::PushPathSegment(PathSegment::MoveTo(vec2(0., 0.))),
                Command::PushPathSegment(PathSegment::LineTo(vec2(10., 0.))),
                Command::UseSolidPaint(Color::WHITE),
                Command::StrokePath {
                    stroke_settings: StrokeSettings {
                        width: 2.,
                        line_cap: LineCap::Square,
                        line_join: LineJoin::default(),
                    }
                }
            ]
        );
    }

    #[test]
    fn translate_composes_in_local_space() {
        let mut canvas = Canvas::new();
        canvas.scale(Vec2::splat(2.)).translate(vec2(5., 0.));

        let commands = canvas.take_commands();
        let expected = Affine2::from_scale(Vec2::splat(2.)) * Affine2::from_translation(vec2(5., 0.));
        assert_eq!(
            commands.last(),
            Some(&Command::SetObjectTransform(expected))
        );
    }

    #[test]
    fn save_restore_round_trips_transform() {
        let mut canvas = Canvas::new();

        canvas.save();
        canvas.rotate(1.).translate(vec2(3., 4.));
        canvas.restore();

        let commands = canvas.take_commands();
        assert_eq!(
            commands.last(),
            Some(&Command::SetObjectTransform(Affine2::IDENTITY))
        );
    }

    #[test]
    #[should_panic]
    fn restore_without_save_panics() {
        Canvas::new().restore();
    }
}
