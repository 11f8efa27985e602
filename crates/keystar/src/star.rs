use std::f32::consts::PI;

use glint::{glam::vec2, Canvas, Color, Context, Path, Vec2};
use glint_app::{ImageNode, ImageNodeId, MissingNode, Stage};

/// Logical size of the star's drawing surface.
const SURFACE_WIDTH: f32 = 30.;
const SURFACE_HEIGHT: f32 = 30.;
/// Physical pixels per logical unit of the surface.
const PIXEL_SCALE: f32 = 4.;

const OUTER_RADIUS: f32 = 10.;
const INNER_RADIUS: f32 = 10.;
const POINTS: u32 = 3;

const FILL_COLOR: Color = Color::rgb(0xee, 0xee, 0xee);
const STROKE_COLOR: Color = Color::BLACK;
const STROKE_WIDTH: f32 = 1.;

/// Draws a star polygon into an image node it owns on the stage.
///
/// The node is created once and center-aligned; every call to
/// [`draw`](StarRenderer::draw) replaces its pixel content in place.
pub struct StarRenderer {
    width: f32,
    height: f32,
    outer_radius: f32,
    inner_radius: f32,
    points: u32,
    node: ImageNodeId,
    canvas: Canvas,
}

impl StarRenderer {
    /// The angle used for the initial draw, before any key is pressed.
    pub const DEFAULT_ANGLE: f32 = 1.;

    pub fn new(stage: &mut Stage, context: &mut Context) -> Self {
        let layer = context.create_layer(
            (SURFACE_WIDTH * PIXEL_SCALE) as u32,
            (SURFACE_HEIGHT * PIXEL_SCALE) as u32,
            PIXEL_SCALE,
        );
        let mut node = ImageNode::new(layer);
        node.set_align(Vec2::splat(0.5));

        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            outer_radius: OUTER_RADIUS,
            inner_radius: INNER_RADIUS,
            points: POINTS,
            node: stage.add_image(node),
            canvas: Canvas::new(),
        }
    }

    /// The node this renderer draws into.
    pub fn node(&self) -> ImageNodeId {
        self.node
    }

    /// Redraws the star rotated by `angle * PI / points` radians,
    /// replacing the image node's previous content.
    pub fn draw(
        &mut self,
        stage: &mut Stage,
        context: &mut Context,
        angle: f32,
    ) -> Result<(), MissingNode> {
        let node = stage.image_mut(self.node)?;

        let path = star_path(angle, self.outer_radius, self.inner_radius, self.points);

        self.canvas.translate(vec2(self.width, self.height) / 2.);
        self.canvas.fill_path(&path).solid_color(FILL_COLOR).draw();
        self.canvas
            .stroke_path(&path)
            .width(STROKE_WIDTH)
            .solid_color(STROKE_COLOR)
            .draw();

        let layer = node.layer_mut();
        layer.fill(Color::TRANSPARENT);
        self.canvas.render_to_layer(context, layer);
        Ok(())
    }
}

/// Plots a star polygon about the origin: the first vertex sits
/// `outer_radius` units above center, rotated by `angle * PI / points`;
/// each subsequent vertex rotates a further `PI / points` radians,
/// alternating between the inner and outer radius, until the path
/// arrives back at its starting vertex.
pub fn star_path(angle: f32, outer_radius: f32, inner_radius: f32, points: u32) -> Path {
    let step = PI / points as f32;

    let mut rotation = angle * step;
    let mut builder = Path::builder().move_to(vertex(rotation, outer_radius));
    for _ in 0..points {
        rotation += step;
        builder = builder.line_to(vertex(rotation, inner_radius));
        rotation += step;
        builder = builder.line_to(vertex(rotation, outer_radius));
    }
    builder.build()
}

/// The point `radius` units from the origin, `rotation` radians
/// clockwise from straight up (y points down).
fn vertex(rotation: f32, radius: f32) -> Vec2 {
    vec2(rotation.sin() * radius, -rotation.cos() * radius)
}

#[cfg(test)]
mod tests {
    use glint::PathSegment;

    use super::*;

    fn vertices(path: &Path) -> Vec<Vec2> {
        path.segments()
            .map(|segment| match segment {
                PathSegment::MoveTo(point) | PathSegment::LineTo(point) => point,
                other => panic!("unexpected segment {:?}", other),
            })
            .collect()
    }

    #[test]
    fn six_line_segments_after_the_initial_move() {
        let path = star_path(1., 10., 10., 3);
        let segments: Vec<_> = path.segments().collect();

        assert_eq!(segments.len(), 7);
        assert!(matches!(segments[0], PathSegment::MoveTo(_)));
        assert!(segments[1..]
            .iter()
            .all(|segment| matches!(segment, PathSegment::LineTo(_))));
    }

    #[test]
    fn vertices_alternate_between_outer_and_inner_radius() {
        let path = star_path(0.37, 12., 5., 3);
        let lengths: Vec<f32> = vertices(&path).iter().map(|v| v.length()).collect();

        let expected = [12., 5., 12., 5., 12., 5., 12.];
        assert_eq!(lengths.len(), expected.len());
        for (length, expected) in lengths.iter().zip(expected) {
            assert!((length - expected).abs() < 1e-4, "{} != {}", length, expected);
        }
    }

    #[test]
    fn every_vertex_lies_on_one_of_the_two_radii() {
        for angle in [0., 0.25, 1., 3.7, 100.] {
            for vertex in vertices(&star_path(angle, 10., 10., 3)) {
                assert!((vertex.length() - 10.).abs() < 1e-3, "angle {}", angle);
            }
        }
    }

    #[test]
    fn same_angle_produces_identical_paths() {
        assert_eq!(star_path(0.62, 10., 10., 3), star_path(0.62, 10., 10., 3));
    }

    #[test]
    fn angle_only_rotates_the_polygon() {
        let reference = vertices(&star_path(0., 12., 5., 3));
        let rotated = vertices(&star_path(0.8, 12., 5., 3));

        // Consecutive vertex spacing is unaffected by the rotation offset.
        for (a, b) in reference.windows(2).zip(rotated.windows(2)) {
            let reference_edge = a[0].distance(a[1]);
            let rotated_edge = b[0].distance(b[1]);
            assert!((reference_edge - rotated_edge).abs() < 1e-4);
        }
    }

    #[test]
    fn path_returns_to_its_starting_vertex() {
        let vertices = vertices(&star_path(0.44, 12., 5., 3));
        let first = vertices.first().unwrap();
        let last = vertices.last().unwrap();
        assert!(first.distance(*last) < 1e-4);
    }

    #[test]
    fn default_angle_is_one() {
        assert_eq!(
            star_path(StarRenderer::DEFAULT_ANGLE, 10., 10., 3),
            star_path(1., 10., 10., 3)
        );
    }
}
