use glint::{Color, Context, Layer, Vec2};
use slotmap::SlotMap;
use thiserror::Error;

slotmap::new_key_type! {
    /// Stable identity of an [`ImageNode`] within a [`Stage`].
    pub struct ImageNodeId;
}

#[derive(Debug, Error)]
#[error("no image node with the given id exists on the stage")]
pub struct MissingNode;

/// A scene of drawable nodes composited to a window.
///
/// The stage scales its _view box_ (a fixed logical coordinate space)
/// to fit the window, centered, preserving aspect ratio. Nodes are
/// positioned within the view box by their alignment.
pub struct Stage {
    view_box: Option<Vec2>,
    background: Color,
    nodes: SlotMap<ImageNodeId, ImageNode>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            view_box: None,
            background: Color::WHITE,
            nodes: SlotMap::with_key(),
        }
    }

    /// Sets the logical coordinate space the stage scales to fit the
    /// window. Without a view box, stage units equal window logical pixels.
    pub fn set_view_box(&mut self, view_box: Vec2) -> &mut Self {
        self.view_box = Some(view_box);
        self
    }

    pub fn view_box(&self) -> Option<Vec2> {
        self.view_box
    }

    pub fn set_background(&mut self, background: Color) -> &mut Self {
        self.background = background;
        self
    }

    /// Adds an image node to the stage, returning its id.
    ///
    /// The id remains valid for the life of the stage; redraws mutate
    /// the node's layer in place rather than replacing the node.
    pub fn add_image(&mut self, node: ImageNode) -> ImageNodeId {
        self.nodes.insert(node)
    }

    pub fn image(&self, id: ImageNodeId) -> Result<&ImageNode, MissingNode> {
        self.nodes.get(id).ok_or(MissingNode)
    }

    pub fn image_mut(&mut self, id: ImageNodeId) -> Result<&mut ImageNode, MissingNode> {
        self.nodes.get_mut(id).ok_or(MissingNode)
    }

    /// Composites the stage onto `root`.
    pub fn render(&self, context: &mut Context, root: &mut Layer) {
        root.fill(self.background);

        let root_logical = root.logical_size();
        let (scale, offset) = self.fit(root_logical);

        for node in self.nodes.values() {
            let node_size = node.layer.logical_size();
            let view_box = self.view_box.unwrap_or(root_logical);
            let position = offset + (view_box - node_size) * node.align * scale;

            let root_hidpi = root.hidpi_factor();
            context.backend_mut().blit_layer(
                root.inner_mut(),
                node.layer.inner(),
                position * root_hidpi,
                scale * root_hidpi / node.layer.hidpi_factor(),
            );
        }
    }

    /// Maps a position in window logical pixels to view box units.
    pub fn view_box_position(&self, root_logical: Vec2, window_position: Vec2) -> Vec2 {
        let (scale, offset) = self.fit(root_logical);
        (window_position - offset) / scale
    }

    /// The uniform scale and centering offset that fit the view box
    /// into a window of the given logical size.
    fn fit(&self, root_logical: Vec2) -> (f32, Vec2) {
        let view_box = match self.view_box {
            Some(view_box) => view_box,
            None => return (1., Vec2::ZERO),
        };
        let scale = (root_logical.x / view_box.x).min(root_logical.y / view_box.y);
        let offset = (root_logical - view_box * scale) / 2.;
        (scale, offset)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

/// A drawable node owning a layer of pixels.
pub struct ImageNode {
    layer: Layer,
    align: Vec2,
}

impl ImageNode {
    /// Creates a node from the layer holding its pixel content.
    ///
    /// The node is aligned to the top-left corner of the view box;
    /// see [`set_align`](ImageNode::set_align).
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            align: Vec2::ZERO,
        }
    }

    /// Pins the node at a fractional position within the view box:
    /// `(0, 0)` is the top-left corner, `(0.5, 0.5)` the center,
    /// `(1, 1)` the bottom-right corner.
    pub fn set_align(&mut self, align: Vec2) -> &mut Self {
        self.align = align;
        self
    }

    pub fn align(&self) -> Vec2 {
        self.align
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Mutable access to the node's pixel content. Drawing here and
    /// letting the stage recomposite is how node content is replaced.
    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }
}
