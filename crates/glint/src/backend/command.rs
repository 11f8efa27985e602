use std::slice;

use glam::Affine2;

use crate::{path::PathSegment, types::StrokeSettings, Color, FillRule};

/// A low-level command given to the backend renderer.
///
/// A draw operation involves a stream of `Command`s.
///
/// A command stream is designed to be _flattened_. Each `Command`
/// should represent one atomic unit, and it should not contain
/// heap-allocated vectors or other dynamically-sized data.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    /// Sets the current paint to a solid fill.
    UseSolidPaint(Color),

    /// Sets the transform applied to rendered paths.
    SetObjectTransform(Affine2),

    /// Clears the currently staged path
    ClearPath,
    /// Pushes a segment onto the current path
    PushPathSegment(PathSegment),

    // Draw operations
    /// Fills the current path using the current configuration.
    FillPath {
        fill_rule: FillRule,
    },
    /// Strokes the current path using the current configuration.
    StrokePath {
        stroke_settings: StrokeSettings,
    },
}

/// An immutable stream of `Command`s.
#[derive(Debug, Clone)]
pub struct CommandStream<'a> {
    commands: slice::Iter<'a, Command>,
}

impl<'a> Iterator for CommandStream<'a> {
    type Item = Command;

    fn next(&mut self) -> Option<Self::Item> {
        self.commands.next().copied()
    }
}

/// A buffer of `Command`s.
#[derive(Debug)]
pub(crate) struct CommandBuffer {
    commands: Vec<Command>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn to_stream(&self) -> CommandStream {
        CommandStream {
            commands: self.commands.iter(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear()
    }
}
