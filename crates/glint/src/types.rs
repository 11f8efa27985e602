/// Determines how to fill paths with self-intersections.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl Default for FillRule {
    fn default() -> Self {
        FillRule::EvenOdd
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl Default for LineCap {
    fn default() -> Self {
        LineCap::Butt
    }
}

impl Default for LineJoin {
    fn default() -> Self {
        LineJoin::Miter
    }
}

/// How to stroke a path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeSettings {
    /// Width of the path to stroke
    pub width: f32,
    /// How to cap the ends of open segments
    pub line_cap: LineCap,
    /// How to join segments together
    pub line_join: LineJoin,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            width: 1.,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }
}
