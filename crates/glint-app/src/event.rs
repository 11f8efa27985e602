use glint::Vec2;
use winit::event::VirtualKeyCode;

/// An input event delivered to an [`Application`](crate::Application).
///
/// Subscriptions are implicit and permanent: every event of these
/// kinds reaching the window is delivered for the life of the process.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// A mouse button was pressed. `position` is in view box units.
    Click { position: Vec2 },
    /// A key was pressed.
    KeyDown(KeyEvent),
}

/// A key press, described by the logical key identity (when the
/// platform reports one) and the hardware scancode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyEvent {
    pub key: Option<VirtualKeyCode>,
    pub scancode: u32,
}
