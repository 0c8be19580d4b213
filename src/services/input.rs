//! Input events and the dispatcher trait that consumes them.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub pressed: bool,
    pub position: Vector2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseMotionEvent {
    pub position: Vector2,
    pub relative: Vector2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Other(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
    /// Auto-repeat from a held key
    pub echo: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    MouseButton(MouseButtonEvent),
    MouseMotion(MouseMotionEvent),
    Key(KeyEvent),
}

/// Receives input events from the host's event loop.
///
/// Implementors supply the specific handlers; [`handle_input`](Self::handle_input)
/// routes a generic event to them. Left and right button events are
/// delivered for both press and release, middle clicks are dropped, and the
/// space handler fires only on a fresh (non-repeat) press.
pub trait InputManager {
    fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::MouseButton(button) => match button.button {
                MouseButton::Left => self.handle_left_click(button),
                MouseButton::Right => self.handle_right_click(button),
                MouseButton::Middle => {}
            },
            InputEvent::MouseMotion(motion) => self.handle_mouse_motion(motion),
            InputEvent::Key(key) if key.key == Key::Space && key.pressed && !key.echo => {
                self.handle_space_press()
            }
            InputEvent::Key(_) => {}
        }
    }

    fn handle_mouse_motion(&mut self, motion: &MouseMotionEvent);

    fn handle_left_click(&mut self, event: &MouseButtonEvent);

    fn handle_right_click(&mut self, event: &MouseButtonEvent);

    fn handle_space_press(&mut self);
}
