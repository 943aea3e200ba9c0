//! Look and zoom input axes
//!
//! Rigs read a [`LookInput`] each frame. [`InputHandler`] builds one from
//! raw winit mouse events for hosts that don't have their own axis system.

use glam::Vec2;
use winit::event::MouseScrollDelta;

/// Analog axes sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookInput {
    /// Horizontal look axis (positive = turn right)
    pub look_x: f32,
    /// Vertical look axis (positive = look up)
    pub look_y: f32,
    /// Zoom scroll axis (positive = zoom in)
    pub zoom_scroll: f32,
}

impl LookInput {
    /// Create an input sample from explicit axis values
    pub fn new(look_x: f32, look_y: f32, zoom_scroll: f32) -> Self {
        Self {
            look_x,
            look_y,
            zoom_scroll,
        }
    }

    /// Look axes as a vector
    pub fn look(&self) -> Vec2 {
        Vec2::new(self.look_x, self.look_y)
    }

    /// Clear the accumulated axes (call at end of frame)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Accumulates raw mouse events into look/zoom axes
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Axes accumulated this frame
    pub state: LookInput,
    /// Axis units per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Axis units per scroll line
    pub scroll_sensitivity: f32,
    /// Invert Y axis
    pub invert_y: bool,
    /// Whether the cursor is captured; motion is ignored otherwise
    pub cursor_captured: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler with default sensitivities
    pub fn new() -> Self {
        Self {
            state: LookInput::default(),
            mouse_sensitivity: 0.1,
            scroll_sensitivity: 0.1,
            invert_y: false,
            cursor_captured: true,
        }
    }

    /// Handle raw mouse movement (winit reports +y downward)
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        if !self.cursor_captured {
            return;
        }
        let y_mult = if self.invert_y { 1.0 } else { -1.0 };
        self.state.look_x += delta.0 as f32 * self.mouse_sensitivity;
        self.state.look_y += delta.1 as f32 * self.mouse_sensitivity * y_mult;
    }

    /// Handle scroll wheel
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
        };
        self.state.zoom_scroll += lines * self.scroll_sensitivity;
    }

    /// Take this frame's axes and reset the accumulator
    pub fn end_frame(&mut self) -> LookInput {
        let sample = self.state;
        self.state.clear();
        sample
    }

    /// Set cursor capture state
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
    }
}
