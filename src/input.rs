use crate::controller::{ClickOutcome, Simulation};
use winit::{
    dpi::{LogicalPosition, PhysicalPosition},
    event::{ElementState, MouseButton},
};

/// Last known cursor position in logical surface pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerState {
    pub cursor_pos: Option<LogicalPosition<f64>>,
}

pub fn handle_cursor_move(pointer: &mut PointerState, position: PhysicalPosition<f64>, scale_factor: f64) {
    // The controller works in logical pixels, independent of DPI
    pointer.cursor_pos = Some(position.to_logical(scale_factor));
}

pub fn handle_cursor_left(pointer: &mut PointerState) {
    pointer.cursor_pos = None;
}

/// Forward a left-button press at the current cursor position to the
/// controller. Releases, other buttons, and presses with no known cursor
/// position produce `None`.
pub fn handle_mouse_input(
    pointer: &PointerState,
    simulation: &mut Simulation,
    button: MouseButton,
    element_state: ElementState,
) -> Option<ClickOutcome> {
    if button != MouseButton::Left || element_state != ElementState::Pressed {
        return None;
    }
    let pos = pointer.cursor_pos?;
    if pos.x < 0.0 || pos.y < 0.0 {
        return Some(ClickOutcome::Ignored);
    }

    let outcome = simulation.click(pos.x as u32, pos.y as u32);
    log::debug!("click at ({:.0}, {:.0}): {:?}", pos.x, pos.y, outcome);
    Some(outcome)
}
