use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::game::{Action, Direction};
use crate::render::{PixelRect, ScreenMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    GameAction(Action),
    Quit,
    None,
}

pub struct InputHandler {
    toggle: PixelRect,
}

impl InputHandler {
    /// `toggle` is the on-screen rectangle of the autopilot switch
    pub fn new(toggle: PixelRect) -> Self {
        Self { toggle }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Self::turn(Direction::Up),
            KeyCode::Down => Self::turn(Direction::Down),
            KeyCode::Left => Self::turn(Direction::Left),
            KeyCode::Right => Self::turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Self::turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Self::turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Self::turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Self::turn(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,

            _ => InputAction::None,
        }
    }

    /// Any button press on the switch flips the autopilot
    pub fn handle_mouse_event(&self, mouse: MouseEvent, screen: &ScreenMap) -> InputAction {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return InputAction::None;
        }

        match screen.pixels_at(mouse.column, mouse.row) {
            Some(pixels) if pixels.iter().any(|p| self.toggle.contains(*p)) => {
                InputAction::GameAction(Action::ToggleAutopilot)
            }
            _ => InputAction::None,
        }
    }

    fn turn(direction: Direction) -> InputAction {
        InputAction::GameAction(Action::Turn(direction))
    }
}
