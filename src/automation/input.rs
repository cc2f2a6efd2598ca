//! Mouse and keyboard input simulation.
//!
//! Uses SendInput, which simulates hardware-level input and therefore moves
//! the real cursor. Before every action the cursor position is checked
//! against the screen corners: parking the pointer in a corner is how the
//! user stops a run.

use std::time::Duration;

use crate::automation::keys::virtual_key_code;
use crate::error::ActuatorError;

/// Focuses the game window and sends keystrokes to it.
pub trait Actuator {
    /// Fails with `ActuatorError::FailSafe` if the pointer sits in a screen corner.
    fn check_failsafe(&mut self) -> Result<(), ActuatorError>;

    /// Moves the pointer to a screen point, clicks, and waits for focus to settle.
    fn focus_at(&mut self, x: i32, y: i32) -> Result<(), ActuatorError>;

    /// Presses and releases a single named key.
    fn press_key(&mut self, key: &str) -> Result<(), ActuatorError>;
}

/// Returns true if `point` is one of the four corners of a `width` x `height` screen.
pub fn is_failsafe_point(point: (i32, i32), screen: (i32, i32)) -> bool {
    let (x, y) = point;
    let (width, height) = screen;
    let at_x_edge = x == 0 || x == width - 1;
    let at_y_edge = y == 0 || y == height - 1;
    at_x_edge && at_y_edge
}

/// Actuator driving the real desktop.
pub struct DesktopActuator {
    settle_delay: Duration,
}

impl DesktopActuator {
    pub fn new(settle_delay: Duration) -> Self {
        Self { settle_delay }
    }
}

impl Actuator for DesktopActuator {
    fn check_failsafe(&mut self) -> Result<(), ActuatorError> {
        let position = platform::cursor_position()?;
        let screen = platform::screen_size()?;
        if is_failsafe_point(position, screen) {
            return Err(ActuatorError::FailSafe);
        }
        Ok(())
    }

    fn focus_at(&mut self, x: i32, y: i32) -> Result<(), ActuatorError> {
        self.check_failsafe()?;
        platform::move_and_click(x, y)?;
        // Short pause to allow focus to change
        std::thread::sleep(self.settle_delay);
        Ok(())
    }

    fn press_key(&mut self, key: &str) -> Result<(), ActuatorError> {
        self.check_failsafe()?;
        let vk = virtual_key_code(key).ok_or_else(|| ActuatorError::UnknownKey(key.to_string()))?;
        platform::tap_key(vk)?;
        Ok(())
    }
}

#[cfg(windows)]
mod platform {
    use anyhow::{anyhow, Result};
    use std::time::Duration;

    use windows::Win32::Foundation::POINT;
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
        KEYEVENTF_KEYUP, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
        MOUSEEVENTF_MOVE, MOUSE_EVENT_FLAGS, MOUSEINPUT, VIRTUAL_KEY,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        GetCursorPos, GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN,
    };

    /// Gets the current cursor position in screen coordinates.
    pub fn cursor_position() -> Result<(i32, i32)> {
        let mut pt = POINT::default();
        unsafe {
            GetCursorPos(&mut pt)?;
        }
        Ok((pt.x, pt.y))
    }

    /// Gets the primary screen size in pixels.
    pub fn screen_size() -> Result<(i32, i32)> {
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        if width <= 0 || height <= 0 {
            return Err(anyhow!("GetSystemMetrics returned {}x{}", width, height));
        }
        Ok((width, height))
    }

    /// Moves the cursor to a screen point and left-clicks there.
    pub fn move_and_click(x: i32, y: i32) -> Result<()> {
        let (screen_width, screen_height) = screen_size()?;

        // Normalize to 0-65535 range (required by MOUSEEVENTF_ABSOLUTE)
        let norm_x = ((x as i64 * 65535) / screen_width as i64) as i32;
        let norm_y = ((y as i64 * 65535) / screen_height as i64) as i32;

        send(&[mouse_input(norm_x, norm_y, MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE)])?;
        std::thread::sleep(Duration::from_millis(50));

        send(&[mouse_input(
            norm_x,
            norm_y,
            MOUSEEVENTF_LEFTDOWN | MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_MOVE,
        )])?;
        std::thread::sleep(Duration::from_millis(50));

        send(&[mouse_input(
            norm_x,
            norm_y,
            MOUSEEVENTF_LEFTUP | MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_MOVE,
        )])
    }

    /// Presses and releases a virtual key.
    pub fn tap_key(vk: u16) -> Result<()> {
        send(&[
            key_input(vk, KEYBD_EVENT_FLAGS(0)),
            key_input(vk, KEYEVENTF_KEYUP),
        ])
    }

    fn mouse_input(dx: i32, dy: i32, flags: MOUSE_EVENT_FLAGS) -> INPUT {
        INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    dwFlags: flags,
                    ..Default::default()
                },
            },
        }
    }

    fn key_input(vk: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
        INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(vk),
                    dwFlags: flags,
                    ..Default::default()
                },
            },
        }
    }

    fn send(inputs: &[INPUT]) -> Result<()> {
        let sent = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            return Err(anyhow!(
                "SendInput sent {} of {} inputs (blocked by another thread or UIPI?)",
                sent,
                inputs.len()
            ));
        }
        Ok(())
    }
}

#[cfg(not(windows))]
mod platform {
    use anyhow::{anyhow, Result};

    pub fn cursor_position() -> Result<(i32, i32)> {
        Err(anyhow!("Reading the pointer position is not supported on this platform"))
    }

    pub fn screen_size() -> Result<(i32, i32)> {
        Err(anyhow!("Reading the screen size is not supported on this platform"))
    }

    pub fn move_and_click(x: i32, y: i32) -> Result<()> {
        Err(anyhow!("Clicking at ({}, {}) is not supported on this platform", x, y))
    }

    pub fn tap_key(vk: u16) -> Result<()> {
        Err(anyhow!("Sending key 0x{:02X} is not supported on this platform", vk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failsafe_corners() {
        let screen = (1920, 1080);
        assert!(is_failsafe_point((0, 0), screen));
        assert!(is_failsafe_point((1919, 0), screen));
        assert!(is_failsafe_point((0, 1079), screen));
        assert!(is_failsafe_point((1919, 1079), screen));
    }

    #[test]
    fn test_failsafe_not_triggered_elsewhere() {
        let screen = (1920, 1080);
        assert!(!is_failsafe_point((0, 500), screen));
        assert!(!is_failsafe_point((960, 0), screen));
        assert!(!is_failsafe_point((12, 22), screen));
        assert!(!is_failsafe_point((1920, 1080), screen));
    }
}
