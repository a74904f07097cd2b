//! Keyboard and mouse forwarding.

use std::ffi::c_void;

use super::Raylib;
use crate::host::{self, HostBool};
use crate::raw;
use crate::BindingError;

impl Raylib {
    /// Check if a key has been pressed once.
    pub fn is_key_pressed(&self, key: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_key_pressed()?;
        Ok(host::to_host_bool(unsafe { f(key) }))
    }

    /// Check if a key is being held down.
    pub fn is_key_down(&self, key: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_key_down()?;
        Ok(host::to_host_bool(unsafe { f(key) }))
    }

    /// Check if a key has been released once.
    pub fn is_key_released(&self, key: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_key_released()?;
        Ok(host::to_host_bool(unsafe { f(key) }))
    }

    /// Check if a key is not being pressed.
    pub fn is_key_up(&self, key: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_key_up()?;
        Ok(host::to_host_bool(unsafe { f(key) }))
    }

    /// Get the next queued key press, 0 when the queue is empty.
    pub fn get_key_pressed(&self) -> Result<i32, BindingError> {
        let f = self.api.get_key_pressed()?;
        Ok(unsafe { f() })
    }

    /// Get the next queued character, 0 when the queue is empty.
    pub fn get_char_pressed(&self) -> Result<i32, BindingError> {
        let f = self.api.get_char_pressed()?;
        Ok(unsafe { f() })
    }

    /// Set a custom key to exit the program, default ESC.
    pub fn set_exit_key(&self, key: i32) -> Result<(), BindingError> {
        let f = self.api.set_exit_key()?;
        unsafe { f(key) };
        Ok(())
    }

    /// Check if a mouse button has been pressed once.
    pub fn is_mouse_button_pressed(&self, button: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_mouse_button_pressed()?;
        Ok(host::to_host_bool(unsafe { f(button) }))
    }

    /// Check if a mouse button is being held down.
    pub fn is_mouse_button_down(&self, button: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_mouse_button_down()?;
        Ok(host::to_host_bool(unsafe { f(button) }))
    }

    /// Check if a mouse button has been released once.
    pub fn is_mouse_button_released(&self, button: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_mouse_button_released()?;
        Ok(host::to_host_bool(unsafe { f(button) }))
    }

    /// Check if a mouse button is not being pressed.
    pub fn is_mouse_button_up(&self, button: i32) -> Result<HostBool, BindingError> {
        let f = self.api.is_mouse_button_up()?;
        Ok(host::to_host_bool(unsafe { f(button) }))
    }

    /// Get mouse position X.
    pub fn get_mouse_x(&self) -> Result<i32, BindingError> {
        let f = self.api.get_mouse_x()?;
        Ok(unsafe { f() })
    }

    /// Get mouse position Y.
    pub fn get_mouse_y(&self) -> Result<i32, BindingError> {
        let f = self.api.get_mouse_y()?;
        Ok(unsafe { f() })
    }

    /// Write the mouse position into `out` as a Vector2.
    ///
    /// # Safety
    ///
    /// `out` must be valid for a `Vector2` write.
    pub unsafe fn get_mouse_position(&self, out: *mut c_void) -> Result<(), BindingError> {
        let f = self.api.get_mouse_position()?;
        raw::write(out, f());
        Ok(())
    }

    /// Write the mouse movement since the last frame into `out` as a
    /// Vector2.
    ///
    /// # Safety
    ///
    /// `out` must be valid for a `Vector2` write.
    pub unsafe fn get_mouse_delta(&self, out: *mut c_void) -> Result<(), BindingError> {
        let f = self.api.get_mouse_delta()?;
        raw::write(out, f());
        Ok(())
    }

    /// Set mouse position.
    pub fn set_mouse_position(&self, x: i32, y: i32) -> Result<(), BindingError> {
        let f = self.api.set_mouse_position()?;
        unsafe { f(x, y) };
        Ok(())
    }

    /// Get mouse wheel movement for the last frame.
    pub fn get_mouse_wheel_move(&self) -> Result<f32, BindingError> {
        let f = self.api.get_mouse_wheel_move()?;
        Ok(unsafe { f() })
    }
}
