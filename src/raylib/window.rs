//! Window, monitor and timing forwarding.

use std::ffi::c_void;
use std::os::raw::c_char;

use super::Raylib;
use crate::host::{self, HostBool};
use crate::raw;
use crate::BindingError;

impl Raylib {
    /// Initialize window and OpenGL context.
    ///
    /// # Safety
    ///
    /// `title` must point to a NUL-terminated string.
    pub unsafe fn init_window(
        &self,
        width: i32,
        height: i32,
        title: *const c_char,
    ) -> Result<(), BindingError> {
        let f = self.api.init_window()?;
        f(width, height, title);
        Ok(())
    }

    /// Check if the application should close.
    pub fn window_should_close(&self) -> Result<HostBool, BindingError> {
        let f = self.api.window_should_close()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Close window and unload OpenGL context.
    pub fn close_window(&self) -> Result<(), BindingError> {
        let f = self.api.close_window()?;
        unsafe { f() };
        Ok(())
    }

    /// Check if the window has been initialized successfully.
    pub fn is_window_ready(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_window_ready()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Check if the window is currently fullscreen.
    pub fn is_window_fullscreen(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_window_fullscreen()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Check if the window is currently hidden.
    pub fn is_window_hidden(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_window_hidden()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Check if the window is currently minimized.
    pub fn is_window_minimized(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_window_minimized()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Check if the window is currently maximized.
    pub fn is_window_maximized(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_window_maximized()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Check if the window is currently focused.
    pub fn is_window_focused(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_window_focused()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Check if the window has been resized since the last frame.
    pub fn is_window_resized(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_window_resized()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Toggle window state: fullscreen/windowed.
    pub fn toggle_fullscreen(&self) -> Result<(), BindingError> {
        let f = self.api.toggle_fullscreen()?;
        unsafe { f() };
        Ok(())
    }

    /// Maximize the window, if resizable.
    pub fn maximize_window(&self) -> Result<(), BindingError> {
        let f = self.api.maximize_window()?;
        unsafe { f() };
        Ok(())
    }

    /// Minimize the window, if resizable.
    pub fn minimize_window(&self) -> Result<(), BindingError> {
        let f = self.api.minimize_window()?;
        unsafe { f() };
        Ok(())
    }

    /// Restore the window from minimized/maximized state.
    pub fn restore_window(&self) -> Result<(), BindingError> {
        let f = self.api.restore_window()?;
        unsafe { f() };
        Ok(())
    }

    /// Set title for the window.
    ///
    /// # Safety
    ///
    /// `title` must point to a NUL-terminated string.
    pub unsafe fn set_window_title(&self, title: *const c_char) -> Result<(), BindingError> {
        let f = self.api.set_window_title()?;
        f(title);
        Ok(())
    }

    /// Set window position on screen.
    pub fn set_window_position(&self, x: i32, y: i32) -> Result<(), BindingError> {
        let f = self.api.set_window_position()?;
        unsafe { f(x, y) };
        Ok(())
    }

    /// Set window minimum dimensions.
    pub fn set_window_min_size(&self, width: i32, height: i32) -> Result<(), BindingError> {
        let f = self.api.set_window_min_size()?;
        unsafe { f(width, height) };
        Ok(())
    }

    /// Set window dimensions.
    pub fn set_window_size(&self, width: i32, height: i32) -> Result<(), BindingError> {
        let f = self.api.set_window_size()?;
        unsafe { f(width, height) };
        Ok(())
    }

    /// Set window opacity, 0.0 to 1.0.
    pub fn set_window_opacity(&self, opacity: f32) -> Result<(), BindingError> {
        let f = self.api.set_window_opacity()?;
        unsafe { f(opacity) };
        Ok(())
    }

    /// Get current screen width.
    pub fn get_screen_width(&self) -> Result<i32, BindingError> {
        let f = self.api.get_screen_width()?;
        Ok(unsafe { f() })
    }

    /// Get current screen height.
    pub fn get_screen_height(&self) -> Result<i32, BindingError> {
        let f = self.api.get_screen_height()?;
        Ok(unsafe { f() })
    }

    /// Get number of connected monitors.
    pub fn get_monitor_count(&self) -> Result<i32, BindingError> {
        let f = self.api.get_monitor_count()?;
        Ok(unsafe { f() })
    }

    /// Get current monitor index.
    pub fn get_current_monitor(&self) -> Result<i32, BindingError> {
        let f = self.api.get_current_monitor()?;
        Ok(unsafe { f() })
    }

    /// Write the specified monitor's position into `out` as a Vector2.
    ///
    /// # Safety
    ///
    /// `out` must be valid for a `Vector2` write.
    pub unsafe fn get_monitor_position(
        &self,
        monitor: i32,
        out: *mut c_void,
    ) -> Result<(), BindingError> {
        let f = self.api.get_monitor_position()?;
        raw::write(out, f(monitor));
        Ok(())
    }

    /// Get the specified monitor's width.
    pub fn get_monitor_width(&self, monitor: i32) -> Result<i32, BindingError> {
        let f = self.api.get_monitor_width()?;
        Ok(unsafe { f(monitor) })
    }

    /// Get the specified monitor's height.
    pub fn get_monitor_height(&self, monitor: i32) -> Result<i32, BindingError> {
        let f = self.api.get_monitor_height()?;
        Ok(unsafe { f(monitor) })
    }

    /// Get the specified monitor's refresh rate.
    pub fn get_monitor_refresh_rate(&self, monitor: i32) -> Result<i32, BindingError> {
        let f = self.api.get_monitor_refresh_rate()?;
        Ok(unsafe { f(monitor) })
    }

    /// Write the window position into `out` as a Vector2.
    ///
    /// # Safety
    ///
    /// `out` must be valid for a `Vector2` write.
    pub unsafe fn get_window_position(&self, out: *mut c_void) -> Result<(), BindingError> {
        let f = self.api.get_window_position()?;
        raw::write(out, f());
        Ok(())
    }

    /// Write the window DPI scale factor into `out` as a Vector2.
    ///
    /// # Safety
    ///
    /// `out` must be valid for a `Vector2` write.
    pub unsafe fn get_window_scale_dpi(&self, out: *mut c_void) -> Result<(), BindingError> {
        let f = self.api.get_window_scale_dpi()?;
        raw::write(out, f());
        Ok(())
    }

    /// Get the specified monitor's name as a native string pointer.
    pub fn get_monitor_name(&self, monitor: i32) -> Result<*const c_char, BindingError> {
        let f = self.api.get_monitor_name()?;
        Ok(unsafe { f(monitor) })
    }

    /// Set clipboard text content.
    ///
    /// # Safety
    ///
    /// `text` must point to a NUL-terminated string.
    pub unsafe fn set_clipboard_text(&self, text: *const c_char) -> Result<(), BindingError> {
        let f = self.api.set_clipboard_text()?;
        f(text);
        Ok(())
    }

    /// Get clipboard text content as a native string pointer.
    pub fn get_clipboard_text(&self) -> Result<*const c_char, BindingError> {
        let f = self.api.get_clipboard_text()?;
        Ok(unsafe { f() })
    }

    /// Set configuration flags before window creation.
    pub fn set_config_flags(&self, flags: u32) -> Result<(), BindingError> {
        let f = self.api.set_config_flags()?;
        unsafe { f(flags) };
        Ok(())
    }

    /// Set the native library's own log threshold.
    pub fn set_trace_log_level(&self, level: i32) -> Result<(), BindingError> {
        let f = self.api.set_trace_log_level()?;
        unsafe { f(level) };
        Ok(())
    }

    /// Take a screenshot of the current screen.
    ///
    /// # Safety
    ///
    /// `file_name` must point to a NUL-terminated string.
    pub unsafe fn take_screenshot(&self, file_name: *const c_char) -> Result<(), BindingError> {
        let f = self.api.take_screenshot()?;
        f(file_name);
        Ok(())
    }

    /// Set target FPS, maximum.
    pub fn set_target_fps(&self, fps: i32) -> Result<(), BindingError> {
        let f = self.api.set_target_fps()?;
        unsafe { f(fps) };
        Ok(())
    }

    /// Get current FPS.
    pub fn get_fps(&self) -> Result<i32, BindingError> {
        let f = self.api.get_fps()?;
        Ok(unsafe { f() })
    }

    /// Get time in seconds for the last frame drawn.
    pub fn get_frame_time(&self) -> Result<f32, BindingError> {
        let f = self.api.get_frame_time()?;
        Ok(unsafe { f() })
    }

    /// Get elapsed time in seconds since window creation.
    pub fn get_time(&self) -> Result<f64, BindingError> {
        let f = self.api.get_time()?;
        Ok(unsafe { f() })
    }

    /// Get a random value between min and max, both included.
    pub fn get_random_value(&self, min: i32, max: i32) -> Result<i32, BindingError> {
        let f = self.api.get_random_value()?;
        Ok(unsafe { f(min, max) })
    }

    /// Set the seed for the random number generator.
    pub fn set_random_seed(&self, seed: u32) -> Result<(), BindingError> {
        let f = self.api.set_random_seed()?;
        unsafe { f(seed) };
        Ok(())
    }
}
