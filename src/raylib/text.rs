//! Text forwarding.

use std::os::raw::c_char;

use super::Raylib;
use crate::BindingError;

impl Raylib {
    /// Draw text using the default font.
    ///
    /// # Safety
    ///
    /// `text` must point to a NUL-terminated string.
    pub unsafe fn draw_text(
        &self,
        text: *const c_char,
        x: i32,
        y: i32,
        font_size: i32,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_text()?;
        f(text, x, y, font_size, color);
        Ok(())
    }

    /// Draw the current FPS.
    pub fn draw_fps(&self, x: i32, y: i32) -> Result<(), BindingError> {
        let f = self.api.draw_fps()?;
        unsafe { f(x, y) };
        Ok(())
    }

    /// Measure string width for the default font.
    ///
    /// # Safety
    ///
    /// `text` must point to a NUL-terminated string.
    pub unsafe fn measure_text(
        &self,
        text: *const c_char,
        font_size: i32,
    ) -> Result<i32, BindingError> {
        let f = self.api.measure_text()?;
        Ok(f(text, font_size))
    }

    /// Set vertical line spacing for multiline text.
    pub fn set_text_line_spacing(&self, spacing: i32) -> Result<(), BindingError> {
        let f = self.api.set_text_line_spacing()?;
        unsafe { f(spacing) };
        Ok(())
    }
}
