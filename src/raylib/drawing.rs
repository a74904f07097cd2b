//! Drawing-mode forwarding.

use std::ffi::c_void;

use super::Raylib;
use crate::raw::{self, Camera2D, Camera3D};
use crate::BindingError;

impl Raylib {
    /// Set background color, framebuffer clear color.
    pub fn clear_background(&self, color: u32) -> Result<(), BindingError> {
        let f = self.api.clear_background()?;
        unsafe { f(color) };
        Ok(())
    }

    /// Set up the canvas to start drawing.
    pub fn begin_drawing(&self) -> Result<(), BindingError> {
        let f = self.api.begin_drawing()?;
        unsafe { f() };
        Ok(())
    }

    /// End canvas drawing and swap buffers.
    pub fn end_drawing(&self) -> Result<(), BindingError> {
        let f = self.api.end_drawing()?;
        unsafe { f() };
        Ok(())
    }

    /// Begin 2D mode with a custom camera read from `camera`.
    ///
    /// # Safety
    ///
    /// `camera` must be valid for a `Camera2D` read.
    pub unsafe fn begin_mode2d(&self, camera: *const c_void) -> Result<(), BindingError> {
        let f = self.api.begin_mode2d()?;
        f(raw::read::<Camera2D>(camera));
        Ok(())
    }

    /// End 2D mode with the custom camera.
    pub fn end_mode2d(&self) -> Result<(), BindingError> {
        let f = self.api.end_mode2d()?;
        unsafe { f() };
        Ok(())
    }

    /// Begin 3D mode with a custom camera read from `camera`.
    ///
    /// # Safety
    ///
    /// `camera` must be valid for a `Camera3D` read.
    pub unsafe fn begin_mode3d(&self, camera: *const c_void) -> Result<(), BindingError> {
        let f = self.api.begin_mode3d()?;
        f(raw::read::<Camera3D>(camera));
        Ok(())
    }

    /// End 3D mode and return to default 2D orthographic mode.
    pub fn end_mode3d(&self) -> Result<(), BindingError> {
        let f = self.api.end_mode3d()?;
        unsafe { f() };
        Ok(())
    }

    /// Begin scissor mode, defining the screen area for following drawing.
    pub fn begin_scissor_mode(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), BindingError> {
        let f = self.api.begin_scissor_mode()?;
        unsafe { f(x, y, width, height) };
        Ok(())
    }

    /// End scissor mode.
    pub fn end_scissor_mode(&self) -> Result<(), BindingError> {
        let f = self.api.end_scissor_mode()?;
        unsafe { f() };
        Ok(())
    }

    /// Apply alpha to a packed color, 0.0 to 1.0.
    pub fn fade(&self, color: u32, alpha: f32) -> Result<u32, BindingError> {
        let f = self.api.fade()?;
        Ok(unsafe { f(color, alpha) })
    }

    /// Replace the alpha of a packed color, 0.0 to 1.0.
    pub fn color_alpha(&self, color: u32, alpha: f32) -> Result<u32, BindingError> {
        let f = self.api.color_alpha()?;
        Ok(unsafe { f(color, alpha) })
    }

    /// Get a packed color from a hex value.
    pub fn get_color(&self, hex_value: u32) -> Result<u32, BindingError> {
        let f = self.api.get_color()?;
        Ok(unsafe { f(hex_value) })
    }
}
