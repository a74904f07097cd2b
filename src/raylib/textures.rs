//! Texture forwarding.
//!
//! Texture is a composite the host cannot hold directly; it travels as a
//! buffer the host sizes to the native layout.

use std::ffi::c_void;
use std::os::raw::c_char;

use super::Raylib;
use crate::host::{self, HostBool};
use crate::raw::{self, Texture, Vector2};
use crate::BindingError;

impl Raylib {
    /// Load a texture from file into GPU memory and write it into `out`.
    ///
    /// # Safety
    ///
    /// `file_name` must point to a NUL-terminated string and `out` must
    /// be valid for a `Texture` write.
    pub unsafe fn load_texture(
        &self,
        file_name: *const c_char,
        out: *mut c_void,
    ) -> Result<(), BindingError> {
        let f = self.api.load_texture()?;
        raw::write(out, f(file_name));
        Ok(())
    }

    /// Check if a texture buffer holds a ready texture.
    ///
    /// # Safety
    ///
    /// `texture` must be valid for a `Texture` read.
    pub unsafe fn is_texture_ready(&self, texture: *const c_void) -> Result<HostBool, BindingError> {
        let f = self.api.is_texture_ready()?;
        Ok(host::to_host_bool(f(raw::read::<Texture>(texture))))
    }

    /// Unload a texture from GPU memory.
    ///
    /// # Safety
    ///
    /// `texture` must be valid for a `Texture` read.
    pub unsafe fn unload_texture(&self, texture: *const c_void) -> Result<(), BindingError> {
        let f = self.api.unload_texture()?;
        f(raw::read::<Texture>(texture));
        Ok(())
    }

    /// Draw a texture.
    ///
    /// # Safety
    ///
    /// `texture` must be valid for a `Texture` read.
    pub unsafe fn draw_texture(
        &self,
        texture: *const c_void,
        x: i32,
        y: i32,
        tint: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_texture()?;
        f(raw::read::<Texture>(texture), x, y, tint);
        Ok(())
    }

    /// Draw a texture at a Vector2 position.
    ///
    /// # Safety
    ///
    /// `texture` must be valid for a `Texture` read and `position` for a
    /// `Vector2` read.
    pub unsafe fn draw_texture_v(
        &self,
        texture: *const c_void,
        position: *const c_void,
        tint: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_texture_v()?;
        f(
            raw::read::<Texture>(texture),
            raw::read::<Vector2>(position),
            tint,
        );
        Ok(())
    }

    /// Draw a texture with rotation and scale.
    ///
    /// # Safety
    ///
    /// `texture` must be valid for a `Texture` read and `position` for a
    /// `Vector2` read.
    pub unsafe fn draw_texture_ex(
        &self,
        texture: *const c_void,
        position: *const c_void,
        rotation: f32,
        scale: f32,
        tint: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_texture_ex()?;
        f(
            raw::read::<Texture>(texture),
            raw::read::<Vector2>(position),
            rotation,
            scale,
            tint,
        );
        Ok(())
    }
}
