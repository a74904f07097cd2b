//! Shape-drawing and collision forwarding.
//!
//! Vector2 and Rectangle arguments arrive as untyped host buffers and are
//! reinterpreted with the checked raw helpers before the native call.

use std::ffi::c_void;

use super::Raylib;
use crate::host::{self, HostBool};
use crate::raw::{self, Rectangle, Vector2};
use crate::BindingError;

impl Raylib {
    /// Draw a pixel.
    pub fn draw_pixel(&self, x: i32, y: i32, color: u32) -> Result<(), BindingError> {
        let f = self.api.draw_pixel()?;
        unsafe { f(x, y, color) };
        Ok(())
    }

    /// Draw a line.
    pub fn draw_line(
        &self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_line()?;
        unsafe { f(start_x, start_y, end_x, end_y, color) };
        Ok(())
    }

    /// Draw a line between two Vector2 buffers.
    ///
    /// # Safety
    ///
    /// `start` and `end` must be valid for `Vector2` reads.
    pub unsafe fn draw_line_v(
        &self,
        start: *const c_void,
        end: *const c_void,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_line_v()?;
        f(
            raw::read::<Vector2>(start),
            raw::read::<Vector2>(end),
            color,
        );
        Ok(())
    }

    /// Draw a filled circle.
    pub fn draw_circle(
        &self,
        center_x: i32,
        center_y: i32,
        radius: f32,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_circle()?;
        unsafe { f(center_x, center_y, radius, color) };
        Ok(())
    }

    /// Draw a filled circle at a Vector2 center.
    ///
    /// # Safety
    ///
    /// `center` must be valid for a `Vector2` read.
    pub unsafe fn draw_circle_v(
        &self,
        center: *const c_void,
        radius: f32,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_circle_v()?;
        f(raw::read::<Vector2>(center), radius, color);
        Ok(())
    }

    /// Draw a filled rectangle.
    pub fn draw_rectangle(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_rectangle()?;
        unsafe { f(x, y, width, height, color) };
        Ok(())
    }

    /// Draw a filled rectangle from a Rectangle buffer.
    ///
    /// # Safety
    ///
    /// `rec` must be valid for a `Rectangle` read.
    pub unsafe fn draw_rectangle_rec(
        &self,
        rec: *const c_void,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_rectangle_rec()?;
        f(raw::read::<Rectangle>(rec), color);
        Ok(())
    }

    /// Draw rectangle outline.
    pub fn draw_rectangle_lines(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_rectangle_lines()?;
        unsafe { f(x, y, width, height, color) };
        Ok(())
    }

    /// Draw rectangle outline with extended parameters.
    ///
    /// # Safety
    ///
    /// `rec` must be valid for a `Rectangle` read.
    pub unsafe fn draw_rectangle_lines_ex(
        &self,
        rec: *const c_void,
        line_thick: f32,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_rectangle_lines_ex()?;
        f(raw::read::<Rectangle>(rec), line_thick, color);
        Ok(())
    }

    /// Draw a filled triangle, vertices in counter-clockwise order.
    ///
    /// # Safety
    ///
    /// `v1`, `v2` and `v3` must be valid for `Vector2` reads.
    pub unsafe fn draw_triangle(
        &self,
        v1: *const c_void,
        v2: *const c_void,
        v3: *const c_void,
        color: u32,
    ) -> Result<(), BindingError> {
        let f = self.api.draw_triangle()?;
        f(
            raw::read::<Vector2>(v1),
            raw::read::<Vector2>(v2),
            raw::read::<Vector2>(v3),
            color,
        );
        Ok(())
    }

    /// Check collision between two Rectangle buffers.
    ///
    /// # Safety
    ///
    /// `rec1` and `rec2` must be valid for `Rectangle` reads.
    pub unsafe fn check_collision_recs(
        &self,
        rec1: *const c_void,
        rec2: *const c_void,
    ) -> Result<HostBool, BindingError> {
        let f = self.api.check_collision_recs()?;
        Ok(host::to_host_bool(f(
            raw::read::<Rectangle>(rec1),
            raw::read::<Rectangle>(rec2),
        )))
    }

    /// Check if a point lies inside a rectangle.
    ///
    /// # Safety
    ///
    /// `point` must be valid for a `Vector2` read and `rec` for a
    /// `Rectangle` read.
    pub unsafe fn check_collision_point_rec(
        &self,
        point: *const c_void,
        rec: *const c_void,
    ) -> Result<HostBool, BindingError> {
        let f = self.api.check_collision_point_rec()?;
        Ok(host::to_host_bool(f(
            raw::read::<Vector2>(point),
            raw::read::<Rectangle>(rec),
        )))
    }
}
