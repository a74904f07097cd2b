//! Native struct layouts.
//!
//! `#[repr(C)]` mirrors of the raylib structs the forwarding surface
//! touches. Structured values cross the host boundary as raw memory that
//! both sides interpret with an identical layout, so every type here is
//! `Pod` and carries a compile-time size assertion. The helpers at the
//! bottom are the only way a host buffer becomes one of these types; a
//! layout mismatch fails loudly instead of corrupting memory.

use core::mem;
use std::ffi::c_void;

use bytemuck::{Pod, Zeroable};

use crate::BindingError;

/// Vector2, 2 components.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// Vector3, 3 components.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Vector4, 4 components.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Quaternion, 4 components (Vector4 alias).
pub type Quaternion = Vector4;

/// Matrix, 4x4 components, column major, OpenGL style, right-handed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Matrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

/// Rectangle, 4 components.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Color, 4 components, R8G8B8A8.
///
/// Identical in memory to the packed `u32` the forwarding surface uses
/// (r in the low byte).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_le_bytes();
        Self { r, g, b, a }
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        u32::from_le_bytes([color.r, color.g, color.b, color.a])
    }
}

/// Image, pixel data stored in CPU memory.
///
/// The data pointer is carried as a pointer-sized opaque handle; the
/// binding never follows it, only the native side does.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Image {
    pub data: usize,
    pub width: i32,
    pub height: i32,
    pub mipmaps: i32,
    pub format: i32,
}

/// Camera2D, defines position/orientation in 2d space.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Camera2D {
    pub offset: Vector2,
    pub target: Vector2,
    pub rotation: f32,
    pub zoom: f32,
}

/// Camera3D, defines position/orientation in 3d space.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Camera3D {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy: f32,
    pub projection: i32,
}

/// Texture, GPU-resident pixel data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Texture {
    pub id: u32,
    pub width: i32,
    pub height: i32,
    pub mipmaps: i32,
    pub format: i32,
}

/// Texture2D, same as Texture.
pub type Texture2D = Texture;

/// RenderTexture, fbo for texture rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct RenderTexture {
    pub id: u32,
    pub texture: Texture,
    pub depth: Texture,
}

/// RenderTexture2D, same as RenderTexture.
pub type RenderTexture2D = RenderTexture;

/// NPatchInfo, n-patch layout info.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct NPatchInfo {
    pub source: Rectangle,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub layout: i32,
}

// Layout pins: the native side assumes exactly these sizes; a drifted
// field breaks the build, not the running host.
const _: () = assert!(mem::size_of::<Vector2>() == 8);
const _: () = assert!(mem::size_of::<Vector3>() == 12);
const _: () = assert!(mem::size_of::<Vector4>() == 16);
const _: () = assert!(mem::size_of::<Matrix>() == 64);
const _: () = assert!(mem::size_of::<Rectangle>() == 16);
const _: () = assert!(mem::size_of::<Color>() == 4);
const _: () = assert!(mem::size_of::<Image>() == mem::size_of::<usize>() + 16);
const _: () = assert!(mem::size_of::<Camera2D>() == 24);
const _: () = assert!(mem::size_of::<Camera3D>() == 44);
const _: () = assert!(mem::size_of::<Texture>() == 20);
const _: () = assert!(mem::size_of::<RenderTexture>() == 44);
const _: () = assert!(mem::size_of::<NPatchInfo>() == 36);

/// Read a native struct out of a host buffer handle.
///
/// The host cannot express these types; it hands over a pointer to a
/// byte region it sized itself. Unaligned reads are expected (BASIC
/// string buffers carry no alignment guarantee).
///
/// # Safety
///
/// `ptr` must be non-null and valid for `size_of::<T>()` bytes of reads.
#[inline]
pub unsafe fn read<T: Pod>(ptr: *const c_void) -> T {
    debug_assert!(!ptr.is_null());
    core::ptr::read_unaligned(ptr.cast::<T>())
}

/// Write a native struct into a host buffer handle - the by-reference
/// composite-return convention: the host cannot receive large composite
/// return values directly, so results land in caller-supplied memory.
///
/// # Safety
///
/// `ptr` must be non-null and valid for `size_of::<T>()` bytes of writes.
#[inline]
pub unsafe fn write<T: Pod>(ptr: *mut c_void, value: T) {
    debug_assert!(!ptr.is_null());
    core::ptr::write_unaligned(ptr.cast::<T>(), value);
}

/// Checked unpack from an exactly-sized byte buffer.
pub fn unpack<T: Pod>(bytes: &[u8]) -> Result<T, BindingError> {
    if bytes.len() != mem::size_of::<T>() {
        return Err(BindingError::BufferMismatch {
            type_name: core::any::type_name::<T>(),
            expected: mem::size_of::<T>(),
            got: bytes.len(),
        });
    }
    Ok(bytemuck::pod_read_unaligned(bytes))
}

/// Borrow a native struct as its raw bytes.
pub fn pack<T: Pod>(value: &T) -> &[u8] {
    bytemuck::bytes_of(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trips_byte_for_byte() {
        let v = Vector2 { x: 1.5, y: -2.25 };
        let bytes = pack(&v).to_vec();
        assert_eq!(bytes.len(), 8);
        assert_eq!(unpack::<Vector2>(&bytes).unwrap(), v);
    }

    #[test]
    fn unpack_rejects_misized_buffers() {
        let err = unpack::<Vector2>(&[0u8; 7]).unwrap_err();
        assert_eq!(
            err,
            BindingError::BufferMismatch {
                type_name: core::any::type_name::<Vector2>(),
                expected: 8,
                got: 7,
            }
        );
    }

    #[test]
    fn raw_write_matches_pack_even_unaligned() {
        let v = Vector2 { x: 3.0, y: 4.0 };

        // Offset by one byte so the destination is deliberately unaligned.
        let mut buffer = [0u8; 9];
        unsafe { write(buffer[1..].as_mut_ptr().cast(), v) };
        assert_eq!(&buffer[1..], pack(&v));

        let back: Vector2 = unsafe { read(buffer[1..].as_ptr().cast()) };
        assert_eq!(back, v);
    }

    #[test]
    fn color_matches_the_packed_u32_layout() {
        let color = Color {
            r: 0x11,
            g: 0x22,
            b: 0x33,
            a: 0x44,
        };
        let packed: u32 = color.into();
        assert_eq!(pack(&color), &packed.to_le_bytes());
        assert_eq!(Color::from(packed), color);
    }

    #[test]
    fn composite_layouts_hold() {
        assert_eq!(mem::size_of::<Camera3D>(), 44);
        assert_eq!(mem::size_of::<RenderTexture>(), 44);
        assert_eq!(mem::align_of::<Matrix>(), 4);
    }
}
