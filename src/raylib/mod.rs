//! raylib binding context.
//!
//! [`RaylibApi`] is the declarative symbol table for every raylib export
//! the forwarding surface uses; [`Raylib`] owns one resolved table plus
//! the library handle and carries the forwarding methods, grouped the way
//! the native API groups them (window, timing, drawing, input, shapes,
//! text, textures).
//!
//! A `Raylib` value only exists after every required symbol resolved, so
//! forwarding calls run against a complete table. The per-slot accessors
//! still guard the call with a readiness check, which costs one branch
//! and turns a call that outlives teardown into an error instead of a
//! crash.
//!
//! Forwarding methods that only move primitives are safe to call: a
//! successfully resolved library is trusted to honor its own ABI, the
//! same trust any binding extends. Methods that read or write
//! caller-supplied buffers are `unsafe fn`; the host vouches for those
//! pointers.

mod drawing;
mod input;
mod shapes;
mod text;
mod textures;
mod window;

use std::os::raw::{c_char, c_int, c_uint};

use crate::binding::{trace, BindingError, SharedLibrary};
use crate::raw::{Camera2D, Camera3D, Rectangle, Texture, Vector2};

crate::symbol_table! {
    /// Function-pointer slots for the raylib exports the binding forwards.
    ///
    /// Signatures mirror the native declarations exactly; colors cross as
    /// packed RGBA `u32` (identical in memory to the native Color).
    pub struct RaylibApi {
        // Window and monitor
        init_window: "InitWindow" => fn(c_int, c_int, *const c_char);
        window_should_close: "WindowShouldClose" => fn() -> bool;
        close_window: "CloseWindow" => fn();
        is_window_ready: "IsWindowReady" => fn() -> bool;
        is_window_fullscreen: "IsWindowFullscreen" => fn() -> bool;
        is_window_hidden: "IsWindowHidden" => fn() -> bool;
        is_window_minimized: "IsWindowMinimized" => fn() -> bool;
        is_window_maximized: "IsWindowMaximized" => fn() -> bool;
        is_window_focused: "IsWindowFocused" => fn() -> bool;
        is_window_resized: "IsWindowResized" => fn() -> bool;
        toggle_fullscreen: "ToggleFullscreen" => fn();
        maximize_window: "MaximizeWindow" => fn();
        minimize_window: "MinimizeWindow" => fn();
        restore_window: "RestoreWindow" => fn();
        set_window_title: "SetWindowTitle" => fn(*const c_char);
        set_window_position: "SetWindowPosition" => fn(c_int, c_int);
        set_window_min_size: "SetWindowMinSize" => fn(c_int, c_int);
        set_window_size: "SetWindowSize" => fn(c_int, c_int);
        set_window_opacity: "SetWindowOpacity" => fn(f32);
        get_screen_width: "GetScreenWidth" => fn() -> c_int;
        get_screen_height: "GetScreenHeight" => fn() -> c_int;
        get_monitor_count: "GetMonitorCount" => fn() -> c_int;
        get_current_monitor: "GetCurrentMonitor" => fn() -> c_int;
        get_monitor_position: "GetMonitorPosition" => fn(c_int) -> Vector2;
        get_monitor_width: "GetMonitorWidth" => fn(c_int) -> c_int;
        get_monitor_height: "GetMonitorHeight" => fn(c_int) -> c_int;
        get_monitor_refresh_rate: "GetMonitorRefreshRate" => fn(c_int) -> c_int;
        get_window_position: "GetWindowPosition" => fn() -> Vector2;
        get_window_scale_dpi: "GetWindowScaleDPI" => fn() -> Vector2;
        get_monitor_name: "GetMonitorName" => fn(c_int) -> *const c_char;
        set_clipboard_text: "SetClipboardText" => fn(*const c_char);
        get_clipboard_text: "GetClipboardText" => fn() -> *const c_char;
        set_config_flags: "SetConfigFlags" => fn(c_uint);
        set_trace_log_level: "SetTraceLogLevel" => fn(c_int);
        take_screenshot: "TakeScreenshot" => fn(*const c_char);

        // Timing and misc
        set_target_fps: "SetTargetFPS" => fn(c_int);
        get_fps: "GetFPS" => fn() -> c_int;
        get_frame_time: "GetFrameTime" => fn() -> f32;
        get_time: "GetTime" => fn() -> f64;
        get_random_value: "GetRandomValue" => fn(c_int, c_int) -> c_int;
        set_random_seed: "SetRandomSeed" => fn(c_uint);

        // Drawing modes
        clear_background: "ClearBackground" => fn(u32);
        begin_drawing: "BeginDrawing" => fn();
        end_drawing: "EndDrawing" => fn();
        begin_mode2d: "BeginMode2D" => fn(Camera2D);
        end_mode2d: "EndMode2D" => fn();
        begin_mode3d: "BeginMode3D" => fn(Camera3D);
        end_mode3d: "EndMode3D" => fn();
        begin_scissor_mode: "BeginScissorMode" => fn(c_int, c_int, c_int, c_int);
        end_scissor_mode: "EndScissorMode" => fn();

        // Input
        is_key_pressed: "IsKeyPressed" => fn(c_int) -> bool;
        is_key_down: "IsKeyDown" => fn(c_int) -> bool;
        is_key_released: "IsKeyReleased" => fn(c_int) -> bool;
        is_key_up: "IsKeyUp" => fn(c_int) -> bool;
        get_key_pressed: "GetKeyPressed" => fn() -> c_int;
        get_char_pressed: "GetCharPressed" => fn() -> c_int;
        set_exit_key: "SetExitKey" => fn(c_int);
        is_mouse_button_pressed: "IsMouseButtonPressed" => fn(c_int) -> bool;
        is_mouse_button_down: "IsMouseButtonDown" => fn(c_int) -> bool;
        is_mouse_button_released: "IsMouseButtonReleased" => fn(c_int) -> bool;
        is_mouse_button_up: "IsMouseButtonUp" => fn(c_int) -> bool;
        get_mouse_x: "GetMouseX" => fn() -> c_int;
        get_mouse_y: "GetMouseY" => fn() -> c_int;
        get_mouse_position: "GetMousePosition" => fn() -> Vector2;
        get_mouse_delta: "GetMouseDelta" => fn() -> Vector2;
        set_mouse_position: "SetMousePosition" => fn(c_int, c_int);
        get_mouse_wheel_move: "GetMouseWheelMove" => fn() -> f32;

        // Shapes
        draw_pixel: "DrawPixel" => fn(c_int, c_int, u32);
        draw_line: "DrawLine" => fn(c_int, c_int, c_int, c_int, u32);
        draw_line_v: "DrawLineV" => fn(Vector2, Vector2, u32);
        draw_circle: "DrawCircle" => fn(c_int, c_int, f32, u32);
        draw_circle_v: "DrawCircleV" => fn(Vector2, f32, u32);
        draw_rectangle: "DrawRectangle" => fn(c_int, c_int, c_int, c_int, u32);
        draw_rectangle_rec: "DrawRectangleRec" => fn(Rectangle, u32);
        draw_rectangle_lines: "DrawRectangleLines" => fn(c_int, c_int, c_int, c_int, u32);
        draw_rectangle_lines_ex: "DrawRectangleLinesEx" => fn(Rectangle, f32, u32);
        draw_triangle: "DrawTriangle" => fn(Vector2, Vector2, Vector2, u32);
        check_collision_recs: "CheckCollisionRecs" => fn(Rectangle, Rectangle) -> bool;
        check_collision_point_rec: "CheckCollisionPointRec" => fn(Vector2, Rectangle) -> bool;

        // Text
        draw_text: "DrawText" => fn(*const c_char, c_int, c_int, c_int, u32);
        draw_fps: "DrawFPS" => fn(c_int, c_int);
        measure_text: "MeasureText" => fn(*const c_char, c_int) -> c_int;
        set_text_line_spacing: "SetTextLineSpacing" => fn(c_int);

        // Textures
        load_texture: "LoadTexture" => fn(*const c_char) -> Texture;
        is_texture_ready: "IsTextureReady" => fn(Texture) -> bool;
        unload_texture: "UnloadTexture" => fn(Texture);
        draw_texture: "DrawTexture" => fn(Texture, c_int, c_int, u32);
        draw_texture_v: "DrawTextureV" => fn(Texture, Vector2, u32);
        draw_texture_ex: "DrawTextureEx" => fn(Texture, Vector2, f32, f32, u32);

        // Color helpers exported by the library itself
        fade: "Fade" => fn(u32, f32) -> u32;
        color_alpha: "ColorAlpha" => fn(u32, f32) -> u32;
        get_color: "GetColor" => fn(c_uint) -> u32;
    }
}

/// A live raylib binding.
///
/// Owns the loaded library and its resolved symbol table. Exists only
/// when every required export resolved; dropping the value clears the
/// slots and releases the library, in that order.
pub struct Raylib {
    api: RaylibApi,
    lib: SharedLibrary,
}

impl Raylib {
    /// Load the raylib shared library and resolve the full symbol table.
    ///
    /// Discovery follows the two-step search in
    /// [`SharedLibrary::open`]. On any failure the library is released
    /// and nothing is observable; process-level idempotence lives in the
    /// session layer.
    pub fn init() -> Result<Self, BindingError> {
        Self::init_named("raylib")
    }

    /// Run the same bootstrap against a differently named library build.
    pub fn init_named(name: &str) -> Result<Self, BindingError> {
        let lib = SharedLibrary::open(name)?;
        let api = RaylibApi::resolve(&lib)?;
        trace!(
            "raylib binding ready: {} symbols from {}",
            RaylibApi::SYMBOL_NAMES.len(),
            lib.path().display()
        );
        Ok(Self { api, lib })
    }

    /// The resolved symbol table.
    pub fn api(&self) -> &RaylibApi {
        &self.api
    }

    /// The loaded library.
    pub fn library(&self) -> &SharedLibrary {
        &self.lib
    }
}

impl Drop for Raylib {
    fn drop(&mut self) {
        // Slots first, then the handle: a call racing teardown sees an
        // unset slot, never a dangling pointer.
        self.api.clear();
        trace!("raylib binding closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_table_covers_the_forwarding_surface() {
        assert!(RaylibApi::SYMBOL_NAMES.len() >= 80);
        assert!(RaylibApi::SYMBOL_NAMES.contains(&"InitWindow"));
        assert!(RaylibApi::SYMBOL_NAMES.contains(&"GetWindowScaleDPI"));
        assert!(RaylibApi::SYMBOL_NAMES.contains(&"DrawTextureEx"));
    }

    #[test]
    fn init_fails_cleanly_without_the_library() {
        // No raylib in the test environment: both search steps miss.
        if let Err(err) = Raylib::init_named("raybind-raylib-missing") {
            assert!(matches!(err, BindingError::LibraryNotFound { .. }));
        } else {
            panic!("unexpected raylib load in test environment");
        }
    }
}
