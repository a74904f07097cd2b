//! physac binding context.
//!
//! Second instantiation of the declarative symbol table, over the physac
//! physics library. Physics bodies are opaque pointer-sized handles: the
//! binding never interprets them, only carries them between the host and
//! the native side.
//!
//! physac ships either as its own shared library or compiled into a
//! raylib build; [`Physics::init`] covers the first case and
//! [`Physics::init_named`] the second.

use std::ffi::c_void;
use std::os::raw::c_int;

use crate::binding::{trace, BindingError, SharedLibrary};
use crate::host::{self, HostBool};
use crate::raw::{self, Vector2};

/// Opaque physics body handle, pointer-sized.
pub type BodyHandle = usize;

crate::symbol_table! {
    /// Function-pointer slots for the physac exports the binding forwards.
    pub struct PhysicsApi {
        init_physics: "InitPhysics" => fn();
        close_physics: "ClosePhysics" => fn();
        run_physics_step: "RunPhysicsStep" => fn();
        set_physics_time_step: "SetPhysicsTimeStep" => fn(f64);
        is_physics_enabled: "IsPhysicsEnabled" => fn() -> bool;
        set_physics_gravity: "SetPhysicsGravity" => fn(f32, f32);
        create_physics_body_circle: "CreatePhysicsBodyCircle" => fn(Vector2, f32, f32) -> *mut c_void;
        create_physics_body_rectangle: "CreatePhysicsBodyRectangle" => fn(Vector2, f32, f32, f32) -> *mut c_void;
        create_physics_body_polygon: "CreatePhysicsBodyPolygon" => fn(Vector2, f32, c_int, f32) -> *mut c_void;
        physics_add_force: "PhysicsAddForce" => fn(*mut c_void, Vector2);
        physics_add_torque: "PhysicsAddTorque" => fn(*mut c_void, f32);
        physics_shatter: "PhysicsShatter" => fn(*mut c_void, Vector2, f32);
        get_physics_bodies_count: "GetPhysicsBodiesCount" => fn() -> c_int;
        get_physics_body: "GetPhysicsBody" => fn(c_int) -> *mut c_void;
        get_physics_shape_type: "GetPhysicsShapeType" => fn(c_int) -> c_int;
        get_physics_shape_vertices_count: "GetPhysicsShapeVerticesCount" => fn(c_int) -> c_int;
        get_physics_shape_vertex: "GetPhysicsShapeVertex" => fn(*mut c_void, c_int) -> Vector2;
        set_physics_body_rotation: "SetPhysicsBodyRotation" => fn(*mut c_void, f32);
        destroy_physics_body: "DestroyPhysicsBody" => fn(*mut c_void);
    }
}

/// A live physac binding.
///
/// Same ownership rules as the raylib context: exists only fully
/// resolved, slots clear before the handle releases.
pub struct Physics {
    api: PhysicsApi,
    lib: SharedLibrary,
}

impl Physics {
    /// Load the physac shared library and resolve the full symbol table.
    pub fn init() -> Result<Self, BindingError> {
        Self::init_named("physac")
    }

    /// Run the bootstrap against a differently named library, for builds
    /// that compile physac into the raylib binary.
    pub fn init_named(name: &str) -> Result<Self, BindingError> {
        let lib = SharedLibrary::open(name)?;
        let api = PhysicsApi::resolve(&lib)?;
        trace!(
            "physac binding ready: {} symbols from {}",
            PhysicsApi::SYMBOL_NAMES.len(),
            lib.path().display()
        );
        Ok(Self { api, lib })
    }

    /// The resolved symbol table.
    pub fn api(&self) -> &PhysicsApi {
        &self.api
    }

    /// The loaded library.
    pub fn library(&self) -> &SharedLibrary {
        &self.lib
    }

    /// Initialize the physics simulation.
    pub fn init_physics(&self) -> Result<(), BindingError> {
        let f = self.api.init_physics()?;
        unsafe { f() };
        Ok(())
    }

    /// Close the physics simulation and unload all bodies.
    pub fn close_physics(&self) -> Result<(), BindingError> {
        let f = self.api.close_physics()?;
        unsafe { f() };
        Ok(())
    }

    /// Run one physics simulation step.
    pub fn run_physics_step(&self) -> Result<(), BindingError> {
        let f = self.api.run_physics_step()?;
        unsafe { f() };
        Ok(())
    }

    /// Set the fixed physics time step in milliseconds.
    pub fn set_physics_time_step(&self, delta: f64) -> Result<(), BindingError> {
        let f = self.api.set_physics_time_step()?;
        unsafe { f(delta) };
        Ok(())
    }

    /// Check if the simulation is running.
    pub fn is_physics_enabled(&self) -> Result<HostBool, BindingError> {
        let f = self.api.is_physics_enabled()?;
        Ok(host::to_host_bool(unsafe { f() }))
    }

    /// Set gravity applied to all bodies.
    pub fn set_physics_gravity(&self, x: f32, y: f32) -> Result<(), BindingError> {
        let f = self.api.set_physics_gravity()?;
        unsafe { f(x, y) };
        Ok(())
    }

    /// Create a circle body at a Vector2 position; returns its handle.
    ///
    /// # Safety
    ///
    /// `position` must be valid for a `Vector2` read.
    pub unsafe fn create_physics_body_circle(
        &self,
        position: *const c_void,
        radius: f32,
        density: f32,
    ) -> Result<BodyHandle, BindingError> {
        let f = self.api.create_physics_body_circle()?;
        Ok(f(raw::read::<Vector2>(position), radius, density) as BodyHandle)
    }

    /// Create a rectangle body at a Vector2 position; returns its handle.
    ///
    /// # Safety
    ///
    /// `position` must be valid for a `Vector2` read.
    pub unsafe fn create_physics_body_rectangle(
        &self,
        position: *const c_void,
        width: f32,
        height: f32,
        density: f32,
    ) -> Result<BodyHandle, BindingError> {
        let f = self.api.create_physics_body_rectangle()?;
        Ok(f(raw::read::<Vector2>(position), width, height, density) as BodyHandle)
    }

    /// Create a polygon body at a Vector2 position; returns its handle.
    ///
    /// # Safety
    ///
    /// `position` must be valid for a `Vector2` read.
    pub unsafe fn create_physics_body_polygon(
        &self,
        position: *const c_void,
        radius: f32,
        sides: i32,
        density: f32,
    ) -> Result<BodyHandle, BindingError> {
        let f = self.api.create_physics_body_polygon()?;
        Ok(f(raw::read::<Vector2>(position), radius, sides, density) as BodyHandle)
    }

    /// Apply a linear force read from a Vector2 buffer to a body.
    ///
    /// # Safety
    ///
    /// `force` must be valid for a `Vector2` read; `body` must be a
    /// handle previously produced by this binding.
    pub unsafe fn physics_add_force(
        &self,
        body: BodyHandle,
        force: *const c_void,
    ) -> Result<(), BindingError> {
        let f = self.api.physics_add_force()?;
        f(body as *mut c_void, raw::read::<Vector2>(force));
        Ok(())
    }

    /// Apply angular force to a body.
    pub fn physics_add_torque(&self, body: BodyHandle, amount: f32) -> Result<(), BindingError> {
        let f = self.api.physics_add_torque()?;
        unsafe { f(body as *mut c_void, amount) };
        Ok(())
    }

    /// Shatter a body into small bodies around a Vector2 position.
    ///
    /// # Safety
    ///
    /// `position` must be valid for a `Vector2` read; `body` must be a
    /// handle previously produced by this binding.
    pub unsafe fn physics_shatter(
        &self,
        body: BodyHandle,
        position: *const c_void,
        force: f32,
    ) -> Result<(), BindingError> {
        let f = self.api.physics_shatter()?;
        f(body as *mut c_void, raw::read::<Vector2>(position), force);
        Ok(())
    }

    /// Number of bodies in the simulation.
    pub fn get_physics_bodies_count(&self) -> Result<i32, BindingError> {
        let f = self.api.get_physics_bodies_count()?;
        Ok(unsafe { f() })
    }

    /// Handle of the body at `index`.
    pub fn get_physics_body(&self, index: i32) -> Result<BodyHandle, BindingError> {
        let f = self.api.get_physics_body()?;
        Ok(unsafe { f(index) } as BodyHandle)
    }

    /// Shape type of the body at `index`.
    pub fn get_physics_shape_type(&self, index: i32) -> Result<i32, BindingError> {
        let f = self.api.get_physics_shape_type()?;
        Ok(unsafe { f(index) })
    }

    /// Vertex count of the body at `index`.
    pub fn get_physics_shape_vertices_count(&self, index: i32) -> Result<i32, BindingError> {
        let f = self.api.get_physics_shape_vertices_count()?;
        Ok(unsafe { f(index) })
    }

    /// Write a body's transformed shape vertex into `out` as a Vector2.
    ///
    /// # Safety
    ///
    /// `out` must be valid for a `Vector2` write; `body` must be a handle
    /// previously produced by this binding.
    pub unsafe fn get_physics_shape_vertex(
        &self,
        body: BodyHandle,
        vertex: i32,
        out: *mut c_void,
    ) -> Result<(), BindingError> {
        let f = self.api.get_physics_shape_vertex()?;
        raw::write(out, f(body as *mut c_void, vertex));
        Ok(())
    }

    /// Set a body's rotation in radians.
    pub fn set_physics_body_rotation(
        &self,
        body: BodyHandle,
        radians: f32,
    ) -> Result<(), BindingError> {
        let f = self.api.set_physics_body_rotation()?;
        unsafe { f(body as *mut c_void, radians) };
        Ok(())
    }

    /// Remove a body from the simulation.
    pub fn destroy_physics_body(&self, body: BodyHandle) -> Result<(), BindingError> {
        let f = self.api.destroy_physics_body()?;
        unsafe { f(body as *mut c_void) };
        Ok(())
    }
}

impl Drop for Physics {
    fn drop(&mut self) {
        self.api.clear();
        trace!("physac binding closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_table_matches_the_physac_exports() {
        assert_eq!(PhysicsApi::SYMBOL_NAMES.len(), 19);
        assert!(PhysicsApi::SYMBOL_NAMES.contains(&"InitPhysics"));
        assert!(PhysicsApi::SYMBOL_NAMES.contains(&"CreatePhysicsBodyCircle"));
        assert!(PhysicsApi::SYMBOL_NAMES.contains(&"DestroyPhysicsBody"));
    }

    #[test]
    fn unresolved_table_guards_forwarding() {
        let api = PhysicsApi::unresolved();
        assert_eq!(
            api.run_physics_step().unwrap_err(),
            crate::BindingError::NotReady {
                symbol: "RunPhysicsStep"
            }
        );
    }
}
