use crate::constants::DEFAULT_PARACHUTE_AREA;
use crate::control::catalog::ObjectType;
use crate::control::environment::Environment;
use crate::control::falling_body::FallingBody;
use crate::errors::SimulationError;

/// Per-screen configuration, consumed once at construction. Screens differ in
/// composition (which flags they set), not in type.
#[derive(Debug, Clone, Copy)]
pub struct ModelConfig {
    /// If false, air density and gravity are recomputed from the body's
    /// altitude before every step instead of staying at sea level.
    pub constant_altitude: bool,
    /// Clamp to the ground and disable the sim once position reaches zero.
    pub ground_stop: bool,
    pub initial_drag_enabled: bool,
    pub enable_parachute: bool,
    pub initial_altitude: f64, // m
}

impl Default for ModelConfig {
    /// The introductory screen: an endless constant-altitude fall.
    fn default() -> Self {
        ModelConfig {
            constant_altitude: true,
            ground_stop: false,
            initial_drag_enabled: false,
            enable_parachute: false,
            initial_altitude: 0.0,
        }
    }
}

impl ModelConfig {
    /// The terminal-velocity screen: a finite drop with drag always on and a
    /// deployable parachute.
    pub fn terminal() -> Self {
        ModelConfig {
            constant_altitude: false,
            ground_stop: true,
            initial_drag_enabled: true,
            enable_parachute: true,
            initial_altitude: 10.0,
        }
    }
}

/// Owns one falling body and its environment and drives the simulation:
/// play/pause, manual stepping, termination conditions and reset.
///
/// `running` and `enabled` are separate: pausing keeps the sim usable, while
/// disabling (ground contact or a combustion anomaly) locks it until the user
/// acknowledges with a reset. Disabling always pauses.
#[derive(Debug)]
pub struct SimulationClock {
    pub config: ModelConfig,
    pub environment: Environment,
    pub body: FallingBody,
    pub running: bool,
    pub enabled: bool,
    pub drag_enabled: bool,
    pub parachute_deployed: bool,
    pub elapsed_time: f64, // s
}

impl SimulationClock {
    pub fn new(object_type: ObjectType, config: ModelConfig) -> Result<Self, SimulationError> {
        Ok(SimulationClock {
            config,
            environment: Environment::new(),
            body: FallingBody::new(object_type, config.initial_altitude)?,
            running: false,
            enabled: true,
            drag_enabled: config.initial_drag_enabled,
            parachute_deployed: false,
            elapsed_time: 0.0,
        })
    }

    /// Start the fall. Refused while disabled: the user has to reset first.
    pub fn play(&mut self) {
        if self.enabled {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.running = false;
    }

    pub fn set_drag_enabled(&mut self, drag_enabled: bool) {
        self.drag_enabled = drag_enabled;
    }

    /// One tick from the external frame source; a no-op unless playing.
    pub fn step(&mut self, dt: f64) {
        if self.running && self.enabled {
            self.advance(dt);
        }
    }

    /// The actual integration step, also invoked directly by the manual
    /// single-step control regardless of `running`.
    pub fn advance(&mut self, dt: f64) {
        // On variable-altitude screens the ambient values are refreshed from
        // the body's altitude before the update chain reads them
        if !self.config.constant_altitude {
            self.environment.update(self.body.position.abs());
        }

        let anomaly = self
            .body
            .advance(dt, &self.environment, self.drag_enabled, self.enabled);
        if anomaly {
            self.disable();
        }

        if self.config.ground_stop && self.body.position <= 0.0 {
            // Never leave the body below the ground
            if self.body.position < 0.0 {
                self.body.position = 0.0;
            }
            self.disable();
        }

        self.elapsed_time += dt;
    }

    /// Replace the body wholesale with a fresh one of the given type. The
    /// whole screen state is reset, matching a user switching objects.
    pub fn select_object(&mut self, object_type: ObjectType) -> Result<(), SimulationError> {
        if object_type != self.body.object_type {
            self.body = FallingBody::new(object_type, self.config.initial_altitude)?;
        }
        self.reset();
        Ok(())
    }

    pub fn deploy_parachute(&mut self) {
        if self.config.enable_parachute && !self.parachute_deployed {
            self.parachute_deployed = true;
            self.body.override_reference_area(DEFAULT_PARACHUTE_AREA);
        }
    }

    pub fn stow_parachute(&mut self) {
        if self.parachute_deployed {
            self.parachute_deployed = false;
            self.body.restore_reference_area();
        }
    }

    /// Back to the initial state: timer zeroed, sea-level environment, paused
    /// but enabled, parachute stowed, body reset (which clears combustion).
    pub fn reset(&mut self) {
        self.elapsed_time = 0.0;
        self.environment.reset();
        self.running = false;
        self.enabled = true;
        self.drag_enabled = self.config.initial_drag_enabled;
        self.parachute_deployed = false;
        self.body.reset();
    }
}
