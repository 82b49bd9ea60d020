use crate::constants::FO_NUM_DIGITS;
use crate::control::catalog::{ObjectParameters, ObjectType};
use crate::control::environment::Environment;
use crate::errors::SimulationError;
use crate::utils::rounding::round_value;

/// Kinematic state of the one falling object, plus the per-type parameters it
/// was built from. Mutated once per simulation tick through the update chain
/// and replaced wholesale when the user switches object type.
///
/// Position is a signed altitude with 0 at the ground; velocity, forces and
/// gravity are all signed toward the ground (negative while falling).
#[derive(Debug, Clone)]
pub struct FallingBody {
    pub object_type: ObjectType,
    pub mass: f64,             // kg
    pub drag_coefficient: f64, // dimensionless
    reference_area: f64,       // m², from the catalog
    area_override: Option<f64>, // m², set while a parachute is deployed
    initial_altitude: f64,     // m
    pub position: f64,         // m
    pub velocity: f64,         // m/s
    pub acceleration: f64,     // m/s²
    pub weight_force: f64,     // N
    pub drag_force: f64,       // N
    pub net_force: f64,        // N
    pub combusted: bool,
    num_digits: u32,
}

impl FallingBody {
    /// Build a body from the catalog entry for `object_type`.
    pub fn new(object_type: ObjectType, initial_altitude: f64) -> Result<Self, SimulationError> {
        Self::with_parameters(object_type, object_type.parameters(), initial_altitude)
    }

    /// Build a body with explicit parameters (used for custom objects and in
    /// tests). `mass <= 0` is a configuration error caught here, once; the
    /// tick path assumes a valid body.
    pub fn with_parameters(
        object_type: ObjectType,
        parameters: ObjectParameters,
        initial_altitude: f64,
    ) -> Result<Self, SimulationError> {
        if parameters.mass <= 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "mass must be positive, got {}",
                parameters.mass
            )));
        }
        if parameters.reference_area <= 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "reference area must be positive, got {}",
                parameters.reference_area
            )));
        }
        if parameters.drag_coefficient < 0.0 {
            return Err(SimulationError::InvalidParameters(format!(
                "drag coefficient must be non-negative, got {}",
                parameters.drag_coefficient
            )));
        }

        Ok(FallingBody {
            object_type,
            mass: parameters.mass,
            drag_coefficient: parameters.drag_coefficient,
            reference_area: parameters.reference_area,
            area_override: None,
            initial_altitude,
            position: initial_altitude,
            velocity: 0.0,
            acceleration: 0.0,
            weight_force: 0.0,
            drag_force: 0.0,
            net_force: 0.0,
            combusted: false,
            num_digits: FO_NUM_DIGITS,
        })
    }

    /// The reference area currently in effect (the parachute canopy while one
    /// is deployed, the catalog value otherwise).
    pub fn reference_area(&self) -> f64 {
        self.area_override.unwrap_or(self.reference_area)
    }

    pub fn override_reference_area(&mut self, area: f64) {
        self.area_override = Some(area);
    }

    pub fn restore_reference_area(&mut self) {
        self.area_override = None;
    }

    /// Weight in Newtons from the current gravity. Recomputed every tick
    /// because gravity varies with altitude on some screens.
    fn update_weight_force(&mut self, environment: &Environment) {
        self.weight_force = round_value(
            environment.acceleration_gravity * self.mass,
            self.num_digits,
        );
    }

    /// Drag in Newtons: 0.5 · Cd · ρ · v² · A. The v² keeps this non-negative,
    /// which is what lets an overshoot past terminal velocity flip the
    /// velocity sign (see `advance`).
    fn update_drag_force(&mut self, environment: &Environment) {
        self.drag_force = round_value(
            0.5 * (self.drag_coefficient
                * environment.air_density
                * self.velocity.powi(2)
                * self.reference_area()),
            self.num_digits,
        );
    }

    /// Net force in Newtons. When drag is disabled its term is absent from
    /// the formula entirely; the stale `drag_force` field is not consulted.
    fn update_net_force(&mut self, environment: &Environment, drag_enabled: bool) {
        self.update_weight_force(environment);

        let new_net_force = if drag_enabled {
            self.update_drag_force(environment);
            self.weight_force + self.drag_force
        } else {
            self.weight_force
        };

        self.net_force = round_value(new_net_force, self.num_digits);
    }

    fn update_acceleration(&mut self, environment: &Environment, drag_enabled: bool) {
        self.update_net_force(environment, drag_enabled);

        self.acceleration = round_value(self.net_force / self.mass, self.num_digits);
    }

    fn update_velocity(&mut self, dt: f64, environment: &Environment, drag_enabled: bool) {
        self.update_acceleration(environment, drag_enabled);

        self.velocity = round_value(
            self.velocity + (self.acceleration * dt),
            self.num_digits,
        );
    }

    /// Advance the body one step of `dt` seconds. Semi-implicit Euler: the
    /// step's acceleration updates velocity first and the updated velocity
    /// then moves the position. Each derived value is truncation-rounded and
    /// the truncated figure feeds the next stage.
    ///
    /// Returns true if this step tripped the runaway-velocity anomaly: a
    /// positive velocity while the sim is enabled means drag has pushed the
    /// object past terminal velocity (small mass, large dt, or drag toggled
    /// mid-fall) and would tend to infinity. The body is marked combusted and
    /// refuses further updates until `reset`.
    pub fn advance(
        &mut self,
        dt: f64,
        environment: &Environment,
        drag_enabled: bool,
        sim_enabled: bool,
    ) -> bool {
        if self.combusted {
            return false;
        }

        self.update_velocity(dt, environment, drag_enabled);

        let anomaly = self.velocity > 0.0 && sim_enabled;
        if anomaly {
            self.combusted = true;
        }

        // The step that trips the anomaly still completes its position update
        self.position = round_value(
            self.position + (self.velocity * dt),
            self.num_digits,
        );

        anomaly
    }

    /// Restore the body to its initial kinematic state, clearing the
    /// combusted flag and any parachute area override.
    pub fn reset(&mut self) {
        self.position = self.initial_altitude;
        self.velocity = 0.0;
        self.acceleration = 0.0;
        self.weight_force = 0.0;
        self.drag_force = 0.0;
        self.net_force = 0.0;
        self.combusted = false;
        self.area_override = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STEP_DT;
    use approx::assert_abs_diff_eq;

    fn sea_level() -> Environment {
        Environment::new()
    }

    #[test]
    fn test_construction_rejects_non_positive_mass() {
        let parameters = ObjectParameters {
            mass: 0.0,
            reference_area: 0.042,
            drag_coefficient: 0.3,
        };
        assert!(
            FallingBody::with_parameters(ObjectType::Baseball, parameters, 0.0).is_err()
        );

        let parameters = ObjectParameters {
            mass: -1.0,
            reference_area: 0.042,
            drag_coefficient: 0.3,
        };
        assert!(
            FallingBody::with_parameters(ObjectType::Baseball, parameters, 0.0).is_err()
        );
    }

    #[test]
    fn test_free_fall_single_step() {
        let mut body = FallingBody::new(ObjectType::Baseball, 0.0).unwrap();
        let environment = sea_level();

        body.advance(STEP_DT, &environment, false, true);

        // weight = -9.80665 * 0.14 = -1.372931 N; truncation may cost one
        // count in the sixth digit, so compare at that grain
        assert_abs_diff_eq!(body.weight_force, -1.372_931, epsilon = 2e-6);
        assert_abs_diff_eq!(body.net_force, -1.372_931, epsilon = 2e-6);
        assert_abs_diff_eq!(body.acceleration, -9.806_65, epsilon = 2e-6);
        // -9.80665 / 60 = -0.16344416..., truncated to six digits
        assert_abs_diff_eq!(body.velocity, -0.163_444, epsilon = 2e-6);
        assert!(body.position < 0.0);
    }

    #[test]
    fn test_truncated_velocity_feeds_position() {
        let mut body = FallingBody::new(ObjectType::Baseball, 0.0).unwrap();
        let environment = sea_level();

        body.advance(STEP_DT, &environment, false, true);

        // Starting from position 0, the new position must be derived from the
        // truncated velocity stored on the body, not the raw figure
        let expected = round_value(body.velocity * STEP_DT, 6);
        assert_abs_diff_eq!(body.position, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_drag_force_left_stale_when_disabled() {
        let mut body = FallingBody::new(ObjectType::Baseball, 0.0).unwrap();
        let environment = sea_level();

        // Build up some speed with drag on so drag_force becomes non-zero
        for _ in 0..30 {
            body.advance(STEP_DT, &environment, true, true);
        }
        let drag_before = body.drag_force;
        assert!(drag_before > 0.0);

        // With drag off the field keeps its stale value but the net force
        // formula excludes it
        body.advance(STEP_DT, &environment, false, true);
        assert_eq!(body.drag_force, drag_before);
        assert_abs_diff_eq!(body.net_force, body.weight_force, epsilon = 1e-12);
    }

    #[test]
    fn test_runaway_velocity_sets_combusted() {
        // Tiny mass and a huge step: drag wildly overshoots terminal velocity
        let parameters = ObjectParameters {
            mass: 0.005,
            reference_area: 0.042,
            drag_coefficient: 0.3,
        };
        let mut body =
            FallingBody::with_parameters(ObjectType::Baseball, parameters, 0.0).unwrap();
        let environment = sea_level();

        let mut anomaly = false;
        for _ in 0..10 {
            anomaly = body.advance(1.0, &environment, true, true);
            if anomaly {
                break;
            }
        }

        assert!(anomaly, "expected the drag overshoot to trip the anomaly");
        assert!(body.combusted);
        assert!(body.velocity > 0.0);
    }

    #[test]
    fn test_combusted_body_refuses_updates() {
        let parameters = ObjectParameters {
            mass: 0.005,
            reference_area: 0.042,
            drag_coefficient: 0.3,
        };
        let mut body =
            FallingBody::with_parameters(ObjectType::Baseball, parameters, 0.0).unwrap();
        let environment = sea_level();

        while !body.combusted {
            body.advance(1.0, &environment, true, true);
        }

        let frozen = (body.position, body.velocity, body.acceleration);
        assert!(!body.advance(1.0, &environment, true, true));
        assert_eq!((body.position, body.velocity, body.acceleration), frozen);
    }

    #[test]
    fn test_no_anomaly_while_disabled() {
        let parameters = ObjectParameters {
            mass: 0.005,
            reference_area: 0.042,
            drag_coefficient: 0.3,
        };
        let mut body =
            FallingBody::with_parameters(ObjectType::Baseball, parameters, 0.0).unwrap();
        let environment = sea_level();

        for _ in 0..10 {
            body.advance(1.0, &environment, true, false);
        }
        assert!(!body.combusted);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut body = FallingBody::new(ObjectType::GolfBall, 10.0).unwrap();
        let environment = sea_level();

        for _ in 0..60 {
            body.advance(STEP_DT, &environment, true, true);
        }
        body.override_reference_area(7.07);
        body.reset();

        assert_eq!(body.position, 10.0);
        assert_eq!(body.velocity, 0.0);
        assert_eq!(body.acceleration, 0.0);
        assert_eq!(body.weight_force, 0.0);
        assert_eq!(body.drag_force, 0.0);
        assert_eq!(body.net_force, 0.0);
        assert!(!body.combusted);
        assert_eq!(body.reference_area(), 0.00143);
    }

    #[test]
    fn test_parachute_area_override() {
        let mut body = FallingBody::new(ObjectType::Baseball, 10.0).unwrap();
        assert_eq!(body.reference_area(), 0.042);

        body.override_reference_area(7.07);
        assert_eq!(body.reference_area(), 7.07);

        body.restore_reference_area();
        assert_eq!(body.reference_area(), 0.042);
    }
}
