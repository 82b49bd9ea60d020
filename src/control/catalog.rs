use crate::errors::SimulationError;

/// Physical parameters for one type of falling object. Looked up once when a
/// body is constructed and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectParameters {
    pub mass: f64,             // kg
    pub reference_area: f64,   // m², frontal area used for drag
    pub drag_coefficient: f64, // dimensionless
}

/// The selectable falling objects. Parameter values follow real-world
/// figures (a 16 lb bowling ball, a regulation baseball, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    BowlingBall,
    BadmintonShuttlecock,
    GolfBall,
    PingPongBall,
    Baseball,
    Football,
    ModelRocket,
    SportsCar,
}

pub const DEFAULT_OBJECT_TYPE: ObjectType = ObjectType::Baseball;

pub const ALL_OBJECT_TYPES: [ObjectType; 8] = [
    ObjectType::BowlingBall,
    ObjectType::BadmintonShuttlecock,
    ObjectType::GolfBall,
    ObjectType::PingPongBall,
    ObjectType::Baseball,
    ObjectType::Football,
    ObjectType::ModelRocket,
    ObjectType::SportsCar,
];

impl ObjectType {
    /// Immutable registry of per-type physical parameters.
    pub fn parameters(&self) -> ObjectParameters {
        match self {
            ObjectType::BowlingBall => ObjectParameters {
                mass: 7.25,
                reference_area: 1.47,
                drag_coefficient: 0.5,
            },
            ObjectType::BadmintonShuttlecock => ObjectParameters {
                mass: 0.00515,
                reference_area: 0.0033,
                drag_coefficient: 0.61,
            },
            ObjectType::GolfBall => ObjectParameters {
                mass: 0.045,
                reference_area: 0.00143,
                drag_coefficient: 0.3,
            },
            ObjectType::PingPongBall => ObjectParameters {
                mass: 0.0027,
                reference_area: 0.0013,
                drag_coefficient: 0.5,
            },
            ObjectType::Baseball => ObjectParameters {
                mass: 0.14,
                reference_area: 0.042,
                drag_coefficient: 0.3,
            },
            ObjectType::Football => ObjectParameters {
                mass: 0.411,
                reference_area: 0.023,
                drag_coefficient: 0.055,
            },
            ObjectType::ModelRocket => ObjectParameters {
                mass: 0.0402,
                reference_area: 0.00049,
                drag_coefficient: 0.75,
            },
            ObjectType::SportsCar => ObjectParameters {
                mass: 283.63,
                reference_area: 2.04,
                drag_coefficient: 0.32,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::BowlingBall => "bowling ball",
            ObjectType::BadmintonShuttlecock => "badminton shuttlecock",
            ObjectType::GolfBall => "golf ball",
            ObjectType::PingPongBall => "ping pong ball",
            ObjectType::Baseball => "baseball",
            ObjectType::Football => "football",
            ObjectType::ModelRocket => "model rocket",
            ObjectType::SportsCar => "sports car",
        }
    }

    /// Resolve a textual identifier (e.g. from a selector widget) to an
    /// object type. Unknown keys are a configuration error.
    pub fn from_key(key: &str) -> Result<ObjectType, SimulationError> {
        ALL_OBJECT_TYPES
            .iter()
            .copied()
            .find(|object_type| object_type.name() == key)
            .ok_or_else(|| SimulationError::UnknownObject(key.to_string()))
    }
}
