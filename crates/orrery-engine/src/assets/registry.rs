use serde::{Deserialize, Serialize};

/// Static descriptor for one orbiting body.
/// Created once at startup and never mutated; the user-adjustable speed
/// lives on the simulation's per-body instance, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Display name, also used as the node tag.
    pub name: String,
    /// Mesh radius in world units.
    pub radius: f32,
    /// Orbital distance from the central body in world units.
    pub orbital_distance: f32,
    /// RGB color in [0, 1].
    pub color: [f32; 3],
    /// Default angular speed in radians per second.
    pub base_angular_speed: f32,
    /// Whether this body carries a tilted ring surface.
    #[serde(default)]
    pub ringed: bool,
}

/// The fixed list of body descriptors the scene is built from.
/// Insertion order is display order: sliders, tooltips, and events all
/// refer to bodies by index into this list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyRegistry {
    pub bodies: Vec<BodyDescriptor>,
}

/// Registry loading/validation failures.
#[derive(Debug)]
pub enum RegistryError {
    Parse(serde_json::Error),
    /// A descriptor failed validation; carries the body name and reason.
    Invalid { name: String, reason: &'static str },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::Parse(e) => write!(f, "registry parse error: {e}"),
            RegistryError::Invalid { name, reason } => {
                write!(f, "invalid body {name:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Parse(e)
    }
}

impl BodyRegistry {
    pub fn new(bodies: Vec<BodyDescriptor>) -> Self {
        Self { bodies }
    }

    /// Parse a registry from a JSON string supplied by the host,
    /// validating every descriptor.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let registry: BodyRegistry = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Serialize for the host, which builds the slider UI from it.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{\"bodies\":[]}".to_string())
    }

    fn validate(&self) -> Result<(), RegistryError> {
        for body in &self.bodies {
            let reason = if !(body.radius > 0.0) {
                Some("radius must be positive")
            } else if !(body.orbital_distance > 0.0) {
                Some("orbital distance must be positive")
            } else if !(body.base_angular_speed >= 0.0) {
                Some("base angular speed must be non-negative")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(RegistryError::Invalid {
                    name: body.name.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyDescriptor> {
        self.bodies.iter()
    }

    pub fn get(&self, index: usize) -> Option<&BodyDescriptor> {
        self.bodies.get(index)
    }

    /// The largest orbital distance, e.g. for sizing the starfield
    /// clearance radius.
    pub fn outermost_distance(&self) -> f32 {
        self.bodies
            .iter()
            .map(|b| b.orbital_distance)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str) -> BodyDescriptor {
        BodyDescriptor {
            name: name.to_string(),
            radius: 1.6,
            orbital_distance: 42.0,
            color: [0.0, 0.47, 1.0],
            base_angular_speed: 0.18,
            ringed: false,
        }
    }

    #[test]
    fn parse_minimal_registry() {
        let json = r#"{
            "bodies": [
                { "name": "Earth", "radius": 1.6, "orbital_distance": 42.0,
                  "color": [0.0, 0.47, 1.0], "base_angular_speed": 0.18 }
            ]
        }"#;
        let registry = BodyRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0).unwrap().name, "Earth");
        assert!(!registry.get(0).unwrap().ringed);
    }

    #[test]
    fn json_round_trip() {
        let mut saturn = body("Saturn");
        saturn.ringed = true;
        let registry = BodyRegistry::new(vec![body("Earth"), saturn]);

        let back = BodyRegistry::from_json(&registry.to_json()).unwrap();
        assert_eq!(back.len(), 2);
        assert!(back.get(1).unwrap().ringed);
        assert_eq!(back.get(0).unwrap().orbital_distance, 42.0);
    }

    #[test]
    fn nonpositive_radius_is_rejected() {
        let mut bad = body("Flatland");
        bad.radius = 0.0;
        let json = BodyRegistry::new(vec![bad]).to_json();
        assert!(matches!(
            BodyRegistry::from_json(&json),
            Err(RegistryError::Invalid { .. })
        ));
    }

    #[test]
    fn negative_speed_is_rejected() {
        let mut bad = body("Retrograde");
        bad.base_angular_speed = -0.1;
        let json = BodyRegistry::new(vec![bad]).to_json();
        assert!(BodyRegistry::from_json(&json).is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            BodyRegistry::from_json("not json"),
            Err(RegistryError::Parse(_))
        ));
    }

    #[test]
    fn outermost_distance() {
        let mut far = body("Neptune");
        far.orbital_distance = 160.0;
        let registry = BodyRegistry::new(vec![body("Earth"), far]);
        assert_eq!(registry.outermost_distance(), 160.0);
    }
}
