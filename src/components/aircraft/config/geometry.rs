use serde::{Deserialize, Serialize};

/// Configuration for the lifting geometry of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
}

impl Default for AircraftGeometry {
    fn default() -> Self {
        Self::narrow_body()
    }
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The total wing area of the aircraft (m²).
    /// * `wing_span` - The wing span of the aircraft (m).
    pub fn new(wing_area: f64, wing_span: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
        }
    }

    /// Mean geometric chord, area over span (m).
    pub fn mean_chord(&self) -> f64 {
        self.wing_area / self.wing_span
    }

    /// Aspect ratio, span² over area.
    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span * self.wing_span / self.wing_area
    }

    pub fn narrow_body() -> Self {
        Self::new(125.0, 35.8)
    }

    pub fn light_single() -> Self {
        Self::new(16.2, 11.0) // 16.2 m² wing area, 11.0 m wingspan
    }

    pub fn regional_turboprop() -> Self {
        Self::new(61.0, 27.05)
    }
}
