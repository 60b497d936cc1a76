use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

const VON_KARMAN: f64 = 0.41;

/// Mean wind models. Bearings give the direction the wind blows from, in
/// degrees clockwise from north.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum WindConfig {
    #[default]
    Calm,
    /// Uniform wind, earth frame (north, east, down), m/s.
    Constant { velocity: Vector3<f64> },
    /// Neutral boundary-layer profile `u*/κ · ln((h - d) / z0)`.
    Logarithmic {
        d: f64,
        z0: f64,
        u_star: f64,
        bearing: f64,
    },
    /// Power-law profile `u_r · (h / z_r)^α`.
    PowerLaw {
        u_r: f64,
        z_r: f64,
        bearing: f64,
        alpha: f64,
    },
}

impl WindConfig {
    /// Wind blowing from `bearing` degrees at `speed` m/s.
    pub fn from_bearing(speed: f64, bearing: f64) -> Self {
        WindConfig::Constant {
            velocity: from_bearing(speed, bearing),
        }
    }

    /// Mean wind velocity at an altitude (m), earth frame.
    pub fn velocity(&self, altitude: f64) -> Vector3<f64> {
        match *self {
            WindConfig::Calm => Vector3::zeros(),
            WindConfig::Constant { velocity } => velocity,
            WindConfig::Logarithmic {
                d,
                z0,
                u_star,
                bearing,
            } => {
                let height = altitude - d;
                if z0 <= 0.0 || height <= z0 {
                    return Vector3::zeros();
                }
                from_bearing(u_star / VON_KARMAN * (height / z0).ln(), bearing)
            }
            WindConfig::PowerLaw {
                u_r,
                z_r,
                bearing,
                alpha,
            } => {
                if z_r <= 0.0 || altitude <= 0.0 {
                    return Vector3::zeros();
                }
                from_bearing(u_r * (altitude / z_r).powf(alpha), bearing)
            }
        }
    }
}

fn from_bearing(speed: f64, bearing: f64) -> Vector3<f64> {
    let bearing = bearing.to_radians();
    Vector3::new(-speed * bearing.cos(), -speed * bearing.sin(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_westerly_blows_east() {
        let wind = WindConfig::from_bearing(10.0, 270.0).velocity(0.0);
        assert_relative_eq!(wind.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(wind.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_logarithmic_profile_grows_with_height() {
        let wind = WindConfig::Logarithmic {
            d: 0.0,
            z0: 0.03,
            u_star: 0.5,
            bearing: 0.0,
        };
        assert_eq!(wind.velocity(0.01), Vector3::zeros());
        assert!(wind.velocity(100.0).norm() > wind.velocity(10.0).norm());
    }
}
