// src/globe/grid.rs

use crate::globe::config::GlobeConfig;
use crate::math::utils::constants::{PI, TAU};
use bevy::math::Vec3;

/// Vorberechnete Polylinien des Lat/Lon-Gitternetzes im lokalen Kugelraum.
/// Wird nur bei Parameteränderung neu erzeugt; das Zeichnen pro Frame
/// transformiert lediglich die gecachten Punkte.
#[derive(Debug, Clone, Default)]
pub struct GridCircleSet {
    /// Breitenkreise, Pole ausgenommen
    pub parallels: Vec<Vec<Vec3>>,
    /// Meridiane als geschlossene Großkreise
    pub meridians: Vec<Vec<Vec3>>,
}

impl GridCircleSet {
    /// Baut alle Gitterkreise mit `grid_samples + 1` Punkten je Kreis,
    /// leicht über die Oberfläche gehoben gegen Z-Fighting mit der Kugel.
    pub fn build(config: &GlobeConfig) -> Self {
        let r = config.radius + config.grid_lift;
        let samples = config.grid_samples.max(3);

        // Breitenkreise: gleichmäßig über (-π/2, π/2), Pole bleiben frei
        let mut parallels = Vec::with_capacity(config.lat_lines);
        for i in 1..=config.lat_lines {
            let phi = -PI / 2.0 + (i as f32 / (config.lat_lines + 1) as f32) * PI;
            let ring_radius = r * phi.cos();
            let y = r * phi.sin();

            let mut ring = Vec::with_capacity(samples + 1);
            for k in 0..=samples {
                let theta = (k as f32 / samples as f32) * TAU;
                ring.push(Vec3::new(
                    ring_radius * theta.sin(),
                    y,
                    ring_radius * theta.cos(),
                ));
            }
            parallels.push(ring);
        }

        // Meridiane: volle Großkreise durch beide Pole
        let mut meridians = Vec::with_capacity(config.lon_lines);
        for j in 0..config.lon_lines {
            let lambda = (j as f32 / config.lon_lines as f32) * TAU;
            let (sin_l, cos_l) = (lambda.sin(), lambda.cos());

            let mut ring = Vec::with_capacity(samples + 1);
            for k in 0..=samples {
                let phi = (k as f32 / samples as f32) * TAU;
                let (sin_p, cos_p) = (phi.sin(), phi.cos());
                ring.push(Vec3::new(r * cos_p * sin_l, r * sin_p, r * cos_p * cos_l));
            }
            meridians.push(ring);
        }

        Self {
            parallels,
            meridians,
        }
    }

    /// Alle Polylinien in Zeichenreihenfolge
    pub fn polylines(&self) -> impl Iterator<Item = &Vec<Vec3>> {
        self.parallels.iter().chain(self.meridians.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_counts_match_config() {
        let config = GlobeConfig::default();
        let grid = GridCircleSet::build(&config);

        assert_eq!(grid.parallels.len(), 9);
        assert_eq!(grid.meridians.len(), 12);
        for ring in grid.polylines() {
            assert_eq!(ring.len(), config.grid_samples + 1);
        }
    }

    #[test]
    fn test_points_sit_on_lifted_sphere() {
        let config = GlobeConfig::default();
        let grid = GridCircleSet::build(&config);
        let expected = config.radius + config.grid_lift;

        for ring in grid.polylines() {
            for p in ring {
                assert_relative_eq!(p.length(), expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_parallels_avoid_poles() {
        let config = GlobeConfig {
            lat_lines: 3,
            ..GlobeConfig::default()
        };
        let grid = GridCircleSet::build(&config);
        let r = config.radius + config.grid_lift;

        for ring in &grid.parallels {
            for p in ring {
                assert!(p.y.abs() < r - 1e-3);
            }
        }
    }

    #[test]
    fn test_rings_are_closed() {
        let config = GlobeConfig::default();
        let grid = GridCircleSet::build(&config);

        for ring in grid.polylines() {
            let gap = ring[0].distance(ring[ring.len() - 1]);
            assert!(gap < 1e-4);
        }
    }

    #[test]
    fn test_first_meridian_faces_forward() {
        // λ = 0 liegt in der YZ-Ebene, Startpunkt auf +Z
        let config = GlobeConfig::default();
        let grid = GridCircleSet::build(&config);
        let start = grid.meridians[0][0];

        assert_relative_eq!(start.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(start.z, config.radius + config.grid_lift, epsilon = 1e-5);
    }
}
