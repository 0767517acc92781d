// src/math/geometry/contour.rs

use crate::math::utils::{constants::TAU, simple_geometry};
use bevy::math::Vec2;

/// Vollständiger Parametersatz einer Superellipse. Dient gleichzeitig als
/// Cache-Schlüssel: zwei gleiche Specs erzeugen bitidentische Konturen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperellipseSpec {
    /// Halbachse X
    pub a: f32,
    /// Halbachse Y
    pub b: f32,
    /// Exponent (Ecken-Schärfe); > 0, vom Aufrufer garantiert
    pub n: f32,
    /// Anzahl der Segmente (Kontur hat segments + 1 Punkte)
    pub segments: usize,
    /// Rotation in der Parameterebene, Radiant
    pub rotation_rad: f32,
}

impl SuperellipseSpec {
    pub fn new(a: f32, b: f32, n: f32, segments: usize, rotation_rad: f32) -> Self {
        Self {
            a,
            b,
            n,
            segments,
            rotation_rad,
        }
    }

    /// Tastet die geschlossene Kontur ab: `segments + 1` Punkte, erster und
    /// letzter fallen (bis auf Float-Rauschen) zusammen.
    ///
    /// x = a·sign(cos t)·|cos t|^(2/n), y = b·sign(sin t)·|sin t|^(2/n),
    /// t gleichverteilt über [0, 2π]; Rotation erst nach dem Abtasten.
    pub fn sample(&self) -> Vec<Vec2> {
        let exponent = 2.0 / self.n;
        let mut points = Vec::with_capacity(self.segments + 1);

        for i in 0..=self.segments {
            let t = (i as f32 / self.segments as f32) * TAU;
            let c = t.cos();
            let s = t.sin();
            let x = self.a * c.signum() * c.abs().powf(exponent);
            let y = self.b * s.signum() * s.abs().powf(exponent);
            points.push(simple_geometry::rotate_vector_2d(
                Vec2::new(x, y),
                self.rotation_rad,
            ));
        }

        points
    }
}

/// Expliziter Ein-Eintrag-Cache für die zuletzt abgetastete Kontur.
/// Invalidiert nur, wenn sich der volle Parametersatz ändert — pro Frame
/// wiederholte Abfragen mit gleichem Spec kosten keine Neugenerierung.
#[derive(Debug, Default)]
pub struct ContourCache {
    entry: Option<(SuperellipseSpec, Vec<Vec2>)>,
}

impl ContourCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert die Kontur zum Spec, aus dem Cache oder frisch abgetastet.
    pub fn contour(&mut self, spec: SuperellipseSpec) -> &[Vec2] {
        let stale = match &self.entry {
            Some((cached_spec, _)) => *cached_spec != spec,
            None => true,
        };
        if stale {
            self.entry = Some((spec, spec.sample()));
        }
        match &self.entry {
            Some((_, points)) => points,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::comparison;

    #[test]
    fn test_contour_is_closed() {
        for &(a, b, n, segments) in &[
            (1.0, 0.6, 1.4, 64),
            (2.0, 0.6, 1.5, 384),
            (0.5, 0.5, 8.0, 16), // fast rechteckig
            (1.0, 1.0, 0.8, 32), // fast rautenförmig
        ] {
            let spec = SuperellipseSpec::new(a, b, n, segments, 0.3);
            let points = spec.sample();

            assert_eq!(points.len(), segments + 1);
            let first = points[0];
            let last = points[segments];
            assert!(comparison::nearly_equal_eps(first.x, last.x, 1e-4));
            assert!(comparison::nearly_equal_eps(first.y, last.y, 1e-4));
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let spec = SuperellipseSpec::new(2.0, 0.6, 1.5, 128, 0.0);
        assert_eq!(spec.sample(), spec.sample());
    }

    #[test]
    fn test_semi_axes_are_reached() {
        // Bei t = 0 liegt der Punkt exakt auf (a, 0).
        let spec = SuperellipseSpec::new(2.0, 0.6, 1.5, 256, 0.0);
        let points = spec.sample();
        assert!(comparison::nearly_equal(points[0].x, 2.0));
        assert!(comparison::nearly_equal(points[0].y, 0.0));
    }

    #[test]
    fn test_cache_hit_and_invalidation() {
        let mut cache = ContourCache::new();
        let spec = SuperellipseSpec::new(1.0, 0.6, 1.4, 32, 0.0);

        let first = cache.contour(spec).to_vec();
        let again = cache.contour(spec).to_vec();
        assert_eq!(first, again);

        // Jede Komponente des Schlüssels invalidiert
        let rotated = SuperellipseSpec {
            rotation_rad: 0.5,
            ..spec
        };
        let regenerated = cache.contour(rotated).to_vec();
        assert_ne!(first[1], regenerated[1]);

        let denser = SuperellipseSpec {
            segments: 64,
            ..spec
        };
        assert_eq!(cache.contour(denser).len(), 65);
    }
}
