// src/math/geometry/triangulation.rs

use crate::math::{error::*, utils::*};
use bevy::math::Vec2;

/// Triangle representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Berechnet die Fläche des Dreiecks
    pub fn area(&self) -> f32 {
        0.5 * ((self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y))
            .abs()
    }

    /// Prüft ob ein Punkt im Dreieck liegt
    pub fn contains_point(&self, point: Vec2) -> bool {
        let sign = |p1: Vec2, p2: Vec2, p3: Vec2| -> f32 {
            (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
        };

        let d1 = sign(point, self.a, self.b);
        let d2 = sign(point, self.b, self.c);
        let d3 = sign(point, self.c, self.a);

        let has_neg = (d1 < 0.0) || (d2 < 0.0) || (d3 < 0.0);
        let has_pos = (d1 > 0.0) || (d2 > 0.0) || (d3 > 0.0);

        !(has_neg && has_pos)
    }
}

/// Ear-Clipping-Triangulierung für geschlossene Konturen ohne Löcher.
/// Arbeitet auf Vertex-Indizes, damit jeder Vertex genau einmal existiert
/// und nachgelagert genau einmal projiziert wird.
pub struct ContourTriangulator;

impl ContourTriangulator {
    /// Trianguliert eine Kontur. Ein doppelter Schlusspunkt (erster ==
    /// letzter) wird vorab entfernt; die Indizes beziehen sich auf die
    /// übergebene Punktfolge. Selbstschneidende Konturen sind undefiniert.
    pub fn triangulate(vertices: &[Vec2]) -> MathResult<Vec<[usize; 3]>> {
        // Entferne duplizierten letzten Punkt bei geschlossenen Konturen
        let count = if vertices.len() >= 2
            && vertices
                .first()
                .zip(vertices.last())
                .is_some_and(|(f, l)| f.distance_squared(*l) < constants::EPSILON_SQUARED)
        {
            vertices.len() - 1
        } else {
            vertices.len()
        };

        if count < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: count,
            });
        }

        // Orientierung normalisieren: Ear-Test unten erwartet CCW.
        let mut remaining: Vec<usize> = (0..count).collect();
        if Self::signed_area(&vertices[..count]) < 0.0 {
            remaining.reverse();
        }

        let mut triangles = Vec::with_capacity(count - 2);

        while remaining.len() > 3 {
            let mut ear_found = false;

            for i in 0..remaining.len() {
                let prev = remaining[(i + remaining.len() - 1) % remaining.len()];
                let curr = remaining[i];
                let next = remaining[(i + 1) % remaining.len()];

                if Self::is_ear(vertices, prev, curr, next, &remaining) {
                    triangles.push([prev, curr, next]);
                    remaining.remove(i);
                    ear_found = true;
                    break;
                }
            }

            if !ear_found {
                return Err(MathError::GeometricFailure {
                    operation: "No ear found in contour (possibly self-intersecting)".to_string(),
                });
            }
        }

        triangles.push([remaining[0], remaining[1], remaining[2]]);
        Ok(triangles)
    }

    /// Prüft ob drei aufeinanderfolgende Vertices ein "Ear" bilden
    fn is_ear(vertices: &[Vec2], prev: usize, curr: usize, next: usize, remaining: &[usize]) -> bool {
        let (p, c, n) = (vertices[prev], vertices[curr], vertices[next]);

        // 1. Konvexe Ecke (Links-Kurve)?
        let cross = (c.x - p.x) * (n.y - p.y) - (c.y - p.y) * (n.x - p.x);
        if cross <= 0.0 {
            return false; // Reflex vertex
        }

        // 2. Liegt ein anderer verbliebener Vertex im Dreieck?
        let triangle = Triangle::new(p, c, n);
        for &idx in remaining {
            if idx == prev || idx == curr || idx == next {
                continue;
            }
            if triangle.contains_point(vertices[idx]) {
                return false;
            }
        }

        true
    }

    /// Vorzeichenbehaftete Fläche (Shoelace); > 0 bedeutet CCW.
    pub fn signed_area(vertices: &[Vec2]) -> f32 {
        let mut sum = 0.0;
        for i in 0..vertices.len() {
            let p = vertices[i];
            let q = vertices[(i + 1) % vertices.len()];
            sum += p.x * q.y - q.x * p.y;
        }
        0.5 * sum
    }

    /// Gesamtfläche einer Index-Triangulierung
    pub fn total_area(vertices: &[Vec2], triangles: &[[usize; 3]]) -> f32 {
        triangles
            .iter()
            .map(|&[a, b, c]| Triangle::new(vertices[a], vertices[b], vertices[c]).area())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_basic_operations() {
        let triangle = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 1.0),
        );

        assert!(comparison::nearly_equal(triangle.area(), 0.5));
        assert!(triangle.contains_point(Vec2::new(0.5, 0.3)));
        assert!(!triangle.contains_point(Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_square_contour() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0), // geschlossen
        ];

        let triangles = ContourTriangulator::triangulate(&square).unwrap();
        assert_eq!(triangles.len(), 2);
        assert!(comparison::nearly_equal(
            ContourTriangulator::total_area(&square, &triangles),
            1.0
        ));
    }

    #[test]
    fn test_clockwise_input_is_normalized() {
        let square_cw = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ];

        let triangles = ContourTriangulator::triangulate(&square_cw).unwrap();
        assert_eq!(triangles.len(), 2);
        assert!(comparison::nearly_equal(
            ContourTriangulator::total_area(&square_cw, &triangles),
            1.0
        ));
    }

    #[test]
    fn test_concave_contour() {
        // Pfeilform mit Reflex-Vertex bei (0.5, 0.5)
        let arrow = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 0.5),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];

        let triangles = ContourTriangulator::triangulate(&arrow).unwrap();
        assert_eq!(triangles.len(), 3);
        assert!(comparison::nearly_equal_eps(
            ContourTriangulator::total_area(&arrow, &triangles),
            0.75,
            1e-4
        ));
    }

    #[test]
    fn test_too_few_points() {
        let result = ContourTriangulator::triangulate(&[Vec2::ZERO, Vec2::X]);
        assert!(matches!(
            result,
            Err(MathError::InsufficientPoints { expected: 3, .. })
        ));
    }

    #[test]
    fn test_superellipse_contour_triangulates_fully() {
        use crate::math::geometry::contour::SuperellipseSpec;

        let contour = SuperellipseSpec::new(2.0, 0.6, 1.5, 64, 0.0).sample();
        let triangles = ContourTriangulator::triangulate(&contour).unwrap();
        // n Eckpunkte (Schlusspunkt entfernt) ergeben n − 2 Dreiecke
        assert_eq!(triangles.len(), 62);
    }
}
