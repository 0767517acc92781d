// src/globe/decal.rs

use crate::globe::config::GlobeConfig;
use crate::math::prelude::*;
use bevy::math::{Vec2, Vec3};

/// Indizierte Dreiecksfläche der projizierten Decal-Füllung
#[derive(Debug, Clone)]
pub struct FillGeometry {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Glow-Band als nicht-indizierte Dreiecksliste mit Vertex-Farben.
/// Innere Vertices tragen die volle konfigurierte Alpha, äußere 0 —
/// der radiale Verlauf liegt damit in der Geometrie, nicht im Material.
#[derive(Debug, Clone)]
pub struct GlowBand {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

/// Baut Füllung, Umriss und Glow-Band der Superellipse auf der Kugel.
/// Alle drei teilen sich dieselbe Tangentialebenen-Kontur; der Cache sorgt
/// dafür, dass sie pro Parametersatz nur einmal abgetastet wird.
pub struct DecalMeshBuilder;

impl DecalMeshBuilder {
    /// Projektor am konfigurierten Decal-Zentrum
    pub fn projector(config: &GlobeConfig) -> MathResult<DecalProjector> {
        let frame = TangentFrame::at_degrees(
            config.decal_center_lon_deg,
            config.decal_center_lat_deg,
        );
        Ok(DecalProjector::new(frame, config.radius)?
            .with_surface_offset(config.decal_surface_offset))
    }

    /// Kontur in Tangentialebenen-Koordinaten: Superellipse abtasten,
    /// danach auf die halbe Flächenausdehnung normieren.
    pub fn plane_contour(
        config: &GlobeConfig,
        segments: usize,
        scale: f32,
        cache: &mut ContourCache,
    ) -> Vec<Vec2> {
        let spec = SuperellipseSpec::new(
            config.decal_a,
            config.decal_b,
            config.decal_n,
            segments,
            angles::deg_to_rad(config.decal_angle_deg),
        );
        let (half_w, half_h) = config.decal_half_extents();

        cache
            .contour(spec)
            .iter()
            .map(|p| {
                Vec2::new(
                    (p.x / config.decal_a) * half_w * scale,
                    (p.y / config.decal_b) * half_h * scale,
                )
            })
            .collect()
    }

    /// Füllung: Triangulierung in der Ebene, dann Projektion jedes Vertex.
    /// Die 2D-Windung bleibt unter der Projektion erhalten.
    pub fn fill(config: &GlobeConfig, cache: &mut ContourCache) -> MathResult<FillGeometry> {
        let contour = Self::plane_contour(config, config.decal_fill_segments, 1.0, cache);
        let triangles = ContourTriangulator::triangulate(&contour)?;
        let projector = Self::projector(config)?;

        // Schlusspunkt fällt weg; die Indizes zeigen nur auf echte Vertices
        let vertex_count = contour.len() - 1;
        let positions = contour[..vertex_count]
            .iter()
            .map(|&p| projector.project(p).to_array())
            .collect();
        let indices = triangles
            .iter()
            .flat_map(|t| t.iter().map(|&i| i as u32))
            .collect();

        Ok(FillGeometry { positions, indices })
    }

    /// Umriss: jede Konturecke projiziert, als geschlossene Polylinie
    pub fn outline(config: &GlobeConfig, cache: &mut ContourCache) -> MathResult<Vec<Vec3>> {
        let contour = Self::plane_contour(config, config.decal_outline_segments, 1.0, cache);
        let projector = Self::projector(config)?;
        Ok(projector.project_contour(&contour))
    }

    /// Glow-Band: Basiskontur plus nach außen skalierte Kopie, als
    /// Dreiecksstreifen-Paare verbunden. Geometrie ist statisch; nur die
    /// Material-Deckkraft oszilliert pro Frame.
    pub fn glow_band(config: &GlobeConfig, cache: &mut ContourCache) -> MathResult<GlowBand> {
        let segments = config.decal_fill_segments;
        let inner = Self::plane_contour(config, segments, 1.0, cache);
        let outer = Self::plane_contour(config, segments, 1.0 + config.glow_scale, cache);
        let projector = Self::projector(config)?;

        let inner_rgba = [
            config.line_color[0],
            config.line_color[1],
            config.line_color[2],
            config.glow_inner_alpha,
        ];
        let outer_rgba = [
            config.line_color[0],
            config.line_color[1],
            config.line_color[2],
            0.0,
        ];

        let mut positions = Vec::with_capacity(segments * 6);
        let mut colors = Vec::with_capacity(segments * 6);
        let mut push = |p: Vec2, rgba: [f32; 4]| {
            positions.push(projector.project(p).to_array());
            colors.push(rgba);
        };

        for i in 0..segments {
            let (p0, p1) = (inner[i], inner[i + 1]);
            let (q0, q1) = (outer[i], outer[i + 1]);
            // Dreieck 1: p0, q0, p1
            push(p0, inner_rgba);
            push(q0, outer_rgba);
            push(p1, inner_rgba);
            // Dreieck 2: p1, q0, q1
            push(p1, inner_rgba);
            push(q0, outer_rgba);
            push(q1, outer_rgba);
        }

        Ok(GlowBand { positions, colors })
    }
}
