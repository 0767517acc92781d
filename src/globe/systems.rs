// src/globe/systems.rs

use crate::globe::animation::{AnimationClock, AppearanceState};
use crate::globe::config::{rgba, GlobeConfig};
use crate::globe::decal::DecalMeshBuilder;
use crate::globe::gaze::GazeState;
use crate::globe::grid::GridCircleSet;
use crate::globe::orientation::{OrientationState, OrientationTuning};
use crate::globe::pointer::PointerInput;
use crate::math::prelude::*;
use bevy::prelude::*;
use bevy::render::mesh::Indices;

/// Wurzel der gesamten Szene; trägt die Schwebe-Bewegung
#[derive(Component)]
pub struct GlobeRoot;

/// Rotierender Aufbau aus Kugel, Gitternetz, Decal und Auge
#[derive(Component)]
pub struct GlobeAssembly;

/// Augen-Gruppe vor der Kugel; sitzt auf der Decal-Höhe
#[derive(Component)]
pub struct EyeRig;

/// Pupillenscheibe innerhalb der Iris
#[derive(Component)]
pub struct Pupil;

/// Asset-Griffe der Szene, beim Aufbau einmal angelegt
#[derive(Resource)]
pub struct GlobeHandles {
    pub sphere_mesh: Handle<Mesh>,
    pub halo_mesh: Handle<Mesh>,
    pub fill_mesh: Handle<Mesh>,
    pub glow_mesh: Handle<Mesh>,
    pub iris_mesh: Handle<Mesh>,
    pub pupil_mesh: Handle<Mesh>,
    pub sphere_material: Handle<StandardMaterial>,
    pub halo_material: Handle<StandardMaterial>,
    pub fill_material: Handle<StandardMaterial>,
    pub glow_material: Handle<StandardMaterial>,
    pub iris_material: Handle<StandardMaterial>,
    pub pupil_material: Handle<StandardMaterial>,
    pub floor_material: Handle<StandardMaterial>,
}

/// Teilmenge der Konfiguration, die Geometrie bestimmt. Stil-Werte wie
/// Deckkräfte fehlen bewusst: deren Änderung darf keinen Neuaufbau auslösen.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryKey {
    radius: f32,
    lat_lines: usize,
    lon_lines: usize,
    grid_samples: usize,
    grid_lift: f32,
    decal_a: f32,
    decal_b: f32,
    decal_n: f32,
    decal_fill_segments: usize,
    decal_outline_segments: usize,
    decal_plane_width_factor: f32,
    decal_plane_height_factor: f32,
    decal_center_lon_deg: f32,
    decal_center_lat_deg: f32,
    decal_angle_deg: f32,
    decal_surface_offset: f32,
    glow_scale: f32,
    glow_inner_alpha: f32,
    line_color: [f32; 3],
    iris_radius: f32,
    pupil_radius: f32,
}

impl From<&GlobeConfig> for GeometryKey {
    fn from(config: &GlobeConfig) -> Self {
        Self {
            radius: config.radius,
            lat_lines: config.lat_lines,
            lon_lines: config.lon_lines,
            grid_samples: config.grid_samples,
            grid_lift: config.grid_lift,
            decal_a: config.decal_a,
            decal_b: config.decal_b,
            decal_n: config.decal_n,
            decal_fill_segments: config.decal_fill_segments,
            decal_outline_segments: config.decal_outline_segments,
            decal_plane_width_factor: config.decal_plane_width_factor,
            decal_plane_height_factor: config.decal_plane_height_factor,
            decal_center_lon_deg: config.decal_center_lon_deg,
            decal_center_lat_deg: config.decal_center_lat_deg,
            decal_angle_deg: config.decal_angle_deg,
            decal_surface_offset: config.decal_surface_offset,
            glow_scale: config.glow_scale,
            glow_inner_alpha: config.glow_inner_alpha,
            line_color: config.line_color,
            iris_radius: config.iris_radius,
            pupil_radius: config.pupil_radius,
        }
    }
}

/// Abgeleitete Geometrie samt Schlüssel des Stands, aus dem sie erzeugt wurde
#[derive(Resource, Default)]
pub struct GlobeGeometry {
    key: Option<GeometryKey>,
    pub grid: GridCircleSet,
    pub outline: Vec<Vec3>,
    contour_cache: ContourCache,
}

/// Prüft den Geometrie-Schlüssel und baut bei Abweichung Gitter, Decal-
/// und Augen-Meshes neu. Im eingeschwungenen Zustand ein reiner Vergleich.
pub fn sync_geometry(
    config: Res<GlobeConfig>,
    mut geometry: ResMut<GlobeGeometry>,
    handles: Res<GlobeHandles>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut eye_rigs: Query<&mut Transform, With<EyeRig>>,
) {
    let key = GeometryKey::from(config.as_ref());
    if geometry.key.as_ref() == Some(&key) {
        return;
    }

    geometry.grid = GridCircleSet::build(&config);

    let geometry = geometry.as_mut();
    match DecalMeshBuilder::outline(&config, &mut geometry.contour_cache) {
        Ok(outline) => geometry.outline = outline,
        Err(err) => {
            warn!("Decal outline rejected: {err}");
            geometry.key = None;
            return;
        }
    }

    match DecalMeshBuilder::fill(&config, &mut geometry.contour_cache) {
        Ok(fill) => {
            if let Some(mesh) = meshes.get_mut(&handles.fill_mesh) {
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, fill.positions);
                mesh.insert_indices(Indices::U32(fill.indices));
            }
        }
        Err(err) => {
            warn!("Decal fill rejected: {err}");
            geometry.key = None;
            return;
        }
    }

    match DecalMeshBuilder::glow_band(&config, &mut geometry.contour_cache) {
        Ok(band) => {
            if let Some(mesh) = meshes.get_mut(&handles.glow_mesh) {
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, band.positions);
                mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, band.colors);
            }
        }
        Err(err) => {
            warn!("Glow band rejected: {err}");
            geometry.key = None;
            return;
        }
    }

    if let Some(mesh) = meshes.get_mut(&handles.sphere_mesh) {
        *mesh = Sphere::new(config.radius).mesh().uv(48, 32);
    }
    if let Some(mesh) = meshes.get_mut(&handles.halo_mesh) {
        *mesh = Sphere::new(config.radius + 0.03).mesh().uv(48, 32);
    }
    if let Some(mesh) = meshes.get_mut(&handles.iris_mesh) {
        *mesh = Circle::new(config.iris_radius).mesh().resolution(48).build();
    }
    if let Some(mesh) = meshes.get_mut(&handles.pupil_mesh) {
        *mesh = Circle::new(config.pupil_radius).mesh().resolution(48).build();
    }

    // Die Augen-Gruppe folgt der Decal-Höhe vor der Kugel
    for mut transform in eye_rigs.iter_mut() {
        transform.translation = Vec3::new(0.0, 0.0, config.radius + config.decal_surface_offset);
    }

    geometry.key = Some(key);
}

/// Überträgt Farb- und Deckkraftwerte auf die Materialien
pub fn refresh_style(
    config: Res<GlobeConfig>,
    handles: Res<GlobeHandles>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !config.is_changed() {
        return;
    }

    let assignments = [
        (&handles.fill_material, rgba(config.fill_color, config.fill_opacity)),
        (&handles.iris_material, rgba(config.eye_color, 1.0)),
        (&handles.pupil_material, rgba(config.pupil_color, 1.0)),
        (&handles.sphere_material, rgba([0.02, 0.02, 0.03], 0.35)),
        (&handles.halo_material, rgba(config.line_color, 0.12)),
        (&handles.floor_material, rgba([1.0, 1.0, 1.0], config.floor_opacity)),
    ];
    for (handle, color) in assignments {
        if let Some(material) = materials.get_mut(handle) {
            material.base_color = color;
        }
    }
}

/// Hält die Gizmo-Linienbreite auf dem konfigurierten Wert.
/// Getrennt vom Zeichnen, da `Gizmos` den Config-Store selbst liest.
pub fn configure_wireframe_style(
    config: Res<GlobeConfig>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    if !config.is_changed() {
        return;
    }
    let (gizmo_config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.line_width = config.line_width;
}

/// Zeichnet das Gitternetz und den Decal-Umriss über die gecachten
/// Polylinien, mitgeführt durch die aktuelle Aufbau-Transformation
pub fn draw_wireframe(
    config: Res<GlobeConfig>,
    geometry: Res<GlobeGeometry>,
    mut gizmos: Gizmos,
    assemblies: Query<&GlobalTransform, With<GlobeAssembly>>,
) {
    let color = rgba(config.line_color, config.line_opacity);
    for transform in assemblies.iter() {
        for line in geometry.grid.polylines() {
            gizmos.linestrip(line.iter().map(|p| transform.transform_point(*p)), color);
        }
        gizmos.linestrip(
            geometry.outline.iter().map(|p| transform.transform_point(*p)),
            color,
        );
    }
}

/// Glättet die Orientierung gegen den Zeiger und schreibt Rotation
/// und Erscheinen-Skalierung auf den Aufbau
pub fn drive_orientation(
    config: Res<GlobeConfig>,
    pointer: Res<PointerInput>,
    appearance: Res<AppearanceState>,
    mut orientation: ResMut<OrientationState>,
    mut assemblies: Query<&mut Transform, With<GlobeAssembly>>,
) {
    let tuning = OrientationTuning::from_config(&config);
    *orientation = orientation.stepped(pointer.ndc, &tuning);

    let scale = appearance.scale(config.appear_scale_start);
    for mut transform in assemblies.iter_mut() {
        transform.rotation = orientation.rotation(tuning.base_roll);
        transform.scale = Vec3::splat(scale);
    }
}

/// Glättet den Pupillenversatz gegen den Zeiger
pub fn drive_gaze(
    config: Res<GlobeConfig>,
    pointer: Res<PointerInput>,
    mut gaze: ResMut<GazeState>,
    mut pupils: Query<&mut Transform, With<Pupil>>,
) {
    *gaze = gaze.stepped(pointer.ndc, &config);
    for mut transform in pupils.iter_mut() {
        transform.translation.x = gaze.offset.x;
        transform.translation.y = gaze.offset.y;
    }
}

/// Treibt Animationszeit und Erscheinen-Fortschritt voran
pub fn advance_animation(
    time: Res<Time>,
    config: Res<GlobeConfig>,
    mut clock: ResMut<AnimationClock>,
    mut appearance: ResMut<AppearanceState>,
) {
    clock.tick(time.delta_seconds());
    if !appearance.is_complete() {
        *appearance = appearance.stepped(time.delta_seconds(), config.appear_rate);
    }
}

/// Lässt die Wurzel sanft schweben und pendeln
pub fn float_root(clock: Res<AnimationClock>, mut roots: Query<&mut Transform, With<GlobeRoot>>) {
    let offset = clock.float_offset();
    let sway = Quat::from_rotation_z(clock.float_sway());
    for mut transform in roots.iter_mut() {
        transform.translation = offset;
        transform.rotation = sway;
    }
}

/// Moduliert die Glow-Deckkraft über die Material-Grundfarbe; die
/// Vertex-Farben liefern den radialen Verlauf und bleiben unberührt
pub fn pulse_glow(
    config: Res<GlobeConfig>,
    clock: Res<AnimationClock>,
    handles: Res<GlobeHandles>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if let Some(material) = materials.get_mut(&handles.glow_material) {
        // Grundfarbe Weiß, nur die Alpha oszilliert; sie multipliziert
        // sich mit den Vertex-Alphas des Bandes
        material.base_color = Color::rgba(1.0, 1.0, 1.0, clock.glow_pulse(&config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_key_ignores_style_values() {
        let base = GlobeConfig::default();
        let mut styled = base.clone();
        styled.line_opacity = 0.2;
        styled.fill_opacity = 0.5;
        styled.floor_opacity = 0.0;
        styled.line_width = 4.0;

        assert_eq!(GeometryKey::from(&base), GeometryKey::from(&styled));
    }

    #[test]
    fn test_geometry_key_tracks_shape_values() {
        let base = GlobeConfig::default();

        let mut resized = base.clone();
        resized.radius = 1.5;
        assert_ne!(GeometryKey::from(&base), GeometryKey::from(&resized));

        let mut reshaped = base.clone();
        reshaped.decal_n = 2.0;
        assert_ne!(GeometryKey::from(&base), GeometryKey::from(&reshaped));

        let mut regridded = base.clone();
        regridded.lon_lines = 24;
        assert_ne!(GeometryKey::from(&base), GeometryKey::from(&regridded));
    }
}
