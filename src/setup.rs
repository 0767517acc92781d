// src/setup.rs

use crate::globe::config::{rgba, GlobeConfig};
use crate::globe::systems::{EyeRig, GlobeAssembly, GlobeHandles, GlobeRoot, Pupil};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use bevy_panorbit_camera::PanOrbitCamera;

/// Leeres Dreieckslisten-Mesh; die Geometrie-Synchronisation füllt es
fn empty_mesh(with_vertex_colors: bool) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, Vec::<[f32; 3]>::new());
    if with_vertex_colors {
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, Vec::<[f32; 4]>::new());
    }
    mesh
}

/// Unbeleuchtetes, beidseitiges Material für die Globus-Flächen
fn surface_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Baut die komplette Szene auf: Wurzel → Aufbau → Kugel, Decal-Flächen,
/// Halo und Augen-Gruppe, dazu Boden, Rückwand, Licht und Kamera.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GlobeConfig>,
) {
    let handles = GlobeHandles {
        sphere_mesh: meshes.add(Sphere::new(config.radius).mesh().uv(48, 32)),
        halo_mesh: meshes.add(Sphere::new(config.radius + 0.03).mesh().uv(48, 32)),
        fill_mesh: meshes.add(empty_mesh(false)),
        glow_mesh: meshes.add(empty_mesh(true)),
        iris_mesh: meshes.add(Circle::new(config.iris_radius).mesh().resolution(48).build()),
        pupil_mesh: meshes.add(Circle::new(config.pupil_radius).mesh().resolution(48).build()),
        sphere_material: materials.add(surface_material(rgba([0.02, 0.02, 0.03], 0.35))),
        halo_material: materials.add(surface_material(rgba(config.line_color, 0.12))),
        fill_material: materials.add(surface_material(rgba(
            config.fill_color,
            config.fill_opacity,
        ))),
        glow_material: materials.add(surface_material(Color::WHITE)),
        iris_material: materials.add(surface_material(rgba(config.eye_color, 1.0))),
        pupil_material: materials.add(surface_material(rgba(config.pupil_color, 1.0))),
        floor_material: materials.add(surface_material(rgba(
            [1.0, 1.0, 1.0],
            config.floor_opacity,
        ))),
    };

    commands
        .spawn((GlobeRoot, SpatialBundle::default()))
        .with_children(|root| {
            root.spawn((GlobeAssembly, SpatialBundle::default()))
                .with_children(|assembly| {
                    assembly.spawn(PbrBundle {
                        mesh: handles.sphere_mesh.clone(),
                        material: handles.sphere_material.clone(),
                        ..default()
                    });
                    assembly.spawn(PbrBundle {
                        mesh: handles.halo_mesh.clone(),
                        material: handles.halo_material.clone(),
                        ..default()
                    });
                    assembly.spawn(PbrBundle {
                        mesh: handles.fill_mesh.clone(),
                        material: handles.fill_material.clone(),
                        ..default()
                    });
                    assembly.spawn(PbrBundle {
                        mesh: handles.glow_mesh.clone(),
                        material: handles.glow_material.clone(),
                        ..default()
                    });

                    // Augen-Gruppe auf Decal-Höhe, Blick entlang +Z
                    assembly
                        .spawn((
                            EyeRig,
                            SpatialBundle::from_transform(Transform::from_xyz(
                                0.0,
                                0.0,
                                config.radius + config.decal_surface_offset,
                            )),
                        ))
                        .with_children(|eye| {
                            eye.spawn(PbrBundle {
                                mesh: handles.iris_mesh.clone(),
                                material: handles.iris_material.clone(),
                                ..default()
                            });
                            // Pupille minimal vor der Iris gegen Z-Fighting
                            eye.spawn((
                                Pupil,
                                PbrBundle {
                                    mesh: handles.pupil_mesh.clone(),
                                    material: handles.pupil_material.clone(),
                                    transform: Transform::from_xyz(0.0, 0.0, 0.001),
                                    ..default()
                                },
                            ));
                            eye.spawn(PointLightBundle {
                                point_light: PointLight {
                                    intensity: 60_000.0,
                                    range: 6.0,
                                    color: rgba(config.eye_color, 1.0),
                                    ..default()
                                },
                                transform: Transform::from_xyz(0.0, 0.0, 0.25),
                                ..default()
                            });
                        });
                });
        });

    // Boden und Rückwand als matte Flächen
    commands.spawn(PbrBundle {
        mesh: meshes.add(Plane3d::default().mesh().size(8.0, 8.0)),
        material: handles.floor_material.clone(),
        transform: Transform::from_xyz(0.0, -(config.radius + 0.6), 0.0),
        ..default()
    });
    commands.spawn(PbrBundle {
        mesh: meshes.add(Plane3d::default().mesh().size(8.0, 6.0)),
        material: handles.floor_material.clone(),
        transform: Transform::from_xyz(0.0, 0.0, -(config.radius + 2.0))
            .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        ..default()
    });

    commands.insert_resource(handles);

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
    });
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 400_000.0,
            range: 20.0,
            ..default()
        },
        transform: Transform::from_xyz(3.0, 4.0, 5.0),
        ..default()
    });

    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 0.4, 4.5).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            ..default()
        },
    ));
}
