use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::configuration::config::ViewerConfig;
use crate::simulation::controls::{Command, ControlHandle};
use crate::simulation::presets::Preset;
use crate::simulation::scenario::Simulation;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// One colour per particle type
const PALETTE: [(f32, f32, f32); 5] = [
    (1.0, 0.341, 0.2),   // #FF5733
    (0.2, 1.0, 0.341),   // #33FF57
    (0.2, 0.341, 1.0),   // #3357FF
    (1.0, 0.2, 0.961),   // #FF33F5
    (0.2, 1.0, 0.961),   // #33FFF5
];

const COUNT_STEP: usize = 100;
const FRICTION_STEP: f64 = 0.01;
const RANGE_STEP: f64 = 10.0;
const SIZE_STEP: f32 = 0.5;

#[derive(Resource)]
struct Viewer {
    settings: ViewerConfig,
    controls: ControlHandle,
}

/// Shared mesh and per-type materials, created at startup
#[derive(Resource)]
struct Palette {
    mesh: Mesh2dHandle,
    materials: Vec<Handle<ColorMaterial>>,
}

impl Palette {
    fn material(&self, kind: usize) -> Handle<ColorMaterial> {
        self.materials[kind % self.materials.len()].clone()
    }
}

pub fn run_2d(sim: Simulation, settings: ViewerConfig) {
    println!("run_2d: starting Bevy 2D viewer with {} particles", sim.system().len());

    let controls = sim.controls();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(sim)
        .insert_resource(Viewer { settings, controls })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_particles_system)
        .add_systems(
            Update,
            (
                keyboard_system,
                physics_step_system,
                respawn_system,
                sync_transforms_system,
            )
                .chain(),
        )
        .run();
}

fn setup_particles_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    viewer: Res<Viewer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let palette = Palette {
        mesh: Mesh2dHandle(meshes.add(Circle::new(viewer.settings.screen_radius()))),
        materials: PALETTE
            .iter()
            .map(|&(r, g, b)| materials.add(ColorMaterial::from(Color::srgb(r, g, b))))
            .collect(),
    };

    spawn_particles(&mut commands, &sim, &viewer.settings, &palette);
    commands.insert_resource(palette);
}

fn spawn_particles(commands: &mut Commands, sim: &Simulation, settings: &ViewerConfig, palette: &Palette) {
    for (i, (x, kind)) in sim.particles().enumerate() {
        let (sx, sy) = to_screen(sim, settings, x.x, x.y);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: palette.mesh.clone(),
                material: palette.material(kind),
                transform: Transform::from_xyz(sx, sy, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

/// World coordinates are `[0, w) x [0, h)`; the camera looks at the middle
fn to_screen(sim: &Simulation, settings: &ViewerConfig, x: f64, y: f64) -> (f32, f32) {
    let p = sim.params();
    let sx = (x - 0.5 * p.width()) as f32 * settings.scale;
    let sy = (y - 0.5 * p.height()) as f32 * settings.scale;
    (sx, sy)
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    sim: Res<Simulation>,
    mut viewer: ResMut<Viewer>,
    palette: Res<Palette>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let controls = viewer.controls.clone();
    let params = sim.params();

    // Particle size is rendering-only, so it changes here directly
    let size_delta = match (keys.just_pressed(KeyCode::Comma), keys.just_pressed(KeyCode::Period)) {
        (true, false) => -SIZE_STEP,
        (false, true) => SIZE_STEP,
        _ => 0.0,
    };
    if size_delta != 0.0 {
        let size = viewer.settings.nudge_particle_size(size_delta);
        // All particles share one mesh, so swapping the asset resizes them all
        meshes.insert(palette.mesh.0.id(), Mesh::from(Circle::new(viewer.settings.screen_radius())));
        info!("particle size = {}", size);
    }

    if keys.just_pressed(KeyCode::Space) {
        viewer.settings.paused = !viewer.settings.paused;
        info!("paused = {}", viewer.settings.paused);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        controls.reset_with_new_random_matrix();
    }

    let preset_keys = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
    ];
    for (key, preset) in preset_keys.into_iter().zip(Preset::ALL) {
        if keys.just_pressed(key) {
            controls.push(Command::ApplyPreset(preset));
        }
    }

    if keys.just_pressed(KeyCode::ArrowUp) {
        controls.set_particle_count(params.particle_count() + COUNT_STEP);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        controls.set_particle_count(params.particle_count().saturating_sub(COUNT_STEP));
    }

    let mut results = Vec::new();
    if keys.just_pressed(KeyCode::BracketLeft) {
        results.push(controls.set_friction(params.friction() - FRICTION_STEP));
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        results.push(controls.set_friction((params.friction() + FRICTION_STEP).min(1.0)));
    }
    if keys.just_pressed(KeyCode::Minus) {
        results.push(controls.set_interaction_range(params.interaction_range() - RANGE_STEP));
    }
    if keys.just_pressed(KeyCode::Equal) {
        results.push(controls.set_interaction_range(params.interaction_range() + RANGE_STEP));
    }
    for e in results.into_iter().filter_map(Result::err) {
        warn!("{}", e);
    }
}

fn physics_step_system(mut sim: ResMut<Simulation>, mut viewer: ResMut<Viewer>) {
    if viewer.settings.paused {
        // Still pick up control changes so the screen reflects them
        sim.apply_pending();
    } else if let Err(e) = sim.tick() {
        error!("step failed: {}", e);
        viewer.settings.paused = true;
    }
}

/// Rebuild the sprites when the population size changed
fn respawn_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    viewer: Res<Viewer>,
    palette: Res<Palette>,
    query: Query<Entity, With<ParticleIndex>>,
) {
    if query.iter().count() == sim.system().len() {
        return;
    }
    for e in &query {
        commands.entity(e).despawn();
    }
    spawn_particles(&mut commands, &sim, &viewer.settings, &palette);
}

fn sync_transforms_system(
    sim: Res<Simulation>,
    viewer: Res<Viewer>,
    palette: Res<Palette>,
    mut query: Query<(&ParticleIndex, &mut Transform, &mut Handle<ColorMaterial>)>,
) {
    for (ParticleIndex(i), mut transform, mut material) in &mut query {
        if let Some(p) = sim.system().particles.get(*i) {
            let (sx, sy) = to_screen(&sim, &viewer.settings, p.x.x, p.x.y);
            transform.translation.x = sx;
            transform.translation.y = sy;

            // Types are redrawn after a preset or reset
            let wanted = palette.material(p.kind);
            if *material != wanted {
                *material = wanted;
            }
        }
    }
}
