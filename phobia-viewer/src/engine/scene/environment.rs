use bevy::prelude::*;
use constants::scene::{
    JAR_HEIGHT, JAR_OPACITY, JAR_RADIUS, LID_HEIGHT, LID_RADIUS, SPIDER_OFFSET_IN_JAR,
    SPIDER_SCALE, TABLE_LEG_INSET, TABLE_LEG_SIZE, TABLE_POSITION, TABLE_TOP_SIZE,
};

use crate::engine::assets::scene_assets::{LoadKey, SceneAssets};
use crate::engine::loading::load_registry::{LoadOutcome, LoadSettled};
use crate::engine::loading::texture_gate::{TextureGate, TexturesReady};

/// Root of everything revealed after the transition. Spawned hidden.
#[derive(Component)]
pub struct EnvironmentGroup;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnvironmentPiece {
    Table,
    TableLeg,
    Jar,
    Lid,
    Spider,
}

/// Meshes built synchronously at startup, dressed later.
#[derive(Resource, Debug, Clone)]
pub struct StaticGeometry {
    pub table_top: Handle<Mesh>,
    pub table_leg: Handle<Mesh>,
    pub jar: Handle<Mesh>,
    pub lid: Handle<Mesh>,
}

impl StaticGeometry {
    pub fn build(meshes: &mut Assets<Mesh>) -> Self {
        Self {
            table_top: meshes.add(Cuboid::from_size(TABLE_TOP_SIZE)),
            table_leg: meshes.add(Cuboid::from_size(TABLE_LEG_SIZE)),
            jar: meshes.add(Cylinder::new(JAR_RADIUS, JAR_HEIGHT)),
            lid: meshes.add(Cylinder::new(LID_RADIUS, LID_HEIGHT)),
        }
    }
}

/// Table top surface height in world space.
pub fn table_surface_y() -> f32 {
    TABLE_POSITION.y + TABLE_TOP_SIZE.y * 0.5
}

pub fn jar_position() -> Vec3 {
    Vec3::new(
        TABLE_POSITION.x,
        table_surface_y() + JAR_HEIGHT * 0.5,
        TABLE_POSITION.z,
    )
}

pub fn lid_position() -> Vec3 {
    Vec3::new(
        TABLE_POSITION.x,
        table_surface_y() + JAR_HEIGHT + LID_HEIGHT * 0.5,
        TABLE_POSITION.z,
    )
}

pub fn spider_position() -> Vec3 {
    Vec3::new(TABLE_POSITION.x, table_surface_y(), TABLE_POSITION.z) + SPIDER_OFFSET_IN_JAR
}

/// Leg centres relative to the table top, one per corner.
fn table_leg_offsets() -> [Vec3; 4] {
    let x = TABLE_TOP_SIZE.x * 0.5 - TABLE_LEG_INSET;
    let z = TABLE_TOP_SIZE.z * 0.5 - TABLE_LEG_INSET;
    let y = -(TABLE_TOP_SIZE.y + TABLE_LEG_SIZE.y) * 0.5;
    [
        Vec3::new(x, y, z),
        Vec3::new(-x, y, z),
        Vec3::new(x, y, -z),
        Vec3::new(-x, y, -z),
    ]
}

pub fn spawn_environment_group(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(StaticGeometry::build(&mut meshes));
    commands.spawn((
        EnvironmentGroup,
        Transform::IDENTITY,
        Visibility::Hidden,
        Name::new("Environment"),
    ));
}

fn textured_material(
    gate: &TextureGate,
    assets: &SceneAssets,
    key: LoadKey,
    base_color: Color,
) -> StandardMaterial {
    let texture = if gate.uses_placeholder(key) {
        None
    } else {
        assets.texture(key).cloned()
    };

    StandardMaterial {
        base_color,
        base_color_texture: texture,
        ..default()
    }
}

/// Dress the static geometry once every gated texture has landed.
pub fn assemble_static_geometry(
    mut ready: EventReader<TexturesReady>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    geometry: Res<StaticGeometry>,
    assets: Res<SceneAssets>,
    gate: Res<TextureGate>,
    groups: Query<Entity, With<EnvironmentGroup>>,
) {
    if ready.read().count() == 0 {
        return;
    }
    let Ok(group) = groups.single() else {
        warn!("Textures ready but no environment group to assemble into");
        return;
    };

    let table_material = materials.add(textured_material(
        &gate,
        &assets,
        LoadKey::TableTexture,
        Color::WHITE,
    ));
    let jar_material = materials.add(StandardMaterial {
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.05,
        reflectance: 0.8,
        double_sided: true,
        cull_mode: None,
        ..textured_material(
            &gate,
            &assets,
            LoadKey::JarTexture,
            Color::srgba(1.0, 1.0, 1.0, JAR_OPACITY),
        )
    });
    let lid_material = materials.add(StandardMaterial {
        metallic: 0.9,
        perceptual_roughness: 0.35,
        ..textured_material(&gate, &assets, LoadKey::LidTexture, Color::WHITE)
    });

    let table = commands
        .spawn((
            Mesh3d(geometry.table_top.clone()),
            MeshMaterial3d(table_material.clone()),
            Transform::from_translation(TABLE_POSITION),
            EnvironmentPiece::Table,
            ChildOf(group),
        ))
        .id();

    for offset in table_leg_offsets() {
        commands.spawn((
            Mesh3d(geometry.table_leg.clone()),
            MeshMaterial3d(table_material.clone()),
            Transform::from_translation(offset),
            EnvironmentPiece::TableLeg,
            ChildOf(table),
        ));
    }

    commands.spawn((
        Mesh3d(geometry.jar.clone()),
        MeshMaterial3d(jar_material),
        Transform::from_translation(jar_position()),
        EnvironmentPiece::Jar,
        ChildOf(group),
    ));

    commands.spawn((
        Mesh3d(geometry.lid.clone()),
        MeshMaterial3d(lid_material),
        Transform::from_translation(lid_position()),
        EnvironmentPiece::Lid,
        ChildOf(group),
    ));

    info!("Static geometry assembled (table, jar, lid)");
}

/// Add the spider to the group as soon as its model has loaded.
pub fn assemble_spider(
    mut settled: EventReader<LoadSettled>,
    mut commands: Commands,
    assets: Res<SceneAssets>,
    groups: Query<Entity, With<EnvironmentGroup>>,
) {
    let spider_loaded = settled
        .read()
        .filter(|event| event.key == LoadKey::SpiderModel && event.outcome == LoadOutcome::Loaded)
        .count();
    if spider_loaded == 0 {
        return;
    }
    let Ok(group) = groups.single() else {
        warn!("Spider loaded but no environment group to assemble into");
        return;
    };

    commands.spawn((
        SceneRoot(assets.spider_scene.clone()),
        Transform::from_translation(spider_position()).with_scale(Vec3::splat(SPIDER_SCALE)),
        EnvironmentPiece::Spider,
        ChildOf(group),
    ));

    info!("Spider assembled into environment");
}
