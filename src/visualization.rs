//! 3D playback of a game using kiss3d.

use std::time::{Duration, Instant};

use kiss3d::prelude::*;

use hanoi::animation::{Point, Transition};
use hanoi::game::{Game, State};
use hanoi::pegs::{Disk, Peg, Pegs};
use hanoi::render::Renderer;

/// Horizontal distance between two pegs.
const COLUMN_SPACING: f32 = 3.0;
/// Height of one disk slot.
const LEVEL_HEIGHT: f32 = 0.4;
/// Top surface of the base plate.
const BASE_TOP: f32 = -1.0;

/// Collects what the game reports so the render loop can pick it up.
#[derive(Default)]
pub struct SceneRenderer {
    transitions: Vec<Transition>,
    messages: Vec<String>,
}

impl Renderer for SceneRenderer {
    fn animate(&mut self, from: &Peg, to: &Peg, disk: Disk) {
        self.transitions.push(Transition::new(from, to, disk));
    }

    fn display_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Returns the display color of a disk, from red (smallest) to blue.
fn disk_color(disk: Disk, disk_count: usize) -> Color {
    let t = if disk_count > 1 {
        (disk.size() as f32 - 1.0) / (disk_count as f32 - 1.0)
    } else {
        0.0
    };
    Color::new(1.0 - 0.8 * t, 0.3 + 0.4 * (1.0 - (2.0 * t - 1.0).abs()), 0.2 + 0.8 * t, 1.0)
}

/// Converts a board position to world coordinates.
///
/// Columns map to X with the middle peg at the origin; levels stack up
/// from the base plate along Y.
fn world_position(point: Point) -> Vec3 {
    Vec3::new(
        (point.column - 1.0) * COLUMN_SPACING,
        BASE_TOP + (point.level + 0.5) * LEVEL_HEIGHT,
        0.0,
    )
}

/// A disk in the 3D scene.
struct RenderedDisk {
    node: SceneNode3d,
    disk: Disk,
}

/// Builds the base, the three rods and every disk of `pegs`.
///
/// Returns the disks sorted by size, so disk `n` is at index `n - 1`.
fn build_scene(scene: &mut SceneNode3d, pegs: &Pegs) -> Vec<RenderedDisk> {
    let disk_count = pegs.disk_count();
    let rod_height = (disk_count as f32 + 1.0) * LEVEL_HEIGHT;

    scene
        .add_cube(COLUMN_SPACING * 3.2, 0.2, COLUMN_SPACING * 0.9)
        .set_color(Color::new(0.5, 0.35, 0.2, 1.0))
        .set_position(Vec3::new(0.0, BASE_TOP - 0.1, 0.0));

    for column in 0..3 {
        scene
            .add_cube(0.15, rod_height, 0.15)
            .set_color(Color::new(0.8, 0.8, 0.8, 1.0))
            .set_position(Vec3::new(
                (column as f32 - 1.0) * COLUMN_SPACING,
                BASE_TOP + rod_height / 2.0,
                0.0,
            ));
    }

    let mut rendered_disks = Vec::with_capacity(disk_count);
    for peg in pegs.iter() {
        for (level, &disk) in peg.disks().iter().enumerate() {
            // widths range from a third to nine tenths of the peg spacing
            let width = COLUMN_SPACING
                * (0.3 + 0.6 * disk.size() as f32 / disk_count.max(1) as f32);
            let position = world_position(Point {
                column: peg.id().index() as f32,
                level: level as f32,
            });
            let node = scene
                .add_cube(width, LEVEL_HEIGHT * 0.9, width * 0.6)
                .set_color(disk_color(disk, disk_count))
                .set_position(position);
            rendered_disks.push(RenderedDisk { node, disk });
        }
    }

    rendered_disks.sort_by_key(|rendered| rendered.disk);
    rendered_disks
}

/// Plays `game` back in an interactive 3D viewer.
pub fn display(game: Game<SceneRenderer>, cadence: Duration, animation: Duration) {
    pollster::block_on(display_async(game, cadence, animation));
}

async fn display_async(mut game: Game<SceneRenderer>, cadence: Duration, animation: Duration) {
    let disk_count = game.pegs().disk_count();
    let total_moves = game.pending().count();

    let mut window = Window::new(&format!("Tower of Hanoi - {} disks", disk_count)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(8.0 + disk_count as f32 * 0.4);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut rendered_disks = build_scene(&mut scene, game.pegs());

    // messages reported before the window opened (e.g. a bad producer)
    for message in game.renderer_mut().messages.drain(..) {
        println!("{}", message);
    }

    game.run();

    let animation_secs = animation.as_secs_f32().max(f32::EPSILON);
    let mut last_tick: Option<Instant> = None;
    let mut active: Vec<(Transition, Instant)> = Vec::new();

    loop {
        // first tick is immediate, then one per cadence
        let tick_due = last_tick.map_or(true, |tick| tick.elapsed() >= cadence);
        if *game.state() == State::Running && tick_due {
            last_tick = Some(Instant::now());
            game.tick();

            let started = Instant::now();
            let renderer = game.renderer_mut();
            active.extend(renderer.transitions.drain(..).map(|t| (t, started)));
            let messages: Vec<String> = renderer.messages.drain(..).collect();

            for message in &messages {
                println!("{}", message);
            }
            match messages.first() {
                Some(message) => window.set_title(&format!("Tower of Hanoi - {}", message)),
                None => window.set_title(&format!(
                    "Tower of Hanoi - move {}/{}",
                    game.executed(),
                    total_moves
                )),
            }
        }

        // later transitions of the same disk win, since they are applied last
        active.retain(|(transition, started)| {
            let progress = started.elapsed().as_secs_f32() / animation_secs;
            let position = world_position(transition.position(progress, disk_count));
            if let Some(rendered) = rendered_disks.get_mut(transition.disk.size() as usize - 1) {
                rendered.node.set_position(position);
            }
            progress < 1.0
        });

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
