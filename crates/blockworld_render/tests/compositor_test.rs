//! # Compositor Tests
//!
//! End-to-end rendering of small worlds into a frame buffer.

use std::sync::Arc;
use std::thread;

use blockworld_core::{
    BlockKind, ColorProfile, CursorPos, Direction, Grid, SpawnRules, WorldError, WorldState,
};
use blockworld_render::{Compositor, FrameBuffer};

fn air_world(rows: usize, cols: usize) -> WorldState {
    WorldState::new(Grid::new(rows, cols, BlockKind::Air).unwrap(), ColorProfile::classic())
}

fn render(world: &WorldState) -> FrameBuffer {
    let (width, height) = Compositor::surface_size(world);
    let mut frame = FrameBuffer::new(width, height);
    Compositor::new().render(&mut frame, world);
    frame
}

/// Test: One player on an empty 2x2 world shows their selection at the cursor.
#[test]
fn test_single_player_on_empty_world() {
    let world = air_world(2, 2);
    world.add_player("a").unwrap();
    world.select_block("a", BlockKind::Stone).unwrap();

    let frame = render(&world);
    let profile = world.color_profile();
    assert_eq!(frame.pixel(0, 0), Some(profile.color(BlockKind::Stone)));
    assert_eq!(frame.pixel(1, 1), Some(profile.color(BlockKind::Air)));
    assert_eq!(frame.pixel(1, 0), Some(profile.color(BlockKind::Air)));
    assert_eq!(frame.pixel(0, 1), Some(profile.color(BlockKind::Air)));
}

/// Test: Two players on one cell; the later id wins the pixel.
#[test]
fn test_overlap_later_id_wins() {
    let world = air_world(3, 3);
    world.add_player("b").unwrap();
    world.add_player("a").unwrap();
    world.select_block("a", BlockKind::Lava).unwrap();
    world.select_block("b", BlockKind::Water).unwrap();

    let ids: Vec<String> = world.player_ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["a", "b"]);

    let frame = render(&world);
    assert_eq!(frame.pixel(0, 0), Some(world.color_profile().color(BlockKind::Water)));
}

/// Test: Cursor row maps to y and column maps to x.
#[test]
fn test_cursor_axis_mapping() {
    let world = air_world(3, 4);
    world.add_player("p").unwrap();
    world.select_block("p", BlockKind::Brick).unwrap();
    world.move_player("p", Direction::Down).unwrap();
    for _ in 0..3 {
        world.move_player("p", Direction::Right).unwrap();
    }

    let frame = render(&world);
    let brick = world.color_profile().color(BlockKind::Brick);
    assert_eq!(frame.width(), 4);
    assert_eq!(frame.height(), 3);
    assert_eq!(frame.pixel(3, 1), Some(brick));
    assert_eq!(frame.pixels().iter().filter(|&&p| p == brick).count(), 1);
}

/// Test: Placed blocks show in the base pass after the player moves away.
#[test]
fn test_placed_block_persists() {
    let world = air_world(2, 2).with_spawn(SpawnRules {
        cursor: CursorPos::new(1, 1),
        block: BlockKind::Glass,
    });
    world.add_player("p").unwrap();
    world.place_block("p").unwrap();
    world.move_player("p", Direction::Up).unwrap();
    world.select_block("p", BlockKind::Air).unwrap();

    let frame = render(&world);
    assert_eq!(frame.pixel(1, 1), Some(world.color_profile().color(BlockKind::Glass)));
}

/// Test: Frames rendered while players churn never panic and stay in bounds.
#[test]
fn test_render_during_churn() {
    let world = Arc::new(air_world(8, 8));

    let churn = {
        let world = Arc::clone(&world);
        thread::spawn(move || {
            for i in 0..500 {
                let id = format!("p{}", i % 7);
                let _ = world.add_player(id.as_str());
                let _ = world.move_player(&id, Direction::Right);
                if i % 3 == 0 {
                    world.remove_player(&id);
                }
            }
        })
    };

    let mut frame = FrameBuffer::new(8, 8);
    for _ in 0..200 {
        let stats = Compositor::new().render(&mut frame, &world);
        assert_eq!(stats.cells_drawn, 64);
        assert!(stats.cursors_drawn <= 7);
    }
    churn.join().unwrap();
}

/// Test: Frames rendered while the whole grid is swapped for other shapes
/// never panic, and placing against a shrunken grid fails cleanly.
#[test]
fn test_render_during_grid_replacement() {
    let world = Arc::new(air_world(12, 13));
    world.add_player("far").unwrap();
    for _ in 0..13 {
        world.move_player("far", Direction::Down).unwrap();
        world.move_player("far", Direction::Right).unwrap();
    }
    world.select_block("far", BlockKind::Lava).unwrap();

    let shape_of = |i: usize| (1 + i % 12, 2 + i % 12);
    let cell_counts: Vec<usize> = (0..12).map(|i| shape_of(i).0 * shape_of(i).1).collect();

    let writer = {
        let world = Arc::clone(&world);
        thread::spawn(move || {
            for i in 0..1000 {
                let (rows, cols) = shape_of(i);
                world.replace_grid(Grid::new(rows, cols, BlockKind::Sand).unwrap());
                match world.place_block("far") {
                    Ok(cursor) => assert_eq!(cursor, CursorPos::new(11, 12)),
                    Err(err) => assert!(matches!(err, WorldError::IndexOutOfRange { .. }), "{err}"),
                }
            }
        })
    };

    let mut frame = FrameBuffer::new(8, 8);
    for _ in 0..1000 {
        let stats = Compositor::new().render(&mut frame, &world);
        assert!(cell_counts.contains(&stats.cells_drawn), "{} cells", stats.cells_drawn);
        assert!(stats.cursors_drawn + stats.cursors_skipped <= 1);
    }
    writer.join().unwrap();

    // The last shape is 4x5; the player's cursor is still outside it.
    assert_eq!(world.with_grid(|g| (g.rows(), g.cols())), shape_of(999));
    assert!(world.place_block("far").is_err());
}
