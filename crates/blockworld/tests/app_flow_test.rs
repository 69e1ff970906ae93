//! # App Flow Tests
//!
//! Drives the command facade the way a transport layer would.

use blockworld::core::{BlockKind, CursorPos, WorldError};
use blockworld::render::FrameBuffer;
use blockworld::{BlockworldApp, BlockworldConfig};

fn app(toml: &str) -> BlockworldApp {
    BlockworldApp::new(&BlockworldConfig::from_toml_str(toml).unwrap()).unwrap()
}

fn snapshot(app: &BlockworldApp, id: &str) -> (CursorPos, BlockKind) {
    app.world()
        .with_player(id, |p| (p.cursor(), p.selected_block()))
        .unwrap()
}

/// Test: Join, move, select, place, leave.
#[test]
fn test_player_session() {
    let app = app("[world]\nrows = 4\ncols = 4\n");

    app.join("alice").unwrap();
    assert_eq!(app.players(), "alice\n");

    assert_eq!(app.move_player("alice", "down"), Ok(CursorPos::new(1, 0)));
    assert_eq!(app.move_player("alice", "right"), Ok(CursorPos::new(1, 1)));
    app.select_block("alice", "brick").unwrap();
    assert_eq!(app.place_block("alice"), Ok(CursorPos::new(1, 1)));
    assert_eq!(app.world().block_at(1, 1), Ok(BlockKind::Brick));

    assert!(app.leave("alice"));
    assert!(!app.leave("alice"));
    assert_eq!(app.players(), "");
    assert_eq!(
        app.move_player("alice", "up"),
        Err(WorldError::UnknownParticipant("alice".to_owned()))
    );
}

/// Test: Bad direction and block strings are rejected without touching state.
#[test]
fn test_bad_strings_have_no_effect() {
    let app = app("[world]\nrows = 4\ncols = 4\n");
    app.join("bob").unwrap();
    app.move_player("bob", "down").unwrap();
    app.select_block("bob", "sand").unwrap();
    let before = snapshot(&app, "bob");
    let grid_before = app.world().with_grid(Clone::clone);

    for bad in ["Down", "north", "", "down\n"] {
        assert_eq!(
            app.move_player("bob", bad),
            Err(WorldError::InvalidDirection(bad.to_owned()))
        );
    }
    for bad in ["Sand", "obsidian", "", " sand"] {
        assert_eq!(
            app.select_block("bob", bad),
            Err(WorldError::InvalidCellKind(bad.to_owned()))
        );
        assert!(app.block_color(bad).is_err());
    }

    assert_eq!(snapshot(&app, "bob"), before);
    assert_eq!(app.world().with_grid(Clone::clone), grid_before);
}

/// Test: Validation happens before lookup, so a bad string for a ghost is
/// reported as the bad string.
#[test]
fn test_parse_errors_win_over_unknown_players() {
    let app = app("");
    assert!(matches!(
        app.move_player("ghost", "sideways"),
        Err(WorldError::InvalidDirection(_))
    ));
    assert!(matches!(
        app.select_block("ghost", "stone"),
        Err(WorldError::UnknownParticipant(_))
    ));
}

/// Test: Duplicate join fails and leaves the player as it was.
#[test]
fn test_duplicate_join() {
    let app = app("");
    app.join("carol").unwrap();
    app.move_player("carol", "right").unwrap();
    let before = snapshot(&app, "carol");

    assert_eq!(
        app.join("carol"),
        Err(WorldError::ParticipantExists("carol".to_owned()))
    );
    assert_eq!(snapshot(&app, "carol"), before);
}

/// Test: Regenerating is deterministic per seed text and keeps players.
#[test]
fn test_generate_world() {
    let app = app("[world]\nrows = 16\ncols = 24\n");
    app.join("dave").unwrap();

    app.generate_world("first");
    let first = app.world().with_grid(Clone::clone);
    app.generate_world("second");
    app.generate_world("first");
    let again = app.world().with_grid(Clone::clone);

    assert_eq!(first, again);
    assert_eq!(first.rows(), 16);
    assert_eq!(first.cols(), 24);
    assert_eq!(app.players(), "dave\n");
}

/// Test: Configured spawn, selection and colours flow through to rendering.
#[test]
fn test_config_flows_into_render() {
    let app = app(
        r##"
        [world]
        rows = 3
        cols = 5

        [players]
        spawn_row = 2
        spawn_col = 9
        default_block = "glass"

        [colors]
        glass = "#abcdef"
        "##,
    );
    app.join("eve").unwrap();
    assert_eq!(snapshot(&app, "eve"), (CursorPos::new(2, 4), BlockKind::Glass));
    assert_eq!(app.block_color("glass").unwrap(), "#abcdef");

    let (width, height) = app.surface_size();
    let mut frame = FrameBuffer::new(width, height);
    let stats = app.render(&mut frame);

    assert_eq!(stats.cells_drawn, 15);
    assert_eq!(stats.cursors_drawn, 1);
    assert_eq!(frame.pixel(4, 2).map(|c| c.to_hex()), Some("#abcdef".to_owned()));
}
