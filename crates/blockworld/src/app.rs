//! # Command Facade
//!
//! [`BlockworldApp`] is everything a transport layer needs, with strings in
//! and strings out:
//!
//! | Command | Call |
//! |---------|------|
//! | regenerate world from a body | [`BlockworldApp::generate_world`] |
//! | list players | [`BlockworldApp::players`] |
//! | join / leave | [`BlockworldApp::join`] / [`BlockworldApp::leave`] |
//! | move cursor | [`BlockworldApp::move_player`] |
//! | place block | [`BlockworldApp::place_block`] |
//! | select block | [`BlockworldApp::select_block`] |
//! | list blocks | [`BlockworldApp::blocks`] |
//! | block colour | [`BlockworldApp::block_color`] |
//!
//! Direction and block strings are parsed here, before anything reaches the
//! world. A string that does not parse never touches the grid or a player.

use blockworld_core::{BlockKind, CursorPos, Direction, WorldResult, WorldState};
use blockworld_procedural::{GridGenerator, WorldSeed};
use blockworld_render::{Canvas, Compositor, FrameStats};

use crate::config::{BlockworldConfig, ConfigResult};

/// A running Blockworld instance.
///
/// Share it between request handlers and the render loop as
/// `Arc<BlockworldApp>`; every method takes `&self`.
pub struct BlockworldApp {
    world: WorldState,
    generator: GridGenerator,
    compositor: Compositor,
    framerate: u32,
}

impl BlockworldApp {
    /// Builds an app from configuration and generates the initial world.
    ///
    /// # Errors
    ///
    /// Returns any validation error from [`BlockworldConfig::validate`].
    pub fn new(config: &BlockworldConfig) -> ConfigResult<Self> {
        config.validate()?;
        let generator = GridGenerator::new(config.grid_shape()?);
        let grid = generator.generate(config.seed());
        let world = WorldState::new(grid, config.color_profile()?).with_spawn(config.spawn_rules());

        let mut compositor = Compositor::new();
        if let Some(color) = config.background()? {
            compositor = compositor.with_background(color);
        }

        tracing::info!(
            rows = generator.rows(),
            cols = generator.cols(),
            seed = %config.world.seed,
            framerate = config.render.framerate,
            "blockworld ready"
        );

        Ok(Self {
            world,
            generator,
            compositor,
            framerate: config.render.framerate,
        })
    }

    /// The underlying world.
    #[inline]
    #[must_use]
    pub const fn world(&self) -> &WorldState {
        &self.world
    }

    /// Replaces the whole grid with one generated from `seed_text`.
    ///
    /// Players keep their cursors and the bounds they joined with.
    pub fn generate_world(&self, seed_text: &str) {
        let seed = WorldSeed::from_text(seed_text);
        self.world.replace_grid(self.generator.generate(seed));
        tracing::debug!(seed = seed.value(), "world regenerated");
    }

    /// Player ids, one per line, in lexical order.
    #[must_use]
    pub fn players(&self) -> String {
        self.world.players_listing()
    }

    /// Adds a player.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ParticipantExists`](blockworld_core::WorldError::ParticipantExists)
    /// if the id is taken.
    pub fn join(&self, id: &str) -> WorldResult<()> {
        self.world.add_player(id)
    }

    /// Removes a player. Leaving twice is not an error.
    pub fn leave(&self, id: &str) -> bool {
        self.world.remove_player(id)
    }

    /// Moves a player's cursor by a direction name (`"up"`, `"down"`, ...).
    ///
    /// # Errors
    ///
    /// - `InvalidDirection` if `direction` is not a canonical name
    /// - `UnknownParticipant` if the id is absent
    pub fn move_player(&self, id: &str, direction: &str) -> WorldResult<CursorPos> {
        let result = direction
            .parse::<Direction>()
            .and_then(|direction| self.world.move_player(id, direction));
        log_rejection("move", id, result)
    }

    /// Writes the player's selected block at their cursor.
    ///
    /// # Errors
    ///
    /// - `UnknownParticipant` if the id is absent
    /// - `IndexOutOfRange` if the cursor lies outside a smaller, newer grid
    pub fn place_block(&self, id: &str) -> WorldResult<CursorPos> {
        log_rejection("place_block", id, self.world.place_block(id))
    }

    /// Selects a block by name.
    ///
    /// # Errors
    ///
    /// - `InvalidCellKind` if `block` is not a canonical name
    /// - `UnknownParticipant` if the id is absent
    pub fn select_block(&self, id: &str, block: &str) -> WorldResult<()> {
        let result = block
            .parse::<BlockKind>()
            .and_then(|kind| self.world.select_block(id, kind));
        log_rejection("select_block", id, result)
    }

    /// Every block name, one per line, in catalog order.
    #[must_use]
    pub fn blocks(&self) -> String {
        BlockKind::listing()
    }

    /// Colour of a block by name, as `"#rrggbb"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCellKind` if `block` is not a canonical name.
    pub fn block_color(&self, block: &str) -> WorldResult<String> {
        let kind: BlockKind = block.parse()?;
        Ok(self.world.color_profile().color(kind).to_hex())
    }

    /// Draws the current world onto `canvas`.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> FrameStats {
        self.compositor.render(canvas, &self.world)
    }

    /// Configured frames per second.
    #[inline]
    #[must_use]
    pub const fn framerate(&self) -> u32 {
        self.framerate
    }

    /// Canvas size for the current grid, as `(width, height)`.
    #[must_use]
    pub fn surface_size(&self) -> (usize, usize) {
        Compositor::surface_size(&self.world)
    }
}

fn log_rejection<T>(command: &'static str, player: &str, result: WorldResult<T>) -> WorldResult<T> {
    if let Err(err) = &result {
        tracing::warn!(command, player, error = %err, "command rejected");
    }
    result
}
