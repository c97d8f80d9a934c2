//! The world driver: carve, reveal, chain, repeat.

use std::collections::HashMap;

use glam::Vec3;
use meander_common::{ChunkId, MeanderResult};
use meander_worldgen::{ChunkPlacement, ExitDescriptor, Grid, PathCarver};
use tracing::{info, warn};

use crate::chunk::Chunk;
use crate::config::WorldConfig;
use crate::factory::{CellPresenter, ChunkFactory};
use crate::reveal::{RevealEvent, RevealSequencer, SequencerState};

/// An unbounded, lazily-extending world of chained chunks.
///
/// Creating a world validates its configuration, places the first chunk at
/// the world origin, carves its path from the plane center, and starts
/// revealing it. Each [`World::tick`] advances the reveal; when a chunk's
/// path is fully revealed, the exit it terminated on determines where the
/// next chunk is placed, and the cycle repeats there.
///
/// One chunk generates at a time; previously generated chunks stay in the
/// registry untouched. If the factory cannot materialize a chunk the world
/// halts; existing chunks remain valid and nothing is retried.
#[derive(Debug)]
pub struct World<F: ChunkFactory, P: CellPresenter> {
    /// Generation parameters
    config: WorldConfig,
    /// External chunk materializer
    factory: F,
    /// External reveal listener
    presenter: P,
    /// Path carver, shared by every chunk in the chain
    carver: PathCarver,
    /// Generated chunks by ID
    chunks: HashMap<ChunkId, Chunk>,
    /// Reveal sequence for the active chunk
    sequencer: RevealSequencer,
    /// Chunk currently being revealed
    active: ChunkId,
    /// Next ID to assign
    next_id: ChunkId,
    /// Set when the factory fails; stops all further chaining
    halted: bool,
}

impl<F: ChunkFactory, P: CellPresenter> World<F, P> {
    /// Creates a world and generates its first chunk at the origin.
    ///
    /// Fails with `InvalidConfiguration` before anything is generated if
    /// the configuration is degenerate, or with the factory's error if the
    /// first chunk cannot be materialized.
    pub fn new(config: WorldConfig, factory: F, presenter: P) -> MeanderResult<Self> {
        config.validate()?;

        let carver = match config.rng_seed {
            Some(seed) => PathCarver::with_seed(seed),
            None => PathCarver::new(),
        };

        let first = ChunkPlacement::new(Vec3::ZERO, config.dimensions());
        let mut world = Self {
            config,
            factory,
            presenter,
            carver,
            chunks: HashMap::new(),
            sequencer: RevealSequencer::new(),
            active: ChunkId::NULL,
            next_id: ChunkId::from_raw(1),
            halted: false,
        };
        world.spawn_chunk(first)?;
        Ok(world)
    }

    /// Advances the world by `dt` seconds.
    ///
    /// Due reveal steps are forwarded to the presenter; when the active
    /// chunk's reveal completes, the next chunk is chained through its
    /// exit. A factory failure is returned to the caller and halts further
    /// chaining without touching existing chunks.
    pub fn tick(&mut self, dt: f32) -> MeanderResult<()> {
        if self.halted {
            return Ok(());
        }
        let Some(handle) = self.chunks.get(&self.active).map(Chunk::handle) else {
            return Ok(());
        };

        for event in self.sequencer.update(dt) {
            match event {
                RevealEvent::Step(cell) => self.presenter.on_reveal(handle, cell),
                RevealEvent::Completed => self.chain_next()?,
            }
        }
        Ok(())
    }

    /// Cancels the active chunk's reveal.
    ///
    /// The chunk's terrain stays as carved; the world simply stops
    /// announcing it and will not chain past it.
    pub fn cancel_reveal(&mut self) {
        self.sequencer.cancel();
    }

    /// Returns the number of generated chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the chunk with the given ID, if generated.
    #[must_use]
    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(&id)
    }

    /// Returns the chunk currently being revealed.
    #[must_use]
    pub fn active_chunk(&self) -> Option<&Chunk> {
        self.chunks.get(&self.active)
    }

    /// Returns the reveal state of the active chunk.
    #[must_use]
    pub fn reveal_state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Returns whether the world stopped chaining after a factory failure.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the generation configuration.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Resolves the active chunk's exit and generates the next chunk there.
    fn chain_next(&mut self) -> MeanderResult<()> {
        let Some(current) = self.chunks.get(&self.active) else {
            return Ok(());
        };
        let exit = ExitDescriptor::resolve(current.path(), current.placement().dimensions)?;
        let placement = current.placement().chained(self.config.spacing, exit);
        info!("{} fully revealed; chaining through {exit}", self.active);
        self.spawn_chunk(placement)
    }

    /// Carves and registers a chunk at `placement` and starts its reveal.
    fn spawn_chunk(&mut self, placement: ChunkPlacement) -> MeanderResult<()> {
        let id = self.next_id;

        let handle = match self.factory.create(id, &placement) {
            Ok(handle) => handle,
            Err(err) => {
                self.halted = true;
                warn!("factory could not materialize {id}: {err}");
                return Err(err.into());
            },
        };

        let mut grid = Grid::new(placement.dimensions);
        let path = self
            .carver
            .carve(&mut grid, placement.dimensions.plane_center())?;
        self.sequencer
            .start(&path, self.config.reveal_interval)?;

        info!(
            "{id} placed at ({}, {}, {}) with {} path cells",
            placement.origin.x,
            placement.origin.y,
            placement.origin.z,
            path.len()
        );
        self.chunks.insert(id, Chunk::new(id, handle, placement, grid, path));
        self.active = id;
        self.next_id = id.successor();
        Ok(())
    }
}
