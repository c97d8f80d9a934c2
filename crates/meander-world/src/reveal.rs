//! Time-phased reveal sequencing.
//!
//! A reveal sequence walks a carved path one cell per fixed interval,
//! letting the hosting application surface the path progressively instead
//! of all at once. The sequencer owns no terrain data and mutates none; it
//! only reports which cell is due. It is cooperative and single-threaded:
//! the host calls [`RevealSequencer::update`] with elapsed time and
//! dispatches the returned events.

use meander_common::{CellCoord, ConfigError};
use meander_worldgen::Path;

/// Lifecycle state of a reveal sequence.
///
/// `Running` is re-entered by each [`RevealSequencer::start`];
/// `Completed` and `Cancelled` are terminal for a given run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    /// No sequence has been started
    #[default]
    Idle,
    /// A sequence is in progress
    Running,
    /// The last cell was emitted and completion reported
    Completed,
    /// The run was cancelled before completing
    Cancelled,
}

/// Events emitted while a reveal sequence advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// The next path cell is due for reveal
    Step(CellCoord),
    /// Every cell has been revealed; emitted exactly once per run
    Completed,
}

/// Drives the time-ordered reveal of a carved path.
///
/// Steps are due at `0, interval, 2 * interval, ...` seconds after the
/// sequence starts; an interval of zero degenerates to emitting the whole
/// path (and completion) in a single update. Cancellation takes effect
/// immediately: no event is emitted after [`RevealSequencer::cancel`],
/// even if a step was already due.
#[derive(Debug, Default)]
pub struct RevealSequencer {
    state: SequencerState,
    /// Snapshot of the running path's cells
    cells: Vec<CellCoord>,
    /// Index of the next cell to emit
    cursor: usize,
    /// Seconds between step emissions
    interval: f32,
    /// Seconds elapsed since the run started
    clock: f32,
    /// Deadline for the next emission
    next_due: f32,
}

impl RevealSequencer {
    /// Creates an idle sequencer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SequencerState {
        self.state
    }

    /// Returns whether a sequence is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SequencerState::Running
    }

    /// Returns how many cells are still unrevealed in the current run.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cells.len() - self.cursor
    }

    /// Starts revealing `path` at one cell per `interval` seconds.
    ///
    /// Replaces any previous run. The interval must be finite and
    /// non-negative; zero means the entire path is due at once.
    pub fn start(&mut self, path: &Path, interval: f32) -> Result<(), ConfigError> {
        if !interval.is_finite() || interval < 0.0 {
            return Err(ConfigError::InvalidInterval { interval });
        }
        self.cells = path.cells().to_vec();
        self.cursor = 0;
        self.interval = interval;
        self.clock = 0.0;
        self.next_due = 0.0;
        self.state = SequencerState::Running;
        Ok(())
    }

    /// Cancels the current run.
    ///
    /// No further events are emitted for it, completion included. Has no
    /// effect unless a run is in progress.
    pub fn cancel(&mut self) {
        if self.state == SequencerState::Running {
            self.state = SequencerState::Cancelled;
            self.cells = Vec::new();
            self.cursor = 0;
        }
    }

    /// Advances the sequence by `dt` seconds and returns the events due.
    ///
    /// Steps are emitted in path order; completion follows the final step
    /// in the same update. Returns nothing once the run is terminal.
    pub fn update(&mut self, dt: f32) -> Vec<RevealEvent> {
        if self.state != SequencerState::Running {
            return Vec::new();
        }
        // Time never runs backwards.
        self.clock += dt.max(0.0);

        let mut events = Vec::new();
        while self.cursor < self.cells.len() && self.clock >= self.next_due {
            events.push(RevealEvent::Step(self.cells[self.cursor]));
            self.cursor += 1;
            self.next_due += self.interval;
        }

        if self.cursor == self.cells.len() {
            self.state = SequencerState::Completed;
            self.cells = Vec::new();
            self.cursor = 0;
            events.push(RevealEvent::Completed);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_path(len: u32) -> Path {
        Path::new((0..len).map(|x| CellCoord::ground(x, 1)).collect())
    }

    fn steps(events: &[RevealEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, RevealEvent::Step(_)))
            .count()
    }

    #[test]
    fn test_zero_interval_reveals_everything_at_once() {
        let mut seq = RevealSequencer::new();
        seq.start(&straight_path(5), 0.0).expect("valid interval");

        let events = seq.update(0.0);
        assert_eq!(steps(&events), 5);
        assert_eq!(events.last(), Some(&RevealEvent::Completed));
        assert_eq!(seq.state(), SequencerState::Completed);

        // Completion is reported exactly once.
        assert!(seq.update(1.0).is_empty());
    }

    #[test]
    fn test_steps_arrive_in_path_order() {
        let path = straight_path(4);
        let mut seq = RevealSequencer::new();
        seq.start(&path, 0.0).expect("valid interval");

        let revealed: Vec<CellCoord> = seq
            .update(0.0)
            .into_iter()
            .filter_map(|e| match e {
                RevealEvent::Step(cell) => Some(cell),
                RevealEvent::Completed => None,
            })
            .collect();
        assert_eq!(revealed, path.cells());
    }

    #[test]
    fn test_interval_paces_emission() {
        let mut seq = RevealSequencer::new();
        seq.start(&straight_path(4), 1.0).expect("valid interval");

        // The first cell is due as soon as the run starts.
        assert_eq!(steps(&seq.update(0.0)), 1);
        assert_eq!(steps(&seq.update(0.5)), 0);
        assert_eq!(steps(&seq.update(0.5)), 1);
        // A large step catches up on every missed deadline.
        let events = seq.update(2.0);
        assert_eq!(steps(&events), 2);
        assert_eq!(events.last(), Some(&RevealEvent::Completed));
    }

    #[test]
    fn test_completion_follows_last_step_in_same_update() {
        let mut seq = RevealSequencer::new();
        seq.start(&straight_path(2), 1.0).expect("valid interval");

        let events = seq.update(1.0);
        assert_eq!(steps(&events), 2);
        assert_eq!(events.last(), Some(&RevealEvent::Completed));
        assert_eq!(seq.remaining(), 0);
    }

    #[test]
    fn test_cancel_stops_everything() {
        let mut seq = RevealSequencer::new();
        seq.start(&straight_path(5), 0.5).expect("valid interval");
        assert_eq!(steps(&seq.update(0.0)), 1);

        seq.cancel();
        assert_eq!(seq.state(), SequencerState::Cancelled);
        // Steps already due are dropped too; completion never fires.
        assert!(seq.update(100.0).is_empty());
        assert!(seq.update(100.0).is_empty());
    }

    #[test]
    fn test_cancel_when_idle_is_a_no_op() {
        let mut seq = RevealSequencer::new();
        seq.cancel();
        assert_eq!(seq.state(), SequencerState::Idle);
    }

    #[test]
    fn test_restart_after_completion() {
        let mut seq = RevealSequencer::new();
        seq.start(&straight_path(1), 0.0).expect("valid interval");
        assert_eq!(seq.update(0.0).last(), Some(&RevealEvent::Completed));

        seq.start(&straight_path(3), 0.0).expect("valid interval");
        assert_eq!(seq.state(), SequencerState::Running);
        let events = seq.update(0.0);
        assert_eq!(steps(&events), 3);
    }

    #[test]
    fn test_negative_interval_rejected() {
        let mut seq = RevealSequencer::new();
        let err = seq
            .start(&straight_path(2), -1.0)
            .expect_err("negative interval");
        assert_eq!(err, ConfigError::InvalidInterval { interval: -1.0 });
        assert_eq!(seq.state(), SequencerState::Idle);
    }
}
