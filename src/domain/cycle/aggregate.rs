//! Cycle aggregate - All mutable state of one run from 0% to reset.
//!
//! A Cycle owns the progress curve, both message rotators and the handles of
//! every task scheduled on its behalf. It is created fresh on every start or
//! restart and discarded when the next one begins.

use crate::domain::foundation::{
    CycleId, CycleState, Percent, StateMachine, Timestamp, ValidationError,
};
use crate::domain::progress::{ProgressEngine, ProgressSnapshot};
use crate::domain::rotation::{catalog, MessageRotator};

use super::{CycleEvent, TaskRegistry};

/// The Cycle aggregate root.
#[derive(Debug, Clone)]
pub struct Cycle {
    id: CycleId,
    generation: u64,
    state: CycleState,
    progress: ProgressEngine,
    log_messages: MessageRotator<&'static str>,
    patience_lines: MessageRotator<&'static str>,
    tasks: TaskRegistry,
    domain_events: Vec<CycleEvent>,
}

impl Cycle {
    /// Creates a running cycle at 0% with both rotators at their first item.
    pub fn new(generation: u64, progress_duration_ms: u64, now: Timestamp) -> Self {
        let id = CycleId::new();
        let mut cycle = Self {
            id,
            generation,
            state: CycleState::Running,
            progress: ProgressEngine::start(progress_duration_ms, now),
            log_messages: catalog::log_rotator(),
            patience_lines: catalog::patience_rotator(),
            tasks: TaskRegistry::new(),
            domain_events: Vec::new(),
        };

        cycle.record_event(CycleEvent::Started {
            cycle_id: id,
            generation,
            started_at: now,
        });

        cycle
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> CycleId {
        self.id
    }

    /// Number of cycles begun before and including this one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn percent(&self) -> Percent {
        self.progress.percent()
    }

    pub fn snapshot(&self, now: Timestamp) -> ProgressSnapshot {
        self.progress.snapshot(now)
    }

    pub fn log_index(&self) -> usize {
        self.log_messages.index()
    }

    pub fn patience_index(&self) -> usize {
        self.patience_lines.index()
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskRegistry {
        &mut self.tasks
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<CycleEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Rotation
    // ───────────────────────────────────────────────────────────────

    pub fn next_log_message(&mut self) -> &'static str {
        *self.log_messages.advance()
    }

    pub fn next_patience_line(&mut self) -> &'static str {
        *self.patience_lines.advance()
    }

    // ───────────────────────────────────────────────────────────────
    // Progress
    // ───────────────────────────────────────────────────────────────

    /// Samples the progress curve. Only a running cycle moves.
    pub fn sample_progress(&mut self, now: Timestamp) -> Percent {
        if self.state.is_running() {
            self.progress.sample(now)
        } else {
            self.progress.percent()
        }
    }

    /// True once a running cycle's bar has reached 99%.
    pub fn should_begin_completing(&self) -> bool {
        self.state.is_running() && self.progress.has_reached_hold()
    }

    // ───────────────────────────────────────────────────────────────
    // State Transitions
    // ───────────────────────────────────────────────────────────────

    /// Freezes the cycle at its last sampled percent.
    ///
    /// # Errors
    ///
    /// Fails if the cycle is not running or the bar is already finalized.
    pub fn pause(&mut self) -> Result<(), ValidationError> {
        self.ensure_incomplete()?;
        self.transition(CycleState::Paused)?;
        self.record_event(CycleEvent::Paused {
            cycle_id: self.id,
            percent: self.percent(),
        });
        Ok(())
    }

    /// Unfreezes the cycle so the curve continues from the paused percent.
    ///
    /// # Errors
    ///
    /// Fails if the cycle is not paused or the bar is already finalized.
    pub fn resume(&mut self, now: Timestamp) -> Result<(), ValidationError> {
        self.ensure_incomplete()?;
        self.transition(CycleState::Running)?;
        self.progress.resume(now);
        self.record_event(CycleEvent::Resumed {
            cycle_id: self.id,
            percent: self.percent(),
        });
        Ok(())
    }

    /// Enters the grace period held at 99%.
    ///
    /// # Errors
    ///
    /// Fails unless the cycle is running and has reached the hold point.
    pub fn begin_completing(&mut self) -> Result<(), ValidationError> {
        if !self.progress.has_reached_hold() {
            return Err(ValidationError::out_of_range(
                "percent",
                99,
                100,
                i64::from(self.percent().whole()),
            ));
        }
        self.transition(CycleState::Completing)?;
        self.record_event(CycleEvent::HoldReached { cycle_id: self.id });
        Ok(())
    }

    /// Ends the grace period and jumps the bar to exactly 100%.
    ///
    /// # Errors
    ///
    /// Fails unless the cycle is completing.
    pub fn complete(&mut self) -> Result<(), ValidationError> {
        self.transition(CycleState::Completed)?;
        self.progress.finalize();
        self.record_event(CycleEvent::Completed { cycle_id: self.id });
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn transition(&mut self, target: CycleState) -> Result<(), ValidationError> {
        self.state = self.state.transition_to(target)?;
        Ok(())
    }

    fn ensure_incomplete(&self) -> Result<(), ValidationError> {
        if self.percent().is_complete() {
            return Err(ValidationError::out_of_range("percent", 0, 99, 100));
        }
        Ok(())
    }

    fn record_event(&mut self, event: CycleEvent) {
        self.domain_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: u64 = 40_000;

    fn at(millis: i64) -> Timestamp {
        Timestamp::from_unix_millis(1_700_000_000_000 + millis)
    }

    fn fresh() -> Cycle {
        let mut cycle = Cycle::new(1, DURATION, at(0));
        cycle.take_events();
        cycle
    }

    #[test]
    fn new_cycle_starts_running_at_zero() {
        let mut cycle = Cycle::new(3, DURATION, at(0));
        assert_eq!(cycle.state(), CycleState::Running);
        assert_eq!(cycle.percent(), Percent::ZERO);
        assert_eq!(cycle.log_index(), 0);
        assert_eq!(cycle.patience_index(), 0);
        assert_eq!(cycle.generation(), 3);
        assert!(matches!(
            cycle.take_events().as_slice(),
            [CycleEvent::Started { generation: 3, .. }]
        ));
    }

    #[test]
    fn pause_freezes_progress() {
        let mut cycle = fresh();
        cycle.sample_progress(at(10_000));
        cycle.pause().unwrap();

        let frozen = cycle.percent();
        assert_eq!(cycle.sample_progress(at(30_000)), frozen);
        assert_eq!(cycle.state(), CycleState::Paused);
    }

    #[test]
    fn pause_twice_is_rejected() {
        let mut cycle = fresh();
        cycle.pause().unwrap();
        assert!(cycle.pause().is_err());
    }

    #[test]
    fn resume_requires_pause() {
        let mut cycle = fresh();
        assert!(cycle.resume(at(1_000)).is_err());
    }

    #[test]
    fn resume_continues_from_the_paused_percent() {
        let mut cycle = fresh();
        let before = cycle.sample_progress(at(20_000));
        cycle.pause().unwrap();
        cycle.resume(at(25_000)).unwrap();

        let after = cycle.sample_progress(at(25_000));
        assert!((after.value() - before.value()).abs() < 0.01);
        assert!(matches!(
            cycle.take_events().as_slice(),
            [CycleEvent::Paused { .. }, CycleEvent::Resumed { .. }]
        ));
    }

    #[test]
    fn completing_requires_the_hold_point() {
        let mut cycle = fresh();
        cycle.sample_progress(at(39_000));
        assert!(!cycle.should_begin_completing());
        assert!(cycle.begin_completing().is_err());

        cycle.sample_progress(at(40_000));
        assert!(cycle.should_begin_completing());
        cycle.begin_completing().unwrap();
        assert_eq!(cycle.state(), CycleState::Completing);
    }

    #[test]
    fn complete_sets_exactly_one_hundred() {
        let mut cycle = fresh();
        cycle.sample_progress(at(40_000));
        cycle.begin_completing().unwrap();
        cycle.complete().unwrap();

        assert_eq!(cycle.state(), CycleState::Completed);
        assert_eq!(cycle.percent(), Percent::COMPLETE);
    }

    #[test]
    fn finished_cycle_cannot_be_paused() {
        let mut cycle = fresh();
        cycle.sample_progress(at(40_000));
        cycle.begin_completing().unwrap();
        assert!(cycle.pause().is_err());
        cycle.complete().unwrap();
        assert!(cycle.pause().is_err());
        assert!(cycle.resume(at(41_000)).is_err());
    }

    #[test]
    fn complete_requires_completing() {
        let mut cycle = fresh();
        assert!(cycle.complete().is_err());
        assert_eq!(cycle.state(), CycleState::Running);
    }

    #[test]
    fn rotators_advance_independently() {
        let mut cycle = fresh();
        assert_eq!(cycle.next_log_message(), "Installing chaos.exe…");
        assert_eq!(cycle.next_log_message(), "Uploading memes to the cloud…");
        assert_eq!(
            cycle.next_patience_line(),
            "Patience is the new performance metric."
        );
        assert_eq!(cycle.log_index(), 2);
        assert_eq!(cycle.patience_index(), 1);
    }
}
