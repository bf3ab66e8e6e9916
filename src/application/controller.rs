//! CycleController - The update's state machine driver.
//!
//! Owns the current [`Cycle`] exclusively and is the only code that mutates
//! it. Every input arrives as either a [`ControlCommand`] or a
//! [`TimerFired`], handled one at a time to completion.
//!
//! ## Lifecycle
//!
//! ```text
//! start ─► Running ◄──toggle──► Paused
//!             │ progress sample reaches 99
//!             ▼
//!          Completing ── grace ──► Completed ── reveal, hold, hide ──► start
//! ```
//!
//! Restart replaces the cycle from any state after the restart delay.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::{BehaviorConfig, TimingConfig};
use crate::domain::cycle::{Cycle, CycleEvent, TaskKind, TimerEvent};
use crate::domain::foundation::{CycleId, CycleState, LogStyle, Percent};
use crate::domain::progress::ProgressSnapshot;
use crate::domain::rotation::catalog;
use crate::ports::{Clock, PresentationSink, Scheduler, TimerFired};

use super::ControlCommand;

pub const CONTEXT_MENU_NOTICE_DELAY_MS: u64 = 500;
pub const ATTENTION_LOST_NOTICE_DELAY_MS: u64 = 1000;
pub const WELCOME_BACK_NOTICE_DELAY_MS: u64 = 2000;

/// Drives one cycle after another through the scheduler and the sink.
pub struct CycleController {
    timings: TimingConfig,
    behavior: BehaviorConfig,
    clock: Arc<dyn Clock>,
    scheduler: Box<dyn Scheduler>,
    sink: Box<dyn PresentationSink>,
    rng: StdRng,
    cycle: Cycle,
    generation: u64,
}

impl CycleController {
    /// Creates a controller. Nothing is scheduled until [`start`](Self::start).
    pub fn new(
        timings: TimingConfig,
        behavior: BehaviorConfig,
        clock: Arc<dyn Clock>,
        scheduler: Box<dyn Scheduler>,
        sink: Box<dyn PresentationSink>,
    ) -> Self {
        let rng = behavior.rng();
        let mut cycle = Cycle::new(0, timings.progress_duration_ms, clock.now());
        cycle.take_events();

        Self {
            timings,
            behavior,
            clock,
            scheduler,
            sink,
            rng,
            cycle,
            generation: 0,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn state(&self) -> CycleState {
        self.cycle.state()
    }

    pub fn percent(&self) -> Percent {
        self.cycle.percent()
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.cycle.snapshot(self.clock.now())
    }

    pub fn log_index(&self) -> usize {
        self.cycle.log_index()
    }

    pub fn patience_index(&self) -> usize {
        self.cycle.patience_index()
    }

    /// Number of cycles begun so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cycle_id(&self) -> CycleId {
        self.cycle.id()
    }

    /// Number of tasks the current cycle has scheduled and not yet consumed.
    pub fn scheduled_task_count(&self) -> usize {
        self.cycle.tasks().len()
    }

    /// Number of live tasks for `event` in the current cycle.
    pub fn scheduled_count(&self, event: TimerEvent) -> usize {
        self.cycle.tasks().count(event)
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    /// Begins a fresh cycle, tearing down whatever was running.
    pub fn start(&mut self) {
        self.begin_cycle();
    }

    pub fn handle_command(&mut self, command: ControlCommand) {
        debug!(%command, state = %self.cycle.state(), "control command");
        match command {
            ControlCommand::TogglePause => self.toggle_pause(),
            ControlCommand::Restart => self.restart(),
            ControlCommand::Cancel => self.cancel(),
            ControlCommand::ContextMenu => self.context_menu(),
            ControlCommand::AttentionLost => self.attention_lost(),
            ControlCommand::AttentionRegained => self.attention_regained(),
        }
        self.flush_events();
    }

    /// Pauses a running cycle or resumes a paused one.
    pub fn toggle_pause(&mut self) {
        match self.cycle.state() {
            CycleState::Running => self.pause(),
            CycleState::Paused => self.resume(),
            state => debug!(%state, "pause toggle ignored while finishing"),
        }
    }

    /// Schedules a full reset. A second request replaces the pending one.
    pub fn restart(&mut self) {
        info!(
            cycle_id = %self.cycle.id(),
            generation = self.generation,
            "manual restart requested"
        );
        self.append_notice(catalog::RESTART_NOTICE, LogStyle::Alert);
        self.schedule_once(TimerEvent::RestartDue, self.timings.restart_delay_ms, true);
    }

    /// Acknowledges a cancel request without cancelling anything.
    pub fn cancel(&mut self) {
        self.sink
            .show_cancel_acknowledgement(catalog::CANCEL_ACKNOWLEDGEMENT);
        self.schedule_once(
            TimerEvent::HideCancelAcknowledgement,
            self.timings.cancel_ack_visible_ms,
            true,
        );
    }

    pub fn context_menu(&mut self) {
        self.schedule_once(
            TimerEvent::ContextMenuNotice,
            CONTEXT_MENU_NOTICE_DELAY_MS,
            false,
        );
    }

    pub fn attention_lost(&mut self) {
        self.schedule_once(
            TimerEvent::AttentionLostNotice,
            ATTENTION_LOST_NOTICE_DELAY_MS,
            false,
        );
    }

    pub fn attention_regained(&mut self) {
        if !self.cycle.state().is_running() {
            return;
        }
        let probability = clamp_probability(self.behavior.welcome_back_probability);
        if self.rng.gen_bool(probability) {
            self.schedule_once(
                TimerEvent::WelcomeBackNotice,
                WELCOME_BACK_NOTICE_DELAY_MS,
                false,
            );
        }
    }

    /// Cancels every pending task and tears the screen down.
    pub fn shutdown(&mut self) {
        self.cancel_all();
        self.sink.finish();
        info!(generation = self.generation, "update abandoned");
    }

    // ───────────────────────────────────────────────────────────────
    // Timers
    // ───────────────────────────────────────────────────────────────

    /// Handles one timer firing. Firings of cancelled tasks are dropped.
    pub fn on_timer(&mut self, fired: TimerFired) {
        if !self.cycle.tasks_mut().accept(fired.handle, fired.event) {
            debug!(handle = %fired.handle, event = ?fired.event, "stale timer firing ignored");
            return;
        }

        match fired.event {
            TimerEvent::LogTick => self.on_log_tick(),
            TimerEvent::PatienceTick => self.on_patience_tick(),
            TimerEvent::ProgressTick => self.on_progress_tick(),
            TimerEvent::GraceElapsed => self.on_grace_elapsed(),
            TimerEvent::RevealIndicator => {
                self.sink.show_completion_indicator();
                self.schedule_once(
                    TimerEvent::HideIndicator,
                    self.timings.completion_display_ms,
                    true,
                );
            }
            TimerEvent::HideIndicator => {
                self.sink.hide_completion_indicator();
                self.schedule_once(
                    TimerEvent::IndicatorHidden,
                    self.timings.hide_transition_ms,
                    true,
                );
            }
            TimerEvent::IndicatorHidden | TimerEvent::RestartDue => self.begin_cycle(),
            TimerEvent::HidePatienceLine => self.sink.clear_patience_line(),
            TimerEvent::HideCancelAcknowledgement => self.sink.hide_cancel_acknowledgement(),
            TimerEvent::ContextMenuNotice => {
                self.append_notice(catalog::CONTEXT_MENU_NOTICE, LogStyle::Glitch)
            }
            TimerEvent::AttentionLostNotice => {
                if self.cycle.state().is_running() {
                    self.append_notice(catalog::ATTENTION_LOST_NOTICE, LogStyle::Alert);
                }
            }
            TimerEvent::WelcomeBackNotice => {
                self.append_notice(catalog::WELCOME_BACK_NOTICE, LogStyle::Normal)
            }
        }

        self.flush_events();
    }

    fn on_log_tick(&mut self) {
        if self.cycle.state().is_running() {
            self.emit_log_message();
        }
    }

    fn on_patience_tick(&mut self) {
        if !self.cycle.state().is_running() {
            return;
        }
        let line = self.cycle.next_patience_line();
        self.sink.set_patience_line(line);
        self.schedule_once(
            TimerEvent::HidePatienceLine,
            self.timings.patience_visible_ms,
            true,
        );
    }

    fn on_progress_tick(&mut self) {
        let percent = self.cycle.sample_progress(self.clock.now());
        self.sink.set_progress_text(percent.whole());

        if !self.cycle.should_begin_completing() {
            return;
        }
        if let Err(e) = self.cycle.begin_completing() {
            warn!(error = %e, "could not enter the grace period");
            return;
        }
        self.cancel_periodic();
        self.schedule_once(TimerEvent::GraceElapsed, self.timings.grace_period_ms, true);
    }

    fn on_grace_elapsed(&mut self) {
        if let Err(e) = self.cycle.complete() {
            warn!(error = %e, "could not complete the cycle");
            return;
        }
        self.sink.set_progress_text(self.cycle.percent().whole());
        self.schedule_once(
            TimerEvent::RevealIndicator,
            self.timings.reveal_delay_ms,
            true,
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    fn begin_cycle(&mut self) {
        self.cancel_all();
        self.generation += 1;
        self.cycle = Cycle::new(
            self.generation,
            self.timings.progress_duration_ms,
            self.clock.now(),
        );

        self.sink.clear_log();
        self.sink.set_progress_text(0);
        self.sink.clear_patience_line();
        self.sink.hide_cancel_acknowledgement();
        self.sink.hide_completion_indicator();

        self.start_periodic();
        self.flush_events();
    }

    fn pause(&mut self) {
        if let Err(e) = self.cycle.pause() {
            debug!(error = %e, "pause rejected");
            return;
        }
        self.cancel_periodic();
        self.append_notice(catalog::PAUSED_NOTICE, LogStyle::Alert);
    }

    fn resume(&mut self) {
        if let Err(e) = self.cycle.resume(self.clock.now()) {
            debug!(error = %e, "resume rejected");
            return;
        }
        self.append_notice(catalog::RESUMED_NOTICE, LogStyle::Success);
        self.start_periodic();
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn start_periodic(&mut self) {
        self.emit_log_message();
        self.schedule_every(TimerEvent::LogTick, self.timings.log_interval());
        self.schedule_every(TimerEvent::ProgressTick, self.timings.progress_tick());
        self.schedule_every(TimerEvent::PatienceTick, self.timings.patience_interval());
    }

    fn emit_log_message(&mut self) {
        let text = self.cycle.next_log_message();
        let probability = clamp_probability(self.behavior.glitch_probability);
        let style = if self.rng.gen_bool(probability) {
            LogStyle::Glitch
        } else {
            LogStyle::Normal
        };
        self.sink.append_log_line(text, self.clock.now(), style);
    }

    fn append_notice(&mut self, text: &str, style: LogStyle) {
        self.sink.append_log_line(text, self.clock.now(), style);
    }

    /// Schedules a periodic role, replacing any previous task for it.
    fn schedule_every(&mut self, event: TimerEvent, period: Duration) {
        self.cancel_event(event);
        let handle = self.scheduler.schedule_every(event, period);
        self.cycle
            .tasks_mut()
            .register(handle, event, TaskKind::Repeating);
    }

    fn schedule_once(&mut self, event: TimerEvent, delay_ms: u64, replace: bool) {
        if replace {
            self.cancel_event(event);
        }
        let handle = self
            .scheduler
            .schedule_once(event, Duration::from_millis(delay_ms));
        self.cycle
            .tasks_mut()
            .register(handle, event, TaskKind::OneShot);
    }

    fn cancel_event(&mut self, event: TimerEvent) {
        for handle in self.cycle.tasks_mut().remove_event(event) {
            self.scheduler.cancel(handle);
        }
    }

    fn cancel_periodic(&mut self) {
        for event in TimerEvent::PERIODIC {
            self.cancel_event(event);
        }
    }

    fn cancel_all(&mut self) {
        for handle in self.cycle.tasks_mut().drain() {
            self.scheduler.cancel(handle);
        }
    }

    fn flush_events(&mut self) {
        for event in self.cycle.take_events() {
            match event {
                CycleEvent::Started {
                    cycle_id,
                    generation,
                    ..
                } => info!(%cycle_id, generation, "update cycle started"),
                CycleEvent::Paused { cycle_id, percent } => {
                    info!(%cycle_id, %percent, "update paused")
                }
                CycleEvent::Resumed { cycle_id, percent } => {
                    info!(%cycle_id, %percent, "update resumed")
                }
                CycleEvent::HoldReached { cycle_id } => {
                    debug!(%cycle_id, "holding at 99%")
                }
                CycleEvent::Completed { cycle_id } => info!(
                    %cycle_id,
                    generation = self.generation,
                    "update cycle completed"
                ),
            }
        }
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::ManualClock;
    use crate::adapters::presentation::{RecordingSink, SinkCommand};
    use crate::adapters::scheduler::ManualScheduler;
    use crate::domain::cycle::TaskHandle;

    struct Harness {
        controller: CycleController,
        scheduler: ManualScheduler,
        sink: RecordingSink,
    }

    impl Harness {
        fn advance(&mut self, millis: u64) {
            let controller = &mut self.controller;
            self.scheduler
                .run_for(millis, |fired| controller.on_timer(fired));
        }
    }

    fn quiet_behavior() -> BehaviorConfig {
        BehaviorConfig {
            glitch_probability: 0.0,
            welcome_back_probability: 0.0,
            rng_seed: Some(11),
        }
    }

    fn harness_with(behavior: BehaviorConfig) -> Harness {
        let clock = ManualClock::starting_at(0);
        let scheduler = ManualScheduler::new(clock.clone());
        let sink = RecordingSink::new();
        let mut controller = CycleController::new(
            TimingConfig::default(),
            behavior,
            Arc::new(clock),
            Box::new(scheduler.clone()),
            Box::new(sink.clone()),
        );
        controller.start();
        Harness {
            controller,
            scheduler,
            sink,
        }
    }

    fn harness() -> Harness {
        harness_with(quiet_behavior())
    }

    #[test]
    fn start_logs_immediately_and_schedules_each_role_once() {
        let h = harness();

        assert_eq!(h.sink.log_lines(), vec![catalog::LOG_MESSAGES[0]]);
        assert_eq!(h.sink.last_progress(), Some(0));
        assert_eq!(h.controller.generation(), 1);
        for event in TimerEvent::PERIODIC {
            assert_eq!(h.controller.scheduled_count(event), 1);
            assert_eq!(h.scheduler.pending_for(event), 1);
        }
    }

    #[test]
    fn log_rotates_every_interval() {
        let mut h = harness();
        h.advance(4_500);

        assert_eq!(
            h.sink.log_lines(),
            catalog::LOG_MESSAGES[..4].to_vec()
        );
        assert_eq!(h.controller.log_index(), 4);
    }

    #[test]
    fn patience_line_shows_and_clears() {
        let mut h = harness();
        h.advance(3_000);
        assert_eq!(h.sink.patience_lines(), vec![catalog::PATIENCE_LINES[0]]);

        h.sink.clear();
        h.advance(2_000);
        assert_eq!(h.sink.count(&SinkCommand::ClearPatienceLine), 1);
    }

    #[test]
    fn pause_suspends_every_periodic_role() {
        let mut h = harness();
        h.advance(1_000);
        h.controller.handle_command(ControlCommand::TogglePause);

        assert_eq!(h.controller.state(), CycleState::Paused);
        for event in TimerEvent::PERIODIC {
            assert_eq!(h.scheduler.pending_for(event), 0);
        }

        h.sink.clear();
        h.advance(10_000);
        assert!(h.sink.log_lines().is_empty());
        assert_eq!(h.sink.last_progress(), None);
    }

    #[test]
    fn pause_appends_an_alert_line() {
        let mut h = harness();
        h.controller.handle_command(ControlCommand::TogglePause);

        let lines = h.sink.styled_log_lines();
        assert_eq!(
            lines.last(),
            Some(&(catalog::PAUSED_NOTICE.to_string(), LogStyle::Alert))
        );
    }

    #[test]
    fn resume_logs_success_then_the_next_message() {
        let mut h = harness();
        h.controller.handle_command(ControlCommand::TogglePause);
        h.sink.clear();
        h.controller.handle_command(ControlCommand::TogglePause);

        assert_eq!(h.controller.state(), CycleState::Running);
        assert_eq!(
            h.sink.styled_log_lines(),
            vec![
                (catalog::RESUMED_NOTICE.to_string(), LogStyle::Success),
                (catalog::LOG_MESSAGES[1].to_string(), LogStyle::Normal),
            ]
        );
        for event in TimerEvent::PERIODIC {
            assert_eq!(h.scheduler.pending_for(event), 1);
        }
    }

    #[test]
    fn reaching_the_hold_point_enters_the_grace_period() {
        let mut h = harness();
        h.advance(40_000);

        assert_eq!(h.controller.state(), CycleState::Completing);
        assert_eq!(h.controller.percent().whole(), 99);
        for event in TimerEvent::PERIODIC {
            assert_eq!(h.scheduler.pending_for(event), 0);
        }
        assert_eq!(h.scheduler.pending_for(TimerEvent::GraceElapsed), 1);
    }

    #[test]
    fn shutdown_cancels_everything_and_finishes_the_screen() {
        let mut h = harness();
        h.advance(5_000);
        h.controller.shutdown();

        assert_eq!(h.controller.scheduled_task_count(), 0);
        assert_eq!(h.scheduler.pending(), 0);
        assert_eq!(h.sink.count(&SinkCommand::Finish), 1);

        h.sink.clear();
        h.advance(10_000);
        assert!(h.sink.is_empty());
    }

    #[test]
    fn toggle_is_ignored_while_finishing() {
        let mut h = harness();
        h.advance(40_000);
        h.controller.handle_command(ControlCommand::TogglePause);
        assert_eq!(h.controller.state(), CycleState::Completing);

        h.advance(1_000);
        h.controller.handle_command(ControlCommand::TogglePause);
        assert_eq!(h.controller.state(), CycleState::Completed);
    }

    #[test]
    fn completion_reveals_holds_and_hides_the_indicator() {
        let mut h = harness();
        h.advance(41_000);
        assert_eq!(h.controller.state(), CycleState::Completed);
        assert_eq!(h.sink.last_progress(), Some(100));

        h.advance(500);
        assert_eq!(h.sink.count(&SinkCommand::ShowCompletionIndicator), 1);

        h.sink.clear();
        h.advance(6_000);
        assert_eq!(h.sink.count(&SinkCommand::HideCompletionIndicator), 1);
        assert_eq!(h.controller.generation(), 1);

        h.advance(500);
        assert_eq!(h.controller.generation(), 2);
        assert_eq!(h.controller.state(), CycleState::Running);
        assert_eq!(h.sink.count(&SinkCommand::ClearLog), 1);
    }

    #[test]
    fn restart_resets_after_its_delay() {
        let mut h = harness();
        h.advance(10_000);
        let first = h.controller.cycle_id();
        h.controller.handle_command(ControlCommand::Restart);

        h.advance(999);
        assert_eq!(h.controller.cycle_id(), first);

        h.advance(1);
        assert_ne!(h.controller.cycle_id(), first);
        assert_eq!(h.controller.percent(), Percent::ZERO);
        assert_eq!(h.controller.log_index(), 1);
        assert_eq!(h.controller.patience_index(), 0);
    }

    #[test]
    fn second_restart_replaces_the_pending_one() {
        let mut h = harness();
        h.controller.handle_command(ControlCommand::Restart);
        h.advance(600);
        h.controller.handle_command(ControlCommand::Restart);
        assert_eq!(h.scheduler.pending_for(TimerEvent::RestartDue), 1);

        h.advance(600);
        assert_eq!(h.controller.generation(), 1);
        h.advance(400);
        assert_eq!(h.controller.generation(), 2);
    }

    #[test]
    fn pending_restart_fires_while_paused() {
        let mut h = harness();
        h.controller.handle_command(ControlCommand::Restart);
        h.controller.handle_command(ControlCommand::TogglePause);
        h.advance(1_000);

        assert_eq!(h.controller.generation(), 2);
        assert_eq!(h.controller.state(), CycleState::Running);
    }

    #[test]
    fn cancel_only_acknowledges() {
        let mut h = harness();
        h.advance(5_000);
        let state = h.controller.state();
        let percent = h.controller.percent();
        let log_index = h.controller.log_index();

        h.controller.handle_command(ControlCommand::Cancel);
        assert_eq!(
            h.sink.count(&SinkCommand::ShowCancelAcknowledgement(
                catalog::CANCEL_ACKNOWLEDGEMENT.to_string()
            )),
            1
        );
        assert_eq!(h.controller.state(), state);
        assert_eq!(h.controller.percent(), percent);
        assert_eq!(h.controller.log_index(), log_index);

        h.advance(3_000);
        assert_eq!(h.sink.count(&SinkCommand::HideCancelAcknowledgement), 2);
    }

    #[test]
    fn context_menu_line_is_glitched() {
        let mut h = harness();
        h.controller.handle_command(ControlCommand::ContextMenu);
        h.advance(500);

        assert!(h.sink.styled_log_lines().contains(&(
            catalog::CONTEXT_MENU_NOTICE.to_string(),
            LogStyle::Glitch
        )));
    }

    #[test]
    fn attention_lost_is_silent_unless_running() {
        let mut h = harness();
        h.controller.handle_command(ControlCommand::AttentionLost);
        h.controller.handle_command(ControlCommand::TogglePause);
        h.advance(1_000);
        assert!(!h
            .sink
            .log_lines()
            .contains(&catalog::ATTENTION_LOST_NOTICE.to_string()));

        h.controller.handle_command(ControlCommand::TogglePause);
        h.controller.handle_command(ControlCommand::AttentionLost);
        h.advance(1_000);
        assert!(h
            .sink
            .log_lines()
            .contains(&catalog::ATTENTION_LOST_NOTICE.to_string()));
    }

    #[test]
    fn welcome_back_follows_the_configured_chance() {
        let mut never = harness();
        never.controller.handle_command(ControlCommand::AttentionRegained);
        never.advance(2_000);
        assert!(!never
            .sink
            .log_lines()
            .contains(&catalog::WELCOME_BACK_NOTICE.to_string()));

        let mut always = harness_with(BehaviorConfig {
            welcome_back_probability: 1.0,
            ..quiet_behavior()
        });
        always
            .controller
            .handle_command(ControlCommand::AttentionRegained);
        always.advance(2_000);
        assert!(always
            .sink
            .log_lines()
            .contains(&catalog::WELCOME_BACK_NOTICE.to_string()));
    }

    #[test]
    fn certain_glitch_styles_every_rotated_message() {
        let mut h = harness_with(BehaviorConfig {
            glitch_probability: 1.0,
            ..quiet_behavior()
        });
        h.advance(3_000);

        let styles: Vec<LogStyle> = h
            .sink
            .styled_log_lines()
            .into_iter()
            .map(|(_, style)| style)
            .collect();
        assert_eq!(styles, vec![LogStyle::Glitch; 3]);
    }

    #[test]
    fn stale_firings_are_ignored() {
        let mut h = harness();
        h.sink.clear();
        h.controller.on_timer(TimerFired {
            handle: TaskHandle::new(9_999),
            event: TimerEvent::LogTick,
        });
        h.controller.on_timer(TimerFired {
            handle: TaskHandle::new(9_998),
            event: TimerEvent::RestartDue,
        });

        assert!(h.sink.is_empty());
        assert_eq!(h.controller.generation(), 1);
    }

    #[test]
    fn new_cycle_cancels_every_task_of_the_previous_one() {
        let mut h = harness();
        h.controller.handle_command(ControlCommand::Cancel);
        h.controller.handle_command(ControlCommand::ContextMenu);
        h.controller.handle_command(ControlCommand::Restart);
        h.advance(1_000);

        assert_eq!(h.controller.generation(), 2);
        assert_eq!(h.scheduler.pending(), 3);
        assert_eq!(h.controller.scheduled_task_count(), 3);
    }

    #[test]
    fn out_of_range_probabilities_are_clamped() {
        assert_eq!(clamp_probability(-1.0), 0.0);
        assert_eq!(clamp_probability(2.0), 1.0);
        assert_eq!(clamp_probability(f64::NAN), 0.0);
        assert_eq!(clamp_probability(0.3), 0.3);
    }
}
