//! CycleRuntime - The single loop that owns the controller.
//!
//! Timer firings and control commands are multiplexed onto one task, so the
//! controller handles each to completion before looking at the next. The
//! loop runs until the shutdown signal is set.

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::ports::TimerFired;

use super::{ControlCommand, CycleController, RuntimeError};

/// Owns a controller and the receiving end of its scheduler.
pub struct CycleRuntime {
    controller: CycleController,
    timers: mpsc::UnboundedReceiver<TimerFired>,
}

impl CycleRuntime {
    pub fn new(controller: CycleController, timers: mpsc::UnboundedReceiver<TimerFired>) -> Self {
        Self { controller, timers }
    }

    /// Starts the first cycle and runs until shutdown.
    ///
    /// A closed command channel only stops commands; the update keeps
    /// running. Returns the controller on graceful shutdown.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::TimerChannelClosed` if the scheduler goes away.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<ControlCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<CycleController, RuntimeError> {
        if *shutdown.borrow() {
            return Ok(self.controller);
        }

        self.controller.start();

        let mut commands_open = true;
        let mut shutdown_open = true;

        loop {
            tokio::select! {
                changed = shutdown.changed(), if shutdown_open => {
                    match changed {
                        Ok(()) if *shutdown.borrow() => {
                            info!(generation = self.controller.generation(), "shutdown requested");
                            return Ok(self.controller);
                        }
                        Ok(()) => {}
                        Err(_) => {
                            debug!("shutdown sender dropped");
                            shutdown_open = false;
                        }
                    }
                }

                fired = self.timers.recv() => {
                    match fired {
                        Some(fired) => self.controller.on_timer(fired),
                        None => return Err(RuntimeError::TimerChannelClosed),
                    }
                }

                command = commands.recv(), if commands_open => {
                    match command {
                        Some(command) => self.controller.handle_command(command),
                        None => {
                            debug!("command channel closed");
                            commands_open = false;
                        }
                    }
                }
            }
        }
    }
}
