//! Line-based keyboard front-end.
//!
//! A terminal cannot report single key presses without raw mode, so each
//! command is one line of input:
//!
//! | Input | Command |
//! |-------|---------|
//! | empty, `p`, `space` | TogglePause |
//! | `r` | Restart |
//! | `c`, `esc` | Cancel |
//! | `m` | ContextMenu |
//! | `away` | AttentionLost |
//! | `back` | AttentionRegained |
//! | `q` twice | quit |

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::application::{ControlCommand, RuntimeError};
use crate::domain::rotation::catalog;

/// What one line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(ControlCommand),
    /// First quit request; ask again before leaving.
    ConfirmQuit,
    Quit,
    Unknown,
}

/// Maps input lines to actions.
///
/// Quitting takes two consecutive `q` lines. Any other input in between
/// disarms the first one.
#[derive(Debug, Default)]
pub struct InputMapper {
    quit_armed: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&mut self, line: &str) -> InputAction {
        let key = line.trim().to_ascii_lowercase();
        if key == "q" {
            let action = if self.quit_armed {
                InputAction::Quit
            } else {
                InputAction::ConfirmQuit
            };
            self.quit_armed = !self.quit_armed;
            return action;
        }
        self.quit_armed = false;

        match key.as_str() {
            "" | "p" | "space" => InputAction::Command(ControlCommand::TogglePause),
            "r" => InputAction::Command(ControlCommand::Restart),
            "c" | "esc" => InputAction::Command(ControlCommand::Cancel),
            "m" => InputAction::Command(ControlCommand::ContextMenu),
            "away" => InputAction::Command(ControlCommand::AttentionLost),
            "back" => InputAction::Command(ControlCommand::AttentionRegained),
            _ => InputAction::Unknown,
        }
    }
}

/// Reads lines from `reader` and forwards the commands they map to.
///
/// Quit confirmation prompts are written to `prompt_out`. A confirmed quit
/// sets `shutdown`. Returns when input ends, the quit is confirmed or the
/// runtime stops taking commands.
///
/// # Errors
///
/// Returns `RuntimeError::Input` if reading input or writing a prompt fails.
pub async fn forward_commands<R, W>(
    reader: R,
    mut prompt_out: W,
    commands: mpsc::Sender<ControlCommand>,
    shutdown: &watch::Sender<bool>,
) -> Result<(), RuntimeError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut mapper = InputMapper::new();

    while let Some(line) = lines.next_line().await? {
        match mapper.map(&line) {
            InputAction::Command(command) => {
                if commands.send(command).await.is_err() {
                    debug!("runtime no longer accepts commands");
                    return Ok(());
                }
            }
            InputAction::ConfirmQuit => {
                let prompt = format!("?? {} (q again to quit)\n", catalog::QUIT_CONFIRMATION);
                prompt_out.write_all(prompt.as_bytes()).await?;
                prompt_out.flush().await?;
            }
            InputAction::Quit => {
                info!("quit confirmed");
                if shutdown.send(true).is_err() {
                    debug!("runtime already stopped");
                }
                return Ok(());
            }
            InputAction::Unknown => debug!(input = %line.trim(), "unrecognised input"),
        }
    }

    debug!("input closed");
    Ok(())
}
