//! Spoken route guidance.
//!
//! The navigation handler produces a sequence of short sentences for each
//! request and hands them to a [`Speaker`]. [`CommandSpeaker`] reads them
//! aloud through an external text-to-speech program such as `espeak-ng`;
//! without one configured, [`LogSpeaker`] emits every sentence as a
//! structured event on the `voice` log target.

use anyhow::{bail, Result};
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const INVALID_LOCATIONS: &str = "Invalid locations selected.";
pub const NO_PATH: &str = "No path found between selected points.";
pub const ARRIVED: &str = "You have reached your destination.";

/// Turn-by-turn instructions for a computed route
pub fn route_instructions(path: &[String]) -> Vec<String> {
    let Some((start, rest)) = path.split_first() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(path.len() + 1);
    lines.push(format!("Starting from {}.", start));
    lines.extend(rest.iter().map(|place| format!("Proceed to {}.", place)));
    lines.push(ARRIVED.to_string());
    lines
}

/// Output sink for spoken guidance
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str);
}

/// Speaker that writes each sentence to the `voice` log target
#[derive(Debug, Clone)]
pub struct LogSpeaker {
    rate: u32,
}

impl LogSpeaker {
    pub fn new(rate: u32) -> Self {
        Self { rate }
    }
}

impl Speaker for LogSpeaker {
    fn speak(&self, text: &str) {
        tracing::info!(target: "voice", rate = self.rate, "Voice: {}", text);
    }
}

/// Speaker that runs a text-to-speech command for each sentence
///
/// The command is a whitespace-separated template in which `{rate}` and
/// `{text}` are substituted per argument, e.g. `espeak-ng -s {rate} {text}`.
/// Sentences are queued and spoken one at a time in the order received, so
/// request handlers never wait on speech.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    queue: mpsc::UnboundedSender<String>,
}

impl CommandSpeaker {
    /// Start the speech worker on the current tokio runtime
    ///
    /// The worker exits once every clone of the speaker has been dropped
    /// and the queue is drained.
    pub fn spawn(template: &str, rate: u32) -> Result<(Self, JoinHandle<()>)> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let Some(program) = parts.next() else {
            bail!("voice command template is empty");
        };
        let args: Vec<String> = parts.collect();

        let (queue, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_speech_worker(program, args, rate, rx));
        Ok((Self { queue }, worker))
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) {
        tracing::info!(target: "voice", "Voice: {}", text);
        if self.queue.send(text.to_string()).is_err() {
            tracing::warn!(target: "voice", "Speech worker has stopped; dropped: {}", text);
        }
    }
}

async fn run_speech_worker(
    program: String,
    args: Vec<String>,
    rate: u32,
    mut queue: mpsc::UnboundedReceiver<String>,
) {
    let rate = rate.to_string();
    while let Some(text) = queue.recv().await {
        let argv = args
            .iter()
            .map(|arg| arg.replace("{rate}", &rate).replace("{text}", &text));

        match Command::new(&program).args(argv).kill_on_drop(true).status().await {
            Ok(status) if status.success() => {
                tracing::debug!(target: "voice", "Spoke: {}", text);
            }
            Ok(status) => {
                tracing::warn!(target: "voice", "{} exited with {} while speaking", program, status);
            }
            Err(err) => {
                tracing::warn!(target: "voice", "Failed to run {}: {}", program, err);
            }
        }
    }
    tracing::debug!(target: "voice", "Speech worker stopped");
}

/// Speaker used when voice output is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _text: &str) {}
}
