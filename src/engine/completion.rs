// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::sync::oneshot;

use crate::engine::PipelineReport;
use crate::errors::AssetError;

/// What the host receives when the optimize-assets phase finishes.
pub type BuildOutcome = Result<PipelineReport, AssetError>;

/// One-shot "this phase is done" signal handed to the pipeline by the host.
///
/// `complete` consumes the signal, so it can fire at most once per build.
#[derive(Debug)]
pub struct CompletionSignal {
    tx: oneshot::Sender<BuildOutcome>,
}

impl CompletionSignal {
    /// Creates a signal and the receiver the host awaits before moving on
    /// to its next phase.
    pub fn channel() -> (Self, oneshot::Receiver<BuildOutcome>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    pub fn complete(self, outcome: BuildOutcome) {
        if self.tx.send(outcome).is_err() {
            tracing::debug!("host stopped waiting for the optimize-assets phase");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_delivers_outcome() {
        let (signal, rx) = CompletionSignal::channel();
        signal.complete(Ok(PipelineReport::default()));

        let outcome = rx.await.expect("signal should be delivered");
        assert_eq!(outcome, Ok(PipelineReport::default()));
    }

    #[tokio::test]
    async fn test_complete_after_receiver_dropped_does_not_panic() {
        let (signal, rx) = CompletionSignal::channel();
        drop(rx);
        signal.complete(Ok(PipelineReport::default()));
    }
}
