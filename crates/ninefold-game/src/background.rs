//! Off-thread puzzle generation.
//!
//! Generation can take long enough to stall a frame, so requests run on a
//! single shared worker thread. Requests queue up and run serially; each one
//! delivers its result through a single-use channel the caller polls.
//! Dropping a [`PendingGame`] discards the result when it arrives, the
//! worker itself is never blocked by an abandoned handle.

use std::{
    fmt,
    sync::{
        OnceLock,
        mpsc::{self, TryRecvError},
    },
    thread,
};

use log::debug;
use ninefold_generator::{
    GeneratedPuzzle, GenerationConfig, GenerationError, PuzzleGenerator, PuzzleSeed,
};

/// Request for one background-generated puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewGameRequest {
    /// Generation settings.
    pub config: GenerationConfig,
    /// Seed to use; a random one is drawn when absent.
    pub seed: Option<PuzzleSeed>,
}

impl NewGameRequest {
    fn run(&self) -> Result<GeneratedPuzzle, GenerationError> {
        let generator = PuzzleGenerator::new(self.config);
        match self.seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        }
    }
}

struct RequestEnvelope {
    request: NewGameRequest,
    response_tx: mpsc::Sender<Result<GeneratedPuzzle, GenerationError>>,
}

/// Shared worker thread sender, reused across requests.
static WORKER_SENDER: OnceLock<mpsc::Sender<RequestEnvelope>> = OnceLock::new();

fn worker_sender() -> &'static mpsc::Sender<RequestEnvelope> {
    WORKER_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<RequestEnvelope>();
        thread::spawn(move || {
            while let Ok(envelope) = rx.recv() {
                let response = envelope.request.run();
                let _ = envelope.response_tx.send(response);
            }
        });
        tx
    })
}

/// Spawns the worker thread ahead of the first request.
pub fn warm_up() {
    let _ = worker_sender();
}

/// Queues a generation request on the worker thread.
///
/// # Errors
///
/// Returns [`BackgroundError::WorkerDisconnected`] if the worker thread is
/// gone.
pub fn spawn_generation(request: NewGameRequest) -> Result<PendingGame, BackgroundError> {
    debug!("queueing background generation: {request:?}");
    let (response_tx, receiver) = mpsc::channel();
    worker_sender()
        .send(RequestEnvelope {
            request,
            response_tx,
        })
        .map_err(|_| BackgroundError::WorkerDisconnected)?;
    Ok(PendingGame { receiver })
}

/// Handle to a queued generation.
///
/// The result is delivered at most once: after [`PendingGame::poll`] has
/// yielded the puzzle, later polls report the worker as disconnected.
pub struct PendingGame {
    receiver: mpsc::Receiver<Result<GeneratedPuzzle, GenerationError>>,
}

impl PendingGame {
    /// Checks for the result without blocking.
    ///
    /// Returns `Ok(None)` while the generation is still running.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::Generation`] if the generation run failed
    /// and [`BackgroundError::WorkerDisconnected`] if the result can no
    /// longer arrive.
    pub fn poll(&mut self) -> Result<Option<GeneratedPuzzle>, BackgroundError> {
        match self.receiver.try_recv() {
            Ok(Ok(puzzle)) => Ok(Some(puzzle)),
            Ok(Err(source)) => Err(BackgroundError::Generation { source }),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(BackgroundError::WorkerDisconnected),
        }
    }

    /// Blocks until the result arrives.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::Generation`] if the generation run failed
    /// and [`BackgroundError::WorkerDisconnected`] if the result can no
    /// longer arrive.
    pub fn wait(self) -> Result<GeneratedPuzzle, BackgroundError> {
        match self.receiver.recv() {
            Ok(Ok(puzzle)) => Ok(puzzle),
            Ok(Err(source)) => Err(BackgroundError::Generation { source }),
            Err(_) => Err(BackgroundError::WorkerDisconnected),
        }
    }
}

impl fmt::Debug for PendingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingGame").finish()
    }
}

/// Error from background generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BackgroundError {
    /// The worker thread or its channel is gone.
    #[display("generation worker disconnected")]
    WorkerDisconnected,
    /// The generation run itself failed.
    #[display("background generation failed: {source}")]
    Generation {
        /// The underlying error.
        source: GenerationError,
    },
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ninefold_generator::Difficulty;

    use super::*;

    fn request() -> NewGameRequest {
        NewGameRequest {
            config: GenerationConfig {
                difficulty: Difficulty::Low,
                ensure_unique: true,
            },
            seed: Some(PuzzleSeed::from_bytes([3; 32])),
        }
    }

    #[test]
    fn test_background_generation_matches_synchronous() {
        let pending = spawn_generation(request()).expect("worker is alive");
        let generated = pending.wait().expect("generation succeeds");

        let direct = PuzzleGenerator::new(request().config)
            .generate_with_seed(PuzzleSeed::from_bytes([3; 32]))
            .expect("generation succeeds");
        assert_eq!(generated, direct);
    }

    #[test]
    fn test_dropped_handle_does_not_stall_the_queue() {
        let abandoned = spawn_generation(request()).expect("worker is alive");
        drop(abandoned);

        let pending = spawn_generation(request()).expect("worker is alive");
        let generated = pending.wait().expect("generation succeeds");
        assert!(generated.solution.is_solved());
    }

    #[test]
    fn test_warm_up_is_idempotent() {
        warm_up();
        warm_up();
        let pending = spawn_generation(request()).expect("worker is alive");
        assert!(pending.wait().is_ok());
    }

    #[test]
    fn test_poll_delivers_at_most_once() {
        let mut pending = spawn_generation(request()).expect("worker is alive");
        let generated = loop {
            if let Some(generated) = pending.poll().expect("worker is alive") {
                break generated;
            }
            thread::sleep(Duration::from_millis(1));
        };
        assert!(generated.solution.is_solved());

        // The response channel closes once the worker hands over the result.
        loop {
            match pending.poll() {
                Err(BackgroundError::WorkerDisconnected) => break,
                Ok(None) => thread::sleep(Duration::from_millis(1)),
                other => panic!("result delivered twice: {other:?}"),
            }
        }
    }
}
