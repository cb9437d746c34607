//! Worker pool draining one shared [`FastaIterator`]
//!
//! # Architecture
//!
//! ```text
//!                     ┌──────────────┐
//!                ┌──▶ │  worker 0    │ ──┐
//! ┌───────────┐  │    └──────────────┘   │   bounded channel   ┌──────────┐
//! │ FastaIter │ ─┤          ...          ├──────outputs──────▶ │  caller  │
//! │  (mutex)  │  │    ┌──────────────┐   │                     └──────────┘
//! └───────────┘  └──▶ │  worker N-1  │ ──┘
//!                     └──────────────┘
//! ```
//!
//! Each worker pulls the next protein under the iterator's lock, then runs
//! the user closure outside it, so record parsing is serialized while the
//! per-protein work runs in parallel. The first error stops every worker.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::bounded;
use log::debug;

use crate::fasta::{FastaError, FastaIterator, Protein};

/// Outputs buffered per worker before a worker blocks on the channel
const CHANNEL_DEPTH: usize = 64;

/// Statistics from a pool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of workers spawned
    pub workers: usize,
    /// Total proteins processed
    pub records_processed: u64,
    /// Proteins processed by each worker, indexed by worker id
    pub per_worker: Vec<u64>,
}

enum WorkerMessage<T> {
    Output(T),
    Failed(FastaError),
    Done { worker: usize, processed: u64 },
}

/// Number of workers matching the available parallelism
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Run `f` on every remaining protein using `workers` threads
///
/// Outputs are returned in completion order, not file order. On the first
/// error the remaining workers stop after their current protein and the
/// error is returned.
pub fn for_each_protein<R, T, F>(
    proteins: &FastaIterator<R>,
    workers: usize,
    f: F,
) -> Result<(Vec<T>, PoolStats), FastaError>
where
    R: BufRead + Send,
    T: Send,
    F: Fn(&Protein) -> T + Sync,
{
    let workers = workers.max(1);
    let stop = AtomicBool::new(false);

    thread::scope(|scope| {
        let (sender, receiver) = bounded::<WorkerMessage<T>>(workers * CHANNEL_DEPTH);

        for worker in 0..workers {
            let sender = sender.clone();
            let f = &f;
            let stop = &stop;
            thread::Builder::new()
                .name(format!("protfasta-worker-{}", worker))
                .spawn_scoped(scope, move || {
                    let mut processed = 0u64;
                    while !stop.load(Ordering::Relaxed) {
                        match proteins.next_record() {
                            Ok(Some(protein)) => {
                                processed += 1;
                                if sender.send(WorkerMessage::Output(f(&protein))).is_err() {
                                    break;
                                }
                            }
                            Ok(None) => break,
                            Err(e) => {
                                stop.store(true, Ordering::Relaxed);
                                let _ = sender.send(WorkerMessage::Failed(e));
                                break;
                            }
                        }
                    }
                    let _ = sender.send(WorkerMessage::Done { worker, processed });
                })?;
        }
        drop(sender);

        let mut outputs = Vec::new();
        let mut first_error = None;
        let mut stats = PoolStats {
            workers,
            records_processed: 0,
            per_worker: vec![0; workers],
        };

        for message in receiver {
            match message {
                WorkerMessage::Output(output) => outputs.push(output),
                WorkerMessage::Failed(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                WorkerMessage::Done { worker, processed } => {
                    stats.per_worker[worker] = processed;
                    stats.records_processed += processed;
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        debug!(
            "Worker pool processed {} proteins with {} workers",
            stats.records_processed, workers
        );
        Ok((outputs, stats))
    })
}
