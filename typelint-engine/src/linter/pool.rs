//! Checker-shard worker pool.
//!
//! Two pre-filled, closed queues drive the whole run: a queue of shard
//! jobs, and per-job queues of files. Workers claim a job, drain its file
//! queue with that job's checker, then claim the next. A checker is never
//! touched by two workers at once; exclusivity follows from job
//! ownership, with no lock anywhere. With one worker the loop runs inline
//! on the calling thread, giving deterministic sequential order.

use std::path::PathBuf;
use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver};
use typelint_core::EngineError;

use crate::rule::context::DiagnosticSink;
use crate::rule::FixMode;
use crate::syntax::{Program, SourceFile, TypeChecker};

use super::dispatch::lint_file;
use super::RulesForFile;

/// One shard's workload: the checker handle and the files bound to it.
struct ShardJob {
    checker: TypeChecker,
    files: Receiver<Arc<SourceFile>>,
}

/// Run the linter over `file_paths`, which must all belong to `program`.
///
/// A path missing from the program's compiled source files is an
/// assignment bug in the caller: fatal, reported before any file is
/// linted, never retried.
pub fn run_linter(
    program: &Program,
    file_paths: &[PathBuf],
    workers: usize,
    rules_for_file: &RulesForFile<'_>,
    sink: &DiagnosticSink<'_>,
    fix_mode: FixMode,
) -> Result<(), EngineError> {
    let files = program.files_for_paths(file_paths)?;
    run_linter_on_program(program, &files, workers, rules_for_file, sink, fix_mode);
    Ok(())
}

/// Process every file with every applicable rule, calling `sink` for each
/// diagnostic. Returns only after all files are processed. Within one file
/// rule and listener order are deterministic; across files, arrival order
/// is unspecified when `workers > 1`.
pub fn run_linter_on_program(
    program: &Program,
    files: &[Arc<SourceFile>],
    workers: usize,
    rules_for_file: &RulesForFile<'_>,
    sink: &DiagnosticSink<'_>,
    fix_mode: FixMode,
) {
    if files.is_empty() {
        return;
    }

    let workers = workers.max(1);
    let shard_count = program.checker_shard_count().min(files.len());
    tracing::info!(
        files = files.len(),
        workers,
        shards = shard_count,
        "running linter on program"
    );

    // Partition files round-robin across shards; each job's queue is
    // pre-filled and closed before any worker starts.
    let mut buckets: Vec<Vec<Arc<SourceFile>>> = (0..shard_count).map(|_| Vec::new()).collect();
    for (idx, file) in files.iter().enumerate() {
        buckets[idx % shard_count].push(Arc::clone(file));
    }

    let checkers = program.take_checkers();
    let (jobs_tx, jobs_rx) = bounded::<ShardJob>(shard_count);
    for (checker, bucket) in checkers.into_iter().zip(buckets) {
        let (files_tx, files_rx) = bounded(bucket.len().max(1));
        for file in bucket {
            let _ = files_tx.send(file);
        }
        drop(files_tx);
        let _ = jobs_tx.send(ShardJob {
            checker,
            files: files_rx,
        });
    }
    drop(jobs_tx);

    if workers == 1 {
        worker_loop(jobs_rx, program, rules_for_file, sink, fix_mode);
    } else {
        std::thread::scope(|scope| {
            for _ in 0..workers {
                let jobs = jobs_rx.clone();
                scope.spawn(move || {
                    worker_loop(jobs, program, rules_for_file, sink, fix_mode);
                });
            }
        });
    }
}

fn worker_loop(
    jobs: Receiver<ShardJob>,
    program: &Program,
    rules_for_file: &RulesForFile<'_>,
    sink: &DiagnosticSink<'_>,
    fix_mode: FixMode,
) {
    // Claiming a job moves its checker here; no other worker can see it
    // until the job is dropped, and jobs are never re-queued.
    for job in jobs.iter() {
        for file in job.files.iter() {
            lint_file(program, &file, &job.checker, rules_for_file, sink, fix_mode);
        }
    }
}
