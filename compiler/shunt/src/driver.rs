//! Batch processing of expression files.
//!
//! Every line of every input file is evaluated on its own: a failing
//! expression only produces its error message in its output file and never
//! stops the rest of the batch. File-level IO failures are reported per file.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use shunt_eval::{EvaluationCache, OperationCache, SharedEvaluationCache, Uncached};

use crate::config::OutputMode;
use crate::pipeline::evaluate_expression_cached;
use crate::sink::{output_path, write_outcome};
use crate::source::read_expressions;

/// Input or output failure for one file.
#[derive(thiserror::Error, Debug)]
pub enum DriverError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("{} would overwrite the outputs of {}", .path.display(), .other.display())]
    OutputClash { path: PathBuf, other: PathBuf },
}

/// Outcome of processing one input file.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    /// Output paths in line order
    pub outputs: Result<Vec<PathBuf>, DriverError>,
}

/// Timing and final-round results of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub elapsed: Duration,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|report| report.outputs.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Elapsed times of the same batch without and with caching.
#[derive(Debug)]
pub struct Benchmark {
    pub uncached: BatchReport,
    pub cached: BatchReport,
}

/// Evaluate every line of `path`, writing one output file per line.
pub fn evaluate_file(
    path: &Path,
    cache: &mut dyn OperationCache,
    mode: OutputMode,
) -> Result<Vec<PathBuf>, DriverError> {
    let lines = read_expressions(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{}: {} expressions", path.display(), lines.len());

    let mut outputs = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let outcome = evaluate_expression_cached(line, cache);
        match &outcome {
            Err(e) if e.is_internal() => log::error!("{}:{index}: {e}", path.display()),
            Err(e) => log::info!("{}:{index}: {e}", path.display()),
            Ok(_) => {}
        }

        let target = output_path(path, index);
        write_outcome(&target, &outcome, mode).map_err(|source| DriverError::Write {
            path: target.clone(),
            source,
        })?;
        outputs.push(target);
    }
    Ok(outputs)
}

/// Process `files` in order, `repeat` times over.
///
/// With `use_cache` one cache serves the whole run, across files and rounds.
/// The report holds the elapsed time of all rounds and the results of the
/// last one; a `repeat` of 0 processes nothing.
pub fn run_batch(files: &[PathBuf], repeat: u32, use_cache: bool, mode: OutputMode) -> BatchReport {
    let mut cache: Box<dyn OperationCache> = if use_cache {
        Box::new(EvaluationCache::new())
    } else {
        Box::new(Uncached)
    };

    let started = Instant::now();
    let mut last_round = Vec::new();
    for round in 1..=repeat {
        for file in files {
            let outputs = evaluate_file(file, cache.as_mut(), mode);
            if let Err(e) = &outputs {
                log::error!("processing file {} failed: {e}", file.display());
            }
            if round == repeat {
                last_round.push(FileReport {
                    input: file.clone(),
                    outputs,
                });
            }
        }
    }

    let elapsed = started.elapsed();
    log::info!(
        "{} file(s) x {repeat} round(s) in {elapsed:?} (cache {})",
        files.len(),
        if use_cache { "on" } else { "off" }
    );
    BatchReport {
        elapsed,
        files: last_round,
    }
}

/// Inputs whose output files collide with an earlier input, such as
/// `a.txt` and `a.csv` in one directory.
fn output_clashes(files: &[PathBuf]) -> Vec<Option<DriverError>> {
    let mut claimed: HashMap<PathBuf, &PathBuf> = HashMap::new();
    files
        .iter()
        .map(|file| match claimed.entry(output_path(file, 0)) {
            Entry::Occupied(first) => Some(DriverError::OutputClash {
                path: file.clone(),
                other: (*first.get()).clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(file);
                None
            }
        })
        .collect()
}

/// Process each file on its own scoped thread, all sharing `cache` when one
/// is given.
///
/// Reports come back in the order of `files`. A file whose outputs would
/// land on those of an earlier file is not processed and reports
/// [`DriverError::OutputClash`].
pub fn run_parallel(
    files: &[PathBuf],
    cache: Option<&SharedEvaluationCache>,
    mode: OutputMode,
) -> BatchReport {
    let started = Instant::now();
    let clashes = output_clashes(files);
    let reports = thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .zip(clashes)
            .map(|(file, clash)| {
                let cache = cache.cloned();
                scope.spawn(move || {
                    let outputs = match (clash, cache) {
                        (Some(clash), _) => Err(clash),
                        (None, Some(mut shared)) => evaluate_file(file, &mut shared, mode),
                        (None, None) => evaluate_file(file, &mut Uncached, mode),
                    };
                    FileReport {
                        input: file.clone(),
                        outputs,
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect::<Vec<_>>()
    });

    for report in &reports {
        if let Err(e) = &report.outputs {
            log::error!("processing file {} failed: {e}", report.input.display());
        }
    }
    BatchReport {
        elapsed: started.elapsed(),
        files: reports,
    }
}

/// Run the batch without cache, then with one.
pub fn benchmark(files: &[PathBuf], repeat: u32, mode: OutputMode) -> Benchmark {
    let uncached = run_batch(files, repeat, false, mode);
    let cached = run_batch(files, repeat, true, mode);
    Benchmark { uncached, cached }
}
