use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use threadpool::ThreadPool;

use crate::identifier::Identifier;
use crate::options::ConversionOptions;
use crate::{convert_image_to_header, Error, Result};

type Converter = fn(&Path, &Identifier, &ConversionOptions) -> Result<PathBuf>;
type DirectoryLister = fn(&Path) -> Result<Vec<PathBuf>>;

const SUPPORTED_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "bmp", "gif", "webp", "tiff", "tif"];

/// One source image, optionally with an identifier chosen by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub identifier: Option<Identifier>,
}

impl ConversionJob {
    pub fn new(source: PathBuf) -> Self {
        Self {
            source,
            identifier: None,
        }
    }

    pub fn with_identifier(source: PathBuf, identifier: Identifier) -> Self {
        Self {
            source,
            identifier: Some(identifier),
        }
    }

    pub fn resolve_identifier(&self, options: &ConversionOptions) -> Result<Identifier> {
        match &self.identifier {
            Some(identifier) => Ok(identifier.clone()),
            None => Identifier::from_path(
                &self.source,
                &options.identifier_prefix,
                &options.identifier_suffix,
            ),
        }
    }
}

#[derive(Debug)]
pub struct ConversionOutcome {
    pub source: PathBuf,
    /// path of the written header
    pub result: Result<PathBuf>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<ConversionOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[ConversionOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

fn list_supported_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let map_error = |e| Error::UnableToOpenInputFileForReading(directory.display().to_string(), e);
    let mut images = Vec::new();
    for entry in fs::read_dir(directory).map_err(map_error)? {
        let path = entry.map_err(map_error)?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    Ok(images)
}

/// Expands directories to the supported images they directly contain.
///
/// Files are taken as given, whatever their extension, and paths that do not
/// exist are kept so that they are reported as failed conversions. A directory
/// that cannot be listed is logged and skipped.
pub fn collect_conversion_jobs(inputs: &[PathBuf]) -> Vec<ConversionJob> {
    collect_jobs_with(inputs, list_supported_images)
}

fn collect_jobs_with(inputs: &[PathBuf], list_directory: DirectoryLister) -> Vec<ConversionJob> {
    let mut sources = Vec::new();
    for input in inputs {
        if input.is_dir() {
            match list_directory(input) {
                Ok(images) if images.is_empty() => {
                    log::warn!("No supported images found in {}", input.display());
                }
                Ok(images) => sources.extend(images),
                Err(e) => log::warn!("Skipping {}: {}", input.display(), e),
            }
        } else {
            sources.push(input.clone());
        }
    }
    sources.sort();
    sources.dedup();
    sources.into_iter().map(ConversionJob::new).collect()
}

/// Converts every job on its own worker. Failures stay scoped to their job.
///
/// Outcomes are reported in job order, one per job. Jobs whose identifier
/// cannot be derived, or collides with an earlier job's, fail without being
/// scheduled.
pub fn convert_batch(
    jobs: Vec<ConversionJob>,
    options: &ConversionOptions,
    number_of_threads: usize,
) -> BatchReport {
    run_batch(jobs, options, number_of_threads, convert_image_to_header)
}

fn run_batch(
    jobs: Vec<ConversionJob>,
    options: &ConversionOptions,
    number_of_threads: usize,
    convert: Converter,
) -> BatchReport {
    let sources: Vec<PathBuf> = jobs.iter().map(|job| job.source.clone()).collect();
    let mut outcomes: Vec<Option<ConversionOutcome>> = sources.iter().map(|_| None).collect();
    let mut claimed: HashMap<Identifier, PathBuf> = HashMap::new();
    let threadpool = ThreadPool::new(number_of_threads.max(1));
    let options = Arc::new(options.clone());
    let (sender, receiver) = mpsc::channel();

    for (index, job) in jobs.into_iter().enumerate() {
        let identifier = match job.resolve_identifier(&options) {
            Ok(identifier) => identifier,
            Err(e) => {
                outcomes[index] = Some(ConversionOutcome {
                    source: job.source,
                    result: Err(e),
                });
                continue;
            }
        };
        if let Some(first) = claimed.get(&identifier) {
            let error = Error::DuplicateIdentifier(
                identifier.to_string(),
                first.display().to_string(),
            );
            outcomes[index] = Some(ConversionOutcome {
                source: job.source,
                result: Err(error),
            });
            continue;
        }
        claimed.insert(identifier.clone(), job.source.clone());

        let sender = sender.clone();
        let options = Arc::clone(&options);
        threadpool.execute(move || {
            let result = convert(&job.source, &identifier, &options);
            let outcome = ConversionOutcome {
                source: job.source,
                result,
            };
            // the receiver lives until every worker has finished
            let _ = sender.send((index, outcome));
        });
    }
    drop(sender);

    for (index, outcome) in receiver.iter() {
        outcomes[index] = Some(outcome);
    }
    if threadpool.panic_count() > 0 {
        log::error!("{} conversion worker(s) panicked", threadpool.panic_count());
    }
    // a worker that panicked never sent its outcome
    let outcomes = outcomes
        .into_iter()
        .zip(sources)
        .map(|(outcome, source)| {
            outcome.unwrap_or_else(|| {
                let error = Error::WorkerPanicked(source.display().to_string());
                ConversionOutcome {
                    source,
                    result: Err(error),
                }
            })
        })
        .collect();
    BatchReport { outcomes }
}
