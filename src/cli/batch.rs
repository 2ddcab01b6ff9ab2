//! Input expansion, output naming and the per-file conversion loop.
//!
//! ```text
//! -i a.svg "parts/*.svg"  ──► plan ──► [Job { input, output }, ...] ──► run
//! ```
//!
//! Planning fails fast (missing inputs, unusable output directory). Running
//! never does: each file's error is recorded and the loop moves on.

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::report::BatchReport;
use crate::{debug, log};

/// One file to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Whether an input argument looks like a glob pattern.
///
/// An existing path is always taken literally, even with `[` in its name.
fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Expand input arguments into SVG file paths, in argument order.
///
/// Returns the paths and whether the whole input was a single literal path.
fn expand_inputs(inputs: &[String], suffix: &str) -> Result<(Vec<PathBuf>, bool)> {
    let mut files = Vec::new();
    let mut seen = FxHashSet::default();
    let is_literal = |input: &str| Path::new(input).exists() || !is_pattern(input);
    let single = inputs.len() == 1 && is_literal(inputs[0].as_str());

    for input in inputs {
        if !is_literal(input.as_str()) {
            let matches =
                glob::glob(input).with_context(|| format!("invalid glob pattern `{input}`"))?;
            for entry in matches {
                let path = match entry {
                    Ok(path) => path,
                    Err(err) => {
                        log!("warning"; "skipping {}: {}", err.path().display(), err.error());
                        continue;
                    }
                };
                if !path.is_file() || !is_svg(&path) {
                    continue;
                }
                if file_stem(&path).ends_with(suffix) {
                    debug!("batch"; "skipping converted file {}", path.display());
                    continue;
                }
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        } else {
            let path = PathBuf::from(input);
            if !path.exists() {
                bail!("input `{}` not found", path.display());
            }
            if !path.is_file() || !is_svg(&path) {
                log!("warning"; "ignoring {}: not an SVG file", path.display());
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        bail!("no SVG input files found");
    }
    Ok((files, single))
}

/// `<stem><suffix>.svg`
fn output_name(input: &Path, suffix: &str) -> String {
    format!("{}{}.svg", file_stem(input), suffix)
}

/// Resolve inputs and decide where each output goes.
///
/// - one literal input and `-o` not naming a directory: write to `-o`
/// - otherwise `-o` is a directory (created when missing)
/// - without `-o`: next to the input
pub fn plan(inputs: &[String], output: Option<&Path>, suffix: &str) -> Result<Vec<Job>> {
    let (files, single) = expand_inputs(inputs, suffix)?;

    let jobs: Vec<Job> = match output {
        Some(target) if single && !target.is_dir() => vec![Job {
            input: files[0].clone(),
            output: target.to_path_buf(),
        }],
        Some(dir) => {
            if dir.exists() && !dir.is_dir() {
                bail!("output `{}` exists and is not a directory", dir.display());
            }
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create output directory `{}`", dir.display()))?;
            files
                .into_iter()
                .map(|input| {
                    let output = dir.join(output_name(&input, suffix));
                    Job { input, output }
                })
                .collect()
        }
        None => files
            .into_iter()
            .map(|input| {
                let output = input.with_file_name(output_name(&input, suffix));
                Job { input, output }
            })
            .collect(),
    };

    let mut outputs = FxHashSet::default();
    for job in &jobs {
        if !outputs.insert(&job.output) {
            log!("warning"; "{} is written more than once", job.output.display());
        }
    }
    Ok(jobs)
}

/// Convert every job, containing failures per file.
///
/// `convert` returns the number of warnings emitted for the file.
pub fn run(jobs: &[Job], mut convert: impl FnMut(&Job) -> Result<usize>) -> BatchReport {
    let mut report = BatchReport::default();
    for job in jobs {
        match convert(job) {
            Ok(warnings) => report.add_success(warnings),
            Err(err) => {
                log!("error"; "{}: {:#}", job.input.display(), err);
                report.add_failure(job.input.display().to_string(), format!("{err:#}"));
            }
        }
    }
    report
}
