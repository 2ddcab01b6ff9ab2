//! `encode` command: layer names → `shaper:*` attributes.

use anyhow::{Context, Result};
use std::fs;

use super::args::EncodeArgs;
use super::batch::{self, Job};
use super::report::BatchReport;
use crate::config::{EncodeConfig, ShaperConfig};
use crate::shaper::{Diagnostics, Extraction, Issue, PREFIX};
use crate::transform::{EncodeOptions, encode_document};
use crate::{debug, log, svg};

/// Element label used for warnings about global attributes.
const GLOBAL: &str = "<global>";

pub fn run_encode(args: &EncodeArgs, config: &ShaperConfig) -> Result<BatchReport> {
    let options = encode_options(&config.encode, &args.globals);
    let jobs = batch::plan(&args.io.input, args.io.output.as_deref(), &config.output.suffix)?;
    Ok(batch::run(&jobs, |job| encode_file(job, &options)))
}

/// Build encoder options from the config file and `-g` flags.
///
/// Config globals are read first so that flags override them.
fn encode_options(config: &EncodeConfig, cli_globals: &[String]) -> EncodeOptions {
    let fields: Vec<&str> = config
        .globals
        .iter()
        .chain(cli_globals)
        .map(String::as_str)
        .collect();

    let extraction = Extraction::from_fields(fields.iter().copied());
    let mut diagnostics = Diagnostics::new();
    diagnostics.extend(GLOBAL, extraction.issues);
    for token in fields.iter().flat_map(|field| field.split_whitespace()) {
        if !token.contains(&format!("{PREFIX}:")) {
            diagnostics.push(
                GLOBAL,
                Issue::MalformedToken {
                    token: token.to_string(),
                },
            );
        }
    }
    // unknown names have no leaf to live on
    diagnostics.print();

    debug!("encode"; "global attributes: {}", extraction.attrs.len());
    EncodeOptions {
        globals: extraction.attrs,
        normalize_paint: config.normalize_paint,
        stroke_width: config.stroke_width.clone(),
    }
}

fn encode_file(job: &Job, options: &EncodeOptions) -> Result<usize> {
    let source = fs::read(&job.input)
        .with_context(|| format!("failed to read {}", job.input.display()))?;
    let text = std::str::from_utf8(&source)
        .with_context(|| format!("{} is not valid UTF-8", job.input.display()))?;

    let mut doc = svg::parse(text.trim_start_matches('\u{feff}'))
        .with_context(|| format!("failed to parse {}", job.input.display()))?;
    let report = encode_document(&mut doc, &source, options);

    let bytes = svg::write(&doc)?;
    fs::write(&job.output, bytes)
        .with_context(|| format!("failed to write {}", job.output.display()))?;

    log!(
        "encode";
        "{} -> {} ({} shapes, {} groups)",
        job.input.display(),
        job.output.display(),
        report.leaves,
        report.groups
    );
    for rename in &report.renames {
        log!("encode"; "{}", rename);
    }
    report.diagnostics.print();
    Ok(report.diagnostics.len())
}
