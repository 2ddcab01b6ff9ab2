//! `decode` command: `shaper:*` attributes → layer names.

use anyhow::{Context, Result};
use std::fs;

use super::args::IoArgs;
use super::batch::{self, Job};
use super::report::BatchReport;
use crate::config::ShaperConfig;
use crate::transform::decode_document;
use crate::{log, svg};

pub fn run_decode(args: &IoArgs, config: &ShaperConfig) -> Result<BatchReport> {
    let jobs = batch::plan(&args.input, args.output.as_deref(), &config.output.suffix)?;
    Ok(batch::run(&jobs, decode_file))
}

fn decode_file(job: &Job) -> Result<usize> {
    let source = fs::read_to_string(&job.input)
        .with_context(|| format!("failed to read {}", job.input.display()))?;
    let mut doc = svg::parse(source.trim_start_matches('\u{feff}'))
        .with_context(|| format!("failed to parse {}", job.input.display()))?;

    let report = decode_document(&mut doc);

    let bytes = svg::write(&doc)?;
    fs::write(&job.output, bytes)
        .with_context(|| format!("failed to write {}", job.output.display()))?;

    log!(
        "decode";
        "{} -> {} ({} shapes)",
        job.input.display(),
        job.output.display(),
        report.converted
    );
    report.diagnostics.print();
    Ok(report.diagnostics.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_decode_single_file_to_target() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("cut.svg");
        fs::write(
            &input,
            r#"<svg xmlns:shaper="http://www.shapertools.com/namespaces/shaper"><path shaper:cutType="inside" shaper:cutDepth="5mm"/></svg>"#,
        )
        .unwrap();
        let target = dir.path().join("layers.svg");

        let args = IoArgs {
            input: vec![input.to_string_lossy().into_owned()],
            output: Some(target.clone()),
        };
        let report = run_decode(&args, &ShaperConfig::default()).unwrap();
        assert_eq!(report.converted, 1);
        assert!(!report.has_failures());

        let written = fs::read_to_string(&target).unwrap();
        assert!(written.contains(r#"id="shaper:cutDepth=5mm shaper:cutType=inside""#));
    }

    #[test]
    fn test_decode_missing_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let args = IoArgs {
            input: vec![dir.path().join("none.svg").to_string_lossy().into_owned()],
            output: None,
        };
        assert!(run_decode(&args, &ShaperConfig::default()).is_err());
    }
}
