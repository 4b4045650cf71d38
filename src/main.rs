use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use annolint::checker::AnnotationsChecker;
use annolint::cli::Cli;
use annolint::config::AnnolintConfig;
use annolint::core::{AnalysisResults, FileReport};
use annolint::io::output::create_writer;
use annolint::io::walker::find_python_files;
use annolint::parse_python;

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    let checker = AnnotationsChecker::new(config);
    let files = find_python_files(&cli.paths, &cli.ignore)?;
    log::debug!("checking {} files", files.len());

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| check_file(&checker, path))
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));
    let results = AnalysisResults { files: reports };

    let mut writer = create_writer(cli.format.into(), cli.output.as_deref())?;
    writer.write_results(&results)?;

    Ok(if results.total_violations() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn resolve_config(cli: &Cli) -> Result<AnnolintConfig> {
    let base = match &cli.config {
        Some(path) => AnnolintConfig::load(path)?,
        None => AnnolintConfig::discover(Path::new("."))?.unwrap_or_default(),
    };
    Ok(base.with_overrides(
        cli.max_annotations_complexity,
        cli.max_annotations_len,
        cli.enable_old_style_annotations,
    ))
}

/// Reads and checks one file. I/O and parse failures are reported and
/// the file is skipped; they never abort analysis of the other files.
fn check_file(checker: &AnnotationsChecker, path: &Path) -> Option<FileReport> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("skipping {}: {e}", path.display());
            return None;
        }
    };
    let module = match parse_python(&content, path) {
        Ok(module) => module,
        Err(e) => {
            log::warn!("skipping unparsable file: {e}");
            return None;
        }
    };
    Some(FileReport {
        path: path.to_path_buf(),
        violations: checker.check_module(&module),
    })
}
