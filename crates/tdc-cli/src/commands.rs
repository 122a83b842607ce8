use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use tdc_loader::{compare_files, load_pair};
use tdc_report::{render, render_gap_html, render_multi_html, render_multi_text, ReportContext, ReportFormat};
use tdc_scan::{compare_directories, detect_translation_directories, find_reference_file, find_translation_files_in_repo};
use tracing::info;

use crate::cli::*;
use crate::config::CheckerConfig;

/// How a command ended, mapped onto the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<Status> {
    let config = CheckerConfig::load(cli.config.as_deref())?;
    match cli.command {
        Some(Command::Analyze(args)) => cmd_analyze(args, &config),
        Some(Command::Dirs(args)) => cmd_dirs(args, &config),
        Some(Command::Scan(args)) => cmd_scan(args, &config),
        None => cmd_compare(cli.compare, &config),
    }
}

fn write_report(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write report {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}

fn cmd_compare(args: CompareArgs, config: &CheckerConfig) -> anyhow::Result<Status> {
    let (Some(source), Some(target)) = (args.source_file, args.target_file) else {
        anyhow::bail!("both SOURCE_FILE and TARGET_FILE are required");
    };
    let format = ReportFormat::from(args.format);
    let output = args.output.unwrap_or_else(|| PathBuf::from(format.default_output()));

    let context = ReportContext::new(&source, &target);
    let outcome = compare_files(&source, &target);
    let rendered = render(format, &outcome, &context, &config.report)?;
    write_report(&output, &rendered)?;

    match &outcome {
        Ok(_) => {
            println!(
                "{} {} report generated: {}",
                "✓".green().bold(),
                format.label(),
                output.display().to_string().bold()
            );
            Ok(Status::Success)
        }
        Err(error) => {
            eprintln!("{} {}", "✗".red().bold(), error.to_string().red());
            println!(
                "{} report written: {}",
                "Error".red(),
                output.display().to_string().bold()
            );
            Ok(Status::Failure)
        }
    }
}

fn cmd_analyze(args: AnalyzeArgs, config: &CheckerConfig) -> anyhow::Result<Status> {
    let context = ReportContext::new(&args.source_file, &args.target_file);
    let loaded = load_pair(&args.source_file, &args.target_file);
    write_report(&args.output, &render_gap_html(&loaded, &context, &config.report))?;

    match &loaded {
        Ok(pair) => {
            let analysis = pair.analyze();
            println!(
                "{} Gap analysis generated: {} ({:.2}% complete)",
                "✓".green().bold(),
                args.output.display().to_string().bold(),
                analysis.completion_percentage
            );
            Ok(Status::Success)
        }
        Err(error) => {
            eprintln!("{} {}", "✗".red().bold(), error.to_string().red());
            println!(
                "{} report written: {}",
                "Error".red(),
                args.output.display().to_string().bold()
            );
            Ok(Status::Failure)
        }
    }
}

fn cmd_dirs(args: DirsArgs, config: &CheckerConfig) -> anyhow::Result<Status> {
    let pattern = args.pattern.as_deref().unwrap_or(&config.scan.file_pattern);
    let comparison = compare_directories(&args.source_dir, args.target_dir.as_deref(), pattern)?;

    let (rendered, default_output) = match args.format {
        DirsFormat::Text => (render_multi_text(&comparison), "multi_file_report.txt"),
        DirsFormat::Html => {
            let target_dir = args.target_dir.as_deref().unwrap_or(&args.source_dir);
            let context = ReportContext::new(&args.source_dir, target_dir);
            (render_multi_html(&comparison, &context), "multi_file_report.html")
        }
    };
    let output = args.output.unwrap_or_else(|| PathBuf::from(default_output));
    write_report(&output, &rendered)?;

    for (file, error) in comparison.failures() {
        eprintln!("{} {}: {}", "!".yellow().bold(), file, error);
    }
    println!(
        "{} Compared {} files ({:.2}% overall): {}",
        "✓".green().bold(),
        comparison.len(),
        comparison.overall_completion(),
        output.display().to_string().bold()
    );
    Ok(Status::Success)
}

fn cmd_scan(args: ScanArgs, config: &CheckerConfig) -> anyhow::Result<Status> {
    let directories = detect_translation_directories(&args.repo, &config.scan);
    if directories.is_empty() {
        println!("No translation directories found in {}", args.repo.display());
        return Ok(Status::Success);
    }

    println!("{}", "Translation directories:".bold());
    for dir in &directories {
        println!("  {}", dir.display().to_string().cyan());
    }

    let files = find_translation_files_in_repo(&args.repo, &config.scan)?;
    println!("{} ({})", "Translation files:".bold(), files.len());
    for file in &files {
        println!("  {}", file.display());
    }

    let Some(lang) = args.reference else {
        return Ok(Status::Success);
    };
    match find_reference_file(&files, &lang) {
        Some(reference) => {
            println!(
                "{} Reference file for {}: {}",
                "✓".green().bold(),
                lang.yellow(),
                reference.display().to_string().bold()
            );
            Ok(Status::Success)
        }
        None => {
            eprintln!("{} No reference file found for {}", "✗".red().bold(), lang.yellow());
            Ok(Status::Failure)
        }
    }
}
