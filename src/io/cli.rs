//! Command-line interface for solving maze images one by one or in batches

use crate::algorithm::solver::MazeSolver;
use crate::io::configuration::{
    CONNECTIONS_SUFFIX, OUTPUT_EXTENSION, PATH_SUFFIX, WHITE_THRESHOLD,
};
use crate::io::error::{Result, invalid_target};
use crate::io::image::load_field;
use crate::io::progress::ProgressManager;
use crate::io::rendering::{render_connections, render_path, save_image};
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mazegraph")]
#[command(
    author,
    version,
    about = "Solve black-and-white maze images through a graph of corridor nodes"
)]
/// Command-line arguments for the maze solver
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Minimum RGB channel sum for a pixel to count as open (0-765)
    #[arg(short, long, default_value_t = WHITE_THRESHOLD)]
    pub threshold: u32,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Do not render the node graph image
    #[arg(long)]
    pub no_connections: bool,

    /// Fail when a maze has no path instead of rendering the partial trace
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the node graph image should be rendered
    pub const fn should_render_connections(&self) -> bool {
        !self.no_connections
    }

    /// Default log filter for this invocation
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Summary of one solved maze file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Source image
    pub input: PathBuf,
    /// Number of graph nodes
    pub nodes: usize,
    /// Number of graph edges
    pub edges: usize,
    /// Whether the exit was reached
    pub solved: bool,
    /// Nodes on the path, or on the partial trace when unsolved
    pub path_nodes: usize,
    /// Pixel length of the path or partial trace
    pub path_length: u64,
}

/// Orchestrates batch processing of PNG mazes with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails, a maze cannot be loaded,
    /// has no entry or exit, a render cannot be saved, or, with `--strict`,
    /// a maze has no path
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.process_file(file)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_target(
                    &self.cli.target,
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !is_rendered_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                &self.cli.target,
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path(input_path, PATH_SUFFIX).exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<FileReport> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let (image, field) = load_field(input_path, self.cli.threshold)?;
        let solver = MazeSolver::new(&field)?;
        let graph = solver.graph();
        let base = image.to_rgba8();

        if self.cli.should_render_connections() {
            let connections = render_connections(&base, graph);
            save_image(&connections, &output_path(input_path, CONNECTIONS_SUFFIX))?;
        }

        let outcome = solver.solve()?;
        let solved = outcome.is_solved();
        let path = outcome.path().clone();

        if !solved {
            warn!("{}: no path from entry to exit", input_path.display());
            if self.cli.strict {
                outcome.into_result(graph)?;
            }
        }

        let rendered = render_path(&base, graph, &path);
        save_image(&rendered, &output_path(input_path, PATH_SUFFIX))?;

        let report = FileReport {
            input: input_path.to_path_buf(),
            nodes: graph.len(),
            edges: graph.edge_count(),
            solved,
            path_nodes: path.len(),
            path_length: path.pixel_length(graph),
        };

        info!(
            "{}: {} nodes, {} edges, path of {} nodes ({} px) in {:?}",
            input_path.display(),
            report.nodes,
            report.edges,
            report.path_nodes,
            report.path_length,
            start_time.elapsed()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(solved);
        }

        Ok(report)
    }
}

/// Output location for a rendered image next to its source
pub fn output_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.{OUTPUT_EXTENSION}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Whether a file name looks like one of this tool's own renders
pub fn is_rendered_output(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .is_some_and(|stem| stem.ends_with(CONNECTIONS_SUFFIX) || stem.ends_with(PATH_SUFFIX))
}
