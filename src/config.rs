// Runtime configuration for the pipeline.
//
// Everything has a sensible default so the binary runs with no arguments;
// the only knob exposed on the command line is the input CSV path.
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::PathBuf;

/// Statuses counted as a completed order. Matching is done on trimmed,
/// lowercased values, so entries here must be lowercase.
static DEFAULT_COMPLETED_STATUSES: Lazy<HashSet<String>> =
    Lazy::new(|| ["delivered"].iter().map(|s| s.to_string()).collect());

pub const DEFAULT_INPUT: &str = "order_history.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "visualizations";

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub completed_statuses: HashSet<String>,
    pub top_n_items: usize,
    pub top_n_customers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            completed_statuses: DEFAULT_COMPLETED_STATUSES.clone(),
            top_n_items: 10,
            top_n_customers: 10,
        }
    }
}

impl Config {
    /// Build a config from the process arguments. The first positional
    /// argument, when present, overrides the input CSV path.
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut cfg = Config::default();
        if let Some(path) = args.next() {
            cfg.input_path = PathBuf::from(path);
        }
        cfg
    }

    pub fn is_completed(&self, status: &str) -> bool {
        self.completed_statuses
            .contains(&status.trim().to_lowercase())
    }
}
