//! Per-file stage bars for batch conversion, collapsing to one bar for large sets

use crate::algorithm::pipeline::PipelineStage;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PIPELINE_STEPS};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>7} [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Clone, Debug, Default)]
struct FileState {
    name: String,
    steps_done: usize,
    label: &'static str,
}

/// Progress display for a run over one or more images
///
/// Each of the most recent files gets a bar advancing through the pipeline
/// stages. Runs with more than [`MAX_INDIVIDUAL_PROGRESS_BARS`] files also get
/// an overall file counter.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bars: Vec<ProgressBar>,
    file_count: usize,
    states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bars: Vec::new(),
            file_count: 0,
            states: Vec::new(),
        }
    }

    /// Allocate bars for a run over `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        self.states = vec![FileState::default(); file_count];

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        self.stage_bars = (0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar = ProgressBar::new(PIPELINE_STEPS as u64);
                bar.set_style(STAGE_STYLE.clone());
                self.multi_progress.add(bar)
            })
            .collect();
    }

    /// Number of files the manager was initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Show a file entering the load stage
    pub fn start_file(&mut self, index: usize, path: &Path) {
        if index >= self.states.len() {
            self.states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.states.get_mut(index) {
            state.name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
            state.steps_done = PipelineStage::Load.position();
            state.label = PipelineStage::Load.label();
        }
        self.redraw();
    }

    /// Advance a file's bar to `stage`
    pub fn update_stage(&mut self, index: usize, stage: PipelineStage) {
        if let Some(state) = self.states.get_mut(index) {
            state.steps_done = stage.position();
            state.label = stage.label();
        }
        self.redraw();
    }

    /// Fill a file's bar and count it toward the batch total
    pub fn complete_file(&mut self, index: usize) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.states.get_mut(index) {
            state.steps_done = PIPELINE_STEPS;
            state.label = "done";
        }
        self.redraw();
    }

    /// Remove all bars from the terminal
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish_with_message("All images converted");
        }
        let _ = self.multi_progress.clear();
    }

    // Bars show the latest started files, oldest first
    fn redraw(&self) {
        let started: Vec<&FileState> = self
            .states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let skip = started.len().saturating_sub(self.stage_bars.len());

        for (slot, bar) in self.stage_bars.iter().enumerate() {
            let (position, label, name) = started
                .get(skip + slot)
                .map_or((0, "", String::new()), |state| {
                    (state.steps_done as u64, state.label, state.name.clone())
                });
            bar.set_position(position);
            bar.set_message(label);
            bar.set_prefix(name);
        }
    }
}
