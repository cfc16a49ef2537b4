//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every hook has a no-op default, so an observer only
//! implements what it cares about.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::scoring::Ranking;
use crate::summarizer::selector::Selection;
use crate::types::Sentence;

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_FORMAT: &str = "format";

/// All stages in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_TOKENIZE,
    STAGE_RANK,
    STAGE_SELECT,
    STAGE_FORMAT,
];

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    selected: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sentences the stage processed, if it counts them
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Sentences kept by the selection stage
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

/// Builder for reports that carry counts.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    pub fn selected(mut self, n: usize) -> Self {
        self.report.selected = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired by [`SummaryPipeline::run`](super::runner::SummaryPipeline::run).
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Segmented sentences, in document order
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// Centrality ranks, indexed by sentence position
    fn on_ranking(&mut self, _ranking: &Ranking) {}

    /// Selected sentence positions, in document order
    fn on_selection(&mut self, _selection: &Selection) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage report.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(stage, report)` pairs in execution order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
