//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`SummaryPipeline::run`] executes the stages in order, threading
//! artifacts between them and notifying a [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Segment text into sentences
//! 2. Build a token bag per sentence
//! 3. Rank sentences by centrality
//! 4. Select sentences under the character budget
//! 5. Format the selection as key points

use crate::errors::ConfigError;
use crate::nlp::segmenter;
use crate::nlp::tokenizer::{TokenBag, Tokenizer};
use crate::pipeline::artifacts::{SummaryPoint, SummaryResult};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_FORMAT,
    STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::scoring::Ranking;
use crate::summarizer::budget::Budget;
use crate::summarizer::formatter::format_point;
use crate::summarizer::selector::SentenceSelector;
use crate::types::SummarizerConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). The span guard lives until the end of the enclosing block, so
/// each stage body is wrapped in its own block. When disabled, this is a
/// no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The summarization pipeline.
#[derive(Debug, Clone, Default)]
pub struct SummaryPipeline {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
}

impl SummaryPipeline {
    /// Pipeline with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with a custom configuration, rejected if it fails
    /// [`SummarizerConfig::validate`].
    pub fn with_config(config: SummarizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tokenizer: Tokenizer::new(),
        })
    }

    /// Summarize `text` without observing stages.
    pub fn summarize(&self, text: &str) -> SummaryResult {
        self.run(text, &mut NoopObserver)
    }

    /// Execute every stage, producing a [`SummaryResult`].
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> SummaryResult {
        let budget = Budget::for_text(text, &self.config);

        // Stage 1: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = segmenter::segment(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_sentences(&sentences);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                sentences = sentences.len(),
                max_chars = budget.max_chars,
                "segmented document"
            );
            sentences
        };

        // Stage 2: Tokenize
        let bags = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let bags: Vec<TokenBag> = sentences
                .iter()
                .map(|s| self.tokenizer.bag(&s.text))
                .collect();
            observer.on_stage_end(STAGE_TOKENIZE, &StageReport::new(clock.elapsed()));
            bags
        };

        // Stage 3: Rank
        let ranking = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranking = Ranking::compute(&bags, self.config.min_significant_tokens);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(ranking.len())
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_ranking(&ranking);
            ranking
        };

        // Stage 4: Select
        let selection = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selection = SentenceSelector::new(budget).select(&sentences, &ranking);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(sentences.len())
                .selected(selection.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            observer.on_selection(&selection);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                selected = selection.len(),
                joined_len = selection.joined_len,
                "selected key points"
            );
            selection
        };

        // Stage 5: Format
        let points = {
            trace_stage!(STAGE_FORMAT);
            observer.on_stage_start(STAGE_FORMAT);
            let clock = StageClock::start();
            let points: Vec<SummaryPoint> = selection
                .indices
                .iter()
                .filter_map(|&idx| sentences.get(idx))
                .map(|sentence| SummaryPoint {
                    text: format_point(&sentence.text),
                    index: sentence.index,
                    paragraph: sentence.paragraph,
                    rank: ranking.score(sentence.index),
                })
                .collect();
            observer.on_stage_end(STAGE_FORMAT, &StageReport::new(clock.elapsed()));
            points
        };

        SummaryResult {
            points,
            max_chars: budget.max_chars,
            sentence_count: sentences.len(),
        }
    }
}
