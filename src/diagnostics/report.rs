use crate::border::SynthesisStats;
use crate::normalize::NormalizeStats;
use serde::Serialize;

/// Pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Overlay,
    Normalize,
    Synthesize,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Wall-clock time per executed stage. Skipped stages have no entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTimings {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl PassTimings {
    pub fn record(&mut self, stage: Stage, elapsed_ms: f64) {
        self.stages.push(StageTiming { stage, elapsed_ms });
    }

    pub fn ran(&self, stage: Stage) -> bool {
        self.stages.iter().any(|t| t.stage == stage)
    }
}

/// Result of [`Outliner::process`](crate::Outliner::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineReport {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    pub columns: usize,
    pub rows: usize,
    /// Grid-line pixels composited before normalization.
    pub overlay_pixels: usize,
    pub normalize: NormalizeStats,
    pub synthesis: SynthesisStats,
    pub latency_ms: f64,
    pub timings: PassTimings,
}
