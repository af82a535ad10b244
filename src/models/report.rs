use std::fmt;

use cube_color::ColorName;
use serde::Serialize;

/// Which pool of slots is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Edges { orbit: usize },
    Corners,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Edges { orbit } => write!(f, "edges (orbit {orbit})"),
            Stage::Corners => write!(f, "corners"),
        }
    }
}

/// One committed slot, in commit order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionStep {
    pub stage: Stage,
    pub slot: String,
    /// Colors as assigned to the slot's squares, in slot order.
    #[serde(serialize_with = "serialize_codes")]
    pub colors: Vec<ColorName>,
    /// Summed distance of the chosen assignment.
    pub score: f64,
    /// Gap to the next-best distinct combination for this slot.
    pub margin: f64,
    /// Largest margin among the slots that were not chosen at this step.
    pub competing_margin: Option<f64>,
}

fn serialize_codes<S: serde::Serializer>(colors: &[ColorName], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(colors.iter().map(|c| c.code()))
}

/// Trace of a full resolution run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub steps: Vec<ResolutionStep>,
    /// Center squares assigned by anchored partitioning.
    pub propagated_centers: usize,
    /// Combinations left in each pool after its stage finished.
    pub leftover_combinations: usize,
}

impl ResolutionReport {
    pub fn steps_for(&self, stage: Stage) -> impl Iterator<Item = &ResolutionStep> {
        self.steps.iter().filter(move |step| step.stage == stage)
    }
}
