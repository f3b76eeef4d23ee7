use services::GameSummary;

use crate::vm::records_vm::high_score_label;

/// End-of-game figures ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndSummaryVm {
    pub mode_label: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub percentage_label: String,
    pub message: &'static str,
    pub best_label: String,
    pub improved_high_score: bool,
    pub qualifies: bool,
}

impl From<&GameSummary> for EndSummaryVm {
    fn from(summary: &GameSummary) -> Self {
        Self {
            mode_label: summary.mode.label(),
            score: summary.score,
            max_score: summary.max_score,
            percentage_label: format!("{}%", summary.percentage),
            message: summary.message(),
            best_label: high_score_label(summary.high_score),
            improved_high_score: summary.improved_high_score,
            qualifies: summary.qualifies,
        }
    }
}
