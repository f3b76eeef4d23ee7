mod game_vm;
mod records_vm;
mod summary_vm;
mod time_fmt;

pub use game_vm::{
    ChoiceState, GameOutcome, GameVm, LOW_TIME_SECS, TickUpdate, start_game,
};
pub use records_vm::{
    HistoryRowVm, LeaderboardRowVm, high_score_label, map_history_rows, map_leaderboard_rows,
};
pub use summary_vm::EndSummaryVm;
pub use time_fmt::{format_datetime, format_mmss};
