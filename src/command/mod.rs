mod commit;
mod start;
mod summarize;

pub use commit::run_commit;
pub use start::run_start;
pub use summarize::run_summarize;
