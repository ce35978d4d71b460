//! Daily note files: where they live, how they are written, and what a
//! fresh note looks like.
//!
//! The existence of `<vault>/<subdir>/<date>.md` is the only record that a
//! day has been started; there is no separate index.

mod render;
mod store;

pub use render::{render_base_note, render_commit_bullet};
pub use store::{append, daily_note_path, daily_summary_path, exists, read, write};
