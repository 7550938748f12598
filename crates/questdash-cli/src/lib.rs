// NOTE: questdash Architecture Rationale
//
// Why strict envelope + lenient records?
// - The payload is regenerated wholesale; a broken envelope means the
//   generator failed and nothing downstream can be trusted
// - Individual quest fields come from scraped journals and state files
//   that drift over time; one malformed field should never blank the
//   whole dashboard
// - Tightening per-record validation would reject previously-accepted
//   data, so the asymmetry is kept deliberately
//
// Why a one-shot render pass (not a daemon)?
// - The payload changes only when the generator reruns
// - Each invocation is load -> validate -> present -> render; the TUI's
//   reload key simply runs the same pass again
// - Chart instances are owned by the pass and torn down before every
//   re-render, so no stale widget state can leak between passes

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod loader;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
