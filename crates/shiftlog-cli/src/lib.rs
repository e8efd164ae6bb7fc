// NOTE: shiftlog Architecture Rationale
//
// Why a service object (not process-global state)?
// - The record collection is owned by an explicit Session constructed
//   from load() at startup and handed to save() after every append
// - Handlers receive the session by reference; nothing is ambient
//
// Why whole-collection persistence?
// - The store is the single source of truth across sessions; it is read
//   fully before first use and rewritten fully after every append
// - Partial writes would let disk and memory drift on failure paths
//
// Why Option-shaped statistics?
// - An empty filtered view and a single-sample group are normal states,
//   not failures; the engine reports them as None rather than inventing
//   a zero, and the presentation layer renders them as notices

mod args;
mod commands;
mod handlers;
mod presentation;

pub use args::{Cli, Commands, OutputFormat, RecordCommand};
pub use commands::run;
