//! Simulator subcommands.

mod catalog;
mod run;

pub use catalog::ListEffects;
pub use run::Run;
