//! Command-line interface for friendship-paradox analysis.
//!
//! `analyse` runs every sampler and calculator against one graph; `sample`
//! runs a single sampler. Graphs come from an edge-list file or a
//! Barabási–Albert generator.

mod commands;
mod render;

pub use commands::{
    AnalyseCommand, BarabasiAlbertArgs, Cli, CliError, Command, CommandOutput, EdgeListArgs,
    ExecutionSummary, GraphSource, OutputFormat, SampleCommand, SampleSummary, SamplerArg,
    run_cli,
};
pub use render::render_summary;

#[cfg(test)]
mod test_helpers;
