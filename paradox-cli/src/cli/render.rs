//! Text and JSON rendering of command output.

use std::io::{self, Write};

use paradox_core::ParadoxReport;

use super::commands::{CommandOutput, ExecutionSummary, OutputFormat, SampleSummary};

/// Renders `summary` to `writer` in its requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON serialisation fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &summary.output).map_err(io::Error::from)?;
            writeln!(writer)
        }
        OutputFormat::Text => match &summary.output {
            CommandOutput::Analysis(report) => render_report(report, writer),
            CommandOutput::Sample(sample) => render_sample(sample, writer),
        },
    }
}

fn render_report(report: &ParadoxReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", report.graph)?;
    writeln!(writer, "nodes: {}", report.node_count)?;
    writeln!(writer, "edges: {}", report.edge_count)?;
    writeln!(writer, "mean degree: {:.6}", report.node_mean)?;
    writeln!(writer, "mean friend degree: {}", optional(report.friend_mean))?;
    writeln!(
        writer,
        "degree correlation: {}",
        optional(report.degree_correlation)
    )?;
    writeln!(
        writer,
        "friendship paradox: {}",
        if report.paradox_holds() { "yes" } else { "no" }
    )?;
    writeln!(writer, "distribution\tmean\tks")?;
    for limit in &report.limits {
        writeln!(writer, "{}\t{:.6}\t-", limit.distribution, limit.mean)?;
    }
    for sample in &report.samples {
        writeln!(
            writer,
            "{}\t{:.6}\t{:.6}",
            sample.strategy, sample.mean, sample.ks_distance
        )?;
    }
    for strategy in &report.skipped {
        writeln!(writer, "{strategy}\tskipped\t-")?;
    }
    Ok(())
}

fn render_sample(sample: &SampleSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", sample.graph)?;
    writeln!(writer, "sampler: {}", sample.strategy)?;
    writeln!(writer, "observations: {}", sample.observations)?;
    writeln!(writer, "mean: {:.6}", sample.mean)?;
    writeln!(writer, "limit mean: {:.6}", sample.limit_mean)?;
    writeln!(writer, "ks distance: {:.6}", sample.ks_distance)?;
    writeln!(writer, "degree\tcdf")?;
    for point in sample.cdf.points() {
        writeln!(writer, "{}\t{:.6}", point.value, point.probability)?;
    }
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_owned(), |value| format!("{value:.6}"))
}
