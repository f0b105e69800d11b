//! Command implementations and argument parsing for the paradox CLI.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use paradox_core::{
    AdjacencyGraph, AnalysisBuilder, Cdf, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, GraphView,
    ParadoxError, ParadoxReport, SamplingStrategy, generate, stream_rng,
};
use paradox_providers_edgelist::{EdgeListError, EdgeListProvider};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "paradox",
    about = "Measure the friendship paradox on an undirected graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run every sampler and analytic distribution and compare them.
    Analyse(AnalyseCommand),
    /// Run a single sampler and report its empirical CDF.
    Sample(SampleCommand),
}

/// Options accepted by the `analyse` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyseCommand {
    /// Draws per stochastic sampler.
    #[arg(long = "sample-size", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Base seed for the sampler streams.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Graph to analyse.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `sample` command.
#[derive(Debug, Args, Clone)]
pub struct SampleCommand {
    /// Sampler to run.
    #[arg(long, value_enum)]
    pub strategy: SamplerArg,

    /// Draws for stochastic samplers; enumerating samplers ignore it.
    #[arg(long = "sample-size", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Base seed; the sampler uses the same stream it would in `analyse`.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Graph to sample.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Graph sources.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Whitespace-separated edge list, optionally gzip-compressed.
    EdgeList(EdgeListArgs),
    /// Barabási–Albert preferential-attachment graph.
    BarabasiAlbert(BarabasiAlbertArgs),
}

/// Edge-list ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct EdgeListArgs {
    /// Path to the edge list.
    pub path: PathBuf,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Generator arguments.
#[derive(Debug, Args, Clone)]
pub struct BarabasiAlbertArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Edges added by each new node.
    #[arg(long = "edges-per-node")]
    pub edges_per_node: usize,

    /// Generator seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// JSON document including full CDF point lists.
    Json,
}

/// Sampler names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SamplerArg {
    /// Every node once.
    AllNodes,
    /// Uniform nodes with replacement.
    UniformNodes,
    /// Every neighbour of every node.
    AllFriends,
    /// Uniform node, then a uniform neighbour.
    Friends,
    /// Uniform edge, then a uniform endpoint.
    Edges,
    /// Friend draw, then one more neighbour step.
    FriendOfFriend,
}

impl From<SamplerArg> for SamplingStrategy {
    fn from(value: SamplerArg) -> Self {
        match value {
            SamplerArg::AllNodes => Self::AllNodes,
            SamplerArg::UniformNodes => Self::UniformNodes,
            SamplerArg::AllFriends => Self::AllFriends,
            SamplerArg::Friends => Self::Friends,
            SamplerArg::Edges => Self::Edges,
            SamplerArg::FriendOfFriend => Self::FriendOfFriend,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Sampling, analysis or generation failed.
    #[error(transparent)]
    Core(#[from] ParadoxError),
}

/// Result of a single-sampler run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    /// Name of the sampled graph.
    pub graph: String,
    /// Sampler that ran.
    pub strategy: SamplingStrategy,
    /// Base seed.
    pub seed: u64,
    /// Number of observations drawn.
    pub observations: usize,
    /// Sample mean degree.
    pub mean: f64,
    /// Mean of the closed-form limit.
    pub limit_mean: f64,
    /// KS distance between the sample and its limit.
    pub ks_distance: f64,
    /// Empirical CDF.
    pub cdf: Cdf,
}

/// Payload produced by a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// Output of `analyse`.
    Analysis(ParadoxReport),
    /// Output of `sample`.
    Sample(SampleSummary),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Requested output format.
    pub format: OutputFormat,
    /// Command payload.
    pub output: CommandOutput,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, generation or analysis fails.
///
/// # Examples
/// ```
/// use paradox_cli::cli::{
///     AnalyseCommand, BarabasiAlbertArgs, Cli, Command, CommandOutput, GraphSource,
///     OutputFormat, run_cli,
/// };
///
/// let cli = Cli {
///     command: Command::Analyse(AnalyseCommand {
///         sample_size: 100,
///         seed: 1,
///         format: OutputFormat::Text,
///         source: GraphSource::BarabasiAlbert(BarabasiAlbertArgs {
///             nodes: 50,
///             edges_per_node: 2,
///             seed: 3,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let CommandOutput::Analysis(report) = summary.output else {
///     panic!("analyse produces a report");
/// };
/// assert_eq!(report.node_count, 50);
/// assert!(report.paradox_holds());
/// # Ok::<(), paradox_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Analyse(command) => {
            span.record("command", "analyse");
            run_analyse(command)
        }
        Command::Sample(command) => {
            span.record("command", "sample");
            run_sample(command)
        }
    }
}

#[instrument(
    name = "cli.analyse",
    err,
    skip(command),
    fields(sample_size = command.sample_size, seed = command.seed, source = field::Empty),
)]
pub(super) fn run_analyse(command: AnalyseCommand) -> Result<ExecutionSummary, CliError> {
    let analysis = AnalysisBuilder::new()
        .with_sample_size(command.sample_size)
        .with_seed(command.seed)
        .build()?;
    let report = match load(command.source)? {
        Loaded::EdgeList(provider) => analysis.run(&provider)?,
        Loaded::Generated(graph) => analysis.run(&graph)?,
    };
    info!(
        graph = report.graph.as_str(),
        paradox = report.paradox_holds(),
        "command completed"
    );
    Ok(ExecutionSummary {
        format: command.format,
        output: CommandOutput::Analysis(report),
    })
}

#[instrument(
    name = "cli.sample",
    err,
    skip(command),
    fields(strategy = ?command.strategy, seed = command.seed, source = field::Empty),
)]
pub(super) fn run_sample(command: SampleCommand) -> Result<ExecutionSummary, CliError> {
    if command.sample_size == 0 {
        return Err(ParadoxError::InvalidSampleSize { got: 0 }.into());
    }
    let strategy = SamplingStrategy::from(command.strategy);
    let summary = match load(command.source)? {
        Loaded::EdgeList(provider) => {
            sample_graph(&provider, strategy, command.sample_size, command.seed)?
        }
        Loaded::Generated(graph) => {
            sample_graph(&graph, strategy, command.sample_size, command.seed)?
        }
    };
    info!(
        graph = summary.graph.as_str(),
        sampler = strategy.label(),
        "command completed"
    );
    Ok(ExecutionSummary {
        format: command.format,
        output: CommandOutput::Sample(summary),
    })
}

fn sample_graph<G: GraphView>(
    graph: &G,
    strategy: SamplingStrategy,
    sample_size: usize,
    seed: u64,
) -> Result<SampleSummary, ParadoxError> {
    let stream = SamplingStrategy::ALL
        .iter()
        .position(|candidate| *candidate == strategy)
        .unwrap_or_default();
    let mut rng = stream_rng(seed, stream);
    let sample = strategy.sample(graph, sample_size, &mut rng)?;
    let cdf = Cdf::from_sample(&sample)?;
    let limit = strategy.limit(graph)?;
    Ok(SampleSummary {
        graph: graph.name().to_owned(),
        strategy,
        seed,
        observations: sample.len(),
        mean: cdf.mean(),
        limit_mean: limit.mean(),
        ks_distance: cdf.ks_distance(&limit.to_cdf()),
        cdf,
    })
}

enum Loaded {
    EdgeList(EdgeListProvider),
    Generated(AdjacencyGraph),
}

fn load(source: GraphSource) -> Result<Loaded, CliError> {
    let span = Span::current();
    match source {
        GraphSource::EdgeList(args) => {
            span.record("source", "edge-list");
            load_edge_list(args).map(Loaded::EdgeList)
        }
        GraphSource::BarabasiAlbert(args) => {
            span.record("source", "barabasi-albert");
            generate_barabasi_albert(&args).map(Loaded::Generated)
        }
    }
}

#[instrument(
    name = "cli.load_edge_list",
    err,
    skip(args),
    fields(path = %args.path.display(), override_name = field::Empty),
)]
pub(super) fn load_edge_list(args: EdgeListArgs) -> Result<EdgeListProvider, CliError> {
    let EdgeListArgs { path, name } = args;
    Span::current().record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let graph_name = derive_graph_name(&path, name.as_deref());
    let reader = open_edge_list(&path)?;
    let provider = EdgeListProvider::try_from_reader(graph_name, reader)?;
    info!(
        graph = provider.name(),
        nodes = provider.node_count(),
        edges = provider.edge_count(),
        duplicates = provider.duplicates(),
        "edge list loaded"
    );
    Ok(provider)
}

fn generate_barabasi_albert(args: &BarabasiAlbertArgs) -> Result<AdjacencyGraph, CliError> {
    let mut rng = stream_rng(args.seed, 0);
    let graph = generate::barabasi_albert(args.nodes, args.edges_per_node, &mut rng)?;
    info!(
        graph = graph.name(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(graph)
}

pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Picks the graph name: the override if given, else the file name without
/// its extensions (`.gz` included).
pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }
    let stem = path.file_stem().and_then(|value| value.to_str());
    let stem = match (path.extension().and_then(|value| value.to_str()), stem) {
        (Some("gz"), Some(inner)) => Path::new(inner)
            .file_stem()
            .and_then(|value| value.to_str()),
        (_, stem) => stem,
    };
    stem.filter(|value| !value.is_empty())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}
