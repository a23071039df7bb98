use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_network::{answer, NetworkConfig, OutputFormat, Query, UnknownEdgePolicy, WordNetwork};

/// Query an undirected word graph
#[derive(Parser, Debug)]
#[command(name = "word-network")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Whitespace-separated vertex list
    #[arg(long, env = "WORD_NETWORK_VERTICES", default_value = "words_vertices.txt")]
    vertices: PathBuf,

    /// Edge list, one `word1,word2` per line
    #[arg(long, env = "WORD_NETWORK_EDGES", default_value = "words_edges.txt")]
    edges: PathBuf,

    /// Symbol table bucket count (default: smallest prime >= vertex count)
    #[arg(long)]
    buckets: Option<usize>,

    /// What to do with edges naming an unknown word
    #[arg(long, value_enum, default_value_t = UnknownEdgePolicy::Skip)]
    on_unknown_edge: UnknownEdgePolicy,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Direct neighbors of a word, or its depth-first neighborhood
    Neighbors {
        word: String,
        /// Bound the depth-first walk to this many edges
        #[arg(short, long)]
        distance: Option<usize>,
    },
    /// All connected components
    Components,
    /// Shortest path between two words
    Path { from: String, to: String },
    /// Load summary
    Stats,
    /// Run the standard query script
    Demo {
        #[arg(long, default_value = "doruk")]
        missing: String,
        #[arg(long, default_value = "trace")]
        word: String,
        #[arg(long, default_value = "barry")]
        near: String,
        #[arg(long, default_value = "roger")]
        far: String,
        #[arg(long, num_args = 2, default_values = ["graph", "lords"])]
        path: Vec<String>,
        #[arg(long, num_args = 2, default_values = ["price", "rover"])]
        other_path: Vec<String>,
    },
}

impl Command {
    fn queries(self) -> Vec<Query> {
        match self {
            Command::Neighbors { word, distance } => vec![Query::Neighbors { word, distance }],
            Command::Components => vec![Query::Components],
            Command::Path { from, to } => vec![Query::Path { from, to }],
            Command::Stats => vec![Query::Stats],
            Command::Demo { missing, word, near, far, path, other_path } => {
                let path_query = |pair: Vec<String>| {
                    let mut pair = pair.into_iter();
                    Query::Path {
                        from: pair.next().unwrap_or_default(),
                        to: pair.next().unwrap_or_default(),
                    }
                };
                vec![
                    Query::Neighbors { word: missing, distance: None },
                    Query::Neighbors { word, distance: None },
                    Query::Neighbors { word: near, distance: Some(2) },
                    Query::Neighbors { word: far, distance: Some(3) },
                    path_query(path),
                    path_query(other_path),
                    Query::Components,
                ]
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = NetworkConfig::new().with_unknown_edge_policy(args.on_unknown_edge);
    if let Some(buckets) = args.buckets {
        config = config.with_bucket_count(buckets);
    }

    let network = WordNetwork::from_files(&args.vertices, &args.edges, &config).with_context(|| {
        format!(
            "failed to load word network from {} and {}",
            args.vertices.display(),
            args.edges.display()
        )
    })?;

    let reports = args
        .command
        .queries()
        .iter()
        .map(|query| answer(&network, query))
        .collect::<word_network::Result<Vec<_>>>()?;

    match (args.format, reports.as_slice()) {
        (OutputFormat::Json, [single]) => println!("{}", single.render(OutputFormat::Json)?),
        (OutputFormat::Json, many) => println!("{}", serde_json::to_string_pretty(many)?),
        (OutputFormat::Human, many) => {
            // blank line between answers
            let text: Vec<String> = many.iter().map(ToString::to_string).collect();
            print!("{}", text.join("\n"));
        }
    }
    Ok(())
}
