use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;
use subgraph_isomorphism::{find_embeddings, generate::random_graph};

/// Experiment Driver for the subgraph embedding search.
///
/// Sweeps host/pattern sizes over random instances, times repeated calls to
/// the search entry point, and writes one averaged CSV row per parameter
/// point:
///
/// index, host_nodes, host_edges, pattern_nodes, pattern_edges, avg_matches, avg_ms
///
/// Two sweeps are available:
/// - vary-everything: host nodes 2..=15, pattern nodes 2..=10 (bounded by the
///   host), edge counts from the node count up to a quarter of the possible
///   arcs. Dense coverage of small instances.
/// - large-host: host nodes 6..=30 in steps of 2 at quarter density, with a
///   fixed 5-node / 6-edge pattern. Growth behavior on one axis.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sweep the embedding search over random graphs and record averaged timings"
)]
struct Args {
    /// Experiment to run: 'vary-everything' or 'large-host'
    #[arg(short, long, default_value = "large-host")]
    experiment: Experiment,

    /// Trials averaged per parameter point (default: 25 for vary-everything,
    /// 50 for large-host)
    #[arg(short, long)]
    repeats: Option<usize>,

    /// Output CSV path
    #[arg(short, long)]
    output: PathBuf,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,
}

/// Experiment type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Experiment {
    VaryEverything,
    LargeHost,
}

impl std::str::FromStr for Experiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vary-everything" | "vary" => Ok(Experiment::VaryEverything),
            "large-host" | "large" => Ok(Experiment::LargeHost),
            _ => Err(format!(
                "Invalid experiment: {}. Use 'vary-everything' or 'large-host'",
                s
            )),
        }
    }
}

/// One parameter point of a sweep
#[derive(Debug, Clone, Copy)]
struct SweepPoint {
    index: usize,
    host_nodes: usize,
    host_edges: usize,
    pattern_nodes: usize,
    pattern_edges: usize,
}

/// Averages over the repeated trials of one sweep point
#[derive(Debug, Clone, Copy)]
struct PointAverage {
    matches: f64,
    millis: f64,
}

/// Generate one random instance and time a single unbounded search over it
fn run_trial<R: Rng>(
    point: &SweepPoint,
    rng: &mut R,
) -> Result<(usize, f64), Box<dyn Error>> {
    let host = random_graph(point.host_nodes, point.host_edges, rng)?;
    let pattern = random_graph(point.pattern_nodes, point.pattern_edges, rng)?;

    let start = Instant::now();
    let results = find_embeddings(&host, &pattern, None)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    Ok((results.len(), elapsed_ms))
}

/// Run all trials for one sweep point and average the outcomes
fn run_point<R: Rng>(
    point: &SweepPoint,
    repeats: usize,
    rng: &mut R,
) -> Result<PointAverage, Box<dyn Error>> {
    let mut match_sum = 0usize;
    let mut millis_sum = 0f64;

    for _ in 0..repeats {
        let (matches, millis) = run_trial(point, rng)?;
        match_sum += matches;
        millis_sum += millis;
    }

    Ok(PointAverage {
        matches: match_sum as f64 / repeats as f64,
        millis: millis_sum / repeats as f64,
    })
}

/// Append one averaged CSV row and echo it to stdout
fn record<W: std::io::Write, R: Rng>(
    writer: &mut csv::Writer<W>,
    point: &SweepPoint,
    repeats: usize,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    let avg = run_point(point, repeats, rng)?;

    writer.write_record(&[
        point.index.to_string(),
        point.host_nodes.to_string(),
        point.host_edges.to_string(),
        point.pattern_nodes.to_string(),
        point.pattern_edges.to_string(),
        avg.matches.to_string(),
        avg.millis.to_string(),
    ])?;

    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
        point.index,
        point.host_nodes,
        point.host_edges,
        point.pattern_nodes,
        point.pattern_edges,
        avg.matches,
        avg.millis
    );

    Ok(())
}

/// Sweep host and pattern node/edge counts jointly over small instances
fn vary_everything<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    repeats: usize,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    const MAX_HOST_NODES: usize = 15;
    const MAX_PATTERN_NODES: usize = 10;

    let mut index = 0;

    for host_nodes in 2..=MAX_HOST_NODES {
        for pattern_nodes in 2..=MAX_PATTERN_NODES.min(host_nodes) {
            for host_edges in host_nodes..=host_nodes * (host_nodes - 1) / 4 {
                for pattern_edges in pattern_nodes..=pattern_nodes * (pattern_nodes - 1) / 4 {
                    let point = SweepPoint {
                        index,
                        host_nodes,
                        host_edges,
                        pattern_nodes,
                        pattern_edges,
                    };
                    record(writer, &point, repeats, rng)?;
                    index += 1;
                }
            }
        }
    }

    Ok(())
}

/// Grow the host at quarter density against a fixed 5-node, 6-edge pattern
fn large_host<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    repeats: usize,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    const PATTERN_NODES: usize = 5;
    const PATTERN_EDGES: usize = 6;

    for (index, host_nodes) in (6..=30).step_by(2).enumerate() {
        let point = SweepPoint {
            index,
            host_nodes,
            host_edges: host_nodes * (host_nodes - 1) / 4,
            pattern_nodes: PATTERN_NODES,
            pattern_edges: PATTERN_EDGES,
        };
        record(writer, &point, repeats, rng)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let repeats = args.repeats.unwrap_or(match args.experiment {
        Experiment::VaryEverything => 25,
        Experiment::LargeHost => 50,
    });

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            // Use system entropy
            let seed: u64 = rand::thread_rng().gen();
            StdRng::seed_from_u64(seed)
        }
    };

    println!("Experiment Driver for Subgraph Embedding Search");
    println!("================================================");
    println!("experiment: {:?}", args.experiment);
    println!("repeats per point: {}", repeats);
    if let Some(seed) = args.seed {
        println!("seed: {}", seed);
    }
    println!("output file: {:?}", args.output);
    println!();
    println!("index\thost_n\thost_e\tpat_n\tpat_e\tavg_matches\tavg_ms");

    let mut writer = csv::Writer::from_path(&args.output)?;
    writer.write_record([
        "index",
        "host_nodes",
        "host_edges",
        "pattern_nodes",
        "pattern_edges",
        "avg_matches",
        "avg_ms",
    ])?;

    match args.experiment {
        Experiment::VaryEverything => vary_everything(&mut writer, repeats, &mut rng)?,
        Experiment::LargeHost => large_host(&mut writer, repeats, &mut rng)?,
    }

    writer.flush()?;

    Ok(())
}
