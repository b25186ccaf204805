use clap::Parser;
use matchmatch::generate_complete;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "solver")]
#[command(about = "Generate a random complete-graph match-stick puzzle, solve it and check the solution", long_about = None)]
struct Cli {
    /// Number of nodes in the complete graph
    #[arg(short, long, default_value_t = 5)]
    nodes: usize,
    /// Number of nodes whose color is hidden
    #[arg(short, long, default_value_t = 1)]
    masked: usize,
    /// Seed for the puzzle generator; drawn at random if absent
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging() {
    // overridable via RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> std::process::ExitCode {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, nodes = cli.nodes, masked = cli.masked, "generating puzzle");

    let puzzle = match generate_complete(cli.nodes, cli.masked, &mut StdRng::seed_from_u64(seed)) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            error!(%err, "could not generate puzzle");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(masked_nodes = ?puzzle.masked_nodes(), "puzzle:\n{}", puzzle);

    let solution = match puzzle.solve() {
        Ok(solution) => solution,
        Err(err) => {
            error!(%err, "puzzle is unsolvable");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(assignment = ?solution.assignment(), "solved:\n{}", solution.puzzle());

    if solution.confirm() {
        info!("solution confirmed");
        std::process::ExitCode::SUCCESS
    } else {
        std::process::ExitCode::FAILURE
    }
}
