//! Solve command
//!
//! # Usage
//!
//! ```bash
//! facebull solve machines.txt
//!
//! # Progress every 10k pops, give up after 5M
//! facebull -v solve machines.txt --progress-interval 10000 --max-pops 5000000
//! ```
//!
//! # Output
//!
//! ```text
//! 399302
//! 1 4 5
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, error, info, warn};

use facebull_graph::{
    floyd_warshall, load_catalog, Catalog, FacebullConfig, SearchConfig, Solution, SolveOutcome,
    Solver,
};

use crate::error::{CliError, EXIT_INFEASIBLE, EXIT_SUCCESS};

/// Arguments for the solve command.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Machine list: `<machine> <input> <output> <price>` records
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report progress every N frontier pops (overrides search.progress_interval)
    #[arg(long, value_name = "N")]
    pub progress_interval: Option<u64>,

    /// Abort after N frontier pops (overrides search.max_pops)
    #[arg(long, value_name = "N")]
    pub max_pops: Option<u64>,

    /// Skip the all-pairs check of the reported selection
    #[arg(long)]
    pub no_verify: bool,
}

impl SolveArgs {
    /// Command-line overrides layered over the configured search settings.
    fn search_config(&self, base: &SearchConfig) -> SearchConfig {
        let mut search = base.clone();
        if let Some(pops) = self.progress_interval {
            search = search.progress_interval(pops);
        }
        if let Some(pops) = self.max_pops {
            search = search.max_pops(pops);
        }
        search
    }
}

/// Execute the solve command.
///
/// # Returns
///
/// Exit code:
/// - 0: Solved, result printed
/// - 1: Search or verification failure
/// - 2: Malformed input
/// - 3: Infeasible catalog
pub fn handle_solve(args: SolveArgs, config: &FacebullConfig) -> i32 {
    match run_solve(&args, config) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}

fn run_solve(args: &SolveArgs, config: &FacebullConfig) -> Result<i32, CliError> {
    let catalog = load_catalog(&args.input)?;
    info!(
        path = %args.input.display(),
        machines = catalog.edge_count(),
        compounds = catalog.node_count(),
        "Loaded machine catalog"
    );

    let solver = Solver::new(&catalog, args.search_config(&config.search))?;
    let result = solver.solve()?;
    info!(
        pops = result.stats.pops,
        pushed = result.stats.pushed,
        discarded = result.stats.discarded,
        max_frontier = result.stats.max_frontier,
        "Search finished"
    );

    let solution = match result.outcome {
        SolveOutcome::Solved(solution) => solution,
        SolveOutcome::Infeasible => {
            warn!("No machine selection connects every compound");
            return Ok(EXIT_INFEASIBLE);
        }
    };

    if config.report.verify && !args.no_verify {
        verify_solution(&catalog, &solution, config.report.log_distances)?;
    }

    let mut out = std::io::stdout().lock();
    out.write_all(render_solution(&solution).as_bytes())?;
    out.flush()?;
    Ok(EXIT_SUCCESS)
}

/// Confirm with all-pairs shortest paths that `solution` connects everything.
fn verify_solution(
    catalog: &Catalog,
    solution: &Solution,
    log_distances: bool,
) -> Result<(), CliError> {
    let distances = floyd_warshall(catalog, solution.edges());
    if log_distances {
        debug!("Shortest route costs:\n{}", distances);
    }

    let unreachable = distances.unreachable_pairs();
    if let Some(&(from, to)) = unreachable.first() {
        return Err(CliError::Verification(format!(
            "{} compound pairs unreachable, first {} -> {}",
            unreachable.len(),
            catalog.node(from).name,
            catalog.node(to).name
        )));
    }
    debug!(machines = solution.edges().len(), "Selection verified");
    Ok(())
}

/// Total price line, then the sorted machine ids.
fn render_solution(solution: &Solution) -> String {
    format!("{}\n{}\n", solution.total_cost(), solution)
}
