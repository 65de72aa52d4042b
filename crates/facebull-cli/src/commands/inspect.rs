//! Inspect command
//!
//! Prints what the search will start from: compound and machine counts and
//! the per-compound bound tables.
//!
//! ```bash
//! facebull inspect machines.txt
//! ```

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::error;

use facebull_graph::search::BoundTables;
use facebull_graph::{load_catalog, Catalog, Cost};

use crate::error::{CliError, EXIT_SUCCESS};

/// Arguments for the inspect command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Machine list: `<machine> <input> <output> <price>` records
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Execute the inspect command.
///
/// # Returns
///
/// Exit code:
/// - 0: Report printed
/// - 1: I/O failure
/// - 2: Malformed input
pub fn handle_inspect(args: InspectArgs) -> i32 {
    match run_inspect(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}

fn run_inspect(args: &InspectArgs) -> Result<i32, CliError> {
    let catalog = load_catalog(&args.input)?;
    let bounds = BoundTables::new(&catalog);

    let mut out = std::io::stdout().lock();
    out.write_all(render_inspection(&catalog, &bounds).as_bytes())?;
    out.flush()?;
    Ok(EXIT_SUCCESS)
}

fn cell(value: Option<Cost>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Counts, then one row per compound.
fn render_inspection(catalog: &Catalog, bounds: &BoundTables) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "compounds: {}", catalog.node_count());
    let _ = writeln!(text, "machines: {}", catalog.edge_count());
    let _ = writeln!(
        text,
        "{:>5}  {:<12} {:>9} {:>9} {:>12} {:>9} {:>9}",
        "index", "compound", "producers", "consumers", "min_produce", "min_use", "suffix"
    );
    for node in catalog.nodes() {
        let i = node.index;
        let _ = writeln!(
            text,
            "{:>5}  {:<12} {:>9} {:>9} {:>12} {:>9} {:>9}",
            i,
            node.name,
            catalog.producers(i).len(),
            catalog.consumers(i).len(),
            cell(bounds.min_producer_cost(i)),
            cell(bounds.min_consumer_cost(i)),
            cell(bounds.suffix_min_producer(i)),
        );
    }
    text
}
