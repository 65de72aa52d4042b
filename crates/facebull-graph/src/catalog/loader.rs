//! Machine list loader.
//!
//! The input is a stream of whitespace-separated tokens grouped in fours:
//!
//! ```text
//! M1 C1 C2 277317
//! M2 C2 C1 26247
//! ```
//!
//! i.e. `<machine> <input compound> <output compound> <price>`. Line breaks
//! carry no meaning beyond separating tokens.
//!
//! # End of stream
//!
//! Input ending on a record boundary ends loading. A final group that is
//! incomplete or unparseable is logged and dropped, since truncated trailers
//! are common in hand-edited files. A bad group with more input after it is
//! `GraphError::MalformedInput`.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GraphError, GraphResult};

use super::core::{Catalog, CatalogBuilder};
use super::types::{parse_edge_id, Cost};

const TOKENS_PER_RECORD: usize = 4;

/// One parsed machine record, before compound registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineRecord<'a> {
    /// Numeric machine id.
    pub id: u64,
    /// Raw machine token.
    pub label: &'a str,
    /// Input compound name.
    pub input: &'a str,
    /// Output compound name.
    pub output: &'a str,
    /// Machine price.
    pub cost: Cost,
}

/// A token and the 1-based line it starts on.
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    line: usize,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| {
            line.split_whitespace()
                .map(move |text| Token { text, line: i + 1 })
        })
        .collect()
}

fn parse_record<'a>(group: &[Token<'a>]) -> Result<MachineRecord<'a>, String> {
    if group.len() < TOKENS_PER_RECORD {
        return Err(format!(
            "expected {} tokens, found {}",
            TOKENS_PER_RECORD,
            group.len()
        ));
    }

    let label = group[0].text;
    let id = parse_edge_id(label)
        .ok_or_else(|| format!("machine '{}' has no numeric id", label))?;
    let cost = group[3]
        .text
        .parse::<Cost>()
        .map_err(|_| format!("price '{}' is not a non-negative integer", group[3].text))?;

    Ok(MachineRecord {
        id,
        label,
        input: group[1].text,
        output: group[2].text,
        cost,
    })
}

/// Parse machine records from `text`.
///
/// # Errors
/// * `GraphError::MalformedInput` - a bad record followed by more input
pub fn parse_records(text: &str) -> GraphResult<Vec<MachineRecord<'_>>> {
    let tokens = tokenize(text);
    let groups: Vec<&[Token<'_>]> = tokens.chunks(TOKENS_PER_RECORD).collect();
    let mut records = Vec::with_capacity(groups.len());

    for (i, group) in groups.iter().enumerate() {
        let is_last = i + 1 == groups.len();
        match parse_record(group) {
            Ok(record) => records.push(record),
            Err(reason) if is_last => {
                warn!(
                    record = i + 1,
                    line = group[0].line,
                    %reason,
                    "Ignoring unparseable trailing record at end of input"
                );
            }
            Err(reason) => return Err(GraphError::malformed(i + 1, group[0].line, reason)),
        }
    }

    Ok(records)
}

/// Parse a catalog from machine list text.
///
/// # Errors
/// * `GraphError::MalformedInput` - a bad record followed by more input
/// * `GraphError::NodeCountOverflow` - more compounds than mask bits
pub fn parse_catalog(text: &str) -> GraphResult<Catalog> {
    let mut builder = CatalogBuilder::new();
    for record in parse_records(text)? {
        builder.add_edge(record.id, record.label, record.input, record.output, record.cost)?;
    }
    let catalog = builder.build();
    debug!(
        machines = catalog.edge_count(),
        compounds = catalog.node_count(),
        "Parsed machine catalog"
    );
    Ok(catalog)
}

/// Read and parse a machine list file.
///
/// # Errors
/// * `GraphError::Io` - the file cannot be read
/// * `GraphError::MalformedInput` - the file is not valid UTF-8
/// * any error of [`parse_catalog`]
pub fn load_catalog(path: &Path) -> GraphResult<Catalog> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| invalid_utf8(e.as_bytes(), e.utf8_error()))?;
    parse_catalog(&text)
}

/// Locate the first invalid byte by the record and line it falls in.
fn invalid_utf8(bytes: &[u8], err: std::str::Utf8Error) -> GraphError {
    let valid = &bytes[..err.valid_up_to()];
    // The prefix is valid by construction.
    let prefix = std::str::from_utf8(valid).unwrap_or_default();
    let record = tokenize(prefix).len() / TOKENS_PER_RECORD + 1;
    let line = prefix.matches('\n').count() + 1;
    GraphError::malformed(record, line, format!("invalid UTF-8 at byte {}", err.valid_up_to()))
}
