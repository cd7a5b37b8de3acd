//! Argmin command: first minimum of a list of values.

use anyhow::{Context, Result};
use tracing::{info_span, warn};

use leafpack_select::{SelectError, try_min_element};

use crate::cli::ArgminArgs;

/// Run the minimum search and print `position<TAB>value`.
pub fn run(args: ArgminArgs) -> Result<()> {
    let _cmd = info_span!("argmin", n_values = args.values.len()).entered();
    let start = args.start.unwrap_or(0);
    let end = args.end.unwrap_or(args.values.len());
    println!("{}", render(&args.values, start, end)?);
    Ok(())
}

/// An empty range prints the sentinel position alone.
fn render(values: &[f64], start: usize, end: usize) -> Result<String> {
    match try_min_element(values, start, end) {
        Ok(pos) => Ok(format!("{pos}\t{}", values[pos])),
        Err(SelectError::EmptyRange { start }) => {
            warn!(start, "empty range: returning end position");
            Ok(format!("{start}"))
        }
        Err(e) => Err(e).context("cannot search range"),
    }
}
