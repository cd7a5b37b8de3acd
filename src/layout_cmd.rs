//! Addressing commands: offset, pair, and table.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use leafpack_index::triangular::checked_packed_len;
use leafpack_index::{Convention, Origin, PackedLayout, RowMajor, origin_offset};

use crate::cli::{LayoutArgs, OffsetArgs, PairArgs, TableArgs};
use crate::config;
use crate::convert::{ConventionKind, ResolvedLayout, resolve_convention, resolve_layout};

/// One cell of a layout table.
#[derive(Debug, Serialize)]
pub struct TableRow {
    pub offset: usize,
    pub lo: usize,
    pub hi: usize,
}

/// JSON form of `leafpack table --json`.
#[derive(Debug, Serialize)]
pub struct TableOutput {
    pub convention: &'static str,
    pub n: usize,
    pub len: usize,
    pub cells: Vec<TableRow>,
}

fn resolve(args: &LayoutArgs, config_path: Option<&Path>) -> Result<ResolvedLayout> {
    let cfg = config::load(config_path)?;
    let layout = resolve_layout(args, &cfg.layout)?;
    info!(n = layout.n, convention = ?layout.convention, "resolved layout");
    Ok(layout)
}

fn build<C: Convention>(n: usize) -> Result<PackedLayout<C>> {
    PackedLayout::<C>::new(n).with_context(|| format!("cannot build {} layout", C::NAME))
}

/// Print the packed offset of `(i, j)`.
///
/// The origin form does not depend on `n`; without a size the coordinates
/// are only checked for distinctness.
pub fn offset(args: OffsetArgs, config_path: Option<&Path>) -> Result<()> {
    let _cmd = info_span!("offset").entered();
    let cfg = config::load(config_path)?;
    let convention = resolve_convention(&args.layout, &cfg.layout)?;
    let k = match (convention, args.layout.n.or(cfg.layout.n)) {
        (ConventionKind::Origin, None) => unbounded_origin_offset(args.i, args.j)?,
        _ => {
            let layout = resolve_layout(&args.layout, &cfg.layout)?;
            info!(n = layout.n, convention = ?layout.convention, "resolved layout");
            match layout.convention {
                ConventionKind::Origin => offset_of::<Origin>(layout.n, args.i, args.j)?,
                ConventionKind::RowMajor => offset_of::<RowMajor>(layout.n, args.i, args.j)?,
            }
        }
    };
    println!("{k}");
    Ok(())
}

fn unbounded_origin_offset(i: usize, j: usize) -> Result<usize> {
    if i == j {
        bail!("cannot address ({i}, {j}): the diagonal is not stored");
    }
    // Fits whenever a matrix of max(i, j) + 1 items is addressable.
    if i.max(j).checked_add(1).and_then(checked_packed_len).is_none() {
        bail!("cannot address ({i}, {j}): offset overflows");
    }
    Ok(origin_offset(i, j))
}

fn offset_of<C: Convention>(n: usize, i: usize, j: usize) -> Result<usize> {
    build::<C>(n)?
        .offset(i, j)
        .with_context(|| format!("cannot address ({i}, {j})"))
}

/// Print the pair stored at a packed offset.
pub fn pair(args: PairArgs, config_path: Option<&Path>) -> Result<()> {
    let _cmd = info_span!("pair").entered();
    let layout = resolve(&args.layout, config_path)?;
    let p = match layout.convention {
        ConventionKind::Origin => pair_at::<Origin>(layout.n, args.offset)?,
        ConventionKind::RowMajor => pair_at::<RowMajor>(layout.n, args.offset)?,
    };
    println!("{} {}", p.0, p.1);
    Ok(())
}

fn pair_at<C: Convention>(n: usize, offset: usize) -> Result<(usize, usize)> {
    let p = build::<C>(n)?
        .pair(offset)
        .with_context(|| format!("cannot decode offset {offset}"))?;
    Ok(p.into_tuple())
}

/// Print every cell of the layout in buffer order.
pub fn table(args: TableArgs, config_path: Option<&Path>) -> Result<()> {
    let _cmd = info_span!("table").entered();
    let layout = resolve(&args.layout, config_path)?;
    let output = match layout.convention {
        ConventionKind::Origin => table_of::<Origin>(layout.n)?,
        ConventionKind::RowMajor => table_of::<RowMajor>(layout.n)?,
    };
    info!(cells = output.len, "rendering table");
    let rendered = if args.json {
        serde_json::to_string_pretty(&output).context("failed to serialize table")?
    } else {
        render_plain(&output)
    };
    println!("{rendered}");
    Ok(())
}

fn table_of<C: Convention>(n: usize) -> Result<TableOutput> {
    let layout = build::<C>(n)?;
    let cells = layout
        .pairs()
        .map(|(offset, p)| TableRow {
            offset,
            lo: p.lo,
            hi: p.hi,
        })
        .collect();
    Ok(TableOutput {
        convention: C::NAME,
        n,
        len: layout.len(),
        cells,
    })
}

fn render_plain(output: &TableOutput) -> String {
    let mut s = format!(
        "# {} layout, n = {}, len = {}\noffset\tlo\thi",
        output.convention, output.n, output.len
    );
    for row in &output.cells {
        let _ = write!(s, "\n{}\t{}\t{}", row.offset, row.lo, row.hi);
    }
    s
}
