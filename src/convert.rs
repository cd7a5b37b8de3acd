//! Pure conversion functions: TOML config + CLI flags -> crate API types.

use anyhow::{Result, bail};

use crate::cli::LayoutArgs;
use crate::config::LayoutToml;

/// Runtime choice of packing convention; dispatches to the marker types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionKind {
    Origin,
    RowMajor,
}

/// Layout parameters after merging the config file with CLI overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub n: usize,
    pub convention: ConventionKind,
}

/// Parses a convention name string into the corresponding enum variant.
pub fn parse_convention(s: &str) -> Result<ConventionKind> {
    match s.to_lowercase().as_str() {
        "origin" => Ok(ConventionKind::Origin),
        "row-major" | "row_major" | "row" => Ok(ConventionKind::RowMajor),
        other => bail!("unknown convention: {other:?}"),
    }
}

/// Picks the convention from the CLI flag, falling back to the config file.
pub fn resolve_convention(args: &LayoutArgs, toml: &LayoutToml) -> Result<ConventionKind> {
    parse_convention(args.convention.as_deref().unwrap_or(&toml.convention))
}

/// Merges CLI flags over the `[layout]` section. CLI wins.
pub fn resolve_layout(args: &LayoutArgs, toml: &LayoutToml) -> Result<ResolvedLayout> {
    let Some(n) = args.n.or(toml.n) else {
        bail!("no matrix size: pass --n or set [layout].n in config");
    };
    let convention = resolve_convention(args, toml)?;
    Ok(ResolvedLayout { n, convention })
}
