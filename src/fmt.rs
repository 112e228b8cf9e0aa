//! Human-friendly CLI output formatters.
//!
//! Each `fmt_*` function formats one tool's output for terminal display.
//! When `color` is true, ANSI escape codes are emitted via `owo_colors`.

use crate::tools::{
    BrowseOutput, LoadOutput, SearchOutput, StatsOutput, SuggestOutput, TrendingOutput,
};
use owo_colors::OwoColorize;
use std::io::{self, Write};

// ── search ──────────────────────────────────────────────────────────────────

pub fn fmt_search(w: &mut impl Write, out: &SearchOutput, color: bool) -> io::Result<()> {
    if out.results.is_empty() {
        writeln!(w, "no products match {:?}", out.query)?;
        return Ok(());
    }

    for item in &out.results {
        let brand = item.brand.as_deref().unwrap_or("-");
        if color {
            writeln!(
                w,
                "{:>4}  {}  {}",
                item.score.yellow(),
                item.name.bold(),
                format_args!("[{} · {} · {}]", brand, item.category, item.match_type).dimmed()
            )?;
        } else {
            writeln!(
                w,
                "{:>4}  {}  [{} · {} · {}]",
                item.score, item.name, brand, item.category, item.match_type
            )?;
        }
    }

    if out.has_more {
        if color {
            writeln!(w, "{}", "... more results available".dimmed())?;
        } else {
            writeln!(w, "... more results available")?;
        }
    }

    Ok(())
}

// ── suggest / trending ──────────────────────────────────────────────────────

pub fn fmt_suggest(w: &mut impl Write, out: &SuggestOutput, color: bool) -> io::Result<()> {
    let query = out.query.trim().to_lowercase();
    for term in &out.suggestions {
        if color {
            // Highlight the typed part inside each suggestion
            match term.find(&query) {
                Some(at) if !query.is_empty() => {
                    let end = at + query.len();
                    let typed: &str = &term[at..end];
                    writeln!(w, "{}{}{}", &term[..at], typed.green().bold(), &term[end..])?;
                }
                _ => writeln!(w, "{term}")?,
            }
        } else {
            writeln!(w, "{term}")?;
        }
    }
    Ok(())
}

pub fn fmt_trending(w: &mut impl Write, out: &TrendingOutput, color: bool) -> io::Result<()> {
    for (rank, term) in out.terms.iter().enumerate() {
        if color {
            writeln!(w, "{} {}", format_args!("{:>2}.", rank + 1).dimmed(), term)?;
        } else {
            writeln!(w, "{:>2}. {}", rank + 1, term)?;
        }
    }
    Ok(())
}

// ── browse ──────────────────────────────────────────────────────────────────

pub fn fmt_browse(w: &mut impl Write, out: &BrowseOutput, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{} ({})", out.name.bold(), out.total_returned)?;
    } else {
        writeln!(w, "{} ({})", out.name, out.total_returned)?;
    }

    for p in &out.products {
        let brand = p.brand.as_deref().unwrap_or("-");
        if color {
            writeln!(w, "  {:<10} {}  {}", p.id.cyan(), p.name, brand.dimmed())?;
        } else {
            writeln!(w, "  {:<10} {}  {}", p.id, p.name, brand)?;
        }
    }
    Ok(())
}

// ── load / stats ────────────────────────────────────────────────────────────

pub fn fmt_load(w: &mut impl Write, out: &LoadOutput, color: bool) -> io::Result<()> {
    if color {
        writeln!(
            w,
            "loaded {} products ({} rejected) → generation {}",
            out.accepted.green(),
            out.rejected.red(),
            out.generation
        )?;
    } else {
        writeln!(
            w,
            "loaded {} products ({} rejected) → generation {}",
            out.accepted, out.rejected, out.generation
        )?;
    }

    if !out.installed {
        if color {
            writeln!(w, "{}", "superseded by a newer load, not serving".yellow())?;
        } else {
            writeln!(w, "superseded by a newer load, not serving")?;
        }
    }

    for r in &out.rejections {
        if color {
            writeln!(w, "  row {:>5}  {}  {}", r.row, r.code.yellow(), r.reason)?;
        } else {
            writeln!(w, "  row {:>5}  {}  {}", r.row, r.code, r.reason)?;
        }
    }
    Ok(())
}

pub fn fmt_stats(w: &mut impl Write, out: &StatsOutput, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{:<14} {}", "generation".dimmed(), out.generation)?;
    } else {
        writeln!(w, "{:<14} {}", "generation", out.generation)?;
    }

    let rows = [
        ("products", out.products),
        ("names", out.names),
        ("brands", out.brands),
        ("categories", out.categories),
        ("keywords", out.keywords),
        ("duplicate ids", out.duplicate_ids),
        ("synonym terms", out.synonym_terms),
    ];
    for (label, value) in rows {
        if color {
            writeln!(w, "{:<14} {}", label.dimmed(), value)?;
        } else {
            writeln!(w, "{label:<14} {value}")?;
        }
    }
    Ok(())
}
