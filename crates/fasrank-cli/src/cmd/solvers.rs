//! `fasrank solvers` — list registered solver names.

use std::io::Write;

use crate::output::{OutputMode, pretty_section, render_mode};
use crate::registry::{DEFAULT_SOLVER, SOLVERS, SolverEntry};

/// Execute `fasrank solvers`.
pub fn run_solvers(output: OutputMode) -> anyhow::Result<()> {
    let entries = SOLVERS.to_vec();
    render_mode(
        output,
        &entries,
        |entries, w| render_solvers_text(entries, w),
        |entries, w| render_solvers_pretty(entries, w),
    )
}

fn render_solvers_text(entries: &[SolverEntry], w: &mut dyn Write) -> std::io::Result<()> {
    for entry in entries {
        writeln!(w, "{}", entry.name)?;
    }
    Ok(())
}

fn render_solvers_pretty(entries: &[SolverEntry], w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Solvers")?;
    for entry in entries {
        let marker = if entry.name == DEFAULT_SOLVER { "*" } else { " " };
        writeln!(w, "{marker} {:<14} {}", entry.name, entry.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_every_name() {
        let mut out = Vec::new();
        render_solvers_text(&SOLVERS, &mut out).expect("render");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "sort\ngreedy\ngreedy_opt\npage_rank\npage_rank_lb\n"
        );
    }

    #[test]
    fn pretty_marks_default() {
        let mut out = Vec::new();
        render_solvers_pretty(&SOLVERS, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("* page_rank "));
        assert!(rendered.contains("  greedy_opt"));
    }
}
