//! `fasrank solve` — compute a feedback arc set with a named solver.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use fasrank_core::SolverConfig;
use fasrank_core::graph::{AdjacencyGraph, Edge};
use fasrank_core::io::write_edge_list;
use petgraph::algo::is_cyclic_directed;
use serde::Serialize;
use tracing::{debug, info};

use crate::cmd::load_graph;
use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_mode};
use crate::registry;

/// Arguments for `fasrank solve`.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Edge-list file (`N` header, then `from to` lines). Uses the built-in
    /// sample graph when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Solver name (see `fasrank solvers`).
    #[arg(short, long, default_value = registry::DEFAULT_SOLVER)]
    pub solver: String,

    /// List the removed edges.
    #[arg(short = 'p', long = "print-fas")]
    pub print_fas: bool,

    /// Check with petgraph that the residual graph is acyclic.
    #[arg(long)]
    pub verify: bool,

    /// TOML file with `[pagerank]` and `[line_graph]` sections.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the graph minus the removed edges to FILE as an edge list.
    #[arg(long, value_name = "FILE")]
    pub emit_residual: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    solver: String,
    source: String,
    vertices: usize,
    edges: usize,
    self_loops: usize,
    content_hash: String,
    elapsed_ms: f64,
    fas_size: usize,
    fas_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    acyclic: Option<bool>,
    fas: Vec<Edge>,
    #[serde(skip)]
    print_fas: bool,
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn residual_is_acyclic(graph: &AdjacencyGraph, fas: &[Edge]) -> bool {
    !is_cyclic_directed(&graph.without_edges(fas).to_petgraph())
}

fn emit_residual(graph: &AdjacencyGraph, fas: &[Edge], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create residual file {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_edge_list(&graph.without_edges(fas), &mut w)
        .and_then(|()| w.flush())
        .with_context(|| format!("failed to write residual file {}", path.display()))?;
    debug!(path = %path.display(), "residual graph written");
    Ok(())
}

/// Execute `fasrank solve`.
pub fn run_solve(args: &SolveArgs, output: OutputMode) -> anyhow::Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    debug!(?config, "solver config");

    let Some(solver) = registry::build(&args.solver, &config) else {
        return Err(CliError::with_details(
            format!("unknown solver '{}'", args.solver),
            format!(
                "choose one of: {}",
                registry::names().collect::<Vec<_>>().join(", ")
            ),
            "unknown_solver",
        )
        .into());
    };

    let (graph, source) = load_graph(args.input.as_deref())?;
    info!(
        solver = %args.solver,
        source = %source,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "solving"
    );

    let started = Instant::now();
    let fas = solver.solve(&graph);
    let elapsed = started.elapsed();

    let acyclic = args.verify.then(|| residual_is_acyclic(&graph, &fas));
    if let Some(path) = args.emit_residual.as_deref() {
        emit_residual(&graph, &fas, path)?;
    }

    let report = SolveReport {
        solver: args.solver.clone(),
        source,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        self_loops: graph.self_loops().count(),
        content_hash: graph.content_hash(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        fas_size: fas.len(),
        fas_percent: percent(fas.len(), graph.edge_count()),
        acyclic,
        fas,
        print_fas: args.print_fas,
    };

    render_mode(output, &report, render_solve_text, render_solve_pretty)
        .context("failed to write report")?;

    if acyclic == Some(false) {
        return Err(CliError::with_details(
            format!("solver '{}' left a cycle in the residual graph", args.solver),
            "report this graph as a solver bug",
            "verify_failed",
        )
        .into());
    }
    Ok(())
}

fn render_solve_text(report: &SolveReport, w: &mut dyn Write) -> std::io::Result<()> {
    write!(
        w,
        "solver={} vertices={} edges={} self_loops={} fas={} percent={:.2} elapsed_ms={:.3} hash={}",
        report.solver,
        report.vertices,
        report.edges,
        report.self_loops,
        report.fas_size,
        report.fas_percent,
        report.elapsed_ms,
        report.content_hash
    )?;
    if let Some(acyclic) = report.acyclic {
        write!(w, " acyclic={acyclic}")?;
    }
    writeln!(w)?;
    if report.print_fas {
        for (from, to) in &report.fas {
            writeln!(w, "{from} {to}")?;
        }
    }
    Ok(())
}

fn render_solve_pretty(report: &SolveReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Feedback arc set ({})", report.solver))?;
    pretty_kv(w, "Input", &report.source)?;
    pretty_kv(w, "Hash", &report.content_hash)?;
    pretty_kv(w, "Vertices", report.vertices.to_string())?;
    pretty_kv(w, "Edges", report.edges.to_string())?;
    if report.self_loops > 0 {
        pretty_kv(w, "Self-loops", report.self_loops.to_string())?;
    }
    pretty_kv(
        w,
        "Removed",
        format!("{} ({:.2}%)", report.fas_size, report.fas_percent),
    )?;
    pretty_kv(w, "Elapsed", format!("{:.3} ms", report.elapsed_ms))?;
    if let Some(acyclic) = report.acyclic {
        pretty_kv(w, "Acyclic", if acyclic { "yes" } else { "NO" })?;
    }
    if report.print_fas && !report.fas.is_empty() {
        writeln!(w)?;
        writeln!(w, "Removed edges:")?;
        for (from, to) in &report.fas {
            writeln!(w, "  {from} -> {to}")?;
        }
    }
    Ok(())
}
