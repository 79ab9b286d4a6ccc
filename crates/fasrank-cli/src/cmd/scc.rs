//! `fasrank scc` — list the cyclic strongly connected components.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use fasrank_core::graph::strongly_connected_components;
use serde::Serialize;

use crate::cmd::load_graph;
use crate::output::{OutputMode, render_mode};

/// Arguments for `fasrank scc`.
#[derive(Args, Debug, Default)]
pub struct SccArgs {
    /// Edge-list file. Uses the built-in sample graph when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SccOutput {
    source: String,
    components: Vec<ComponentOutput>,
}

#[derive(Debug, Serialize)]
struct ComponentOutput {
    vertices: Vec<usize>,
    edges: usize,
}

/// Execute `fasrank scc`.
pub fn run_scc(args: &SccArgs, output: OutputMode) -> anyhow::Result<()> {
    let (graph, source) = load_graph(args.input.as_deref())?;

    let components = strongly_connected_components(&graph)
        .into_iter()
        .map(|component| {
            let mut vertices = component.vertices;
            vertices.sort_unstable();
            ComponentOutput {
                vertices,
                edges: component.graph.edge_count(),
            }
        })
        .collect();

    let payload = SccOutput { source, components };
    render_mode(output, &payload, render_scc_text, render_scc_pretty)
}

fn render_scc_text(payload: &SccOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for component in &payload.components {
        let vertices: Vec<String> = component.vertices.iter().map(ToString::to_string).collect();
        writeln!(w, "{}\t{}", component.edges, vertices.join(" "))?;
    }
    Ok(())
}

fn render_scc_pretty(payload: &SccOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.components.is_empty() {
        writeln!(w, "No cycles found in {}.", payload.source)?;
        return Ok(());
    }

    writeln!(w, "Cyclic components ({})", payload.components.len())?;

    for (idx, component) in payload.components.iter().enumerate() {
        writeln!(
            w,
            "\nComponent {} ({} vertices, {} edges):",
            idx + 1,
            component.vertices.len(),
            component.edges
        )?;
        let vertices: Vec<String> = component.vertices.iter().map(ToString::to_string).collect();
        writeln!(w, "  {}", vertices.join(", "))?;
    }

    Ok(())
}
