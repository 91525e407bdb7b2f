//! Render a project to a JSON frame trace.
//!
//! ```text
//! cargo run -p devreel-scene-core --example render_trace -- [project.json] [out.json]
//! ```
//!
//! Without arguments the bundled demo project is rendered to stdout.

use std::fs;

use anyhow::{Context, Result};
use devreel_scene_core::{demo, Project};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let project = match args.next() {
        Some(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            Project::from_json(&json).with_context(|| format!("parsing {path}"))?
        }
        None => demo::project()?,
    };

    let rendered = project
        .render()
        .with_context(|| format!("rendering {:?}", project.name))?;
    let trace = serde_json::to_string_pretty(&rendered)?;

    match args.next() {
        Some(out) => {
            fs::write(&out, trace).with_context(|| format!("writing {out}"))?;
            eprintln!(
                "{}: {} scenes, {} frames, {:.2}s -> {out}",
                rendered.name,
                rendered.scenes.len(),
                rendered.frame_count(),
                rendered.duration()
            );
        }
        None => println!("{trace}"),
    }
    Ok(())
}
