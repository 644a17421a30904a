use std::path::Path;

use anyhow::Context;
use meetkit_log::{SpecLogOptions, init_logging};
use meetkit_planner::{derive_default_inputs, generate_planning_artifacts};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging(&SpecLogOptions::default());

    let dir_out = Path::new(".");
    let report = generate_planning_artifacts(dir_out, &derive_default_inputs())
        .with_context(|| format!("failed to generate artifacts in {}", dir_out.display()))?;

    info!("{report}");
    println!("{}", report.format_created_files());
    Ok(())
}
