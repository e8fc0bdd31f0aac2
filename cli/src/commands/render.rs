use std::path::PathBuf;

use anyhow::Result;

use super::load_map;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or_else(|| PathBuf::from("./map.svg"));

    println!("[render] loading {} and {}", args.topology, args.statistics);
    let map = load_map(args.config.as_deref(), args.fit, &args.topology, &args.statistics, 1280.0)?;

    if let Some(session) = map.session() {
        let thresholds = session.scale().thresholds().iter()
            .map(|t| format!("{t:.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("[render] {} regions, thresholds [{thresholds}]", session.geometry().regions.len());
    }

    println!("[render] writing map to {}", out_path.display());
    map.scene().write_svg_file(&out_path)?;

    Ok(())
}
