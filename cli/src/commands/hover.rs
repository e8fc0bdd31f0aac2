use anyhow::Result;
use choropleth::Pointer;
use serde_json::json;

use super::load_map;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::HoverArgs) -> Result<()> {
    let mut map = load_map(args.config.as_deref(), args.fit, &args.topology, &args.statistics, args.viewport_width)?;

    map.pointer_move(Pointer::at(args.x, args.y));
    let target = map.hovered().and_then(|index| map.scene().hover_target(index));
    if cli.verbose > 0 {
        eprintln!("[hover] ({}, {}) -> {:?}", args.x, args.y, target.and_then(|t| t.id.as_ref()).map(ToString::to_string));
    }

    let tooltip = map.tooltip();
    let output = json!({
        "region": target,
        "tooltip": tooltip,
        "opacity": tooltip.opacity(),
        "transform": tooltip.transform(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
