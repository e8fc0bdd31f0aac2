pub mod hover;
pub mod render;

use std::path::Path;

use anyhow::{bail, Result};
use choropleth::{load_payloads, Choropleth, Config, ProjectionKind, Source, Status, Unmeasured};

/// Load configuration, fetch both payloads and render the map.
pub(crate) fn load_map(config: Option<&Path>, fit: bool, topology: &str, statistics: &str, viewport_width: f64) -> Result<Choropleth> {
    let mut config = match config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if fit { config.projection = ProjectionKind::Fit }

    let mut map = Choropleth::new(config, Box::new(Unmeasured), viewport_width);
    load_payloads(&Source::parse(topology), &Source::parse(statistics), |payload| {
        map.deliver(payload);
    });

    if let Status::Failed(message) = map.status() {
        bail!("[load] {message}");
    }
    if !map.is_ready() {
        bail!("[load] payloads loaded but the map could not be drawn (see warnings)");
    }
    Ok(map)
}
