use std::{fmt, path::PathBuf, sync::mpsc, thread};

use anyhow::{Context, Result};
#[cfg(not(feature = "download"))]
use anyhow::bail;
use tracing::debug;

use crate::{session::Payload, stats::read_statistics_from_slice, topo::Topology};

/// Where a payload comes from: a local file or, with the `download`
/// feature, an http(s) URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(text: &str) -> Self {
        if text.starts_with("http://") || text.starts_with("https://") {
            Source::Url(text.to_string())
        } else {
            Source::File(PathBuf::from(text))
        }
    }

    /// Read the whole payload into memory.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Source::File(path) => std::fs::read(path)
                .with_context(|| format!("[io::source] Failed to read {}", path.display())),
            #[cfg(feature = "download")]
            Source::Url(url) => super::fetch::fetch_bytes(url),
            #[cfg(not(feature = "download"))]
            Source::Url(url) => bail!("[io::source] Cannot fetch {url}: built without the `download` feature"),
        }
    }

    pub fn read_topology(&self) -> Result<Topology> {
        Topology::from_json_slice(&self.read_bytes()?)
            .with_context(|| format!("[io::source] Invalid topology from {self}"))
    }

    pub fn read_statistics(&self) -> Result<Vec<crate::stats::StatRecord>> {
        read_statistics_from_slice(&self.read_bytes()?)
            .with_context(|| format!("[io::source] Invalid statistics from {self}"))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// Load both payloads concurrently and hand each to `deliver` as soon as
/// it completes, so either may arrive first.
pub fn load_payloads(topology: &Source, statistics: &Source, mut deliver: impl FnMut(Result<Payload>)) {
    let (tx, rx) = mpsc::channel::<(&'static str, Result<Payload>)>();

    thread::scope(|scope| {
        let topo_tx = tx.clone();
        scope.spawn(move || {
            let _ = topo_tx.send(("topology", topology.read_topology().map(Payload::Topology)));
        });
        scope.spawn(move || {
            let _ = tx.send(("statistics", statistics.read_statistics().map(Payload::Statistics)));
        });

        // Ends once both senders have been dropped.
        for (kind, payload) in rx {
            debug!(payload = kind, ok = payload.is_ok(), "payload arrived");
            deliver(payload);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::fixtures::{TWO_COUNTIES, TWO_COUNTY_STATS};

    fn temp_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_urls_and_paths() {
        assert_eq!(Source::parse("https://example.com/counties.json"), Source::Url("https://example.com/counties.json".into()));
        assert_eq!(Source::parse("data/counties.json"), Source::File(PathBuf::from("data/counties.json")));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Source::parse("/nonexistent/counties.json").read_bytes().unwrap_err();
        assert!(format!("{err:#}").contains("[io::source]"));
    }

    #[test]
    fn loads_both_payloads() {
        let topo = temp_json(TWO_COUNTIES);
        let stats = temp_json(TWO_COUNTY_STATS);

        let mut seen = Vec::new();
        load_payloads(
            &Source::File(topo.path().to_path_buf()),
            &Source::File(stats.path().to_path_buf()),
            |payload| seen.push(payload.unwrap()),
        );

        assert_eq!(seen.len(), 2);
        assert!(seen.iter().any(|p| matches!(p, Payload::Topology(_))));
        assert!(seen.iter().any(|p| matches!(p, Payload::Statistics(records) if records.len() == 2)));
    }

    #[test]
    fn failures_are_delivered_too() {
        let stats = temp_json(TWO_COUNTY_STATS);
        let mut results = Vec::new();
        load_payloads(
            &Source::parse("/nonexistent/counties.json"),
            &Source::File(stats.path().to_path_buf()),
            |payload| results.push(payload.is_ok()),
        );
        results.sort();
        assert_eq!(results, vec![false, true]);
    }
}
