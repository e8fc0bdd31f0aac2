//! SVG document framing for a [`Scene`](super::Scene).

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

/// Buffered sink for an SVG file at `path`, truncating any existing file.
pub(crate) fn create_svg_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("[scene::svg] Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Take an in-memory SVG buffer as text.
pub(crate) fn svg_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).context("[scene::svg] SVG output is not valid UTF-8")
}

/// Write the XML declaration and opening <svg> tag for a fixed viewBox.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" class="map__svg"
    width="{width}" height="{height}"
    viewBox="0 0 {width} {height}"
    preserveAspectRatio="xMidYMid meet">"##)?;
    Ok(())
}

/// Write the map style sheet.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .map__region {{ stroke: none; }}
    .map__region--missing {{ fill: #e5e7eb; }}
    .map__state {{ fill: none; stroke: #ffffff; stroke-width: 1; stroke-linejoin: round; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
