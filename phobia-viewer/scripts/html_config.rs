use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Trunk post-build hook: make the staged page load its bundle relative to
/// wherever the host serves it.
fn main() -> io::Result<()> {
    let staging_dir = env::var("TRUNK_STAGING_DIR")
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, err))?;

    // Output name configured in Trunk.toml.
    let staged_html_path = PathBuf::from(staging_dir).join("PhobiaViewer.html");

    let html = fs::read_to_string(&staged_html_path)?
        .replace("/phobia-viewer.js", "./phobia-viewer.js")
        .replace("/phobia-viewer_bg.wasm", "./phobia-viewer_bg.wasm");

    fs::write(staged_html_path, html)
}
