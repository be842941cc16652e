//! Graphviz backend invocation.
//!
//! Feeds DOT source to the `dot` executable over stdin and writes the image
//! to the requested path. A missing backend or a non-zero exit is fatal.

use std::io::Write as _;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

use clap::ValueEnum;

use crate::error::{RenderErrorKind, Result, SbomVizError};

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormat {
    /// PNG raster image (default)
    #[default]
    Png,
    /// SVG vector image
    Svg,
    /// Raw DOT source, no backend invocation
    Dot,
}

impl ImageFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Dot => "dot",
        }
    }

    /// Graphviz `-T` argument, if the backend is involved at all.
    #[must_use]
    fn backend_arg(self) -> Option<&'static str> {
        match self {
            Self::Png => Some("png"),
            Self::Svg => Some("svg"),
            Self::Dot => None,
        }
    }
}

/// Write the rendered graph to `output`.
///
/// For [`ImageFormat::Dot`] the source is written as-is; otherwise the `dot`
/// executable is invoked once per run.
pub fn render_graph(dot_source: &str, output: &Path, format: ImageFormat) -> Result<()> {
    let Some(backend_format) = format.backend_arg() else {
        std::fs::write(output, dot_source).map_err(|e| SbomVizError::io(output, e))?;
        return Ok(());
    };

    tracing::debug!(output = %output.display(), format = backend_format, "Invoking dot");

    let child = Command::new("dot")
        .arg(format!("-T{backend_format}"))
        .arg("-o")
        .arg(output)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SbomVizError::render(
                    "invoking dot",
                    RenderErrorKind::BackendMissing(
                        "install graphviz and ensure 'dot' is on PATH".to_string(),
                    ),
                )
            } else {
                SbomVizError::io(output, e)
            }
        })?;

    let result = feed_and_wait(child, dot_source.as_bytes())?;
    if !result.status.success() {
        return Err(SbomVizError::render(
            "invoking dot",
            RenderErrorKind::BackendFailed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            },
        ));
    }
    Ok(())
}

/// Feed input to the child's stdin, then collect its exit status and output.
/// The child is reaped even when the write fails (the backend may exit
/// before draining stdin).
fn feed_and_wait(mut child: Child, input: &[u8]) -> Result<Output> {
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(input) {
            drop(stdin);
            let _ = child.wait();
            return Err(e.into());
        }
    }
    Ok(child.wait_with_output()?)
}

/// Open the rendered file in the platform viewer. Best effort: a failure is
/// logged, never fatal.
pub fn open_viewer(path: &Path) {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(target_os = "windows")]
    let opener = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let opener = "xdg-open";

    match Command::new(opener).arg(path).spawn() {
        Ok(_) => tracing::info!(path = %path.display(), "Opened in viewer"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "Could not open viewer"),
    }
}
