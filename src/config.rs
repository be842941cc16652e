//! Render configuration.

use std::path::{Path, PathBuf};

use crate::render::ImageFormat;

/// Configuration for one render run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Path to the SBOM JSON document
    pub input: PathBuf,
    /// Output file path; derived from the input when not set
    pub output_file: Option<PathBuf>,
    /// Output image format
    pub format: ImageFormat,
    /// Apply transitive reduction. Disabling yields the literal graph:
    /// every surviving relationship becomes an edge, redundant or not.
    pub reduce: bool,
    /// Open the rendered file in the platform viewer afterwards
    pub open: bool,
}

impl RenderConfig {
    /// Resolve the effective output path: the explicit `-O` value, or
    /// `<input-stem>_deps.<ext>` next to the input file.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_file.clone().unwrap_or_else(|| {
            let stem = self
                .input
                .file_stem()
                .map_or_else(|| "sbom".to_string(), |s| s.to_string_lossy().into_owned());
            let name = format!("{stem}_deps.{}", self.format.extension());
            self.input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &str, output: Option<&str>, format: ImageFormat) -> RenderConfig {
        RenderConfig {
            input: PathBuf::from(input),
            output_file: output.map(PathBuf::from),
            format,
            reduce: true,
            open: false,
        }
    }

    #[test]
    fn test_default_output_derived_from_input() {
        let cfg = config("/data/host.syft.json", None, ImageFormat::Png);
        assert_eq!(
            cfg.output_path(),
            PathBuf::from("/data/host.syft_deps.png")
        );
    }

    #[test]
    fn test_explicit_output_wins() {
        let cfg = config("/data/host.json", Some("/tmp/graph.svg"), ImageFormat::Svg);
        assert_eq!(cfg.output_path(), PathBuf::from("/tmp/graph.svg"));
    }

    #[test]
    fn test_dot_format_extension() {
        let cfg = config("sbom.json", None, ImageFormat::Dot);
        assert_eq!(cfg.output_path(), PathBuf::from("sbom_deps.dot"));
    }
}
