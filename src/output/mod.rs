pub mod html;

use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf}
};

use thiserror::Error;
use tracing::info;

use crate::model::structures::{display_row::RenderedTable, output_format::OutputFormat};

pub const PAGE_TITLE: &str = "ELO Ranking";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("Failed to serialize table: {0}")]
    Serialization(#[from] serde_json::Error)
}

/// Renders `table` in the requested format.
pub fn render(table: &RenderedTable, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Fragment => Ok(html::render_fragment(table)),
        OutputFormat::Page => Ok(html::render_page(table, PAGE_TITLE)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)? + "\n")
    }
}

/// Writes the rendered table to `path`, or to stdout when no path is given.
pub fn write(table: &RenderedTable, format: OutputFormat, path: Option<&Path>) -> Result<(), OutputError> {
    let rendered = render(table, format)?;

    match path {
        Some(path) => {
            let io_err = |source| OutputError::Io {
                path: path.to_path_buf(),
                source
            };
            let mut file = File::create(path).map_err(io_err)?;
            file.write_all(rendered.as_bytes()).map_err(io_err)?;
            info!("Wrote {} rows to {}", table.rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|source| OutputError::Io {
                    path: PathBuf::from("<stdout>"),
                    source
                })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structures::display_row::DisplayRow;

    fn sample() -> RenderedTable {
        RenderedTable {
            last_update: "29 October 2025, 20:22".to_string(),
            rows: vec![DisplayRow {
                rank: 1,
                flag: "🇮🇹".to_string(),
                name: "Juventus".to_string(),
                rating: "1500.0".to_string()
            }]
        }
    }

    #[test]
    fn test_json_output() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: RenderedTable = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, sample());
        assert!(json.contains("\"rating\": \"1500.0\""));
    }

    #[test]
    fn test_fragment_output() {
        let html = render(&sample(), OutputFormat::Fragment).unwrap();

        assert!(html.contains("<td>🇮🇹 Juventus</td>"));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_page_output() {
        assert!(render(&sample(), OutputFormat::Page)
            .unwrap()
            .contains("<title>ELO Ranking</title>"));
    }

    #[test]
    fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("elo-ranking-output-{}.html", std::process::id()));

        write(&sample(), OutputFormat::Fragment, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, html::render_fragment(&sample()));
    }

    #[test]
    fn test_write_to_missing_directory() {
        let path = Path::new("/nonexistent/dir/ranking.html");

        assert!(matches!(
            write(&sample(), OutputFormat::Fragment, Some(path)),
            Err(OutputError::Io { .. })
        ));
    }
}
