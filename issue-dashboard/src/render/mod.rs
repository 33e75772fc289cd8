//! Output renderers: the HTML dashboard with its JSON summary, and the
//! markdown report.

mod dashboard;
mod error;
mod report;
mod table;

pub use dashboard::{
    dashboard_html, write_dashboard, DashboardContext, SummarySnapshot, DASHBOARD_DIR,
    IMAGE_DIR, INDEX_FILE, SUMMARY_FILE,
};
pub use error::RenderError;
pub use report::{report_markdown, write_report, ReportContext, REPORT_CHART_FILE, REPORT_FILE};
pub use table::{MarkdownTable, NO_DATA};

use std::path::Path;
use tracing::debug;

/// Writes `contents` to `path`, creating parent directories as needed.
fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::IoError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| RenderError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(path = %path.display(), "Output written");
    Ok(())
}
