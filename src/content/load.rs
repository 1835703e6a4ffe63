//! One-shot curriculum loading.
//!
//! The load runs exactly once at startup and is the only suspension
//! point in the program. A failure here is not recoverable within the
//! session — the caller reports one message and stops.

use log::{debug, info};

use super::Curriculum;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Http(reqwest::Error),
    Parse(serde_json::Error),
    /// Structurally valid JSON with nothing to show.
    Empty,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read curriculum file: {e}"),
            LoadError::Http(e) => write!(f, "failed to fetch curriculum: {e}"),
            LoadError::Parse(e) => write!(f, "failed to parse curriculum: {e}"),
            LoadError::Empty => write!(f, "curriculum contains no units"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Load and parse the curriculum from a file path or `http(s)://` URL.
///
/// An empty unit list is rejected so that the navigation invariant
/// `current_page ∈ [1, page_count]` holds for every loaded tree.
pub async fn load_curriculum(source: &str) -> Result<Curriculum, LoadError> {
    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        debug!("Fetching curriculum from {}", source);
        let response = reqwest::get(source)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(LoadError::Http)?;
        response.text().await.map_err(LoadError::Http)?
    } else {
        debug!("Reading curriculum from {}", source);
        tokio::fs::read_to_string(source)
            .await
            .map_err(LoadError::Io)?
    };

    let curriculum: Curriculum = serde_json::from_str(&raw).map_err(LoadError::Parse)?;
    if curriculum.units.is_empty() {
        return Err(LoadError::Empty);
    }

    info!(
        "Loaded curriculum: {} units, {} parts",
        curriculum.units.len(),
        curriculum.units.iter().map(|u| u.total_parts()).sum::<usize>()
    );
    Ok(curriculum)
}
