use crate::source::PageSource;
use crate::ScrapeError;
use std::path::PathBuf;

/// Results page saved to disk, e.g. by a headless browser
#[derive(Debug, Clone)]
pub struct FilePageSource {
    path: PathBuf,
}

impl FilePageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FilePageSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_html(&self) -> Result<String, ScrapeError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
