//! Where page markup comes from.

use std::path::PathBuf;

use tokio::io::AsyncReadExt;
use tracing::debug;
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::http_client::PageClient;

/// A page to extract tables from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched over HTTP(S).
    Url(Url),
    /// A saved HTML file.
    File(PathBuf),
    /// Markup piped on standard input, read on load.
    Stdin,
    /// Markup already in memory.
    Text(String),
}

impl Source {
    /// Classify a command-line argument.
    ///
    /// `http://` and `https://` arguments are URLs, `-` is standard input,
    /// anything else is a file path.
    pub fn parse_arg(arg: &str) -> Result<Self> {
        let lower = arg.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Url(Url::parse(arg)?));
        }
        if arg == "-" {
            return Ok(Self::Stdin);
        }
        Ok(Self::File(PathBuf::from(arg)))
    }

    /// Base URL for resolving relative links found in the page.
    pub fn base_url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            Self::File(_) | Self::Stdin | Self::Text(_) => None,
        }
    }

    /// Load the raw markup.
    pub async fn load(&self, client: &PageClient) -> Result<String> {
        match self {
            Self::Url(url) => client.fetch_text(url.as_str()).await,
            Self::File(path) => {
                debug!(path = %path.display(), "Reading file");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ScrapeError::Read {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Stdin => {
                debug!("Reading standard input");
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .map_err(|source| ScrapeError::Read {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(text)
            }
            Self::Text(text) => Ok(text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_arguments() {
        assert_eq!(
            Source::parse_arg("https://www.espn.com/mens-college-basketball/rankings").unwrap(),
            Source::Url(Url::parse("https://www.espn.com/mens-college-basketball/rankings").unwrap())
        );
        assert_eq!(
            Source::parse_arg("grosses.html").unwrap(),
            Source::File(PathBuf::from("grosses.html"))
        );
        assert_eq!(Source::parse_arg("-").unwrap(), Source::Stdin);
        assert!(matches!(
            Source::parse_arg("http://"),
            Err(ScrapeError::Url(_))
        ));
    }

    #[test]
    fn only_urls_have_a_base() {
        let url = Source::parse_arg("http://example.com/a/b").unwrap();
        assert_eq!(url.base_url().unwrap().as_str(), "http://example.com/a/b");
        assert!(Source::Text(String::new()).base_url().is_none());
        assert!(Source::Stdin.base_url().is_none());
    }

    #[tokio::test]
    async fn loads_text_and_files() {
        let client = PageClient::new().unwrap();
        let text = Source::Text("<table></table>".into());
        assert_eq!(text.load(&client).await.unwrap(), "<table></table>");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<p>saved</p>").unwrap();
        let file = Source::File(path);
        assert_eq!(file.load(&client).await.unwrap(), "<p>saved</p>");
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let client = PageClient::new().unwrap();
        let err = Source::File(PathBuf::from("/nonexistent/page.html"))
            .load(&client)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/page.html"));
    }
}
