use async_trait::async_trait;

use crate::error::Result;
use crate::types::CharacterPage;

/// A paginated source of character records.
///
/// The HTTP client implements this for the public catalog; tests substitute
/// scripted sources.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Source identifier, used as the log/error tag.
    fn id(&self) -> &'static str;

    /// Fetch one page of the listing. Pages are 1-indexed.
    ///
    /// An empty `results` array means the listing is exhausted.
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage>;
}
