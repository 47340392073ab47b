use async_trait::async_trait;

use crate::error::Result;
use crate::types::MoviePage;

/// A remote movie-metadata source.
///
/// The app only ever talks to the catalog through this trait, which keeps
/// the fetch path mockable in tests.
#[async_trait]
pub trait Catalog: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    /// Web page for a movie, for open-in-browser and yank.
    fn movie_url(&self, id: u64) -> String;

    /// Full image URL for a poster path taken verbatim from a response.
    fn poster_url(&self, poster_path: &str) -> String;

    /// Movies matching a query string.
    async fn search(&self, query: &str, page: u32) -> Result<MoviePage>;

    /// Default popular listing for when no query is given.
    async fn discover(&self, page: u32) -> Result<MoviePage>;
}
