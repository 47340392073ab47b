use async_trait::async_trait;
use reqwest::Client;

use crate::catalog::Catalog;
use crate::config::ApiConfig;
use crate::error::{ReelError, Result};
use crate::types::MoviePage;

pub struct Tmdb {
    client: Client,
    api: ApiConfig,
    token: String,
}

impl std::fmt::Debug for Tmdb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tmdb").finish_non_exhaustive()
    }
}

impl Tmdb {
    pub fn new(api: ApiConfig, token: String) -> Self {
        Self {
            client: Client::new(),
            api,
            token,
        }
    }

    fn search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/search/movie?query={}&page={}",
            self.api.base_url,
            urlencoding::encode(query),
            page
        )
    }

    fn discover_url(&self, page: u32) -> String {
        format!(
            "{}/discover/movie?include_adult={}&include_video=false&language={}&page={}",
            self.api.base_url, self.api.include_adult, self.api.language, page
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ReelError::Api(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), %url, "request failed");
            return Err(ReelError::Api("Error fetching movies!".to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| ReelError::Api(e.to_string()))
    }
}

#[async_trait]
impl Catalog for Tmdb {
    fn name(&self) -> &str {
        "TMDB"
    }

    fn movie_url(&self, id: u64) -> String {
        format!("{}/movie/{}", self.api.web_base_url, id)
    }

    fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.api.image_base_url, poster_path)
    }

    async fn search(&self, query: &str, page: u32) -> Result<MoviePage> {
        self.get_json(&self.search_url(query, page)).await
    }

    async fn discover(&self, page: u32) -> Result<MoviePage> {
        self.get_json(&self.discover_url(page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Tmdb {
        Tmdb::new(ApiConfig::default(), "test-token".to_string())
    }

    #[test]
    fn search_url_encodes_query() {
        let url = client().search_url("dune part two", 1);
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?query=dune%20part%20two&page=1"
        );
    }

    #[test]
    fn search_url_encodes_reserved_characters() {
        let url = client().search_url("alien & predator?", 3);
        assert!(url.contains("query=alien%20%26%20predator%3F"));
        assert!(url.ends_with("&page=3"));
    }

    #[test]
    fn discover_url_has_fixed_filters_and_no_query() {
        let url = client().discover_url(2);
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/discover/movie?include_adult=false&include_video=false&language=en-US&page=2"
        );
        assert!(!url.contains("query="));
    }

    #[test]
    fn discover_url_respects_config() {
        let api = ApiConfig {
            language: "fr-FR".to_string(),
            include_adult: true,
            ..ApiConfig::default()
        };
        let url = Tmdb::new(api, String::new()).discover_url(1);
        assert!(url.contains("include_adult=true"));
        assert!(url.contains("language=fr-FR"));
    }

    #[test]
    fn movie_and_poster_urls() {
        let tmdb = client();
        assert_eq!(tmdb.movie_url(693134), "https://www.themoviedb.org/movie/693134");
        assert_eq!(
            tmdb.poster_url("/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg"),
            "https://image.tmdb.org/t/p/w500/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg"
        );
    }
}
