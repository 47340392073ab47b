use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// A movie as returned by the catalog API.
///
/// Fields beyond `id` and `title` are frequently missing or empty in list
/// responses, so everything else defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

impl Movie {
    /// Release year, if the release date parses as YYYY-MM-DD.
    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_parses_full_response() {
        let body = r#"{
            "page": 1,
            "results": [{
                "id": 693134,
                "title": "Dune: Part Two",
                "poster_path": "/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg",
                "overview": "Follow the mythic journey of Paul Atreides.",
                "release_date": "2024-02-27",
                "vote_average": 8.3,
                "vote_count": 4561,
                "original_language": "en"
            }],
            "total_pages": 5,
            "total_results": 100
        }"#;

        let page: MoviePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_pages, 5);

        let movie = &page.results[0];
        assert_eq!(movie.id, 693134);
        assert_eq!(movie.title, "Dune: Part Two");
        assert_eq!(movie.release_year(), Some(2024));
        assert_eq!(movie.tagline, None);
    }

    #[test]
    fn page_defaults_missing_fields() {
        let page: MoviePage = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn movie_defaults_missing_fields() {
        let movie: Movie = serde_json::from_str(r#"{"id": 1, "title": "Dune"}"#).unwrap();
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.overview, "");
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn release_year_rejects_garbage() {
        let movie = Movie {
            release_date: "soon".to_string(),
            ..Movie::default()
        };
        assert_eq!(movie.release_year(), None);

        let movie = Movie {
            release_date: String::new(),
            ..Movie::default()
        };
        assert_eq!(movie.release_year(), None);
    }
}
