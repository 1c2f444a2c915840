//! Provider JSON -> normalized entities

use anyhow::{anyhow, Result};
use serde_json::Value;

use partilha_core::entities::{ExternalMedia, MediaDetails, MediaPage, MediaType};

fn non_empty_str(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

fn u32_field(json: &Value, key: &str) -> Option<u32> {
    json.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

fn f64_field(json: &Value, key: &str) -> f64 {
    json.get(key).and_then(Value::as_f64).unwrap_or_default()
}

/// Determine the type of a result item.
///
/// Items of mixed searches carry their own type, e.g.
/// `movie`, `tv` or `person`. Everything else falls back
/// to the type that has been requested.
fn media_type_of(json: &Value, requested: Option<MediaType>) -> Option<MediaType> {
    match json.get("media_type").and_then(Value::as_str) {
        Some(media_type) => media_type.parse().ok(),
        None => requested,
    }
}

/// Returns `None` for items that are neither movies nor shows.
pub fn external_media(json: &Value, requested: Option<MediaType>) -> Option<ExternalMedia> {
    let media_type = media_type_of(json, requested)?;
    let external_id = json.get("id").and_then(Value::as_i64)?;
    let (title_key, date_key) = match media_type {
        MediaType::Movie => ("title", "release_date"),
        MediaType::Tv => ("name", "first_air_date"),
    };
    let title = non_empty_str(json, title_key)
        .or_else(|| non_empty_str(json, "title"))
        .or_else(|| non_empty_str(json, "name"))
        .unwrap_or_default();
    Some(ExternalMedia {
        external_id,
        media_type,
        title,
        overview: non_empty_str(json, "overview").unwrap_or_default(),
        poster_path: non_empty_str(json, "poster_path"),
        release_date: non_empty_str(json, date_key),
        popularity: f64_field(json, "popularity"),
        vote_average: f64_field(json, "vote_average"),
    })
}

pub fn media_page(json: &Value, requested: Option<MediaType>) -> Result<MediaPage<ExternalMedia>> {
    let items = json
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("Missing results in metadata response"))?;
    let results: Vec<_> = items
        .iter()
        .filter_map(|item| {
            let media = external_media(item, requested);
            if media.is_none() {
                log::debug!("Skipping metadata result: {item}");
            }
            media
        })
        .collect();
    Ok(MediaPage {
        page: u32_field(json, "page").unwrap_or(1),
        total_pages: u32_field(json, "total_pages").unwrap_or(1),
        total_results: u32_field(json, "total_results").unwrap_or(results.len() as u32),
        results,
    })
}

pub fn media_details(json: &Value, media_type: MediaType) -> Result<MediaDetails> {
    let media = external_media(json, Some(media_type))
        .ok_or_else(|| anyhow!("Invalid {media_type} details in metadata response"))?;
    let genres = json
        .get("genres")
        .and_then(Value::as_array)
        .map(|genres| {
            genres
                .iter()
                .filter_map(|genre| non_empty_str(genre, "name"))
                .collect()
        })
        .unwrap_or_default();
    let runtime = u32_field(json, "runtime").or_else(|| {
        // Shows only provide the typical run time of an episode
        json.get("episode_run_time")
            .and_then(Value::as_array)
            .and_then(|times| times.first())
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    });
    Ok(MediaDetails {
        media,
        genres,
        runtime,
        number_of_seasons: u32_field(json, "number_of_seasons"),
        number_of_episodes: u32_field(json, "number_of_episodes"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_movie_search_result() {
        let json = json!({
            "page": 2,
            "total_pages": 7,
            "total_results": 130,
            "results": [{
                "id": 550,
                "title": "Fight Club",
                "overview": "An insomniac office worker...",
                "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
                "release_date": "1999-10-15",
                "popularity": 61.4,
                "vote_average": 8.4
            }]
        });
        let page = media_page(&json, Some(MediaType::Movie)).unwrap();
        assert_eq!(2, page.page);
        assert_eq!(7, page.total_pages);
        assert_eq!(130, page.total_results);
        let movie = &page.results[0];
        assert_eq!(550, movie.external_id);
        assert_eq!(MediaType::Movie, movie.media_type);
        assert_eq!("Fight Club", movie.title);
        assert_eq!(Some("1999-10-15"), movie.release_date.as_deref());
        assert_eq!(61.4, movie.popularity);
    }

    #[test]
    fn mixed_search_skips_people() {
        let json = json!({
            "results": [
                { "id": 1, "media_type": "person", "name": "Somebody" },
                { "id": 2, "media_type": "tv", "name": "A show", "first_air_date": "2008-01-20" },
                { "id": 3, "media_type": "movie", "title": "A movie", "release_date": "" }
            ]
        });
        let page = media_page(&json, None).unwrap();
        assert_eq!(2, page.results.len());
        let show = &page.results[0];
        assert_eq!(MediaType::Tv, show.media_type);
        assert_eq!("A show", show.title);
        assert_eq!(Some("2008-01-20"), show.release_date.as_deref());
        let movie = &page.results[1];
        assert_eq!(MediaType::Movie, movie.media_type);
        assert_eq!(None, movie.release_date);
        assert_eq!(1, page.page);
    }

    #[test]
    fn items_without_type_or_id_are_skipped() {
        let json = json!({
            "results": [
                { "id": 1, "title": "No type" },
                { "media_type": "movie", "title": "No id" }
            ]
        });
        assert!(media_page(&json, None).unwrap().results.is_empty());
    }

    #[test]
    fn reject_page_without_results() {
        assert!(media_page(&json!({ "status_message": "Invalid" }), None).is_err());
    }

    #[test]
    fn map_tv_details() {
        let json = json!({
            "id": 1396,
            "name": "Breaking Bad",
            "overview": "A chemistry teacher...",
            "first_air_date": "2008-01-20",
            "genres": [{ "id": 18, "name": "Drama" }, { "id": 80, "name": "Crime" }],
            "episode_run_time": [45, 47],
            "number_of_seasons": 5,
            "number_of_episodes": 62,
            "popularity": 300.5,
            "vote_average": 8.9
        });
        let details = media_details(&json, MediaType::Tv).unwrap();
        assert_eq!("Breaking Bad", details.media.title);
        assert_eq!(vec!["Drama", "Crime"], details.genres);
        assert_eq!(Some(45), details.runtime);
        assert_eq!(Some(5), details.number_of_seasons);
        assert_eq!(Some(62), details.number_of_episodes);
    }

    #[test]
    fn map_movie_details() {
        let json = json!({
            "id": 550,
            "title": "Fight Club",
            "runtime": 139,
            "genres": []
        });
        let details = media_details(&json, MediaType::Movie).unwrap();
        assert_eq!(Some(139), details.runtime);
        assert_eq!(None, details.number_of_seasons);
        assert!(details.genres.is_empty());
        assert!(details.media.overview.is_empty());
    }
}
