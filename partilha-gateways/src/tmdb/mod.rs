use std::time::Duration;

use anyhow::Result;
use reqwest::{blocking::Client, StatusCode};
use serde_json::Value;

use partilha_core::{
    entities::{ExternalMedia, MediaDetails, MediaPage, MediaType},
    gateways::metadata::{DiscoverFilter, MediaSearch, MetadataGateway},
};

pub mod mapping;

/// A client of a TMDB compatible metadata API.
#[derive(Debug, Clone)]
pub struct Tmdb {
    pub api_base_url: String,
    pub api_key: String,
    pub language: String,
    pub timeout: Duration,
}

#[derive(Debug, serde::Deserialize, thiserror::Error)]
#[error("{status_message}")]
struct JsonError {
    pub status_message: String,
}

fn path_segment(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Movie => "movie",
        MediaType::Tv => "tv",
    }
}

impl Tmdb {
    // The blocking client must not be created or dropped
    // within an async context.
    fn client(&self) -> Result<Client> {
        Ok(Client::builder().timeout(self.timeout).build()?)
    }

    fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Option<Value>> {
        let Self {
            api_base_url,
            api_key,
            language,
            ..
        } = self;
        let url = format!("{}/{path}", api_base_url.trim_end_matches('/'));
        log::debug!("Requesting metadata from {url}");
        let response = self
            .client()?
            .get(&url)
            .query(&[("api_key", api_key.as_str()), ("language", language.as_str())])
            .query(params)
            .send()?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json()?)),
            status => {
                let err = response
                    .json::<JsonError>()
                    .map(anyhow::Error::from)
                    .unwrap_or_else(|_| anyhow::anyhow!("Unexpected response status {status}"));
                log::warn!("Metadata request to {url} failed: {err}");
                Err(err)
            }
        }
    }

    fn get_page(
        &self,
        path: &str,
        params: &[(&str, String)],
        media_type: Option<MediaType>,
    ) -> Result<MediaPage<ExternalMedia>> {
        let json = self
            .get_json(path, params)?
            .ok_or_else(|| anyhow::anyhow!("Metadata resource '{path}' not found"))?;
        mapping::media_page(&json, media_type)
    }
}

impl MetadataGateway for Tmdb {
    fn search(&self, search: &MediaSearch) -> Result<MediaPage<ExternalMedia>> {
        let path = match search.media_type {
            Some(media_type) => format!("search/{}", path_segment(media_type)),
            None => "search/multi".to_string(),
        };
        let params = [
            ("query", search.text.clone()),
            ("page", search.page.to_string()),
        ];
        self.get_page(&path, &params, search.media_type)
    }

    fn discover(&self, filter: &DiscoverFilter) -> Result<MediaPage<ExternalMedia>> {
        let DiscoverFilter {
            media_type,
            genre_id,
            year,
            page,
        } = filter;
        let mut params = vec![
            ("page", page.to_string()),
            ("sort_by", "popularity.desc".to_string()),
        ];
        if let Some(genre_id) = genre_id {
            params.push(("with_genres", genre_id.to_string()));
        }
        if let Some(year) = year {
            let key = match media_type {
                MediaType::Movie => "primary_release_year",
                MediaType::Tv => "first_air_date_year",
            };
            params.push((key, year.to_string()));
        }
        let path = format!("discover/{}", path_segment(*media_type));
        self.get_page(&path, &params, Some(*media_type))
    }

    fn get_details(&self, media_type: MediaType, external_id: i64) -> Result<Option<MediaDetails>> {
        let path = format!("{}/{external_id}", path_segment(media_type));
        self.get_json(&path, &[])?
            .map(|json| mapping::media_details(&json, media_type))
            .transpose()
    }
}
