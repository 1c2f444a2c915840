use anyhow::Result as Fallible;

use partilha_entities::media::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSearch {
    pub text: String,
    // None searches movies and shows
    pub media_type: Option<MediaType>,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverFilter {
    pub media_type: MediaType,
    pub genre_id: Option<u32>,
    pub year: Option<u16>,
    pub page: u32,
}

/// Access to an external movie and TV show metadata provider.
pub trait MetadataGateway {
    fn search(&self, search: &MediaSearch) -> Fallible<MediaPage<ExternalMedia>>;
    fn discover(&self, filter: &DiscoverFilter) -> Fallible<MediaPage<ExternalMedia>>;

    /// Returns `None` if the provider does not know the item.
    fn get_details(&self, media_type: MediaType, external_id: i64)
        -> Fallible<Option<MediaDetails>>;
}
