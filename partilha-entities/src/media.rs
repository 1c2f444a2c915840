use strum::{AsRefStr, Display, EnumString};

use crate::id::Id;

/// The kinds of media that are offered by the metadata provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

/// Maps an external media item onto a stable internal id.
///
/// Records are created lazily when an item of the metadata provider
/// is seen for the first time. The pair `(external_id, media_type)`
/// is unique.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub id          : Id,
    pub external_id : i64,
    pub media_type  : MediaType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMediaRecord {
    pub external_id: i64,
    pub media_type: MediaType,
}

/// A media item as delivered by the metadata provider,
/// normalized for movies and shows.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalMedia {
    pub external_id  : i64,
    pub media_type   : MediaType,
    pub title        : String,
    pub overview     : String,
    pub poster_path  : Option<String>,
    pub release_date : Option<String>,
    pub popularity   : f64,
    pub vote_average : f64,
}

/// An external media item together with its internal id.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMedia {
    pub id: Id,
    pub media: ExternalMedia,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDetails {
    pub media              : ExternalMedia,
    pub genres             : Vec<String>,
    // Only movies
    pub runtime            : Option<u32>,
    // Only shows
    pub number_of_seasons  : Option<u32>,
    pub number_of_episodes : Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaPage<T> {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub results: Vec<T>,
}

impl<T> MediaPage<T> {
    pub fn map_results<U>(self, results: Vec<U>) -> MediaPage<U> {
        let Self {
            page,
            total_pages,
            total_results,
            ..
        } = self;
        MediaPage {
            page,
            total_pages,
            total_results,
            results,
        }
    }
}
