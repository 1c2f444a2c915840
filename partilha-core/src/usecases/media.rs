use super::prelude::*;
use crate::{
    gateways::metadata::{DiscoverFilter, MediaSearch, MetadataGateway},
    util::validate,
};

/// Attaches internal ids to external media items.
///
/// Items that are seen for the first time get a new record.
/// The items are processed one after another and the result
/// is sorted by popularity in descending order.
pub fn resolve_external_media<R>(repo: &R, items: Vec<ExternalMedia>) -> Result<Vec<ResolvedMedia>>
where
    R: MediaRepo,
{
    let mut resolved = Vec::with_capacity(items.len());
    for media in items {
        let id = match repo.find_media(media.external_id, media.media_type)? {
            Some(record) => record.id,
            None => {
                let new_record = NewMediaRecord {
                    external_id: media.external_id,
                    media_type: media.media_type,
                };
                log::debug!(
                    "Creating media record: external_id = {}, type = {}",
                    new_record.external_id,
                    new_record.media_type
                );
                repo.create_media(&new_record)?
            }
        };
        resolved.push(ResolvedMedia { id, media });
    }
    resolved.sort_by(|a, b| b.media.popularity.total_cmp(&a.media.popularity));
    Ok(resolved)
}

/// Queries the metadata provider without touching the database.
pub fn fetch_search_page<G>(gateway: &G, search: &MediaSearch) -> Result<MediaPage<ExternalMedia>>
where
    G: MetadataGateway + ?Sized,
{
    if validate::is_blank(&search.text) {
        return Err(Error::EmptySearchText);
    }
    if search.page == 0 {
        return Err(Error::InvalidParameter("page"));
    }
    gateway.search(search).map_err(Error::Metadata)
}

pub fn fetch_discover_page<G>(
    gateway: &G,
    filter: &DiscoverFilter,
) -> Result<MediaPage<ExternalMedia>>
where
    G: MetadataGateway + ?Sized,
{
    if filter.page == 0 {
        return Err(Error::InvalidParameter("page"));
    }
    gateway.discover(filter).map_err(Error::Metadata)
}

pub fn fetch_media_details<G>(
    gateway: &G,
    media_type: MediaType,
    external_id: i64,
) -> Result<MediaDetails>
where
    G: MetadataGateway + ?Sized,
{
    gateway
        .get_details(media_type, external_id)
        .map_err(Error::Metadata)?
        .ok_or(Error::MediaNotFound)
}

pub fn resolve_media_page<R: MediaRepo>(
    repo: &R,
    mut page: MediaPage<ExternalMedia>,
) -> Result<MediaPage<ResolvedMedia>> {
    let items = std::mem::take(&mut page.results);
    let resolved = resolve_external_media(repo, items)?;
    Ok(page.map_results(resolved))
}

pub fn search_media<R, G>(
    repo: &R,
    gateway: &G,
    search: &MediaSearch,
) -> Result<MediaPage<ResolvedMedia>>
where
    R: MediaRepo,
    G: MetadataGateway + ?Sized,
{
    let page = fetch_search_page(gateway, search)?;
    resolve_media_page(repo, page)
}

pub fn discover_media<R, G>(
    repo: &R,
    gateway: &G,
    filter: &DiscoverFilter,
) -> Result<MediaPage<ResolvedMedia>>
where
    R: MediaRepo,
    G: MetadataGateway + ?Sized,
{
    let page = fetch_discover_page(gateway, filter)?;
    resolve_media_page(repo, page)
}

#[derive(Debug, Clone)]
pub struct MediaDetailsWithRating {
    pub id: Id,
    pub details: MediaDetails,
    pub rating: RatingSummary,
}

/// Attaches the internal id and the rating summary.
pub fn resolve_media_details<R>(repo: &R, details: MediaDetails) -> Result<MediaDetailsWithRating>
where
    R: MediaRepo + RatingRepo,
{
    let id = resolve_external_media(repo, vec![details.media.clone()])?
        .into_iter()
        .next()
        .map(|resolved| resolved.id)
        .ok_or(Error::MediaNotFound)?;
    let rating = repo.load_ratings_of_media(id)?.iter().collect();
    Ok(MediaDetailsWithRating {
        id,
        details,
        rating,
    })
}

pub fn get_media_details<R, G>(
    repo: &R,
    gateway: &G,
    media_type: MediaType,
    external_id: i64,
) -> Result<MediaDetailsWithRating>
where
    R: MediaRepo + RatingRepo,
    G: MetadataGateway + ?Sized,
{
    let details = fetch_media_details(gateway, media_type, external_id)?;
    resolve_media_details(repo, details)
}

/// Loads an internal media record by its id.
pub fn get_media_record<R: MediaRepo>(repo: &R, id: Id) -> Result<MediaRecord> {
    repo.get_media(id).map_not_found(Error::MediaNotFound)
}
