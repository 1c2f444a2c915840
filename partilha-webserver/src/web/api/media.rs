use anyhow::anyhow;
use rocket::tokio::task;

use super::*;
use crate::core::gateways::metadata::{DiscoverFilter, MediaSearch};

const DEFAULT_PAGE: u32 = 1;

// The metadata provider is accessed through a blocking client
async fn spawn_blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow!("Blocking task failed: {err}")))?
}

fn media_type_param(value: &str) -> result::Result<MediaType, AppError> {
    value
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|_| AppError::InvalidParameter("media_type"))
}

fn optional_media_type_param(value: Option<&str>) -> result::Result<Option<MediaType>, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(media_type_param)
        .transpose()
}

#[get("/media/search?<query>&<media_type>&<page>")]
pub async fn get_search(
    db: sqlite::Connections,
    metadata: Metadata,
    query: Option<&str>,
    media_type: Option<&str>,
    page: Option<u32>,
) -> Result<json::MediaPage> {
    let search = MediaSearch {
        text: query.unwrap_or_default().to_owned(),
        media_type: optional_media_type_param(media_type)?,
        page: page.unwrap_or(DEFAULT_PAGE),
    };
    let page = spawn_blocking(move || {
        let page = usecases::fetch_search_page(&*metadata, &search)?;
        Ok(usecases::resolve_media_page(&db.exclusive()?, page)?)
    })
    .await?;
    Ok(Json(page.into()))
}

#[get("/media/discover?<media_type>&<genre>&<year>&<page>")]
pub async fn get_discover(
    db: sqlite::Connections,
    metadata: Metadata,
    media_type: Option<&str>,
    genre: Option<u32>,
    year: Option<u16>,
    page: Option<u32>,
) -> Result<json::MediaPage> {
    let filter = DiscoverFilter {
        media_type: optional_media_type_param(media_type)?.unwrap_or(MediaType::Movie),
        genre_id: genre,
        year,
        page: page.unwrap_or(DEFAULT_PAGE),
    };
    let page = spawn_blocking(move || {
        let page = usecases::fetch_discover_page(&*metadata, &filter)?;
        Ok(usecases::resolve_media_page(&db.exclusive()?, page)?)
    })
    .await?;
    Ok(Json(page.into()))
}

// Ranked behind the routes for comments and ratings of a media record
#[get("/media/<media_type>/<external_id>", rank = 3)]
pub async fn get_details(
    db: sqlite::Connections,
    metadata: Metadata,
    media_type: &str,
    external_id: i64,
) -> Result<json::MediaDetails> {
    let media_type = media_type_param(media_type)?;
    let details = spawn_blocking(move || {
        let details = usecases::fetch_media_details(&*metadata, media_type, external_id)?;
        Ok(usecases::resolve_media_details(&db.exclusive()?, details)?)
    })
    .await?;
    Ok(Json(json::media_details_from(details)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_media_types() {
        assert_eq!(MediaType::Movie, media_type_param("movie").unwrap());
        assert_eq!(MediaType::Tv, media_type_param(" TV ").unwrap());
        assert!(matches!(
            media_type_param("person"),
            Err(AppError::InvalidParameter("media_type"))
        ));
        assert_eq!(None, optional_media_type_param(Some("")).unwrap());
        assert_eq!(None, optional_media_type_param(None).unwrap());
    }
}
