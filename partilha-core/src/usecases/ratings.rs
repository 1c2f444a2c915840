use super::prelude::*;

fn rating_value(value: u8) -> Result<RatingValue> {
    let value = RatingValue::from(value);
    if !value.is_valid() {
        return Err(Error::RatingValue);
    }
    Ok(value)
}

pub fn rate_media<R>(repo: &R, user_id: Id, media_id: Id, value: u8) -> Result<Rating>
where
    R: MediaRepo + RatingRepo,
{
    let value = rating_value(value)?;
    repo.get_media(media_id)
        .map_not_found(Error::MediaNotFound)?;
    if repo.try_get_rating(user_id, media_id)?.is_some() {
        return Err(Error::DuplicatedRating);
    }
    let new_rating = NewRating {
        user_id,
        media_id,
        value,
        created_at: Timestamp::now(),
    };
    repo.create_rating(&new_rating)
        .map_already_exists(Error::DuplicatedRating)?;
    repo.try_get_rating(user_id, media_id)?
        .ok_or(Error::RatingNotFound)
}

pub fn update_rating<R: RatingRepo>(
    repo: &R,
    user_id: Id,
    media_id: Id,
    value: u8,
) -> Result<Rating> {
    let value = rating_value(value)?;
    let mut rating = repo
        .try_get_rating(user_id, media_id)?
        .ok_or(Error::RatingNotFound)?;
    repo.update_rating_value(rating.id, value)?;
    rating.value = value;
    Ok(rating)
}

pub fn rating_summary<R>(repo: &R, media_id: Id) -> Result<RatingSummary>
where
    R: MediaRepo + RatingRepo,
{
    repo.get_media(media_id)
        .map_not_found(Error::MediaNotFound)?;
    let ratings = repo.load_ratings_of_media(media_id)?;
    Ok(ratings.iter().collect())
}
