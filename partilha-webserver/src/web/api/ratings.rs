use super::*;

#[get("/media/<media_id>/ratings")]
pub fn get_rating_summary(db: sqlite::Connections, media_id: i64) -> Result<json::RatingSummary> {
    let summary = usecases::rating_summary(&db.shared()?, media_id.into())?;
    Ok(Json(summary.into()))
}

#[post("/media/<media_id>/ratings", format = "application/json", data = "<rating>")]
pub fn post_rating(
    db: sqlite::Connections,
    account: Account,
    media_id: i64,
    rating: JsonResult<json::RateMedia>,
) -> Result<json::Rating> {
    let value = from_json::rating_value(rating?.into_inner())?;
    let rating = usecases::rate_media(&db.exclusive()?, account.id(), media_id.into(), value)?;
    Ok(Json(rating.into()))
}

#[put("/media/<media_id>/ratings", format = "application/json", data = "<rating>")]
pub fn put_rating(
    db: sqlite::Connections,
    account: Account,
    media_id: i64,
    rating: JsonResult<json::RateMedia>,
) -> Result<json::Rating> {
    let value = from_json::rating_value(rating?.into_inner())?;
    let rating = usecases::update_rating(&db.exclusive()?, account.id(), media_id.into(), value)?;
    Ok(Json(rating.into()))
}
