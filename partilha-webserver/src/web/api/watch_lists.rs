use super::*;

#[get("/watch-lists")]
pub fn get_watch_lists(db: sqlite::Connections, account: Account) -> Result<Vec<json::WatchList>> {
    let lists = usecases::list_watch_lists(&db.shared()?, account.id())?;
    Ok(Json(lists.into_iter().map(Into::into).collect()))
}

#[post("/watch-lists", format = "application/json", data = "<watch_list>")]
pub fn post_watch_list(
    db: sqlite::Connections,
    account: Account,
    watch_list: JsonResult<json::NewWatchList>,
) -> Result<json::WatchList> {
    let json::NewWatchList { name } = watch_list?.into_inner();
    let watch_list = usecases::create_watch_list(&db.exclusive()?, account.id(), &name)?;
    Ok(Json(watch_list.into()))
}

#[get("/watch-lists/<id>")]
pub fn get_watch_list(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::WatchListDetails> {
    let view = usecases::get_watch_list(&db.shared()?, account.id(), id.into())?;
    Ok(Json(json::watch_list_details_from_view(view)))
}

#[delete("/watch-lists/<id>")]
pub fn delete_watch_list(db: sqlite::Connections, account: Account, id: i64) -> StatusResult {
    usecases::delete_watch_list(&db.exclusive()?, account.id(), id.into())?;
    Ok(Status::NoContent)
}

#[post("/watch-lists/<id>/items", format = "application/json", data = "<item>")]
pub fn post_watch_list_item(
    db: sqlite::Connections,
    account: Account,
    id: i64,
    item: JsonResult<json::AddToWatchList>,
) -> StatusResult {
    let media_id = from_json::try_watch_list_media(item?.into_inner())?;
    usecases::add_to_watch_list(&db.exclusive()?, account.id(), id.into(), media_id)?;
    Ok(Status::NoContent)
}

#[delete("/watch-lists/<id>/items/<media_id>")]
pub fn delete_watch_list_item(
    db: sqlite::Connections,
    account: Account,
    id: i64,
    media_id: i64,
) -> StatusResult {
    usecases::remove_from_watch_list(&db.exclusive()?, account.id(), id.into(), media_id.into())?;
    Ok(Status::NoContent)
}
