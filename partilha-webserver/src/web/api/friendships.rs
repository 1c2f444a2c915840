use super::*;

#[get("/friendships")]
pub fn get_friends(db: sqlite::Connections, account: Account) -> Result<Vec<json::UserProfile>> {
    let friends = usecases::list_friends(&db.shared()?, account.id())?;
    Ok(Json(friends.into_iter().map(Into::into).collect()))
}

#[get("/friendships/pending")]
pub fn get_pending_friendships(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Friendship>> {
    let pending = usecases::list_pending_friendships(&db.shared()?, account.id())?;
    Ok(Json(pending.into_iter().map(Into::into).collect()))
}

#[post("/friendships", format = "application/json", data = "<request>")]
pub fn post_friendship(
    db: sqlite::Connections,
    account: Account,
    request: JsonResult<json::FriendRequest>,
) -> Result<json::Friendship> {
    let addressee_id = from_json::try_addressee(request?.into_inner())?;
    let friendship = usecases::request_friendship(&db.exclusive()?, account.id(), addressee_id)?;
    Ok(Json(friendship.into()))
}

#[post("/friendships/<id>/accept")]
pub fn post_accept_friendship(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::Friendship> {
    let friendship = usecases::accept_friendship(&db.exclusive()?, account.id(), id.into())?;
    Ok(Json(friendship.into()))
}

#[delete("/friendships/<id>")]
pub fn delete_friendship(db: sqlite::Connections, account: Account, id: i64) -> StatusResult {
    usecases::remove_friendship(&db.exclusive()?, account.id(), id.into())?;
    Ok(Status::NoContent)
}
