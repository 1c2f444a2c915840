use super::*;

#[get("/media/<media_id>/comments")]
pub fn get_comments(db: sqlite::Connections, media_id: i64) -> Result<Vec<json::Comment>> {
    let tree = usecases::list_comments(&db.shared()?, media_id.into())?;
    Ok(Json(tree.into_iter().map(json::comment_from_node).collect()))
}

#[post("/media/<media_id>/comments", format = "application/json", data = "<comment>")]
pub fn post_comment(
    db: sqlite::Connections,
    account: Account,
    media_id: i64,
    comment: JsonResult<json::NewComment>,
) -> Result<json::Comment> {
    let json::NewComment { parent_id, content } = comment?.into_inner();
    let request = usecases::NewCommentRequest {
        media_id: media_id.into(),
        parent_id: parent_id.map(Into::into),
        content,
    };
    let comment = usecases::create_comment(&db.exclusive()?, account.id(), request)?;
    Ok(Json(comment.into()))
}

#[put("/comments/<id>", format = "application/json", data = "<comment>")]
pub fn put_comment(
    db: sqlite::Connections,
    account: Account,
    id: i64,
    comment: JsonResult<json::UpdateComment>,
) -> Result<json::Comment> {
    let json::UpdateComment { content } = comment?.into_inner();
    let comment = usecases::update_comment(&db.exclusive()?, account.id(), id.into(), &content)?;
    Ok(Json(comment.into()))
}

#[delete("/comments/<id>")]
pub fn delete_comment(db: sqlite::Connections, account: Account, id: i64) -> StatusResult {
    usecases::delete_comment(&db.exclusive()?, account.id(), id.into())?;
    Ok(Status::NoContent)
}
