use super::*;

#[get("/notifications?<unread>")]
pub fn get_notifications(
    db: sqlite::Connections,
    account: Account,
    unread: Option<&str>,
) -> Result<Vec<json::Notification>> {
    let unread_only = validate::parse_bool_or(unread, false);
    let notifications = usecases::list_notifications(&db.shared()?, account.id(), unread_only)?;
    Ok(Json(
        notifications
            .into_iter()
            .map(json::notification_from_view)
            .collect(),
    ))
}

#[post("/notifications/<id>/read")]
pub fn post_notification_read(db: sqlite::Connections, account: Account, id: i64) -> StatusResult {
    usecases::mark_notification_read(&db.exclusive()?, account.id(), id.into())?;
    Ok(Status::NoContent)
}
