use super::prelude::*;
use crate::views::{notification_views, NotificationView};

pub fn list_notifications<R>(
    repo: &R,
    user_id: Id,
    unread_only: bool,
) -> Result<Vec<NotificationView>>
where
    R: UserRepo + NotificationRepo,
{
    let notifications = repo.load_notifications_of_user(user_id, unread_only)?;
    let mut actor_ids: Vec<_> = notifications.iter().map(|n| n.actor_id).collect();
    actor_ids.sort_unstable();
    actor_ids.dedup();
    let actors = repo.get_users(&actor_ids)?;
    Ok(notification_views(notifications, &actors))
}

pub fn mark_notification_read<R: NotificationRepo>(repo: &R, user_id: Id, id: Id) -> Result<()> {
    let notification = repo
        .get_notification(id)
        .map_not_found(Error::NotificationNotFound)?;
    if notification.user_id != user_id {
        return Err(Error::NotificationNotOwned);
    }
    if !notification.read {
        repo.mark_notification_read(id)?;
    }
    Ok(())
}
