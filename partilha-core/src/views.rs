//! Read models that combine entities of different repositories.

use std::collections::HashMap;

use crate::entities::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub notification: Notification,
    // None if the actor has been deleted in the meantime
    pub actor_name: Option<String>,
}

pub fn notification_views(
    notifications: Vec<Notification>,
    actors: &[User],
) -> Vec<NotificationView> {
    let names: HashMap<_, _> = actors.iter().map(|u| (u.id, u.name.as_str())).collect();
    notifications
        .into_iter()
        .map(|notification| {
            let actor_name = names
                .get(&notification.actor_id)
                .map(|name| (*name).to_owned());
            NotificationView {
                notification,
                actor_name,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchListEntry {
    pub media: MediaRecord,
    pub added_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchListView {
    pub watch_list: WatchList,
    pub entries: Vec<WatchListEntry>,
}

/// Items without a matching media record are skipped.
pub fn watch_list_view(
    watch_list: WatchList,
    items: Vec<WatchListItem>,
    media: &[MediaRecord],
) -> WatchListView {
    let media_by_id: HashMap<_, _> = media.iter().map(|m| (m.id, m)).collect();
    let entries = items
        .into_iter()
        .filter_map(|item| {
            media_by_id.get(&item.media_id).map(|m| WatchListEntry {
                media: (*m).clone(),
                added_at: item.added_at,
            })
        })
        .collect();
    WatchListView {
        watch_list,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User {
            id: Id::new(id),
            name: name.into(),
            email: EmailAddress::new_unchecked(format!("{name}@example.com")),
            password: Password::from_hash(String::new()),
            created_at: Timestamp::from_millis(0),
        }
    }

    fn notification(id: i64, actor_id: i64) -> Notification {
        Notification {
            id: Id::new(id),
            user_id: Id::new(1),
            actor_id: Id::new(actor_id),
            kind: NotificationKind::FriendRequest,
            reference_id: None,
            read: false,
            created_at: Timestamp::from_millis(id),
        }
    }

    #[test]
    fn attach_actor_names() {
        let views = notification_views(
            vec![notification(1, 2), notification(2, 3), notification(3, 2)],
            &[user(2, "bob")],
        );
        let names: Vec<_> = views.iter().map(|v| v.actor_name.as_deref()).collect();
        assert_eq!(vec![Some("bob"), None, Some("bob")], names);
    }

    #[test]
    fn skip_watch_list_items_without_media() {
        let watch_list = WatchList {
            id: Id::new(1),
            user_id: Id::new(1),
            name: "Weekend".into(),
            created_at: Timestamp::from_millis(0),
        };
        let item = |media_id| WatchListItem {
            watch_list_id: Id::new(1),
            media_id: Id::new(media_id),
            added_at: Timestamp::from_millis(media_id),
        };
        let media = [MediaRecord {
            id: Id::new(7),
            external_id: 603,
            media_type: MediaType::Movie,
        }];
        let view = watch_list_view(watch_list, vec![item(7), item(8)], &media);
        assert_eq!(1, view.entries.len());
        assert_eq!(603, view.entries[0].media.external_id);
    }
}
