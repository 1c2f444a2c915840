use super::prelude::*;
use crate::{
    util::validate,
    views::{watch_list_view, WatchListView},
};

pub fn create_watch_list<R: WatchListRepo>(repo: &R, user_id: Id, name: &str) -> Result<WatchList> {
    let name = name.trim();
    if validate::is_blank(name) {
        return Err(Error::EmptyName);
    }
    let id = repo.create_watch_list(&NewWatchList {
        user_id,
        name: name.to_owned(),
        created_at: Timestamp::now(),
    })?;
    Ok(repo.get_watch_list(id)?)
}

pub fn list_watch_lists<R: WatchListRepo>(repo: &R, user_id: Id) -> Result<Vec<WatchList>> {
    Ok(repo.load_watch_lists_of_user(user_id)?)
}

fn load_own_watch_list<R: WatchListRepo>(repo: &R, user_id: Id, id: Id) -> Result<WatchList> {
    let watch_list = repo
        .get_watch_list(id)
        .map_not_found(Error::WatchListNotFound)?;
    if !watch_list.is_owned_by(user_id) {
        return Err(Error::WatchListNotOwned);
    }
    Ok(watch_list)
}

pub fn get_watch_list<R>(repo: &R, user_id: Id, id: Id) -> Result<WatchListView>
where
    R: WatchListRepo + MediaRepo,
{
    let watch_list = load_own_watch_list(repo, user_id, id)?;
    let items = repo.load_watch_list_items(id)?;
    let media = items
        .iter()
        .map(|item| repo.get_media(item.media_id))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(watch_list_view(watch_list, items, &media))
}

pub fn add_to_watch_list<R>(repo: &R, user_id: Id, id: Id, media_id: Id) -> Result<()>
where
    R: WatchListRepo + MediaRepo,
{
    load_own_watch_list(repo, user_id, id)?;
    repo.get_media(media_id)
        .map_not_found(Error::MediaNotFound)?;
    let item = WatchListItem {
        watch_list_id: id,
        media_id,
        added_at: Timestamp::now(),
    };
    repo.add_watch_list_item(&item)
        .map_already_exists(Error::MediaAlreadyInWatchList)?;
    Ok(())
}

pub fn remove_from_watch_list<R: WatchListRepo>(
    repo: &R,
    user_id: Id,
    id: Id,
    media_id: Id,
) -> Result<()> {
    load_own_watch_list(repo, user_id, id)?;
    repo.remove_watch_list_item(id, media_id)
        .map_not_found(Error::MediaNotFound)?;
    Ok(())
}

pub fn delete_watch_list<R: WatchListRepo>(repo: &R, user_id: Id, id: Id) -> Result<()> {
    load_own_watch_list(repo, user_id, id)?;
    log::debug!("Deleting watch list {id}");
    repo.delete_watch_list(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn create_and_fill_watch_list() {
        let db = MockDb::default();
        let alice = db.add_user("Alice");
        let media_a = db.add_media(603);
        let media_b = db.add_media(604);
        let list = create_watch_list(&db, alice, " Weekend ").unwrap();
        assert_eq!("Weekend", list.name);
        add_to_watch_list(&db, alice, list.id, media_a).unwrap();
        add_to_watch_list(&db, alice, list.id, media_b).unwrap();
        assert!(matches!(
            add_to_watch_list(&db, alice, list.id, media_a),
            Err(Error::MediaAlreadyInWatchList)
        ));
        let view = get_watch_list(&db, alice, list.id).unwrap();
        assert_eq!(
            vec![603, 604],
            view.entries
                .iter()
                .map(|e| e.media.external_id)
                .collect::<Vec<_>>()
        );
        remove_from_watch_list(&db, alice, list.id, media_a).unwrap();
        assert!(matches!(
            remove_from_watch_list(&db, alice, list.id, media_a),
            Err(Error::MediaNotFound)
        ));
        assert_eq!(1, get_watch_list(&db, alice, list.id).unwrap().entries.len());
    }

    #[test]
    fn reject_blank_name() {
        let db = MockDb::default();
        let alice = db.add_user("Alice");
        assert!(matches!(
            create_watch_list(&db, alice, ""),
            Err(Error::EmptyName)
        ));
    }

    #[test]
    fn protect_foreign_watch_lists() {
        let db = MockDb::default();
        let alice = db.add_user("Alice");
        let bob = db.add_user("Bob");
        let media_id = db.add_media(603);
        let list = create_watch_list(&db, alice, "Mine").unwrap();
        assert!(matches!(
            get_watch_list(&db, bob, list.id),
            Err(Error::WatchListNotOwned)
        ));
        assert!(matches!(
            add_to_watch_list(&db, bob, list.id, media_id),
            Err(Error::WatchListNotOwned)
        ));
        assert!(matches!(
            delete_watch_list(&db, bob, list.id),
            Err(Error::WatchListNotOwned)
        ));
        assert!(list_watch_lists(&db, bob).unwrap().is_empty());
        delete_watch_list(&db, alice, list.id).unwrap();
        assert!(matches!(
            get_watch_list(&db, alice, list.id),
            Err(Error::WatchListNotFound)
        ));
    }

    #[test]
    fn add_unknown_media() {
        let db = MockDb::default();
        let alice = db.add_user("Alice");
        let list = create_watch_list(&db, alice, "Mine").unwrap();
        assert!(matches!(
            add_to_watch_list(&db, alice, list.id, Id::new(42)),
            Err(Error::MediaNotFound)
        ));
    }
}
