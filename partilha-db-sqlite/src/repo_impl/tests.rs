use super::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn new_user(db: &DbReadWrite, name: &str) -> Id {
    db.create_user(&NewUser {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()).parse().unwrap(),
        password: Password::from_hash("$2y$10$hash".to_string()),
        created_at: Timestamp::from_millis(1_000),
    })
    .unwrap()
}

fn new_media(db: &DbReadWrite, external_id: i64) -> Id {
    db.create_media(&NewMediaRecord {
        external_id,
        media_type: MediaType::Movie,
    })
    .unwrap()
}

#[test]
fn create_and_find_users() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let alice = new_user(&db, "Alice");
    let bob = new_user(&db, "Bob");
    assert_ne!(alice, bob);

    let email = "alice@example.com".parse().unwrap();
    let user = db.try_get_user_by_email(&email).unwrap().unwrap();
    assert_eq!(alice, user.id);
    assert_eq!("Alice", user.name);

    let users = db.get_users(&[bob, alice]).unwrap();
    assert_eq!(2, users.len());
    assert!(db.get_users(&[]).unwrap().is_empty());
    assert!(matches!(db.get_user(Id::new(99)), Err(repo::Error::NotFound)));
}

#[test]
fn reject_duplicate_email() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    new_user(&db, "Alice");
    let res = db.create_user(&NewUser {
        name: "Other".to_string(),
        email: "alice@example.com".parse().unwrap(),
        password: Password::from_hash("$2y$10$hash".to_string()),
        created_at: Timestamp::from_millis(2_000),
    });
    assert!(matches!(res, Err(repo::Error::AlreadyExists)));
}

#[test]
fn consume_refresh_token_only_once() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let user_id = new_user(&db, "Alice");
    let token = RefreshToken {
        token: "abc".to_string(),
        user_id,
        expires_at: Timestamp::from_millis(5_000),
    };
    db.create_refresh_token(&token).unwrap();
    assert_eq!(token, db.get_refresh_token("abc").unwrap());
    assert_eq!(token, db.consume_refresh_token("abc").unwrap());
    assert!(matches!(
        db.get_refresh_token("abc"),
        Err(repo::Error::NotFound)
    ));
    assert!(matches!(
        db.consume_refresh_token("abc"),
        Err(repo::Error::NotFound)
    ));
}

#[test]
fn delete_expired_refresh_tokens() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let user_id = new_user(&db, "Alice");
    for (token, expires_at) in [("old", 1_000), ("new", 9_000)] {
        db.create_refresh_token(&RefreshToken {
            token: token.to_string(),
            user_id,
            expires_at: Timestamp::from_millis(expires_at),
        })
        .unwrap();
    }
    let deleted = db
        .delete_expired_refresh_tokens(Timestamp::from_millis(5_000))
        .unwrap();
    assert_eq!(1, deleted);
    assert!(db.consume_refresh_token("new").is_ok());
}

#[test]
fn media_is_unique_per_external_id_and_type() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let id = new_media(&db, 550);
    let found = db.find_media(550, MediaType::Movie).unwrap().unwrap();
    assert_eq!(id, found.id);
    assert!(db.find_media(550, MediaType::Tv).unwrap().is_none());
    let res = db.create_media(&NewMediaRecord {
        external_id: 550,
        media_type: MediaType::Movie,
    });
    assert!(matches!(res, Err(repo::Error::AlreadyExists)));
    let tv = db
        .create_media(&NewMediaRecord {
            external_id: 550,
            media_type: MediaType::Tv,
        })
        .unwrap();
    assert_eq!(MediaType::Tv, db.get_media(tv).unwrap().media_type);
}

#[test]
fn soft_delete_comment_keeps_the_row() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let user_id = new_user(&db, "Alice");
    let media_id = new_media(&db, 1);
    let root = db
        .create_comment(&NewComment {
            user_id,
            media_id,
            parent_id: None,
            content: "root".to_string(),
            created_at: Timestamp::from_millis(1_000),
        })
        .unwrap();
    let reply = db
        .create_comment(&NewComment {
            user_id,
            media_id,
            parent_id: Some(root),
            content: "reply".to_string(),
            created_at: Timestamp::from_millis(2_000),
        })
        .unwrap();

    db.update_comment_content(reply, "edited", Timestamp::from_millis(3_000))
        .unwrap();
    db.soft_delete_comment(root, Timestamp::from_millis(4_000))
        .unwrap();

    let comments = db.load_comments_of_media(media_id).unwrap();
    assert_eq!(2, comments.len());
    let root = &comments[0];
    assert!(root.is_deleted());
    assert_eq!(None, root.user_id);
    assert!(root.content.is_empty());
    let reply = &comments[1];
    assert!(reply.is_edited());
    assert_eq!("edited", reply.content);

    // Deleted comments can neither be edited nor deleted again
    assert!(matches!(
        db.update_comment_content(root.id, "x", Timestamp::from_millis(5_000)),
        Err(repo::Error::NotFound)
    ));
    assert!(matches!(
        db.soft_delete_comment(root.id, Timestamp::from_millis(5_000)),
        Err(repo::Error::NotFound)
    ));
}

#[test]
fn one_rating_per_user_and_media() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let user_id = new_user(&db, "Alice");
    let media_id = new_media(&db, 1);
    let new_rating = NewRating {
        user_id,
        media_id,
        value: RatingValue::from(7),
        created_at: Timestamp::from_millis(1_000),
    };
    let id = db.create_rating(&new_rating).unwrap();
    assert!(matches!(
        db.create_rating(&new_rating),
        Err(repo::Error::AlreadyExists)
    ));
    db.update_rating_value(id, RatingValue::from(9)).unwrap();
    let rating = db.try_get_rating(user_id, media_id).unwrap().unwrap();
    assert_eq!(RatingValue::from(9), rating.value);
    assert_eq!(1, db.load_ratings_of_media(media_id).unwrap().len());
}

#[test]
fn friendship_in_both_directions() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let alice = new_user(&db, "Alice");
    let bob = new_user(&db, "Bob");
    let id = db
        .create_friendship(&NewFriendship {
            requester_id: alice,
            addressee_id: bob,
            created_at: Timestamp::from_millis(1_000),
        })
        .unwrap();
    let friendship = db.try_get_friendship_between(bob, alice).unwrap().unwrap();
    assert_eq!(id, friendship.id);
    assert_eq!(FriendshipStatus::Pending, friendship.status);

    // The reverse request hits the unique index of the user pair
    let res = db.create_friendship(&NewFriendship {
        requester_id: bob,
        addressee_id: alice,
        created_at: Timestamp::from_millis(2_000),
    });
    assert!(matches!(res, Err(repo::Error::AlreadyExists)));

    db.update_friendship_status(id, FriendshipStatus::Accepted)
        .unwrap();
    assert_eq!(
        1,
        db.load_friendships_of_user(bob, Some(FriendshipStatus::Accepted))
            .unwrap()
            .len()
    );
    assert!(db
        .load_friendships_of_user(alice, Some(FriendshipStatus::Pending))
        .unwrap()
        .is_empty());
    db.delete_friendship(id).unwrap();
    assert!(db.load_friendships_of_user(alice, None).unwrap().is_empty());
}

#[test]
fn notifications_newest_first() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let alice = new_user(&db, "Alice");
    let bob = new_user(&db, "Bob");
    let first = db
        .create_notification(&NewNotification {
            user_id: alice,
            actor_id: bob,
            kind: NotificationKind::FriendRequest,
            reference_id: None,
            created_at: Timestamp::from_millis(1_000),
        })
        .unwrap();
    let second = db
        .create_notification(&NewNotification {
            user_id: alice,
            actor_id: bob,
            kind: NotificationKind::FriendAccepted,
            reference_id: Some(Id::new(42)),
            created_at: Timestamp::from_millis(2_000),
        })
        .unwrap();
    db.mark_notification_read(first).unwrap();

    let all = db.load_notifications_of_user(alice, false).unwrap();
    assert_eq!(
        vec![second, first],
        all.iter().map(|n| n.id).collect::<Vec<_>>()
    );
    let unread = db.load_notifications_of_user(alice, true).unwrap();
    assert_eq!(1, unread.len());
    assert_eq!(Some(Id::new(42)), unread[0].reference_id);
    assert!(db.get_notification(first).unwrap().read);
}

#[test]
fn delete_watch_list_with_items() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let user_id = new_user(&db, "Alice");
    let media_id = new_media(&db, 1);
    let list_id = db
        .create_watch_list(&NewWatchList {
            user_id,
            name: "Weekend".to_string(),
            created_at: Timestamp::from_millis(1_000),
        })
        .unwrap();
    let item = WatchListItem {
        watch_list_id: list_id,
        media_id,
        added_at: Timestamp::from_millis(2_000),
    };
    db.add_watch_list_item(&item).unwrap();
    assert!(matches!(
        db.add_watch_list_item(&item),
        Err(repo::Error::AlreadyExists)
    ));
    assert_eq!(vec![item], db.load_watch_list_items(list_id).unwrap());
    assert!(matches!(
        db.remove_watch_list_item(list_id, Id::new(99)),
        Err(repo::Error::NotFound)
    ));

    db.delete_watch_list(list_id).unwrap();
    assert!(db.load_watch_lists_of_user(user_id).unwrap().is_empty());
    assert!(db.load_watch_list_items(list_id).unwrap().is_empty());
}

#[test]
fn query_batches_by_city_of_supplier() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let category_id = db.create_category("Fruits").unwrap();
    let recife = db
        .create_city(&NewCity {
            name: "Recife".to_string(),
            state: "PE".to_string(),
        })
        .unwrap();
    let natal = db
        .create_city(&NewCity {
            name: "Natal".to_string(),
            state: "RN".to_string(),
        })
        .unwrap();
    let mut supplier_ids = vec![];
    for (name, city_id) in [("market", recife), ("bakery", natal)] {
        supplier_ids.push(
            db.create_supplier(&NewSupplier {
                name: name.to_string(),
                email: format!("{name}@example.com").parse().unwrap(),
                phone: None,
                city_id,
            })
            .unwrap(),
        );
    }
    for (i, supplier_id) in supplier_ids.iter().enumerate() {
        db.create_batch(&NewBatch {
            supplier_id: *supplier_id,
            category_id,
            description: format!("batch {i}"),
            quantity: 10,
            created_at: Timestamp::from_millis(1_000 + i as i64),
            expires_at: None,
        })
        .unwrap();
    }

    let all = db.query_batches(&BatchQuery::default()).unwrap();
    assert_eq!(2, all.len());
    assert_eq!("batch 1", all[0].description);

    let in_recife = db
        .query_batches(&BatchQuery {
            city_id: Some(recife),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(1, in_recife.len());
    assert_eq!(supplier_ids[0], in_recife[0].supplier_id);

    let mut batch = in_recife[0].clone();
    let ngo_id = db
        .create_ngo(&NewNgo {
            name: "Food bank".to_string(),
            email: "bank@example.com".parse().unwrap(),
            phone: Some("+55 81 3333-4444".to_string()),
            city_id: recife,
        })
        .unwrap();
    batch.status = BatchStatus::Reserved;
    batch.ngo_id = Some(ngo_id);
    db.update_batch(&batch).unwrap();

    let reserved = db
        .query_batches(&BatchQuery {
            status: Some(BatchStatus::Reserved),
            ngo_id: Some(ngo_id),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(vec![batch.clone()], reserved);

    batch.status = BatchStatus::Available;
    batch.ngo_id = None;
    db.update_batch(&batch).unwrap();
    assert_eq!(None, db.get_batch(batch.id).unwrap().ngo_id);
}

#[test]
fn update_and_delete_missing_rows() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    assert!(matches!(
        db.update_category(&Category {
            id: Id::new(1),
            name: "x".to_string()
        }),
        Err(repo::Error::NotFound)
    ));
    assert!(matches!(
        db.delete_city(Id::new(1)),
        Err(repo::Error::NotFound)
    ));
    let id = db.create_category("Bread").unwrap();
    assert!(matches!(
        db.create_category("Bread"),
        Err(repo::Error::AlreadyExists)
    ));
    db.delete_category(id).unwrap();
    assert!(db.all_categories().unwrap().is_empty());
}

#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    foreign_keys: i32,
}

#[test]
fn enforce_foreign_keys_on_every_pooled_connection() {
    let connections = Connections::init(":memory:", 2).unwrap();
    let first = connections.shared().unwrap();
    let second = connections.shared().unwrap();
    for db in [&first, &second] {
        let pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result::<ForeignKeys>(&mut *db.conn.borrow_mut())
            .unwrap();
        assert_eq!(1, pragma.foreign_keys);
    }
}
