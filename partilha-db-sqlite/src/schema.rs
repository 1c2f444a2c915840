///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        password -> Text,
        created_at -> BigInt,
    }
}

table! {
    refresh_tokens (token) {
        token -> Text,
        user_id -> BigInt,
        expires_at -> BigInt,
    }
}

joinable!(refresh_tokens -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Media
///////////////////////////////////////////////////////////////////////

table! {
    media (id) {
        id -> BigInt,
        external_id -> BigInt,
        media_type -> Text,
    }
}

table! {
    comments (id) {
        id -> BigInt,
        // NULL after the comment has been deleted
        user_id -> Nullable<BigInt>,
        media_id -> BigInt,
        parent_id -> Nullable<BigInt>,
        content -> Text,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
        deleted_at -> Nullable<BigInt>,
    }
}

joinable!(comments -> media (media_id));

table! {
    ratings (id) {
        id -> BigInt,
        user_id -> BigInt,
        media_id -> BigInt,
        value -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(ratings -> users (user_id));
joinable!(ratings -> media (media_id));

///////////////////////////////////////////////////////////////////////
// Social
///////////////////////////////////////////////////////////////////////

table! {
    friendships (id) {
        id -> BigInt,
        requester_id -> BigInt,
        addressee_id -> BigInt,
        status -> SmallInt,
        created_at -> BigInt,
    }
}

table! {
    notifications (id) {
        id -> BigInt,
        user_id -> BigInt,
        actor_id -> BigInt,
        kind -> SmallInt,
        reference_id -> Nullable<BigInt>,
        is_read -> Bool,
        created_at -> BigInt,
    }
}

table! {
    watch_lists (id) {
        id -> BigInt,
        user_id -> BigInt,
        name -> Text,
        created_at -> BigInt,
    }
}

joinable!(watch_lists -> users (user_id));

table! {
    watch_list_items (watch_list_id, media_id) {
        watch_list_id -> BigInt,
        media_id -> BigInt,
        added_at -> BigInt,
    }
}

joinable!(watch_list_items -> watch_lists (watch_list_id));
joinable!(watch_list_items -> media (media_id));

///////////////////////////////////////////////////////////////////////
// Donations
///////////////////////////////////////////////////////////////////////

table! {
    categories (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    cities (id) {
        id -> BigInt,
        name -> Text,
        state -> Text,
    }
}

table! {
    suppliers (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        city_id -> BigInt,
    }
}

joinable!(suppliers -> cities (city_id));

table! {
    ngos (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        city_id -> BigInt,
    }
}

joinable!(ngos -> cities (city_id));

table! {
    batches (id) {
        id -> BigInt,
        supplier_id -> BigInt,
        category_id -> BigInt,
        description -> Text,
        quantity -> BigInt,
        status -> SmallInt,
        // only set while reserved or after collection
        ngo_id -> Nullable<BigInt>,
        created_at -> BigInt,
        expires_at -> Nullable<BigInt>,
    }
}

joinable!(batches -> suppliers (supplier_id));
joinable!(batches -> categories (category_id));

allow_tables_to_appear_in_same_query!(
    users,
    refresh_tokens,
    media,
    comments,
    ratings,
    friendships,
    notifications,
    watch_lists,
    watch_list_items,
    categories,
    cities,
    suppliers,
    ngos,
    batches,
);
