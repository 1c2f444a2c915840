#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = refresh_tokens)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: i64,
    pub expires_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = media)]
pub struct NewMedia<'a> {
    pub external_id: i64,
    pub media_type: &'a str,
}

#[derive(Queryable)]
pub struct MediaEntity {
    pub id: i64,
    pub external_id: i64,
    pub media_type: String,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub user_id: Option<i64>,
    pub media_id: i64,
    pub parent_id: Option<i64>,
    pub content: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub id: i64,
    pub user_id: Option<i64>,
    pub media_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = ratings)]
pub struct NewRating {
    pub user_id: i64,
    pub media_id: i64,
    pub value: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct RatingEntity {
    pub id: i64,
    pub user_id: i64,
    pub media_id: i64,
    pub value: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = friendships)]
pub struct NewFriendship {
    pub requester_id: i64,
    pub addressee_id: i64,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct FriendshipEntity {
    pub id: i64,
    pub requester_id: i64,
    pub addressee_id: i64,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotification {
    pub user_id: i64,
    pub actor_id: i64,
    pub kind: i16,
    pub reference_id: Option<i64>,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct NotificationEntity {
    pub id: i64,
    pub user_id: i64,
    pub actor_id: i64,
    pub kind: i16,
    pub reference_id: Option<i64>,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = watch_lists)]
pub struct NewWatchList<'a> {
    pub user_id: i64,
    pub name: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct WatchListEntity {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = watch_list_items)]
pub struct WatchListItem {
    pub watch_list_id: i64,
    pub media_id: i64,
    pub added_at: i64,
}

#[derive(Queryable)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = cities)]
pub struct NewCity<'a> {
    pub name: &'a str,
    pub state: &'a str,
}

#[derive(Queryable)]
pub struct CityEntity {
    pub id: i64,
    pub name: String,
    pub state: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = suppliers)]
// Clearing the phone number requires to update NULL values
#[diesel(treat_none_as_null = true)]
pub struct NewSupplier<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub city_id: i64,
}

#[derive(Queryable)]
pub struct SupplierEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city_id: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = ngos)]
#[diesel(treat_none_as_null = true)]
pub struct NewNgo<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub city_id: i64,
}

#[derive(Queryable)]
pub struct NgoEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city_id: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = batches)]
#[diesel(treat_none_as_null = true)]
pub struct NewBatch<'a> {
    pub supplier_id: i64,
    pub category_id: i64,
    pub description: &'a str,
    pub quantity: i64,
    pub status: i16,
    pub ngo_id: Option<i64>,
    pub created_at: i64,
    pub expires_at: Option<i64>,
}

#[derive(Queryable)]
pub struct BatchEntity {
    pub id: i64,
    pub supplier_id: i64,
    pub category_id: i64,
    pub description: String,
    pub quantity: i64,
    pub status: i16,
    pub ngo_id: Option<i64>,
    pub created_at: i64,
    pub expires_at: Option<i64>,
}
