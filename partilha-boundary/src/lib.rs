use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

// NOTE:
// All timestamps are unix timestamps in seconds.

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

// ---   users   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Lifetime of the access token in seconds
    pub expires_in: i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id         : i64,
    pub name       : String,
    pub email      : String,
    pub created_at : i64,
}

/// The publicly visible part of another user.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
}

// ---   media   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MediaRecord {
    pub id          : i64,
    pub external_id : i64,
    pub media_type  : MediaType,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct MediaItem {
    /// Internal id
    pub id           : i64,
    pub external_id  : i64,
    pub media_type   : MediaType,
    pub title        : String,
    pub overview     : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date : Option<String>,
    pub popularity   : f64,
    pub vote_average : f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct MediaPage {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub results: Vec<MediaItem>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct MediaDetails {
    #[serde(flatten)]
    pub media: MediaItem,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_seasons: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_episodes: Option<u32>,
    pub rating: RatingSummary,
}

// ---   comments   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Comment {
    pub id         : i64,
    pub user_id    : Option<i64>,
    pub media_id   : i64,
    pub parent_id  : Option<i64>,
    pub content    : String,
    pub created_at : i64,
    pub edited     : bool,
    pub deleted    : bool,
    pub responses  : Vec<Comment>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewComment {
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateComment {
    #[serde(default)]
    pub content: String,
}

// ---   ratings   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RateMedia {
    pub value: Option<i64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Rating {
    pub id         : i64,
    pub user_id    : i64,
    pub media_id   : i64,
    pub value      : u8,
    pub created_at : i64,
}

// ---   friendships   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct FriendRequest {
    pub addressee_id: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Friendship {
    pub id           : i64,
    pub requester_id : i64,
    pub addressee_id : i64,
    pub status       : FriendshipStatus,
    pub created_at   : i64,
}

// ---   notifications   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    FriendRequest,
    FriendAccepted,
    CommentReply,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Notification {
    pub id           : i64,
    pub actor_id     : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_name   : Option<String>,
    pub kind         : NotificationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id : Option<i64>,
    pub read         : bool,
    pub created_at   : i64,
}

// ---   watch lists   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewWatchList {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AddToWatchList {
    pub media_id: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct WatchList {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct WatchListEntry {
    pub media: MediaRecord,
    pub added_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct WatchListDetails {
    #[serde(flatten)]
    pub watch_list: WatchList,
    pub entries: Vec<WatchListEntry>,
}

// ---   donations   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewCategory {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct City {
    pub id: i64,
    pub name: String,
    pub state: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
}

/// A supplier or an NGO.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Contact {
    pub id      : i64,
    pub name    : String,
    pub email   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone   : Option<String>,
    pub city_id : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub city_id: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Available,
    Reserved,
    Collected,
    Canceled,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Batch {
    pub id          : i64,
    pub supplier_id : i64,
    pub category_id : i64,
    pub description : String,
    pub quantity    : u32,
    pub status      : BatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_id      : Option<i64>,
    pub created_at  : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at  : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewBatch {
    pub supplier_id: Option<i64>,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub description: String,
    pub quantity: Option<i64>,
    pub expires_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ReserveBatch {
    pub ngo_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_fields_default_to_empty() {
        let new_user: NewUser = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert!(new_user.name.is_empty());
        assert!(new_user.password.is_empty());
        assert_eq!("a@b.c", new_user.email);
    }

    #[test]
    fn serialize_error() {
        let err = Error {
            http_status: 404,
            message: "Media not found".into(),
        };
        assert_eq!(
            r#"{"http_status":404,"message":"Media not found"}"#,
            serde_json::to_string(&err).unwrap()
        );
    }

    #[test]
    fn flatten_watch_list_details() {
        let details = WatchListDetails {
            watch_list: WatchList {
                id: 1,
                name: "Later".into(),
                created_at: 10,
            },
            entries: vec![WatchListEntry {
                media: MediaRecord {
                    id: 2,
                    external_id: 550,
                    media_type: MediaType::Movie,
                },
                added_at: 20,
            }],
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["name"], "Later");
        assert_eq!(json["entries"][0]["media"]["media_type"], "movie");
    }

    #[test]
    fn skip_empty_optionals() {
        let batch = Batch {
            id: 1,
            supplier_id: 2,
            category_id: 3,
            description: "rice".into(),
            quantity: 5,
            status: BatchStatus::Available,
            ngo_id: None,
            created_at: 0,
            expires_at: None,
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["status"], "available");
        assert!(json.get("ngo_id").is_none());
        assert!(json.get("expires_at").is_none());
    }
}
