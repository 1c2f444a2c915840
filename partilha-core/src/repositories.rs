// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &NewUser) -> Result<Id>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>>;
}

pub trait RefreshTokenRepo {
    fn create_refresh_token(&self, token: &RefreshToken) -> Result<()>;

    fn get_refresh_token(&self, token: &str) -> Result<RefreshToken>;

    // Deletes and returns the token
    fn consume_refresh_token(&self, token: &str) -> Result<RefreshToken>;

    fn delete_expired_refresh_tokens(&self, expired_before: Timestamp) -> Result<usize>;
}

pub trait MediaRepo {
    fn find_media(&self, external_id: i64, media_type: MediaType) -> Result<Option<MediaRecord>>;
    fn create_media(&self, media: &NewMediaRecord) -> Result<Id>;
    fn get_media(&self, id: Id) -> Result<MediaRecord>;
}

pub trait CommentRepo {
    // Including soft-deleted comments
    fn load_comments_of_media(&self, media_id: Id) -> Result<Vec<Comment>>;
    fn load_comment(&self, id: Id) -> Result<Comment>;

    fn create_comment(&self, comment: &NewComment) -> Result<Id>;
    fn update_comment_content(&self, id: Id, content: &str, updated_at: Timestamp) -> Result<()>;
    fn soft_delete_comment(&self, id: Id, deleted_at: Timestamp) -> Result<()>;
}

pub trait RatingRepo {
    fn try_get_rating(&self, user_id: Id, media_id: Id) -> Result<Option<Rating>>;
    fn create_rating(&self, rating: &NewRating) -> Result<Id>;
    fn update_rating_value(&self, id: Id, value: RatingValue) -> Result<()>;
    fn load_ratings_of_media(&self, media_id: Id) -> Result<Vec<Rating>>;
}

pub trait FriendshipRepo {
    fn create_friendship(&self, friendship: &NewFriendship) -> Result<Id>;
    fn get_friendship(&self, id: Id) -> Result<Friendship>;

    // Independent of who requested the friendship
    fn try_get_friendship_between(&self, a: Id, b: Id) -> Result<Option<Friendship>>;

    fn update_friendship_status(&self, id: Id, status: FriendshipStatus) -> Result<()>;
    fn delete_friendship(&self, id: Id) -> Result<()>;

    // All friendships where the user is either requester or addressee
    fn load_friendships_of_user(
        &self,
        user_id: Id,
        status: Option<FriendshipStatus>,
    ) -> Result<Vec<Friendship>>;
}

pub trait NotificationRepo {
    fn create_notification(&self, notification: &NewNotification) -> Result<Id>;
    fn get_notification(&self, id: Id) -> Result<Notification>;

    // Newest first
    fn load_notifications_of_user(&self, user_id: Id, unread_only: bool)
        -> Result<Vec<Notification>>;

    fn mark_notification_read(&self, id: Id) -> Result<()>;
}

pub trait WatchListRepo {
    fn create_watch_list(&self, watch_list: &NewWatchList) -> Result<Id>;
    fn get_watch_list(&self, id: Id) -> Result<WatchList>;
    fn load_watch_lists_of_user(&self, user_id: Id) -> Result<Vec<WatchList>>;

    // Also deletes all items
    fn delete_watch_list(&self, id: Id) -> Result<()>;

    fn add_watch_list_item(&self, item: &WatchListItem) -> Result<()>;
    fn remove_watch_list_item(&self, watch_list_id: Id, media_id: Id) -> Result<()>;
    fn load_watch_list_items(&self, watch_list_id: Id) -> Result<Vec<WatchListItem>>;
}

pub trait CategoryRepo {
    fn create_category(&self, name: &str) -> Result<Id>;
    fn get_category(&self, id: Id) -> Result<Category>;
    fn all_categories(&self) -> Result<Vec<Category>>;
    fn update_category(&self, category: &Category) -> Result<()>;
    fn delete_category(&self, id: Id) -> Result<()>;
}

pub trait CityRepo {
    fn create_city(&self, city: &NewCity) -> Result<Id>;
    fn get_city(&self, id: Id) -> Result<City>;
    fn all_cities(&self) -> Result<Vec<City>>;
    fn update_city(&self, city: &City) -> Result<()>;
    fn delete_city(&self, id: Id) -> Result<()>;
}

pub trait SupplierRepo {
    fn create_supplier(&self, supplier: &NewSupplier) -> Result<Id>;
    fn get_supplier(&self, id: Id) -> Result<Supplier>;
    fn all_suppliers(&self, city_id: Option<Id>) -> Result<Vec<Supplier>>;
    fn update_supplier(&self, supplier: &Supplier) -> Result<()>;
    fn delete_supplier(&self, id: Id) -> Result<()>;
}

pub trait NgoRepo {
    fn create_ngo(&self, ngo: &NewNgo) -> Result<Id>;
    fn get_ngo(&self, id: Id) -> Result<Ngo>;
    fn all_ngos(&self, city_id: Option<Id>) -> Result<Vec<Ngo>>;
    fn update_ngo(&self, ngo: &Ngo) -> Result<()>;
    fn delete_ngo(&self, id: Id) -> Result<()>;
}

pub trait BatchRepo {
    fn create_batch(&self, batch: &NewBatch) -> Result<Id>;
    fn get_batch(&self, id: Id) -> Result<Batch>;

    // Newest first
    fn query_batches(&self, query: &BatchQuery) -> Result<Vec<Batch>>;

    fn update_batch(&self, batch: &Batch) -> Result<()>;
    fn delete_batch(&self, id: Id) -> Result<()>;
}
