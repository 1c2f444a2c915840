pub use partilha_boundary::*;

use crate::core::{
    comment_tree::CommentNode,
    entities as e, usecases,
    views::{NotificationView, WatchListView},
};

pub mod from_json {
    //! JSON -> Use case input

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case inputs both are outside this crate.

    pub fn new_user_account(new_user: NewUser) -> usecases::NewUserAccount {
        let NewUser {
            name,
            email,
            password,
        } = new_user;
        usecases::NewUserAccount {
            name,
            email,
            password,
        }
    }

    pub fn city_input(city: NewCity) -> usecases::CityInput {
        let NewCity { name, state } = city;
        usecases::CityInput { name, state }
    }

    // Ids in request bodies are mandatory but deserialized as optional
    fn required_id(value: Option<i64>, name: &'static str) -> Result<e::Id, usecases::Error> {
        value
            .map(e::Id::from)
            .filter(|id| id.is_valid())
            .ok_or(usecases::Error::InvalidParameter(name))
    }

    pub fn try_contact_input(contact: NewContact) -> Result<usecases::ContactInput, usecases::Error> {
        let NewContact {
            name,
            email,
            phone,
            city_id,
        } = contact;
        Ok(usecases::ContactInput {
            name,
            email,
            phone,
            city_id: required_id(city_id, "city_id")?,
        })
    }

    pub fn try_batch_input(batch: NewBatch) -> Result<usecases::BatchInput, usecases::Error> {
        let NewBatch {
            supplier_id,
            category_id,
            description,
            quantity,
            expires_at,
        } = batch;
        Ok(usecases::BatchInput {
            supplier_id: required_id(supplier_id, "supplier_id")?,
            category_id: required_id(category_id, "category_id")?,
            description,
            // Missing quantities are rejected as invalid
            quantity: quantity.unwrap_or_default(),
            expires_at: expires_at.map(|secs| e::Timestamp::from_millis(secs.saturating_mul(1000))),
        })
    }

    pub fn try_reserved_ngo(reserve: ReserveBatch) -> Result<e::Id, usecases::Error> {
        required_id(reserve.ngo_id, "ngo_id")
    }

    pub fn try_addressee(request: FriendRequest) -> Result<e::Id, usecases::Error> {
        required_id(request.addressee_id, "addressee_id")
    }

    pub fn try_watch_list_media(item: AddToWatchList) -> Result<e::Id, usecases::Error> {
        required_id(item.media_id, "media_id")
    }

    /// Values that do not even fit into a byte are out of range.
    pub fn rating_value(rating: RateMedia) -> Result<u8, usecases::Error> {
        rating
            .value
            .and_then(|value| u8::try_from(value).ok())
            .ok_or(usecases::Error::RatingValue)
    }
}

pub fn comment_from_node(mut node: CommentNode) -> Comment {
    let responses = std::mem::take(&mut node.responses);
    Comment {
        responses: responses.into_iter().map(comment_from_node).collect(),
        ..node.comment.clone().into()
    }
}

pub fn notification_from_view(view: NotificationView) -> Notification {
    let NotificationView {
        notification,
        actor_name,
    } = view;
    let e::Notification {
        id,
        user_id: _,
        actor_id,
        kind,
        reference_id,
        read,
        created_at,
    } = notification;
    Notification {
        id: id.into(),
        actor_id: actor_id.into(),
        actor_name,
        kind: kind.into(),
        reference_id: reference_id.map(Into::into),
        read,
        created_at: created_at.as_secs(),
    }
}

pub fn watch_list_details_from_view(view: WatchListView) -> WatchListDetails {
    let WatchListView {
        watch_list,
        entries,
    } = view;
    WatchListDetails {
        watch_list: watch_list.into(),
        entries: entries
            .into_iter()
            .map(|entry| WatchListEntry {
                media: entry.media.into(),
                added_at: entry.added_at.as_secs(),
            })
            .collect(),
    }
}

pub fn media_details_from(details: usecases::MediaDetailsWithRating) -> MediaDetails {
    let usecases::MediaDetailsWithRating {
        id,
        details,
        rating,
    } = details;
    let e::MediaDetails {
        media,
        genres,
        runtime,
        number_of_seasons,
        number_of_episodes,
    } = details;
    MediaDetails {
        media: e::ResolvedMedia { id, media }.into(),
        genres,
        runtime,
        number_of_seasons,
        number_of_episodes,
        rating: rating.into(),
    }
}
