use super::*;
use partilha_entities as e;

impl From<e::media::MediaType> for MediaType {
    fn from(from: e::media::MediaType) -> Self {
        use e::media::MediaType as E;
        match from {
            E::Movie => Self::Movie,
            E::Tv => Self::Tv,
        }
    }
}

impl From<MediaType> for e::media::MediaType {
    fn from(from: MediaType) -> Self {
        match from {
            MediaType::Movie => Self::Movie,
            MediaType::Tv => Self::Tv,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            password: _password,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::user::User> for UserProfile {
    fn from(from: e::user::User) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl From<e::media::MediaRecord> for MediaRecord {
    fn from(from: e::media::MediaRecord) -> Self {
        let e::media::MediaRecord {
            id,
            external_id,
            media_type,
        } = from;
        Self {
            id: id.into(),
            external_id,
            media_type: media_type.into(),
        }
    }
}

impl From<e::media::ResolvedMedia> for MediaItem {
    fn from(from: e::media::ResolvedMedia) -> Self {
        let e::media::ResolvedMedia { id, media } = from;
        let e::media::ExternalMedia {
            external_id,
            media_type,
            title,
            overview,
            poster_path,
            release_date,
            popularity,
            vote_average,
        } = media;
        Self {
            id: id.into(),
            external_id,
            media_type: media_type.into(),
            title,
            overview,
            poster_path,
            release_date,
            popularity,
            vote_average,
        }
    }
}

impl From<e::media::MediaPage<e::media::ResolvedMedia>> for MediaPage {
    fn from(from: e::media::MediaPage<e::media::ResolvedMedia>) -> Self {
        let e::media::MediaPage {
            page,
            total_pages,
            total_results,
            results,
        } = from;
        Self {
            page,
            total_pages,
            total_results,
            results: results.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::rating::RatingSummary> for RatingSummary {
    fn from(from: e::rating::RatingSummary) -> Self {
        let e::rating::RatingSummary { average, count } = from;
        Self { average, count }
    }
}

impl From<e::rating::Rating> for Rating {
    fn from(from: e::rating::Rating) -> Self {
        let e::rating::Rating {
            id,
            user_id,
            media_id,
            value,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            media_id: media_id.into(),
            value: value.into(),
            created_at: created_at.as_secs(),
        }
    }
}

/// A comment without any responses.
impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let edited = from.is_edited();
        let deleted = from.is_deleted();
        let e::comment::Comment {
            id,
            user_id,
            media_id,
            parent_id,
            content,
            created_at,
            updated_at: _,
            deleted_at: _,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.map(Into::into),
            media_id: media_id.into(),
            parent_id: parent_id.map(Into::into),
            content,
            created_at: created_at.as_secs(),
            edited,
            deleted,
            responses: vec![],
        }
    }
}

impl From<e::friendship::FriendshipStatus> for FriendshipStatus {
    fn from(from: e::friendship::FriendshipStatus) -> Self {
        use e::friendship::FriendshipStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Accepted => Self::Accepted,
        }
    }
}

impl From<e::friendship::Friendship> for Friendship {
    fn from(from: e::friendship::Friendship) -> Self {
        let e::friendship::Friendship {
            id,
            requester_id,
            addressee_id,
            status,
            created_at,
        } = from;
        Self {
            id: id.into(),
            requester_id: requester_id.into(),
            addressee_id: addressee_id.into(),
            status: status.into(),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::notification::NotificationKind> for NotificationKind {
    fn from(from: e::notification::NotificationKind) -> Self {
        use e::notification::NotificationKind as E;
        match from {
            E::FriendRequest => Self::FriendRequest,
            E::FriendAccepted => Self::FriendAccepted,
            E::CommentReply => Self::CommentReply,
        }
    }
}

impl From<e::watch_list::WatchList> for WatchList {
    fn from(from: e::watch_list::WatchList) -> Self {
        let e::watch_list::WatchList {
            id,
            user_id: _,
            name,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::city::City> for City {
    fn from(from: e::city::City) -> Self {
        let e::city::City { id, name, state } = from;
        Self {
            id: id.into(),
            name,
            state,
        }
    }
}

impl From<e::supplier::Supplier> for Contact {
    fn from(from: e::supplier::Supplier) -> Self {
        let e::supplier::Supplier {
            id,
            name,
            email,
            phone,
            city_id,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            phone,
            city_id: city_id.into(),
        }
    }
}

impl From<e::ngo::Ngo> for Contact {
    fn from(from: e::ngo::Ngo) -> Self {
        let e::ngo::Ngo {
            id,
            name,
            email,
            phone,
            city_id,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            phone,
            city_id: city_id.into(),
        }
    }
}

impl From<e::batch::BatchStatus> for BatchStatus {
    fn from(from: e::batch::BatchStatus) -> Self {
        use e::batch::BatchStatus as E;
        match from {
            E::Available => Self::Available,
            E::Reserved => Self::Reserved,
            E::Collected => Self::Collected,
            E::Canceled => Self::Canceled,
        }
    }
}

impl From<e::batch::Batch> for Batch {
    fn from(from: e::batch::Batch) -> Self {
        let e::batch::Batch {
            id,
            supplier_id,
            category_id,
            description,
            quantity,
            status,
            ngo_id,
            created_at,
            expires_at,
        } = from;
        Self {
            id: id.into(),
            supplier_id: supplier_id.into(),
            category_id: category_id.into(),
            description,
            quantity,
            status: status.into(),
            ngo_id: ngo_id.map(Into::into),
            created_at: created_at.as_secs(),
            expires_at: expires_at.map(e::time::Timestamp::as_secs),
        }
    }
}
