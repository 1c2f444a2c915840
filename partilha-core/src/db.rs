use crate::repositories::*;

/// All repositories of the donation subsystem.
pub trait DonationDb: CategoryRepo + CityRepo + SupplierRepo + NgoRepo + BatchRepo {}

impl<T> DonationDb for T where T: CategoryRepo + CityRepo + SupplierRepo + NgoRepo + BatchRepo {}

/// All repositories of the social subsystem.
pub trait SocialDb:
    UserRepo
    + RefreshTokenRepo
    + MediaRepo
    + CommentRepo
    + RatingRepo
    + FriendshipRepo
    + NotificationRepo
    + WatchListRepo
{
}

impl<T> SocialDb for T where
    T: UserRepo
        + RefreshTokenRepo
        + MediaRepo
        + CommentRepo
        + RatingRepo
        + FriendshipRepo
        + NotificationRepo
        + WatchListRepo
{
}

pub trait Db: DonationDb + SocialDb {}

impl<T> Db for T where T: DonationDb + SocialDb {}
