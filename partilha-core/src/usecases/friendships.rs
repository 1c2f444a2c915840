use super::prelude::*;

pub fn request_friendship<R>(repo: &R, user_id: Id, addressee_id: Id) -> Result<Friendship>
where
    R: UserRepo + FriendshipRepo + NotificationRepo,
{
    if user_id == addressee_id {
        return Err(Error::SelfFriendship);
    }
    repo.get_user(addressee_id)
        .map_not_found(Error::UserNotFound)?;
    if repo
        .try_get_friendship_between(user_id, addressee_id)?
        .is_some()
    {
        return Err(Error::FriendshipAlreadyExists);
    }
    let now = Timestamp::now();
    let id = repo
        .create_friendship(&NewFriendship {
            requester_id: user_id,
            addressee_id,
            created_at: now,
        })
        .map_already_exists(Error::FriendshipAlreadyExists)?;
    repo.create_notification(&NewNotification {
        user_id: addressee_id,
        actor_id: user_id,
        kind: NotificationKind::FriendRequest,
        reference_id: Some(id),
        created_at: now,
    })?;
    Ok(repo.get_friendship(id)?)
}

/// Only the addressee can accept a friendship request.
///
/// Accepting an already accepted friendship has no effect.
pub fn accept_friendship<R>(repo: &R, user_id: Id, id: Id) -> Result<Friendship>
where
    R: FriendshipRepo + NotificationRepo,
{
    let mut friendship = repo
        .get_friendship(id)
        .map_not_found(Error::FriendshipNotFound)?;
    if friendship.addressee_id != user_id {
        return Err(Error::FriendshipNotOwned);
    }
    if friendship.status == FriendshipStatus::Accepted {
        return Ok(friendship);
    }
    repo.update_friendship_status(id, FriendshipStatus::Accepted)?;
    repo.create_notification(&NewNotification {
        user_id: friendship.requester_id,
        actor_id: user_id,
        kind: NotificationKind::FriendAccepted,
        reference_id: Some(id),
        created_at: Timestamp::now(),
    })?;
    friendship.status = FriendshipStatus::Accepted;
    Ok(friendship)
}

/// Removes a friendship or declines or withdraws a pending request.
pub fn remove_friendship<R: FriendshipRepo>(repo: &R, user_id: Id, id: Id) -> Result<()> {
    let friendship = repo
        .get_friendship(id)
        .map_not_found(Error::FriendshipNotFound)?;
    if !friendship.involves(user_id) {
        return Err(Error::FriendshipNotOwned);
    }
    repo.delete_friendship(id)?;
    Ok(())
}

pub fn list_friends<R>(repo: &R, user_id: Id) -> Result<Vec<User>>
where
    R: UserRepo + FriendshipRepo,
{
    let friend_ids: Vec<_> = repo
        .load_friendships_of_user(user_id, Some(FriendshipStatus::Accepted))?
        .iter()
        .filter_map(|f| f.other_party(user_id))
        .collect();
    Ok(repo.get_users(&friend_ids)?)
}

/// Pending requests, both received and sent by the user.
pub fn list_pending_friendships<R: FriendshipRepo>(repo: &R, user_id: Id) -> Result<Vec<Friendship>> {
    Ok(repo.load_friendships_of_user(user_id, Some(FriendshipStatus::Pending))?)
}
