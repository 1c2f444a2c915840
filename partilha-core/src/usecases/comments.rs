use super::prelude::*;
use crate::{
    comment_tree::{build_comment_tree, CommentNode},
    util::validate,
};

pub fn list_comments<R>(repo: &R, media_id: Id) -> Result<Vec<CommentNode>>
where
    R: MediaRepo + CommentRepo,
{
    repo.get_media(media_id)
        .map_not_found(Error::MediaNotFound)?;
    let comments = repo.load_comments_of_media(media_id)?;
    let tree = build_comment_tree(comments).map_err(|err| {
        log::error!("Inconsistent comments of media {media_id}: {err}");
        err
    })?;
    Ok(tree)
}

/// Nesting limit of a discussion, top-level comments have a depth of 1.
pub const MAX_COMMENT_DEPTH: usize = 100;

#[derive(Debug, Clone)]
pub struct NewCommentRequest {
    pub media_id: Id,
    pub parent_id: Option<Id>,
    pub content: String,
}

pub fn create_comment<R>(repo: &R, user_id: Id, request: NewCommentRequest) -> Result<Comment>
where
    R: MediaRepo + CommentRepo + NotificationRepo,
{
    let NewCommentRequest {
        media_id,
        parent_id,
        content,
    } = request;
    if validate::is_blank(&content) {
        return Err(Error::EmptyComment);
    }
    repo.get_media(media_id)
        .map_not_found(Error::MediaNotFound)?;
    let parent = parent_id
        .map(|id| {
            let parent = repo
                .load_comment(id)
                .map_not_found(Error::CommentParentNotFound)?;
            if parent.media_id != media_id || parent.is_deleted() {
                return Err(Error::CommentParentNotFound);
            }
            check_reply_depth(repo, &parent)?;
            Ok(parent)
        })
        .transpose()?;
    let now = Timestamp::now();
    let new_comment = NewComment {
        user_id,
        media_id,
        parent_id,
        content: content.trim().to_owned(),
        created_at: now,
    };
    let id = repo.create_comment(&new_comment)?;
    if let Some(author_id) = parent.and_then(|p| p.user_id) {
        if author_id != user_id {
            let notification = NewNotification {
                user_id: author_id,
                actor_id: user_id,
                kind: NotificationKind::CommentReply,
                reference_id: Some(id),
                created_at: now,
            };
            repo.create_notification(&notification)?;
        }
    }
    Ok(repo.load_comment(id)?)
}

fn check_reply_depth<R: CommentRepo>(repo: &R, parent: &Comment) -> Result<()> {
    // The reply and its parent
    let mut depth = 2;
    let mut ancestor_id = parent.parent_id;
    while let Some(id) = ancestor_id {
        depth += 1;
        if depth > MAX_COMMENT_DEPTH {
            return Err(Error::ReplyTooDeep);
        }
        ancestor_id = repo.load_comment(id)?.parent_id;
    }
    Ok(())
}

fn load_own_comment<R: CommentRepo>(repo: &R, user_id: Id, id: Id) -> Result<Comment> {
    let comment = repo.load_comment(id).map_not_found(Error::CommentNotFound)?;
    if comment.is_deleted() {
        return Err(Error::CommentNotFound);
    }
    if !comment.is_owned_by(user_id) {
        return Err(Error::CommentNotOwned);
    }
    Ok(comment)
}

pub fn update_comment<R: CommentRepo>(
    repo: &R,
    user_id: Id,
    id: Id,
    content: &str,
) -> Result<Comment> {
    if validate::is_blank(content) {
        return Err(Error::EmptyComment);
    }
    load_own_comment(repo, user_id, id)?;
    repo.update_comment_content(id, content.trim(), Timestamp::now())?;
    Ok(repo.load_comment(id)?)
}

/// Deletes a comment but keeps its responses.
pub fn delete_comment<R: CommentRepo>(repo: &R, user_id: Id, id: Id) -> Result<()> {
    load_own_comment(repo, user_id, id)?;
    log::debug!("Deleting comment {id}");
    repo.soft_delete_comment(id, Timestamp::now())?;
    Ok(())
}
