//! Reconstruction of threaded discussions from flat comment rows.

use std::collections::HashMap;

use thiserror::Error;

use crate::entities::*;

/// A comment together with its (transitive) responses.
///
/// The derived comparison recurses once per reply level, which
/// is bounded by the maximum reply depth accepted on creation.
#[derive(Debug, PartialEq, Eq)]
pub struct CommentNode {
    pub comment: Comment,
    pub responses: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, including the root.
    pub fn count_comments(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(&node.responses);
        }
        count
    }
}

// Long reply chains must not be dropped recursively
impl Drop for CommentNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.responses);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.responses);
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommentTreeError {
    #[error("Comment {id} references the missing parent {parent_id}")]
    MissingParent { id: Id, parent_id: Id },
    #[error("Comment {id} occurs more than once")]
    DuplicateId { id: Id },
    #[error("{0} comment(s) are not reachable from any top-level comment")]
    Unreachable(usize),
}

/// Builds a forest of comments from an unordered list of rows.
///
/// Top-level comments keep their input order, and so do the
/// responses of each comment. Rows that reference a parent outside
/// of the given list are rejected, as are rows that would never be
/// reached from a top-level comment (e.g. cycles).
pub fn build_comment_tree(comments: Vec<Comment>) -> Result<Vec<CommentNode>, CommentTreeError> {
    let mut index_by_id = HashMap::with_capacity(comments.len());
    for (i, c) in comments.iter().enumerate() {
        if index_by_id.insert(c.id, i).is_some() {
            return Err(CommentTreeError::DuplicateId { id: c.id });
        }
    }
    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    for (i, c) in comments.iter().enumerate() {
        match c.parent_id {
            None => roots.push(i),
            Some(parent_id) => {
                let Some(&parent_idx) = index_by_id.get(&parent_id) else {
                    return Err(CommentTreeError::MissingParent {
                        id: c.id,
                        parent_id,
                    });
                };
                children[parent_idx].push(i);
            }
        }
    }
    let total = comments.len();
    let mut slots: Vec<Option<Comment>> = comments.into_iter().map(Some).collect();
    let mut assembled = 0;
    let forest: Vec<_> = roots
        .into_iter()
        .filter_map(|i| assemble(i, &mut slots, &children, &mut assembled))
        .collect();
    if assembled < total {
        return Err(CommentTreeError::Unreachable(total - assembled));
    }
    Ok(forest)
}

struct Frame<'a> {
    comment: Comment,
    pending: std::slice::Iter<'a, usize>,
    responses: Vec<CommentNode>,
}

impl<'a> Frame<'a> {
    fn new(comment: Comment, children: &'a [usize]) -> Self {
        Self {
            comment,
            pending: children.iter(),
            responses: Vec::with_capacity(children.len()),
        }
    }
}

// Post-order traversal with an explicit stack, the depth
// of a thread is only limited by the available memory.
fn assemble(
    root: usize,
    slots: &mut [Option<Comment>],
    children: &[Vec<usize>],
    assembled: &mut usize,
) -> Option<CommentNode> {
    // Every slot is taken at most once
    let comment = slots[root].take()?;
    *assembled += 1;
    let mut stack = vec![Frame::new(comment, &children[root])];
    loop {
        let top = stack.last_mut()?;
        if let Some(&child) = top.pending.next() {
            if let Some(comment) = slots[child].take() {
                *assembled += 1;
                stack.push(Frame::new(comment, &children[child]));
            }
            continue;
        }
        let Frame {
            comment, responses, ..
        } = stack.pop()?;
        let node = CommentNode { comment, responses };
        match stack.last_mut() {
            Some(parent) => parent.responses.push(node),
            None => return Some(node),
        }
    }
}
