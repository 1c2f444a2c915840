pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, external_media_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn user(mut self, user_id: i64) -> Self {
            self.comment.user_id = Some(user_id.into());
            self
        }
        pub fn media(mut self, media_id: i64) -> Self {
            self.comment.media_id = media_id.into();
            self
        }
        pub fn parent(mut self, parent_id: i64) -> Self {
            self.comment.parent_id = Some(parent_id.into());
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn edited_at(mut self, at: i64) -> Self {
            self.comment.updated_at = Some(Timestamp::from_millis(at));
            self
        }
        pub fn deleted_at(mut self, at: i64) -> Self {
            self.comment.deleted_at = Some(Timestamp::from_millis(at));
            self.comment.user_id = None;
            self.comment.content.clear();
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(1),
                    user_id: Some(Id::new(1)),
                    media_id: Id::new(1),
                    parent_id: None,
                    content: "A comment".into(),
                    created_at: Timestamp::from_millis(0),
                    updated_at: None,
                    deleted_at: None,
                },
            }
        }
    }
}

pub mod external_media_builder {

    use super::*;
    use crate::media::*;

    #[derive(Debug)]
    pub struct ExternalMediaBuild {
        media: ExternalMedia,
    }

    impl ExternalMediaBuild {
        pub fn external_id(mut self, id: i64) -> Self {
            self.media.external_id = id;
            self
        }
        pub fn media_type(mut self, media_type: MediaType) -> Self {
            self.media.media_type = media_type;
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.media.title = title.into();
            self
        }
        pub fn popularity(mut self, popularity: f64) -> Self {
            self.media.popularity = popularity;
            self
        }
        pub fn finish(self) -> ExternalMedia {
            self.media
        }
    }

    impl Builder for ExternalMedia {
        type Build = ExternalMediaBuild;
        fn build() -> ExternalMediaBuild {
            ExternalMediaBuild {
                media: ExternalMedia {
                    external_id: 1,
                    media_type: MediaType::Movie,
                    title: "A movie".into(),
                    overview: String::new(),
                    poster_path: None,
                    release_date: None,
                    popularity: 0.0,
                    vote_average: 0.0,
                },
            }
        }
    }
}
