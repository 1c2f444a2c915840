pub use partilha_core::{comment_tree, db, gateways, repositories, usecases, util, views};

pub mod entities {
    pub use partilha_core::entities::*;
}

pub mod prelude {
    pub use super::{db::*, entities::*, repositories::*};
}
