#![deny(missing_debug_implementations)]

//! # partilha-core
//!
//! Repository traits, gateway traits and the use cases
//! of both the donation and the social subsystem.

pub mod comment_tree;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
pub mod views;

pub mod entities {
    pub use partilha_entities::{
        batch::*, category::*, city::*, comment::*, email::*, friendship::*, id::*, media::*,
        ngo::*, notification::*, password::*, rating::*, supplier::*, time::*, token::*, user::*,
        watch_list::*,
    };
}
