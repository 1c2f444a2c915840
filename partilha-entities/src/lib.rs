#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # partilha-entities
//!
//! Reusable, agnostic domain entities for Partilha.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod batch;
pub mod category;
pub mod city;
pub mod comment;
pub mod email;
pub mod friendship;
pub mod id;
pub mod media;
pub mod ngo;
pub mod notification;
pub mod password;
pub mod rating;
pub mod supplier;
pub mod time;
pub mod token;
pub mod user;
pub mod watch_list;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
