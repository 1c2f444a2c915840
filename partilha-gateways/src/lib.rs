//! Implementations of the gateways defined in `partilha-core`.

pub mod tmdb;
