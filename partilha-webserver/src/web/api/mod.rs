use std::{fmt::Display, result};

use partilha_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json},
    core::{prelude::*, usecases, util::validate},
    web::{jwt, sqlite, Cfg},
};

mod batches;
mod categories;
mod cities;
mod comments;
mod error;
mod friendships;
mod media;
mod ngos;
mod notifications;
mod ratings;
mod suppliers;
mod users;
mod watch_lists;

pub use self::error::Error as ApiError;
use self::error::AppError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_refresh,
        users::post_logout,
        users::get_current_user,
        users::get_user,
        // ---   media   --- //
        media::get_search,
        media::get_discover,
        media::get_details,
        // ---   comments   --- //
        comments::get_comments,
        comments::post_comment,
        comments::put_comment,
        comments::delete_comment,
        // ---   ratings   --- //
        ratings::get_rating_summary,
        ratings::post_rating,
        ratings::put_rating,
        // ---   friendships   --- //
        friendships::get_friends,
        friendships::get_pending_friendships,
        friendships::post_friendship,
        friendships::post_accept_friendship,
        friendships::delete_friendship,
        // ---   notifications   --- //
        notifications::get_notifications,
        notifications::post_notification_read,
        // ---   watch lists   --- //
        watch_lists::get_watch_lists,
        watch_lists::post_watch_list,
        watch_lists::get_watch_list,
        watch_lists::delete_watch_list,
        watch_lists::post_watch_list_item,
        watch_lists::delete_watch_list_item,
        // ---   categories   --- //
        categories::get_categories,
        categories::get_category,
        categories::post_category,
        categories::put_category,
        categories::delete_category,
        // ---   cities   --- //
        cities::get_cities,
        cities::get_city,
        cities::post_city,
        cities::put_city,
        cities::delete_city,
        // ---   suppliers   --- //
        suppliers::get_suppliers,
        suppliers::get_supplier,
        suppliers::post_supplier,
        suppliers::put_supplier,
        suppliers::delete_supplier,
        // ---   NGOs   --- //
        ngos::get_ngos,
        ngos::get_ngo,
        ngos::post_ngo,
        ngos::put_ngo,
        ngos::delete_ngo,
        // ---   batches   --- //
        batches::get_batches,
        batches::get_batch,
        batches::post_batch,
        batches::put_batch,
        batches::delete_batch,
        batches::post_reserve_batch,
        batches::post_release_batch,
        batches::post_collect_batch,
        batches::post_cancel_batch,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Parses an optional id from a query string.
fn id_param(value: Option<&str>, name: &'static str) -> result::Result<Option<Id>, AppError> {
    value
        .map(|v| {
            if !validate::is_positive_integer(v) {
                return Err(AppError::InvalidParameter(name));
            }
            v.trim()
                .parse::<Id>()
                .map_err(|_| AppError::InvalidParameter(name))
        })
        .transpose()
}
