use std::{ops::Deref, sync::Arc};

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{entities::Id, gateways::metadata::MetadataGateway},
    web::jwt,
};

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    match auth_header_val.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Some(token),
        _ => None,
    }
}

/// An authenticated user.
#[derive(Debug)]
pub struct Account {
    user_id: Id,
    token: String,
}

impl Account {
    pub fn id(&self) -> Id {
        self.user_id
    }

    /// The access token that has been presented.
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jwt_state = try_outcome!(request.guard::<&State<jwt::JwtState>>().await);
        let account = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .find_map(|token| {
                jwt_state
                    .validate_token(token)
                    .inspect_err(|err| debug!("Rejected access token: {err}"))
                    .ok()
                    .map(|user_id| Account {
                        user_id,
                        token: token.to_owned(),
                    })
            });
        match account {
            Some(account) => Outcome::Success(account),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// The shared metadata provider.
///
/// Requests to the provider are blocking and must be sent
/// from a blocking task, which requires an owned handle.
#[derive(Clone)]
pub struct Metadata(Arc<dyn MetadataGateway + Send + Sync>);

impl From<Box<dyn MetadataGateway + Send + Sync>> for Metadata {
    fn from(gateway: Box<dyn MetadataGateway + Send + Sync>) -> Self {
        Self(gateway.into())
    }
}

impl Deref for Metadata {
    type Target = dyn MetadataGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Metadata {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let metadata = try_outcome!(request.guard::<&State<Metadata>>().await);
        Outcome::Success(metadata.inner().clone())
    }
}
