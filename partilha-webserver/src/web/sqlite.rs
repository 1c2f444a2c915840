use anyhow::Result as Fallible;
use partilha_db_sqlite::{Connections as Pool, DbReadOnly, DbReadWrite};
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

/// The managed connection pool as a request guard.
#[derive(Clone)]
pub struct Connections(Pool);

impl Connections {
    /// Shared access for reading.
    pub fn shared(&self) -> Fallible<DbReadOnly> {
        self.0.shared()
    }

    /// Exclusive access for writing or for reading
    /// and writing within one use case.
    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        self.0.exclusive()
    }
}

impl From<Pool> for Connections {
    fn from(pool: Pool) -> Self {
        Self(pool)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Connections>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => {
                error!("No database connections are managed");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}
