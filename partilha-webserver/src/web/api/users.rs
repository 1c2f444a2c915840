use super::*;

fn token_pair(
    jwt_state: &jwt::JwtState,
    session: usecases::Session,
) -> result::Result<json::TokenPair, ApiError> {
    let access_token = jwt_state.generate_token(session.user.id)?;
    Ok(json::TokenPair {
        access_token,
        refresh_token: session.refresh_token.token,
        token_type: "Bearer".to_string(),
        expires_in: jwt_state.time_valid().whole_seconds(),
    })
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let new_user = from_json::new_user_account(new_user?.into_inner());
    let user = usecases::register_user(&db.exclusive()?, new_user)?;
    Ok(Json(user.into()))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    jwt_state: &State<jwt::JwtState>,
    login: JsonResult<json::Credentials>,
) -> Result<json::TokenPair> {
    let login = login?.into_inner();
    let credentials = usecases::Credentials {
        email: &login.email,
        password: &login.password,
    };
    let session = usecases::login(&db.exclusive()?, &credentials, cfg.refresh_token_ttl)
        .inspect_err(|err| debug!("Login with email '{}' failed: {err}", login.email))?;
    Ok(Json(token_pair(jwt_state, session)?))
}

#[post("/refresh", format = "application/json", data = "<data>")]
pub fn post_refresh(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    jwt_state: &State<jwt::JwtState>,
    data: JsonResult<json::RefreshRequest>,
) -> Result<json::TokenPair> {
    let json::RefreshRequest { refresh_token } = data?.into_inner();
    let session =
        usecases::refresh_session(&db.exclusive()?, &refresh_token, cfg.refresh_token_ttl)?;
    Ok(Json(token_pair(jwt_state, session)?))
}

#[post("/logout", format = "application/json", data = "<data>")]
pub fn post_logout(
    db: sqlite::Connections,
    account: Account,
    jwt_state: &State<jwt::JwtState>,
    data: JsonResult<json::RefreshRequest>,
) -> StatusResult {
    let json::RefreshRequest { refresh_token } = data?.into_inner();
    usecases::logout(&db.exclusive()?, account.id(), &refresh_token)?;
    jwt_state.blacklist_token(account.token().to_owned());
    Ok(Status::NoContent)
}

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.id())?;
    Ok(Json(user.into()))
}

#[get("/users/<id>", rank = 2)]
pub fn get_user(db: sqlite::Connections, _account: Account, id: i64) -> Result<json::UserProfile> {
    let user = usecases::get_user(&db.shared()?, id.into())?;
    Ok(Json(user.into()))
}
