use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn register_user<R: UserRepo>(repo: &R, account: NewUserAccount) -> Result<User> {
    let NewUserAccount {
        name,
        email,
        password,
    } = account;
    let name = name.trim();
    if validate::is_blank(name) {
        return Err(Error::EmptyName);
    }
    if !validate::is_valid_email(email.trim()) {
        return Err(Error::EmailAddress);
    }
    let email = email.parse::<EmailAddress>()?;
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserAlreadyExists);
    }
    let new_user = NewUser {
        name: name.to_owned(),
        email,
        password,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    let id = repo
        .create_user(&new_user)
        .map_already_exists(Error::UserAlreadyExists)?;
    Ok(repo.get_user(id)?)
}

pub fn get_user<R: UserRepo>(repo: &R, id: Id) -> Result<User> {
    repo.get_user(id).map_not_found(Error::UserNotFound)
}
