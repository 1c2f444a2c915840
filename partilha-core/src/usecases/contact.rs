use super::prelude::*;
use crate::util::validate;

/// Input for suppliers and NGOs.
#[derive(Debug, Clone)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city_id: Id,
}

#[derive(Debug)]
pub(crate) struct ValidContact {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub city_id: Id,
}

pub(crate) fn validate_contact<R: CityRepo>(repo: &R, input: ContactInput) -> Result<ValidContact> {
    let ContactInput {
        name,
        email,
        phone,
        city_id,
    } = input;
    let name = name.trim();
    if validate::is_blank(name) {
        return Err(Error::EmptyName);
    }
    if !validate::is_valid_email(email.trim()) {
        return Err(Error::EmailAddress);
    }
    let email = email.parse::<EmailAddress>()?;
    // Blank phone numbers are treated as missing
    let phone = phone
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty());
    if let Some(phone) = &phone {
        if !validate::is_valid_phone(phone) {
            return Err(Error::Phone);
        }
    }
    repo.get_city(city_id).map_not_found(Error::CityNotFound)?;
    Ok(ValidContact {
        name: name.to_owned(),
        email,
        phone,
        city_id,
    })
}
