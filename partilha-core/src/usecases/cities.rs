use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct CityInput {
    pub name: String,
    pub state: String,
}

fn validate_city(input: CityInput) -> Result<NewCity> {
    let name = input.name.trim();
    if validate::is_blank(name) {
        return Err(Error::EmptyName);
    }
    let state = input.state.trim().to_uppercase();
    if !validate::is_valid_state(&state) {
        return Err(Error::State);
    }
    Ok(NewCity {
        name: name.to_owned(),
        state,
    })
}

pub fn create_city<R: CityRepo>(repo: &R, input: CityInput) -> Result<City> {
    let new_city = validate_city(input)?;
    let id = repo
        .create_city(&new_city)
        .map_already_exists(Error::CityAlreadyExists)?;
    let NewCity { name, state } = new_city;
    Ok(City { id, name, state })
}

pub fn list_cities<R: CityRepo>(repo: &R) -> Result<Vec<City>> {
    Ok(repo.all_cities()?)
}

pub fn get_city<R: CityRepo>(repo: &R, id: Id) -> Result<City> {
    repo.get_city(id).map_not_found(Error::CityNotFound)
}

pub fn update_city<R: CityRepo>(repo: &R, id: Id, input: CityInput) -> Result<City> {
    let NewCity { name, state } = validate_city(input)?;
    get_city(repo, id)?;
    let city = City { id, name, state };
    repo.update_city(&city)
        .map_already_exists(Error::CityAlreadyExists)?;
    Ok(city)
}

pub fn delete_city<R>(repo: &R, id: Id) -> Result<()>
where
    R: CityRepo + SupplierRepo + NgoRepo,
{
    get_city(repo, id)?;
    if !repo.all_suppliers(Some(id))?.is_empty() || !repo.all_ngos(Some(id))?.is_empty() {
        return Err(Error::StillReferenced);
    }
    repo.delete_city(id)?;
    Ok(())
}
