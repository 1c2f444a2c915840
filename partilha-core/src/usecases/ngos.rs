use super::{contact::*, prelude::*};

pub fn create_ngo<R>(repo: &R, input: ContactInput) -> Result<Ngo>
where
    R: NgoRepo + CityRepo,
{
    let ValidContact {
        name,
        email,
        phone,
        city_id,
    } = validate_contact(repo, input)?;
    let new_ngo = NewNgo {
        name,
        email,
        phone,
        city_id,
    };
    log::debug!("Creating new NGO: email = {}", new_ngo.email);
    let id = repo
        .create_ngo(&new_ngo)
        .map_already_exists(Error::NgoAlreadyExists)?;
    Ok(repo.get_ngo(id)?)
}

pub fn list_ngos<R: NgoRepo>(repo: &R, city_id: Option<Id>) -> Result<Vec<Ngo>> {
    Ok(repo.all_ngos(city_id)?)
}

pub fn get_ngo<R: NgoRepo>(repo: &R, id: Id) -> Result<Ngo> {
    repo.get_ngo(id).map_not_found(Error::NgoNotFound)
}

pub fn update_ngo<R>(repo: &R, id: Id, input: ContactInput) -> Result<Ngo>
where
    R: NgoRepo + CityRepo,
{
    get_ngo(repo, id)?;
    let ValidContact {
        name,
        email,
        phone,
        city_id,
    } = validate_contact(repo, input)?;
    let ngo = Ngo {
        id,
        name,
        email,
        phone,
        city_id,
    };
    repo.update_ngo(&ngo)
        .map_already_exists(Error::NgoAlreadyExists)?;
    Ok(ngo)
}

pub fn delete_ngo<R>(repo: &R, id: Id) -> Result<()>
where
    R: NgoRepo + BatchRepo,
{
    get_ngo(repo, id)?;
    let query = BatchQuery {
        ngo_id: Some(id),
        ..Default::default()
    };
    if !repo.query_batches(&query)?.is_empty() {
        return Err(Error::StillReferenced);
    }
    repo.delete_ngo(id)?;
    Ok(())
}
