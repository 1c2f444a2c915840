use super::{contact::*, prelude::*};

pub fn create_supplier<R>(repo: &R, input: ContactInput) -> Result<Supplier>
where
    R: SupplierRepo + CityRepo,
{
    let ValidContact {
        name,
        email,
        phone,
        city_id,
    } = validate_contact(repo, input)?;
    let new_supplier = NewSupplier {
        name,
        email,
        phone,
        city_id,
    };
    log::debug!("Creating new supplier: email = {}", new_supplier.email);
    let id = repo
        .create_supplier(&new_supplier)
        .map_already_exists(Error::SupplierAlreadyExists)?;
    Ok(repo.get_supplier(id)?)
}

pub fn list_suppliers<R: SupplierRepo>(repo: &R, city_id: Option<Id>) -> Result<Vec<Supplier>> {
    Ok(repo.all_suppliers(city_id)?)
}

pub fn get_supplier<R: SupplierRepo>(repo: &R, id: Id) -> Result<Supplier> {
    repo.get_supplier(id).map_not_found(Error::SupplierNotFound)
}

pub fn update_supplier<R>(repo: &R, id: Id, input: ContactInput) -> Result<Supplier>
where
    R: SupplierRepo + CityRepo,
{
    get_supplier(repo, id)?;
    let ValidContact {
        name,
        email,
        phone,
        city_id,
    } = validate_contact(repo, input)?;
    let supplier = Supplier {
        id,
        name,
        email,
        phone,
        city_id,
    };
    repo.update_supplier(&supplier)
        .map_already_exists(Error::SupplierAlreadyExists)?;
    Ok(supplier)
}

pub fn delete_supplier<R>(repo: &R, id: Id) -> Result<()>
where
    R: SupplierRepo + BatchRepo,
{
    get_supplier(repo, id)?;
    let query = BatchQuery {
        supplier_id: Some(id),
        ..Default::default()
    };
    if !repo.query_batches(&query)?.is_empty() {
        return Err(Error::StillReferenced);
    }
    repo.delete_supplier(id)?;
    Ok(())
}
