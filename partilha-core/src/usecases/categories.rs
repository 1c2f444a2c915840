use super::prelude::*;
use crate::util::validate;

fn category_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if validate::is_blank(name) {
        return Err(Error::EmptyName);
    }
    Ok(name)
}

pub fn create_category<R: CategoryRepo>(repo: &R, name: &str) -> Result<Category> {
    let name = category_name(name)?;
    let id = repo
        .create_category(name)
        .map_already_exists(Error::CategoryAlreadyExists)?;
    Ok(Category {
        id,
        name: name.to_owned(),
    })
}

pub fn list_categories<R: CategoryRepo>(repo: &R) -> Result<Vec<Category>> {
    Ok(repo.all_categories()?)
}

pub fn get_category<R: CategoryRepo>(repo: &R, id: Id) -> Result<Category> {
    repo.get_category(id).map_not_found(Error::CategoryNotFound)
}

pub fn update_category<R: CategoryRepo>(repo: &R, id: Id, name: &str) -> Result<Category> {
    let name = category_name(name)?;
    let mut category = get_category(repo, id)?;
    category.name = name.to_owned();
    repo.update_category(&category)
        .map_already_exists(Error::CategoryAlreadyExists)?;
    Ok(category)
}

pub fn delete_category<R>(repo: &R, id: Id) -> Result<()>
where
    R: CategoryRepo + BatchRepo,
{
    get_category(repo, id)?;
    let query = BatchQuery {
        category_id: Some(id),
        ..Default::default()
    };
    if !repo.query_batches(&query)?.is_empty() {
        return Err(Error::StillReferenced);
    }
    repo.delete_category(id)?;
    Ok(())
}
