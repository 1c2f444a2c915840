use super::*;

#[get("/categories")]
pub fn get_categories(db: sqlite::Connections) -> Result<Vec<json::Category>> {
    let categories = usecases::list_categories(&db.shared()?)?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[get("/categories/<id>")]
pub fn get_category(db: sqlite::Connections, id: i64) -> Result<json::Category> {
    let category = usecases::get_category(&db.shared()?, id.into())?;
    Ok(Json(category.into()))
}

#[post("/categories", format = "application/json", data = "<category>")]
pub fn post_category(
    db: sqlite::Connections,
    category: JsonResult<json::NewCategory>,
) -> Result<json::Category> {
    let json::NewCategory { name } = category?.into_inner();
    let category = usecases::create_category(&db.exclusive()?, &name)?;
    Ok(Json(category.into()))
}

#[put("/categories/<id>", format = "application/json", data = "<category>")]
pub fn put_category(
    db: sqlite::Connections,
    id: i64,
    category: JsonResult<json::NewCategory>,
) -> Result<json::Category> {
    let json::NewCategory { name } = category?.into_inner();
    let category = usecases::update_category(&db.exclusive()?, id.into(), &name)?;
    Ok(Json(category.into()))
}

#[delete("/categories/<id>")]
pub fn delete_category(db: sqlite::Connections, id: i64) -> StatusResult {
    usecases::delete_category(&db.exclusive()?, id.into())?;
    Ok(Status::NoContent)
}
