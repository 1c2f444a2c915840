use super::*;

#[get("/suppliers?<city>")]
pub fn get_suppliers(db: sqlite::Connections, city: Option<&str>) -> Result<Vec<json::Contact>> {
    let city_id = id_param(city, "city")?;
    let suppliers = usecases::list_suppliers(&db.shared()?, city_id)?;
    Ok(Json(suppliers.into_iter().map(Into::into).collect()))
}

#[get("/suppliers/<id>")]
pub fn get_supplier(db: sqlite::Connections, id: i64) -> Result<json::Contact> {
    let supplier = usecases::get_supplier(&db.shared()?, id.into())?;
    Ok(Json(supplier.into()))
}

#[post("/suppliers", format = "application/json", data = "<supplier>")]
pub fn post_supplier(
    db: sqlite::Connections,
    supplier: JsonResult<json::NewContact>,
) -> Result<json::Contact> {
    let input = from_json::try_contact_input(supplier?.into_inner())?;
    let supplier = usecases::create_supplier(&db.exclusive()?, input)?;
    Ok(Json(supplier.into()))
}

#[put("/suppliers/<id>", format = "application/json", data = "<supplier>")]
pub fn put_supplier(
    db: sqlite::Connections,
    id: i64,
    supplier: JsonResult<json::NewContact>,
) -> Result<json::Contact> {
    let input = from_json::try_contact_input(supplier?.into_inner())?;
    let supplier = usecases::update_supplier(&db.exclusive()?, id.into(), input)?;
    Ok(Json(supplier.into()))
}

#[delete("/suppliers/<id>")]
pub fn delete_supplier(db: sqlite::Connections, id: i64) -> StatusResult {
    usecases::delete_supplier(&db.exclusive()?, id.into())?;
    Ok(Status::NoContent)
}
