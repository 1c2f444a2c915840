use super::*;

#[get("/ngos?<city>")]
pub fn get_ngos(db: sqlite::Connections, city: Option<&str>) -> Result<Vec<json::Contact>> {
    let city_id = id_param(city, "city")?;
    let ngos = usecases::list_ngos(&db.shared()?, city_id)?;
    Ok(Json(ngos.into_iter().map(Into::into).collect()))
}

#[get("/ngos/<id>")]
pub fn get_ngo(db: sqlite::Connections, id: i64) -> Result<json::Contact> {
    let ngo = usecases::get_ngo(&db.shared()?, id.into())?;
    Ok(Json(ngo.into()))
}

#[post("/ngos", format = "application/json", data = "<ngo>")]
pub fn post_ngo(db: sqlite::Connections, ngo: JsonResult<json::NewContact>) -> Result<json::Contact> {
    let input = from_json::try_contact_input(ngo?.into_inner())?;
    let ngo = usecases::create_ngo(&db.exclusive()?, input)?;
    Ok(Json(ngo.into()))
}

#[put("/ngos/<id>", format = "application/json", data = "<ngo>")]
pub fn put_ngo(
    db: sqlite::Connections,
    id: i64,
    ngo: JsonResult<json::NewContact>,
) -> Result<json::Contact> {
    let input = from_json::try_contact_input(ngo?.into_inner())?;
    let ngo = usecases::update_ngo(&db.exclusive()?, id.into(), input)?;
    Ok(Json(ngo.into()))
}

#[delete("/ngos/<id>")]
pub fn delete_ngo(db: sqlite::Connections, id: i64) -> StatusResult {
    usecases::delete_ngo(&db.exclusive()?, id.into())?;
    Ok(Status::NoContent)
}
