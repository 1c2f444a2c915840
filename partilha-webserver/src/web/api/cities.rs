use super::*;

#[get("/cities")]
pub fn get_cities(db: sqlite::Connections) -> Result<Vec<json::City>> {
    let cities = usecases::list_cities(&db.shared()?)?;
    Ok(Json(cities.into_iter().map(Into::into).collect()))
}

#[get("/cities/<id>")]
pub fn get_city(db: sqlite::Connections, id: i64) -> Result<json::City> {
    let city = usecases::get_city(&db.shared()?, id.into())?;
    Ok(Json(city.into()))
}

#[post("/cities", format = "application/json", data = "<city>")]
pub fn post_city(db: sqlite::Connections, city: JsonResult<json::NewCity>) -> Result<json::City> {
    let input = from_json::city_input(city?.into_inner());
    let city = usecases::create_city(&db.exclusive()?, input)?;
    Ok(Json(city.into()))
}

#[put("/cities/<id>", format = "application/json", data = "<city>")]
pub fn put_city(
    db: sqlite::Connections,
    id: i64,
    city: JsonResult<json::NewCity>,
) -> Result<json::City> {
    let input = from_json::city_input(city?.into_inner());
    let city = usecases::update_city(&db.exclusive()?, id.into(), input)?;
    Ok(Json(city.into()))
}

#[delete("/cities/<id>")]
pub fn delete_city(db: sqlite::Connections, id: i64) -> StatusResult {
    usecases::delete_city(&db.exclusive()?, id.into())?;
    Ok(Status::NoContent)
}
