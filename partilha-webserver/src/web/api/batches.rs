use super::*;

#[get("/batches?<status>&<category>&<supplier>&<ngo>&<city>&<available_only>")]
pub fn get_batches(
    db: sqlite::Connections,
    status: Option<&str>,
    category: Option<&str>,
    supplier: Option<&str>,
    ngo: Option<&str>,
    city: Option<&str>,
    available_only: Option<&str>,
) -> Result<Vec<json::Batch>> {
    let raw = usecases::RawBatchFilter {
        status,
        category,
        supplier,
        ngo,
        city,
        available_only,
    };
    let query = usecases::parse_batch_filter(&raw)?;
    let batches = usecases::list_batches(&db.shared()?, &query)?;
    Ok(Json(batches.into_iter().map(Into::into).collect()))
}

#[get("/batches/<id>")]
pub fn get_batch(db: sqlite::Connections, id: i64) -> Result<json::Batch> {
    let batch = usecases::get_batch(&db.shared()?, id.into())?;
    Ok(Json(batch.into()))
}

#[post("/batches", format = "application/json", data = "<batch>")]
pub fn post_batch(db: sqlite::Connections, batch: JsonResult<json::NewBatch>) -> Result<json::Batch> {
    let input = from_json::try_batch_input(batch?.into_inner())?;
    let batch = usecases::create_batch(&db.exclusive()?, input)?;
    Ok(Json(batch.into()))
}

#[put("/batches/<id>", format = "application/json", data = "<batch>")]
pub fn put_batch(
    db: sqlite::Connections,
    id: i64,
    batch: JsonResult<json::NewBatch>,
) -> Result<json::Batch> {
    let input = from_json::try_batch_input(batch?.into_inner())?;
    let batch = usecases::update_batch(&db.exclusive()?, id.into(), input)?;
    Ok(Json(batch.into()))
}

#[delete("/batches/<id>")]
pub fn delete_batch(db: sqlite::Connections, id: i64) -> StatusResult {
    usecases::delete_batch(&db.exclusive()?, id.into())?;
    Ok(Status::NoContent)
}

#[post("/batches/<id>/reserve", format = "application/json", data = "<reserve>")]
pub fn post_reserve_batch(
    db: sqlite::Connections,
    id: i64,
    reserve: JsonResult<json::ReserveBatch>,
) -> Result<json::Batch> {
    let ngo_id = from_json::try_reserved_ngo(reserve?.into_inner())?;
    let batch = usecases::reserve_batch(&db.exclusive()?, id.into(), ngo_id)?;
    Ok(Json(batch.into()))
}

#[post("/batches/<id>/release")]
pub fn post_release_batch(db: sqlite::Connections, id: i64) -> Result<json::Batch> {
    let batch = usecases::release_batch(&db.exclusive()?, id.into())?;
    Ok(Json(batch.into()))
}

#[post("/batches/<id>/collect")]
pub fn post_collect_batch(db: sqlite::Connections, id: i64) -> Result<json::Batch> {
    let batch = usecases::collect_batch(&db.exclusive()?, id.into())?;
    Ok(Json(batch.into()))
}

#[post("/batches/<id>/cancel")]
pub fn post_cancel_batch(db: sqlite::Connections, id: i64) -> Result<json::Batch> {
    let batch = usecases::cancel_batch(&db.exclusive()?, id.into())?;
    Ok(Json(batch.into()))
}
