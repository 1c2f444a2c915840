use super::*;

impl<'a> BatchRepo for DbReadOnly<'a> {
    fn create_batch(&self, _batch: &NewBatch) -> Result<Id> {
        unreachable!();
    }
    fn get_batch(&self, id: Id) -> Result<Batch> {
        get_batch(&mut self.conn.borrow_mut(), id)
    }
    fn query_batches(&self, query: &BatchQuery) -> Result<Vec<Batch>> {
        query_batches(&mut self.conn.borrow_mut(), query)
    }
    fn update_batch(&self, _batch: &Batch) -> Result<()> {
        unreachable!();
    }
    fn delete_batch(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> BatchRepo for DbReadWrite<'a> {
    fn create_batch(&self, batch: &NewBatch) -> Result<Id> {
        create_batch(&mut self.conn.borrow_mut(), batch)
    }
    fn get_batch(&self, id: Id) -> Result<Batch> {
        get_batch(&mut self.conn.borrow_mut(), id)
    }
    fn query_batches(&self, query: &BatchQuery) -> Result<Vec<Batch>> {
        query_batches(&mut self.conn.borrow_mut(), query)
    }
    fn update_batch(&self, batch: &Batch) -> Result<()> {
        update_batch(&mut self.conn.borrow_mut(), batch)
    }
    fn delete_batch(&self, id: Id) -> Result<()> {
        delete_batch(&mut self.conn.borrow_mut(), id)
    }
}

fn load_batch(entity: models::BatchEntity) -> Result<Batch> {
    let models::BatchEntity {
        id,
        supplier_id,
        category_id,
        description,
        quantity,
        status,
        ngo_id,
        created_at,
        expires_at,
    } = entity;
    let quantity = u32::try_from(quantity)
        .map_err(|_| repo::Error::Other(anyhow!("Invalid batch quantity: {quantity}")))?;
    Ok(Batch {
        id: id.into(),
        supplier_id: supplier_id.into(),
        category_id: category_id.into(),
        description,
        quantity,
        status: load_batch_status(status)?,
        ngo_id: ngo_id.map(Into::into),
        created_at: Timestamp::from_millis(created_at),
        expires_at: expires_at.map(Timestamp::from_millis),
    })
}

fn create_batch(conn: &mut SqliteConnection, batch: &NewBatch) -> Result<Id> {
    let new_batch = models::NewBatch {
        supplier_id: batch.supplier_id.get(),
        category_id: batch.category_id.get(),
        description: &batch.description,
        quantity: batch.quantity.into(),
        status: store_batch_status(BatchStatus::Available),
        ngo_id: None,
        created_at: batch.created_at.as_millis(),
        expires_at: batch.expires_at.map(Timestamp::as_millis),
    };
    diesel::insert_into(schema::batches::table)
        .values(&new_batch)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn)
}

fn get_batch(conn: &mut SqliteConnection, id: Id) -> Result<Batch> {
    use schema::batches::dsl;
    dsl::batches
        .filter(dsl::id.eq(id.get()))
        .first::<models::BatchEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_batch)
}

fn query_batches(conn: &mut SqliteConnection, query: &BatchQuery) -> Result<Vec<Batch>> {
    use schema::{batches::dsl, suppliers::dsl as s_dsl};
    let BatchQuery {
        status,
        category_id,
        supplier_id,
        ngo_id,
        city_id,
    } = query;
    // The city of a batch is the city of its supplier
    let mut sql = schema::batches::table
        .inner_join(schema::suppliers::table)
        .select(schema::batches::all_columns)
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .into_boxed();
    if let Some(status) = status {
        sql = sql.filter(dsl::status.eq(store_batch_status(*status)));
    }
    if let Some(category_id) = category_id {
        sql = sql.filter(dsl::category_id.eq(category_id.get()));
    }
    if let Some(supplier_id) = supplier_id {
        sql = sql.filter(dsl::supplier_id.eq(supplier_id.get()));
    }
    if let Some(ngo_id) = ngo_id {
        sql = sql.filter(dsl::ngo_id.eq(ngo_id.get()));
    }
    if let Some(city_id) = city_id {
        sql = sql.filter(s_dsl::city_id.eq(city_id.get()));
    }
    sql.load::<models::BatchEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_batch)
        .collect()
}

fn update_batch(conn: &mut SqliteConnection, batch: &Batch) -> Result<()> {
    use schema::batches::dsl;
    let changes = models::NewBatch {
        supplier_id: batch.supplier_id.get(),
        category_id: batch.category_id.get(),
        description: &batch.description,
        quantity: batch.quantity.into(),
        status: store_batch_status(batch.status),
        ngo_id: batch.ngo_id.map(Id::get),
        created_at: batch.created_at.as_millis(),
        expires_at: batch.expires_at.map(Timestamp::as_millis),
    };
    let count = diesel::update(dsl::batches.filter(dsl::id.eq(batch.id.get())))
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_batch(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::batches::dsl;
    let count = diesel::delete(dsl::batches.filter(dsl::id.eq(id.get())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
