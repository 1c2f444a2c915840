use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct BatchInput {
    pub supplier_id: Id,
    pub category_id: Id,
    pub description: String,
    pub quantity: i64,
    pub expires_at: Option<Timestamp>,
}

#[derive(Debug)]
struct ValidBatch {
    supplier_id: Id,
    category_id: Id,
    description: String,
    quantity: u32,
    expires_at: Option<Timestamp>,
}

fn validate_batch<R>(repo: &R, input: BatchInput) -> Result<ValidBatch>
where
    R: SupplierRepo + CategoryRepo,
{
    let BatchInput {
        supplier_id,
        category_id,
        description,
        quantity,
        expires_at,
    } = input;
    let description = description.trim();
    if validate::is_blank(description) {
        return Err(Error::EmptyDescription);
    }
    let quantity = u32::try_from(quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or(Error::Quantity)?;
    repo.get_supplier(supplier_id)
        .map_not_found(Error::SupplierNotFound)?;
    repo.get_category(category_id)
        .map_not_found(Error::CategoryNotFound)?;
    Ok(ValidBatch {
        supplier_id,
        category_id,
        description: description.to_owned(),
        quantity,
        expires_at,
    })
}

pub fn create_batch<R>(repo: &R, input: BatchInput) -> Result<Batch>
where
    R: BatchRepo + SupplierRepo + CategoryRepo,
{
    let ValidBatch {
        supplier_id,
        category_id,
        description,
        quantity,
        expires_at,
    } = validate_batch(repo, input)?;
    let new_batch = NewBatch {
        supplier_id,
        category_id,
        description,
        quantity,
        created_at: Timestamp::now(),
        expires_at,
    };
    let id = repo.create_batch(&new_batch)?;
    log::debug!("Created batch {id} of supplier {supplier_id}");
    Ok(repo.get_batch(id)?)
}

pub fn get_batch<R: BatchRepo>(repo: &R, id: Id) -> Result<Batch> {
    repo.get_batch(id).map_not_found(Error::BatchNotFound)
}

/// Unparsed filter criteria as received from query strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawBatchFilter<'a> {
    pub status: Option<&'a str>,
    pub category: Option<&'a str>,
    pub supplier: Option<&'a str>,
    pub ngo: Option<&'a str>,
    pub city: Option<&'a str>,
    pub available_only: Option<&'a str>,
}

fn parse_id_param(value: Option<&str>, name: &'static str) -> Result<Option<Id>> {
    value
        .map(|v| {
            if !validate::is_positive_integer(v) {
                return Err(Error::InvalidParameter(name));
            }
            v.parse::<Id>().map_err(|_| Error::InvalidParameter(name))
        })
        .transpose()
}

pub fn parse_batch_filter(raw: &RawBatchFilter) -> Result<BatchQuery> {
    let mut status = raw
        .status
        .map(|s| {
            s.trim()
                .to_lowercase()
                .parse::<BatchStatus>()
                .map_err(|_| Error::InvalidParameter("status"))
        })
        .transpose()?;
    if validate::parse_bool_or(raw.available_only, false) {
        if status.is_some_and(|s| s != BatchStatus::Available) {
            return Err(Error::InvalidParameter("status"));
        }
        status = Some(BatchStatus::Available);
    }
    Ok(BatchQuery {
        status,
        category_id: parse_id_param(raw.category, "category")?,
        supplier_id: parse_id_param(raw.supplier, "supplier")?,
        ngo_id: parse_id_param(raw.ngo, "ngo")?,
        city_id: parse_id_param(raw.city, "city")?,
    })
}

pub fn list_batches<R: BatchRepo>(repo: &R, query: &BatchQuery) -> Result<Vec<Batch>> {
    Ok(repo.query_batches(query)?)
}

/// Only available batches can be edited.
pub fn update_batch<R>(repo: &R, id: Id, input: BatchInput) -> Result<Batch>
where
    R: BatchRepo + SupplierRepo + CategoryRepo,
{
    let mut batch = get_batch(repo, id)?;
    if batch.status != BatchStatus::Available {
        return Err(Error::BatchUnavailable);
    }
    let ValidBatch {
        supplier_id,
        category_id,
        description,
        quantity,
        expires_at,
    } = validate_batch(repo, input)?;
    batch.supplier_id = supplier_id;
    batch.category_id = category_id;
    batch.description = description;
    batch.quantity = quantity;
    batch.expires_at = expires_at;
    repo.update_batch(&batch)?;
    Ok(batch)
}

pub fn delete_batch<R: BatchRepo>(repo: &R, id: Id) -> Result<()> {
    get_batch(repo, id)?;
    repo.delete_batch(id)?;
    Ok(())
}

fn is_reservable(batch: &Batch, now: Timestamp) -> bool {
    batch.status == BatchStatus::Available && batch.expires_at.map_or(true, |at| at > now)
}

pub fn reserve_batch<R>(repo: &R, id: Id, ngo_id: Id) -> Result<Batch>
where
    R: BatchRepo + NgoRepo,
{
    repo.get_ngo(ngo_id).map_not_found(Error::NgoNotFound)?;
    let mut batch = get_batch(repo, id)?;
    if !is_reservable(&batch, Timestamp::now()) {
        return Err(Error::BatchUnavailable);
    }
    batch.status = batch.status.change_to(BatchStatus::Reserved)?;
    batch.ngo_id = Some(ngo_id);
    repo.update_batch(&batch)?;
    log::info!("Batch {id} has been reserved by NGO {ngo_id}");
    Ok(batch)
}

pub fn release_batch<R: BatchRepo>(repo: &R, id: Id) -> Result<Batch> {
    let mut batch = get_batch(repo, id)?;
    batch.status = batch.status.change_to(BatchStatus::Available)?;
    batch.ngo_id = None;
    repo.update_batch(&batch)?;
    Ok(batch)
}

pub fn collect_batch<R: BatchRepo>(repo: &R, id: Id) -> Result<Batch> {
    let mut batch = get_batch(repo, id)?;
    batch.status = batch.status.change_to(BatchStatus::Collected)?;
    repo.update_batch(&batch)?;
    log::info!("Batch {id} has been collected");
    Ok(batch)
}

pub fn cancel_batch<R: BatchRepo>(repo: &R, id: Id) -> Result<Batch> {
    let mut batch = get_batch(repo, id)?;
    batch.status = batch.status.change_to(BatchStatus::Canceled)?;
    repo.update_batch(&batch)?;
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::*, *},
        *,
    };

    fn input(fixture: &DonationFixture, quantity: i64) -> BatchInput {
        BatchInput {
            supplier_id: fixture.supplier_id,
            category_id: fixture.category_id,
            description: "Rice, 5kg bags".into(),
            quantity,
            expires_at: None,
        }
    }

    #[test]
    fn create_available_batch() {
        let db = MockDb::default();
        let fixture = DonationFixture::new(&db);
        let batch = create_batch(&db, input(&fixture, 20)).unwrap();
        assert_eq!(BatchStatus::Available, batch.status);
        assert_eq!(20, batch.quantity);
        assert_eq!(None, batch.ngo_id);
    }

    #[test]
    fn reject_invalid_batches() {
        let db = MockDb::default();
        let fixture = DonationFixture::new(&db);
        assert!(matches!(
            create_batch(&db, input(&fixture, 0)),
            Err(Error::Quantity)
        ));
        assert!(matches!(
            create_batch(&db, input(&fixture, -3)),
            Err(Error::Quantity)
        ));
        let mut blank = input(&fixture, 1);
        blank.description = " ".into();
        assert!(matches!(
            create_batch(&db, blank),
            Err(Error::EmptyDescription)
        ));
        let mut unknown_supplier = input(&fixture, 1);
        unknown_supplier.supplier_id = Id::new(99);
        assert!(matches!(
            create_batch(&db, unknown_supplier),
            Err(Error::SupplierNotFound)
        ));
        let mut unknown_category = input(&fixture, 1);
        unknown_category.category_id = Id::new(99);
        assert!(matches!(
            create_batch(&db, unknown_category),
            Err(Error::CategoryNotFound)
        ));
    }

    #[test]
    fn reserve_and_collect() {
        let db = MockDb::default();
        let fixture = DonationFixture::new(&db);
        let ngo = db.add_ngo(fixture.city_id);
        assert!(matches!(
            reserve_batch(&db, fixture.batch_id, Id::new(99)),
            Err(Error::NgoNotFound)
        ));
        let reserved = reserve_batch(&db, fixture.batch_id, ngo).unwrap();
        assert_eq!(BatchStatus::Reserved, reserved.status);
        assert_eq!(Some(ngo), reserved.ngo_id);
        assert!(matches!(
            reserve_batch(&db, fixture.batch_id, ngo),
            Err(Error::BatchUnavailable)
        ));
        assert!(matches!(
            cancel_batch(&db, fixture.batch_id),
            Err(Error::InvalidStatusTransition(_))
        ));
        let collected = collect_batch(&db, fixture.batch_id).unwrap();
        assert_eq!(BatchStatus::Collected, collected.status);
        assert_eq!(Some(ngo), get_batch(&db, fixture.batch_id).unwrap().ngo_id);
        assert!(matches!(
            release_batch(&db, fixture.batch_id),
            Err(Error::InvalidStatusTransition(_))
        ));
    }

    #[test]
    fn release_reserved_batch() {
        let db = MockDb::default();
        let fixture = DonationFixture::new(&db);
        let ngo = db.add_ngo(fixture.city_id);
        reserve_batch(&db, fixture.batch_id, ngo).unwrap();
        let released = release_batch(&db, fixture.batch_id).unwrap();
        assert_eq!(BatchStatus::Available, released.status);
        assert_eq!(None, released.ngo_id);
    }

    #[test]
    fn cancel_available_batch() {
        let db = MockDb::default();
        let fixture = DonationFixture::new(&db);
        assert!(matches!(
            collect_batch(&db, fixture.batch_id),
            Err(Error::InvalidStatusTransition(_))
        ));
        cancel_batch(&db, fixture.batch_id).unwrap();
        assert!(matches!(
            update_batch(&db, fixture.batch_id, input(&fixture, 3)),
            Err(Error::BatchUnavailable)
        ));
    }

    #[test]
    fn do_not_reserve_expired_batches() {
        let db = MockDb::default();
        let fixture = DonationFixture::new(&db);
        let ngo = db.add_ngo(fixture.city_id);
        let mut expired = input(&fixture, 1);
        expired.expires_at = Some(Timestamp::from_millis(1));
        let batch = create_batch(&db, expired).unwrap();
        assert!(matches!(
            reserve_batch(&db, batch.id, ngo),
            Err(Error::BatchUnavailable)
        ));
    }

    #[test]
    fn parse_filter_from_query_strings() {
        let query = parse_batch_filter(&RawBatchFilter {
            status: Some("Reserved"),
            category: Some("3"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(Some(BatchStatus::Reserved), query.status);
        assert_eq!(Some(Id::new(3)), query.category_id);
        assert_eq!(None, query.city_id);

        let query = parse_batch_filter(&RawBatchFilter {
            available_only: Some("true"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(Some(BatchStatus::Available), query.status);

        let query = parse_batch_filter(&RawBatchFilter {
            available_only: Some("whatever"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(None, query.status);
    }

    #[test]
    fn reject_invalid_filters() {
        let invalid = [
            RawBatchFilter {
                status: Some("lost"),
                ..Default::default()
            },
            RawBatchFilter {
                supplier: Some("0"),
                ..Default::default()
            },
            RawBatchFilter {
                city: Some("abc"),
                ..Default::default()
            },
            RawBatchFilter {
                status: Some("collected"),
                available_only: Some("1"),
                ..Default::default()
            },
        ];
        for raw in &invalid {
            assert!(matches!(
                parse_batch_filter(raw),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn filter_batches() {
        let db = MockDb::default();
        let fixture = DonationFixture::new(&db);
        let ngo = db.add_ngo(fixture.city_id);
        create_batch(&db, input(&fixture, 2)).unwrap();
        reserve_batch(&db, fixture.batch_id, ngo).unwrap();
        let available = BatchQuery {
            status: Some(BatchStatus::Available),
            ..Default::default()
        };
        assert_eq!(1, list_batches(&db, &available).unwrap().len());
        let by_ngo = BatchQuery {
            ngo_id: Some(ngo),
            ..Default::default()
        };
        assert_eq!(
            vec![fixture.batch_id],
            list_batches(&db, &by_ngo)
                .unwrap()
                .iter()
                .map(|b| b.id)
                .collect::<Vec<_>>()
        );
        let by_city = BatchQuery {
            city_id: Some(fixture.city_id),
            ..Default::default()
        };
        assert_eq!(2, list_batches(&db, &by_city).unwrap().len());
    }
}
