use std::{
    cell::{Cell, RefCell},
    result,
};

use anyhow::{anyhow, Result as Fallible};

use crate::{
    entities::*,
    gateways::metadata::{DiscoverFilter, MediaSearch, MetadataGateway},
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> Id;
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(impl Key for $t {
            fn key(&self) -> Id {
                self.id
            }
        })*
    };
}

impl_key!(
    User,
    MediaRecord,
    Comment,
    Rating,
    Friendship,
    Notification,
    WatchList,
    Category,
    City,
    Supplier,
    Ngo,
    Batch
);

fn get<T: Clone + Key>(objects: &[T], id: Id) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    let x = objects
        .iter_mut()
        .find(|x| x.key() == e.key())
        .ok_or(RepoError::NotFound)?;
    *x = e.clone();
    Ok(())
}

fn delete<T: Key>(objects: &mut Vec<T>, id: Id) -> RepoResult<()> {
    let len = objects.len();
    objects.retain(|x| x.key() != id);
    if objects.len() == len {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct MockDb {
    last_id: Cell<i64>,
    pub users: RefCell<Vec<User>>,
    pub refresh_tokens: RefCell<Vec<RefreshToken>>,
    pub media: RefCell<Vec<MediaRecord>>,
    pub comments: RefCell<Vec<Comment>>,
    pub ratings: RefCell<Vec<Rating>>,
    pub friendships: RefCell<Vec<Friendship>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub watch_lists: RefCell<Vec<WatchList>>,
    pub watch_list_items: RefCell<Vec<WatchListItem>>,
    pub categories: RefCell<Vec<Category>>,
    pub cities: RefCell<Vec<City>>,
    pub suppliers: RefCell<Vec<Supplier>>,
    pub ngos: RefCell<Vec<Ngo>>,
    pub batches: RefCell<Vec<Batch>>,
}

impl MockDb {
    fn next_id(&self) -> Id {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        Id::new(id)
    }

    pub fn add_user(&self, name: &str) -> Id {
        let new_user = NewUser {
            name: name.into(),
            email: EmailAddress::new_unchecked(format!("{}@example.com", name.to_lowercase())),
            password: Password::from_hash(String::new()),
            created_at: Timestamp::now(),
        };
        self.create_user(&new_user).unwrap()
    }

    pub fn add_media(&self, external_id: i64) -> Id {
        self.create_media(&NewMediaRecord {
            external_id,
            media_type: MediaType::Movie,
        })
        .unwrap()
    }

    pub fn add_city(&self, name: &str, state: &str) -> Id {
        self.create_city(&NewCity {
            name: name.into(),
            state: state.into(),
        })
        .unwrap()
    }

    pub fn add_ngo(&self, city_id: Id) -> Id {
        let n = self.ngos.borrow().len();
        self.create_ngo(&NewNgo {
            name: format!("NGO {n}"),
            email: EmailAddress::new_unchecked(format!("ngo{n}@example.org")),
            phone: None,
            city_id,
        })
        .unwrap()
    }
}

/// A city with a supplier that offers one available batch.
#[derive(Debug)]
pub struct DonationFixture {
    pub city_id: Id,
    pub category_id: Id,
    pub supplier_id: Id,
    pub batch_id: Id,
}

impl DonationFixture {
    pub fn new(db: &MockDb) -> Self {
        let city_id = db.add_city("Campinas", "SP");
        let category_id = db.create_category("Food").unwrap();
        let supplier_id = db
            .create_supplier(&NewSupplier {
                name: "Mercado Bom Preço".into(),
                email: EmailAddress::new_unchecked("mercado@example.com".into()),
                phone: None,
                city_id,
            })
            .unwrap();
        let batch_id = db
            .create_batch(&NewBatch {
                supplier_id,
                category_id,
                description: "Beans".into(),
                quantity: 10,
                created_at: Timestamp::now(),
                expires_at: None,
            })
            .unwrap();
        Self {
            city_id,
            category_id,
            supplier_id,
            batch_id,
        }
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, u: &NewUser) -> RepoResult<Id> {
        if self.users.borrow().iter().any(|x| x.email == u.email) {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.users.borrow_mut().push(User {
            id,
            name: u.name.clone(),
            email: u.email.clone(),
            password: u.password.clone(),
            created_at: u.created_at,
        });
        Ok(id)
    }

    fn get_user(&self, id: Id) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn get_users(&self, ids: &[Id]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}

impl RefreshTokenRepo for MockDb {
    fn create_refresh_token(&self, token: &RefreshToken) -> RepoResult<()> {
        self.refresh_tokens.borrow_mut().push(token.clone());
        Ok(())
    }

    fn get_refresh_token(&self, token: &str) -> RepoResult<RefreshToken> {
        self.refresh_tokens
            .borrow()
            .iter()
            .find(|x| x.token == token)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn consume_refresh_token(&self, token: &str) -> RepoResult<RefreshToken> {
        let mut tokens = self.refresh_tokens.borrow_mut();
        let index = tokens
            .iter()
            .position(|x| x.token == token)
            .ok_or(RepoError::NotFound)?;
        Ok(tokens.swap_remove(index))
    }

    fn delete_expired_refresh_tokens(&self, expired_before: Timestamp) -> RepoResult<usize> {
        let len_before = self.refresh_tokens.borrow().len();
        self.refresh_tokens
            .borrow_mut()
            .retain(|x| !x.is_expired(expired_before));
        Ok(len_before - self.refresh_tokens.borrow().len())
    }
}

impl MediaRepo for MockDb {
    fn find_media(&self, external_id: i64, media_type: MediaType) -> RepoResult<Option<MediaRecord>> {
        Ok(self
            .media
            .borrow()
            .iter()
            .find(|m| m.external_id == external_id && m.media_type == media_type)
            .cloned())
    }

    fn create_media(&self, media: &NewMediaRecord) -> RepoResult<Id> {
        if self.find_media(media.external_id, media.media_type)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.media.borrow_mut().push(MediaRecord {
            id,
            external_id: media.external_id,
            media_type: media.media_type,
        });
        Ok(id)
    }

    fn get_media(&self, id: Id) -> RepoResult<MediaRecord> {
        get(&self.media.borrow(), id)
    }
}

impl CommentRepo for MockDb {
    fn load_comments_of_media(&self, media_id: Id) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.media_id == media_id)
            .cloned()
            .collect())
    }

    fn load_comment(&self, id: Id) -> RepoResult<Comment> {
        get(&self.comments.borrow(), id)
    }

    fn create_comment(&self, c: &NewComment) -> RepoResult<Id> {
        let id = self.next_id();
        self.comments.borrow_mut().push(Comment {
            id,
            user_id: Some(c.user_id),
            media_id: c.media_id,
            parent_id: c.parent_id,
            content: c.content.clone(),
            created_at: c.created_at,
            updated_at: None,
            deleted_at: None,
        });
        Ok(id)
    }

    fn update_comment_content(&self, id: Id, content: &str, updated_at: Timestamp) -> RepoResult<()> {
        let mut comment = self.load_comment(id)?;
        comment.content = content.into();
        comment.updated_at = Some(updated_at);
        update(&mut self.comments.borrow_mut(), &comment)
    }

    fn soft_delete_comment(&self, id: Id, deleted_at: Timestamp) -> RepoResult<()> {
        let mut comment = self.load_comment(id)?;
        comment.content.clear();
        comment.user_id = None;
        comment.deleted_at = Some(deleted_at);
        update(&mut self.comments.borrow_mut(), &comment)
    }
}

impl RatingRepo for MockDb {
    fn try_get_rating(&self, user_id: Id, media_id: Id) -> RepoResult<Option<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .find(|r| r.user_id == user_id && r.media_id == media_id)
            .cloned())
    }

    fn create_rating(&self, r: &NewRating) -> RepoResult<Id> {
        if self.try_get_rating(r.user_id, r.media_id)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.ratings.borrow_mut().push(Rating {
            id,
            user_id: r.user_id,
            media_id: r.media_id,
            value: r.value,
            created_at: r.created_at,
        });
        Ok(id)
    }

    fn update_rating_value(&self, id: Id, value: RatingValue) -> RepoResult<()> {
        let mut rating = get(&self.ratings.borrow(), id)?;
        rating.value = value;
        update(&mut self.ratings.borrow_mut(), &rating)
    }

    fn load_ratings_of_media(&self, media_id: Id) -> RepoResult<Vec<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .filter(|r| r.media_id == media_id)
            .cloned()
            .collect())
    }
}

impl FriendshipRepo for MockDb {
    fn create_friendship(&self, f: &NewFriendship) -> RepoResult<Id> {
        if self
            .try_get_friendship_between(f.requester_id, f.addressee_id)?
            .is_some()
        {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.friendships.borrow_mut().push(Friendship {
            id,
            requester_id: f.requester_id,
            addressee_id: f.addressee_id,
            status: FriendshipStatus::Pending,
            created_at: f.created_at,
        });
        Ok(id)
    }

    fn get_friendship(&self, id: Id) -> RepoResult<Friendship> {
        get(&self.friendships.borrow(), id)
    }

    fn try_get_friendship_between(&self, a: Id, b: Id) -> RepoResult<Option<Friendship>> {
        Ok(self
            .friendships
            .borrow()
            .iter()
            .find(|f| f.involves(a) && f.involves(b))
            .cloned())
    }

    fn update_friendship_status(&self, id: Id, status: FriendshipStatus) -> RepoResult<()> {
        let mut friendship = self.get_friendship(id)?;
        friendship.status = status;
        update(&mut self.friendships.borrow_mut(), &friendship)
    }

    fn delete_friendship(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.friendships.borrow_mut(), id)
    }

    fn load_friendships_of_user(
        &self,
        user_id: Id,
        status: Option<FriendshipStatus>,
    ) -> RepoResult<Vec<Friendship>> {
        Ok(self
            .friendships
            .borrow()
            .iter()
            .filter(|f| f.involves(user_id) && status.map_or(true, |s| s == f.status))
            .cloned()
            .collect())
    }
}

impl NotificationRepo for MockDb {
    fn create_notification(&self, n: &NewNotification) -> RepoResult<Id> {
        let id = self.next_id();
        self.notifications.borrow_mut().push(Notification {
            id,
            user_id: n.user_id,
            actor_id: n.actor_id,
            kind: n.kind,
            reference_id: n.reference_id,
            read: false,
            created_at: n.created_at,
        });
        Ok(id)
    }

    fn get_notification(&self, id: Id) -> RepoResult<Notification> {
        get(&self.notifications.borrow(), id)
    }

    fn load_notifications_of_user(
        &self,
        user_id: Id,
        unread_only: bool,
    ) -> RepoResult<Vec<Notification>> {
        let mut notifications: Vec<_> = self
            .notifications
            .borrow()
            .iter()
            .filter(|n| n.user_id == user_id && !(unread_only && n.read))
            .cloned()
            .collect();
        notifications.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(notifications)
    }

    fn mark_notification_read(&self, id: Id) -> RepoResult<()> {
        let mut notification = self.get_notification(id)?;
        notification.read = true;
        update(&mut self.notifications.borrow_mut(), &notification)
    }
}

impl WatchListRepo for MockDb {
    fn create_watch_list(&self, w: &NewWatchList) -> RepoResult<Id> {
        let id = self.next_id();
        self.watch_lists.borrow_mut().push(WatchList {
            id,
            user_id: w.user_id,
            name: w.name.clone(),
            created_at: w.created_at,
        });
        Ok(id)
    }

    fn get_watch_list(&self, id: Id) -> RepoResult<WatchList> {
        get(&self.watch_lists.borrow(), id)
    }

    fn load_watch_lists_of_user(&self, user_id: Id) -> RepoResult<Vec<WatchList>> {
        Ok(self
            .watch_lists
            .borrow()
            .iter()
            .filter(|w| w.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    fn delete_watch_list(&self, id: Id) -> RepoResult<()> {
        self.watch_list_items
            .borrow_mut()
            .retain(|x| x.watch_list_id != id);
        delete(&mut self.watch_lists.borrow_mut(), id)
    }

    fn add_watch_list_item(&self, item: &WatchListItem) -> RepoResult<()> {
        let mut items = self.watch_list_items.borrow_mut();
        if items
            .iter()
            .any(|x| x.watch_list_id == item.watch_list_id && x.media_id == item.media_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        items.push(item.clone());
        Ok(())
    }

    fn remove_watch_list_item(&self, watch_list_id: Id, media_id: Id) -> RepoResult<()> {
        let mut items = self.watch_list_items.borrow_mut();
        let index = items
            .iter()
            .position(|x| x.watch_list_id == watch_list_id && x.media_id == media_id)
            .ok_or(RepoError::NotFound)?;
        items.remove(index);
        Ok(())
    }

    fn load_watch_list_items(&self, watch_list_id: Id) -> RepoResult<Vec<WatchListItem>> {
        Ok(self
            .watch_list_items
            .borrow()
            .iter()
            .filter(|x| x.watch_list_id == watch_list_id)
            .cloned()
            .collect())
    }
}

impl CategoryRepo for MockDb {
    fn create_category(&self, name: &str) -> RepoResult<Id> {
        if self.categories.borrow().iter().any(|c| c.name == name) {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.categories.borrow_mut().push(Category {
            id,
            name: name.into(),
        });
        Ok(id)
    }

    fn get_category(&self, id: Id) -> RepoResult<Category> {
        get(&self.categories.borrow(), id)
    }

    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }

    fn update_category(&self, category: &Category) -> RepoResult<()> {
        if self
            .categories
            .borrow()
            .iter()
            .any(|c| c.name == category.name && c.id != category.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        update(&mut self.categories.borrow_mut(), category)
    }

    fn delete_category(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.categories.borrow_mut(), id)
    }
}

impl CityRepo for MockDb {
    fn create_city(&self, city: &NewCity) -> RepoResult<Id> {
        if self
            .cities
            .borrow()
            .iter()
            .any(|c| c.name == city.name && c.state == city.state)
        {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.cities.borrow_mut().push(City {
            id,
            name: city.name.clone(),
            state: city.state.clone(),
        });
        Ok(id)
    }

    fn get_city(&self, id: Id) -> RepoResult<City> {
        get(&self.cities.borrow(), id)
    }

    fn all_cities(&self) -> RepoResult<Vec<City>> {
        Ok(self.cities.borrow().clone())
    }

    fn update_city(&self, city: &City) -> RepoResult<()> {
        if self
            .cities
            .borrow()
            .iter()
            .any(|c| c.name == city.name && c.state == city.state && c.id != city.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        update(&mut self.cities.borrow_mut(), city)
    }

    fn delete_city(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.cities.borrow_mut(), id)
    }
}

impl SupplierRepo for MockDb {
    fn create_supplier(&self, s: &NewSupplier) -> RepoResult<Id> {
        if self.suppliers.borrow().iter().any(|x| x.email == s.email) {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.suppliers.borrow_mut().push(Supplier {
            id,
            name: s.name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            city_id: s.city_id,
        });
        Ok(id)
    }

    fn get_supplier(&self, id: Id) -> RepoResult<Supplier> {
        get(&self.suppliers.borrow(), id)
    }

    fn all_suppliers(&self, city_id: Option<Id>) -> RepoResult<Vec<Supplier>> {
        Ok(self
            .suppliers
            .borrow()
            .iter()
            .filter(|s| city_id.map_or(true, |id| id == s.city_id))
            .cloned()
            .collect())
    }

    fn update_supplier(&self, supplier: &Supplier) -> RepoResult<()> {
        if self
            .suppliers
            .borrow()
            .iter()
            .any(|x| x.email == supplier.email && x.id != supplier.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        update(&mut self.suppliers.borrow_mut(), supplier)
    }

    fn delete_supplier(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.suppliers.borrow_mut(), id)
    }
}

impl NgoRepo for MockDb {
    fn create_ngo(&self, n: &NewNgo) -> RepoResult<Id> {
        if self.ngos.borrow().iter().any(|x| x.email == n.email) {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.ngos.borrow_mut().push(Ngo {
            id,
            name: n.name.clone(),
            email: n.email.clone(),
            phone: n.phone.clone(),
            city_id: n.city_id,
        });
        Ok(id)
    }

    fn get_ngo(&self, id: Id) -> RepoResult<Ngo> {
        get(&self.ngos.borrow(), id)
    }

    fn all_ngos(&self, city_id: Option<Id>) -> RepoResult<Vec<Ngo>> {
        Ok(self
            .ngos
            .borrow()
            .iter()
            .filter(|n| city_id.map_or(true, |id| id == n.city_id))
            .cloned()
            .collect())
    }

    fn update_ngo(&self, ngo: &Ngo) -> RepoResult<()> {
        if self
            .ngos
            .borrow()
            .iter()
            .any(|x| x.email == ngo.email && x.id != ngo.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        update(&mut self.ngos.borrow_mut(), ngo)
    }

    fn delete_ngo(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.ngos.borrow_mut(), id)
    }
}

impl BatchRepo for MockDb {
    fn create_batch(&self, b: &NewBatch) -> RepoResult<Id> {
        let id = self.next_id();
        self.batches.borrow_mut().push(Batch {
            id,
            supplier_id: b.supplier_id,
            category_id: b.category_id,
            description: b.description.clone(),
            quantity: b.quantity,
            status: BatchStatus::Available,
            ngo_id: None,
            created_at: b.created_at,
            expires_at: b.expires_at,
        });
        Ok(id)
    }

    fn get_batch(&self, id: Id) -> RepoResult<Batch> {
        get(&self.batches.borrow(), id)
    }

    fn query_batches(&self, query: &BatchQuery) -> RepoResult<Vec<Batch>> {
        let suppliers = self.suppliers.borrow();
        let city_of_supplier = |supplier_id: Id| {
            suppliers
                .iter()
                .find(|s| s.id == supplier_id)
                .map(|s| s.city_id)
        };
        let mut batches: Vec<_> = self
            .batches
            .borrow()
            .iter()
            .filter(|b| {
                query.status.map_or(true, |s| s == b.status)
                    && query.category_id.map_or(true, |id| id == b.category_id)
                    && query.supplier_id.map_or(true, |id| id == b.supplier_id)
                    && query.ngo_id.map_or(true, |id| Some(id) == b.ngo_id)
                    && query
                        .city_id
                        .map_or(true, |id| Some(id) == city_of_supplier(b.supplier_id))
            })
            .cloned()
            .collect();
        batches.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(batches)
    }

    fn update_batch(&self, batch: &Batch) -> RepoResult<()> {
        update(&mut self.batches.borrow_mut(), batch)
    }

    fn delete_batch(&self, id: Id) -> RepoResult<()> {
        delete(&mut self.batches.borrow_mut(), id)
    }
}

/// Serves a fixed list of items.
#[derive(Debug, Default)]
pub struct DummyMetadataGateway {
    pub results: Vec<ExternalMedia>,
    pub fail: bool,
}

impl DummyMetadataGateway {
    fn page(&self) -> Fallible<MediaPage<ExternalMedia>> {
        if self.fail {
            return Err(anyhow!("The metadata provider is not available"));
        }
        Ok(MediaPage {
            page: 1,
            total_pages: 1,
            total_results: self.results.len() as u32,
            results: self.results.clone(),
        })
    }
}

impl MetadataGateway for DummyMetadataGateway {
    fn search(&self, _: &MediaSearch) -> Fallible<MediaPage<ExternalMedia>> {
        self.page()
    }

    fn discover(&self, _: &DiscoverFilter) -> Fallible<MediaPage<ExternalMedia>> {
        self.page()
    }

    fn get_details(
        &self,
        media_type: MediaType,
        external_id: i64,
    ) -> Fallible<Option<MediaDetails>> {
        Ok(self.page()?.results.into_iter().find_map(|media| {
            (media.media_type == media_type && media.external_id == external_id).then(|| {
                MediaDetails {
                    media,
                    genres: vec![],
                    runtime: None,
                    number_of_seasons: None,
                    number_of_episodes: None,
                }
            })
        }))
    }
}
