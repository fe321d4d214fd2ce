use crate::error::{ServiceError, ServiceResult};
use crate::models::UserRecord;
use tracing::{debug, trace};

/// Append-only, in-memory collection of [`UserRecord`]s.
///
/// Records are kept in insertion order. Ids are not checked for uniqueness;
/// lookups return the earliest record with a matching id.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<UserRecord>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    pub fn add(&mut self, user: UserRecord) {
        debug!(id = user.id(), "Adding user");
        self.users.push(user);
    }

    /// Forward scan for the first record with `id`.
    pub fn find_by_id(&self, id: u64) -> Option<&UserRecord> {
        let found = self.users.iter().find(|user| user.id() == id);
        if found.is_none() {
            trace!(id, "No user with id");
        }
        found
    }

    /// Like [`find_by_id`](Self::find_by_id), but a missing id is an error.
    pub fn get(&self, id: u64) -> ServiceResult<&UserRecord> {
        self.find_by_id(id)
            .ok_or_else(|| ServiceError::NotFound(format!("User with id {} not found", id)))
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<'a> IntoIterator for &'a UserRegistry {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
