//! Thread-safe in-memory [`TokenStore`] implementation for local development
//! and tests.

// self
use crate::{
	_prelude::*,
	auth::CredentialRecord,
	store::{StoreFuture, TokenStore},
};

type StoreMap = Arc<RwLock<HashMap<String, CredentialRecord>>>;

/// Thread-safe backend that keeps records in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl TokenStore for MemoryStore {
	fn put(&self, key: &str, record: CredentialRecord) -> StoreFuture<'_, ()> {
		let map = self.0.clone();
		let key = key.to_owned();

		Box::pin(async move {
			map.write().insert(key, record);

			Ok(())
		})
	}

	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<CredentialRecord>> {
		let map = self.0.clone();
		let key = key.to_owned();

		Box::pin(async move { Ok(map.read().get(&key).cloned()) })
	}
}
