/* src/memory.rs */

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::{Context, Loader, Storage, StoreError};

/// A simple in-memory store useful for testing and for chaining in front of disk.
///
/// Keys are matched exactly; no cleaning or blacklist is applied.
#[derive(Debug, Default)]
pub struct MemoryStore {
	data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
	/// Creates a new empty MemoryStore.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts data, builder style.
	pub fn with(mut self, key: &str, value: impl Into<Vec<u8>>) -> Self {
		self.data.get_mut().insert(key.to_string(), value.into());
		self
	}

	pub async fn len(&self) -> usize {
		self.data.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.data.read().await.is_empty()
	}
}

#[async_trait]
impl Loader for MemoryStore {
	async fn load(&self, _ctx: &Context, key: &str) -> Result<Vec<u8>, StoreError> {
		self.data.read().await.get(key).cloned().ok_or(StoreError::Pass)
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn store(&self, _ctx: &Context, key: &str, buf: &[u8]) -> Result<(), StoreError> {
		self.data.write().await.insert(key.to_string(), buf.to_vec());
		Ok(())
	}
}
