/* src/chain.rs */

//!
//! Ordered fall-through over several loaders.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Context, Loader, StoreError};

/// Tries each loader in order until one handles the key.
///
/// [`StoreError::Pass`] moves on to the next loader. Any other error stops
/// the chain and is returned as-is.
#[derive(Clone, Default)]
pub struct Chain {
	loaders: Vec<Arc<dyn Loader>>,
}

impl Chain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a loader, builder style.
	pub fn with(mut self, loader: impl Loader + 'static) -> Self {
		self.loaders.push(Arc::new(loader));
		self
	}

	/// Appends a shared loader.
	pub fn push(&mut self, loader: Arc<dyn Loader>) {
		self.loaders.push(loader);
	}

	pub fn len(&self) -> usize {
		self.loaders.len()
	}

	pub fn is_empty(&self) -> bool {
		self.loaders.is_empty()
	}
}

#[async_trait]
impl Loader for Chain {
	async fn load(&self, ctx: &Context, key: &str) -> Result<Vec<u8>, StoreError> {
		for loader in &self.loaders {
			match loader.load(ctx, key).await {
				Err(StoreError::Pass) => continue,
				res => return res,
			}
		}
		Err(StoreError::Pass)
	}
}
