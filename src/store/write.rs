/* src/store/write.rs */

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs::{self, DirBuilder, File};
use tokio::io::AsyncWriteExt;

use super::FileStore;
use crate::{Context, Storage, StoreError};

/// Mode for directories created under the root.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

impl FileStore {
	/// Checks once per store that the root exists. Later calls get the cached outcome.
	async fn ensure_root(&self) -> Result<(), StoreError> {
		self.root_check
			.ensure(|| async {
				let res = fs::metadata(&self.root).await.map(|_| ());
				#[cfg(feature = "logging")]
				{
					if let Err(ref e) = res {
						log::warn!("store root {} is unavailable: {}", self.root.display(), e);
					}
				}
				res
			})
			.await
			.map_err(|source| StoreError::RootUnavailable {
				root: self.root.clone(),
				source,
			})
	}
}

async fn create_parent(path: &Path) -> io::Result<()> {
	let Some(parent) = path.parent() else {
		return Ok(());
	};
	let mut builder = DirBuilder::new();
	builder.recursive(true);
	#[cfg(unix)]
	builder.mode(DIR_MODE);
	builder.create(parent).await
}

#[async_trait]
impl Storage for FileStore {
	// No temp file or rename: a failed write can leave a truncated file behind.
	async fn store(&self, _ctx: &Context, key: &str, buf: &[u8]) -> Result<(), StoreError> {
		self.ensure_root().await?;

		let Some(path) = self.path(key) else {
			#[cfg(feature = "logging")]
			log::debug!("pass: '{}' is outside {}", key, self.root.display());
			return Err(StoreError::Pass);
		};

		create_parent(&path).await?;

		let mut file = File::create(&path).await?;
		file.write_all(buf).await?;
		file.flush().await?;

		#[cfg(feature = "logging")]
		log::debug!("stored {} bytes at {}", buf.len(), path.display());
		Ok(())
	}
}
