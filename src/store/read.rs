/* src/store/read.rs */

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use super::FileStore;
use crate::{Context, Loader, StoreError};

#[async_trait]
impl Loader for FileStore {
	async fn load(&self, _ctx: &Context, key: &str) -> Result<Vec<u8>, StoreError> {
		let Some(path) = self.path(key) else {
			#[cfg(feature = "logging")]
			log::debug!("pass: '{}' is outside {}", key, self.root.display());
			return Err(StoreError::Pass);
		};

		let mut file = match File::open(&path).await {
			Ok(f) => f,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(StoreError::Pass),
			Err(e) => return Err(StoreError::Io(e)),
		};

		let mut buf = Vec::new();
		file.read_to_end(&mut buf).await?;
		Ok(buf)
	}
}
