/* tests/integration.rs */

#![cfg(feature = "config")]

use filestore::{Context, FileStore, Loader, Storage, StoreConfig};
use std::sync::Arc;
use std::time::Instant;

#[tokio::test]
async fn test_store_from_config_file() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let root = dir.path().join("media");
	tokio::fs::create_dir_all(&root).await?;

	let config_path = dir.path().join("store.toml");
	let doc = format!(
		"root = {:?}\nbase_uri = \"/images\"\n",
		root.display().to_string()
	);
	tokio::fs::write(&config_path, doc).await?;

	let config = StoreConfig::load(&config_path).await?;
	let store = FileStore::from_config(&config)?;

	// The context is accepted but not consulted.
	let ctx = Context::new()
		.with_request_uri("/images/a/b.jpg")
		.with_deadline(Instant::now());

	store.store(&ctx, "/images/a/b.jpg", b"bytes").await?;
	assert!(root.join("a/b.jpg").is_file());
	assert_eq!(store.load(&ctx, "/images/a/b.jpg").await?, b"bytes");
	assert!(store.load(&ctx, "/images/.a").await.unwrap_err().is_pass());

	Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writes_to_distinct_paths() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let store = Arc::new(FileStore::new(dir.path()));

	let mut handles = Vec::new();
	for i in 0..16 {
		let store = Arc::clone(&store);
		handles.push(tokio::spawn(async move {
			let key = format!("/n/{i}.bin");
			store.store(&Context::new(), &key, key.as_bytes()).await
		}));
	}
	for h in handles {
		h.await??;
	}

	for i in 0..16 {
		let key = format!("/n/{i}.bin");
		assert_eq!(store.load(&Context::new(), &key).await?, key.as_bytes());
	}
	Ok(())
}
