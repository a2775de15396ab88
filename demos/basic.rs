/* demos/basic.rs */

use filestore::{Chain, ConfigFormat, Context, FileStore, Loader, MemoryStore, Storage, StoreConfig};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a root directory
	let root = std::env::temp_dir().join("filestore-demo");
	fs::create_dir_all(&root)?;
	println!("Root: {}", root.display());

	// 1. Build the store from a config document
	let doc = format!("root = {:?}\nbase_uri = \"/images\"\n", root.display().to_string());
	let config = StoreConfig::parse(doc.as_bytes(), ConfigFormat::Toml)?;
	let store = FileStore::from_config(&config)?;

	// 2. Write and read back
	let ctx = Context::new();
	store.store(&ctx, "/images/cats/1.jpg", b"not really a jpeg").await?;
	let bytes = store.load(&ctx, "/images/cats/1.jpg").await?;
	println!("Loaded {} bytes", bytes.len());

	// 3. Identifiers outside the store pass
	for id in ["/images/.env", "/videos/1.mp4", "/images/../../etc/passwd"] {
		match store.path(id) {
			Some(p) => println!("{id} -> {}", p.display()),
			None => println!("{id} -> pass"),
		}
	}

	// 4. Chain an in-memory placeholder in front of disk
	let chain = Chain::new()
		.with(MemoryStore::new().with("/images/placeholder.png", "png"))
		.with(store);
	println!("Placeholder: {:?}", chain.load(&ctx, "/images/placeholder.png").await?);

	fs::remove_dir_all(&root)?;
	println!("Done.");
	Ok(())
}
