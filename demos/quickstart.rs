//! End-to-end walkthrough: a persistent service, a few counter
//! operations, an explicit save, then a reload.
//!
//! Run with `cargo run --example quickstart`.

use anyhow::Result;
use stockroom::{StoreConfig, StoreService};

fn main() -> Result<()> {
    init_logging();

    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("store.redb");

    // Morning: open the counter and stock up.
    {
        let service = StoreService::new(StoreConfig {
            persist: true,
            db_path: Some(db_path.clone()),
        })?;

        service.add_or_increment("Sweet Corn", 12)?;
        service.add_or_increment("kale", 8)?;
        service.add_or_increment("KALE", 2)?; // same item, different casing

        service.enqueue("Jane", "refund")?;
        service.enqueue("Jo", "")?;

        println!("catalog:");
        for item in service.list_items() {
            println!("  {:12} x{}", item.name, item.quantity);
        }

        let served = service.dequeue().expect("someone is waiting");
        println!("serving {} ({})", served.name, served.note);

        service.save()?;
    }

    // Evening: a fresh process picks up where we left off.
    let service = StoreService::new(StoreConfig {
        persist: true,
        db_path: Some(db_path),
    })?;
    println!(
        "after reload: {} items, {} customer(s) still waiting",
        service.list_items().len(),
        service.queue_len()
    );

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
