use chrono::{Duration, Utc};
use library_lending::{
    catalog::Catalog,
    domain::{Book, CatalogEntry, Dvd, Item, ItemId},
    lending::{borrow_item, check_in_item, find_overdue_items},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_lending=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Seed the catalog
    let mut catalog = Catalog::new();
    catalog.add(CatalogEntry::Book(Book::new(Item::new(
        ItemId::from("b1"),
        "The Name of the Rose",
        "Umberto Eco",
    ))));
    catalog.add(CatalogEntry::Dvd(Dvd::new(Item::new(
        ItemId::from("d1"),
        "Metropolis",
        "Fritz Lang",
    ))));
    catalog.add(CatalogEntry::Reference(Item::new(
        ItemId::from("r1"),
        "Atlas of Remote Islands",
        "Judith Schalansky",
    )));

    tracing::info!("Catalog seeded with {} entries", catalog.len());

    // Borrow a book
    let book_id = ItemId::from("b1");
    let entry = borrow_item(&mut catalog, &book_id, Utc::now()).expect("Failed to borrow book");
    tracing::info!("Borrowed \"{}\"", entry.item().title);

    let json = serde_json::to_string_pretty(entry).expect("Failed to serialize entry");
    println!("{json}");

    // A second borrow without an intervening check-in is rejected
    if let Err(e) = borrow_item(&mut catalog, &book_id, Utc::now()) {
        tracing::warn!("Second borrow of {} rejected: {}", book_id, e);
    }

    // Reference material never participates in lending
    if let Err(e) = borrow_item(&mut catalog, &ItemId::from("r1"), Utc::now()) {
        tracing::warn!("Borrow of r1 rejected: {}", e);
    }

    // Check in, then borrow again
    check_in_item(&mut catalog, &book_id).expect("Failed to check in book");
    tracing::info!("Checked in {}", book_id);

    borrow_item(&mut catalog, &book_id, Utc::now()).expect("Failed to borrow book again");
    tracing::info!("Borrowed {} again after check-in", book_id);

    // A backdated loan shows up in the overdue scan
    borrow_item(
        &mut catalog,
        &ItemId::from("d1"),
        Utc::now() - Duration::days(30),
    )
    .expect("Failed to borrow dvd");

    let overdue = find_overdue_items(&catalog, Utc::now());
    tracing::info!("Overdue items: {:?}", overdue);
}
