// ============================================================================
// Basic Usage Example
// ============================================================================

use datakit::numeric::precise;
use datakit::prelude::*;
use datakit::structural::Map;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Datakit Example ===\n");

    // Build a nested document through dotted paths
    let mut profile = Value::Mapping(Map::new());
    profile.set_path("user.name", Value::from("ada"));
    profile.set_path("user.roles.0", Value::from("admin"));
    profile.set_path("user.roles.1", Value::from("editor"));
    profile.set_path("cart.items.0.label", Value::from("notebook"));
    profile.set_path("cart.items.0.price", Value::from(19.99));
    profile.set_path("cart.items.1.label", Value::from("pen"));
    profile.set_path("cart.items.1.price", Value::from(0.1));

    println!("Name: {:?}", profile.get_path("user.name"));
    println!("Second role: {:?}", profile.get_path("user.roles.1"));
    println!("Missing path: {:?}", profile.get_path("user.email"));

    // Flatten to dotted keys
    println!("\n=== Flattened ===");
    for (key, value) in &profile.flatten() {
        println!("  {} = {:?}", key, value);
    }

    // Decimal-exact arithmetic avoids binary float drift
    println!("\n=== Precise Arithmetic ===");
    let naive = 0.1 + 0.2;
    let exact = precise::add(0.1, 0.2).unwrap();
    println!("0.1 + 0.2 as raw f64: {}", naive);
    println!("0.1 + 0.2 precisely:  {}", exact);

    let mut total = 0.0;
    for item in profile.get_path("cart.items").unwrap().as_sequence().unwrap() {
        let price = item.get_path("price").unwrap().as_number().unwrap();
        total = precise::add(total, price).unwrap();
    }
    println!("Cart total: {}", format_currency(total, &CurrencyFormat::default()));
    println!("Rounded to tenths: {}", precise::round(total, 1).unwrap());

    // Formatting helpers
    println!("\n=== Formatting ===");
    println!("Grouped: {}", format_number(1234567.891, &NumberFormat::default()));
    println!("Abbreviated: {}", abbreviate_number(1234567.891, 1));
    println!("Camel case: {}", to_camel_case("cart_item_count"));
    println!("Truncated: {}", truncate("structural traversal", 10, "…"));

    // Sorting and grouping sequences of mappings
    println!("\n=== Collections ===");
    let items = profile.get_path("cart.items").unwrap().deep_clone();
    let cheap_first = sort_by_path(items.as_sequence().unwrap(), "price", SortOrder::Ascending);
    for item in &cheap_first {
        println!(
            "  {:?} at {:?}",
            item.get_path("label").unwrap(),
            item.get_path("price").unwrap()
        );
    }

    // Key-value storage with a byte quota
    println!("\n=== Storage ===");
    let mut store = MemoryStore::with_quota(64);
    set_value(&mut store, "profile.name", profile.get_path("user.name").unwrap());
    println!("Stored name: {:?}", get_value(&store, "profile.name", Value::Null));

    // This write exceeds the quota and is rejected (visible with RUST_LOG=debug)
    let accepted = store.set("oversized", &"x".repeat(128));
    println!("Oversized write accepted: {}", accepted);
    println!("Store holds {} entries", store.len());
}
