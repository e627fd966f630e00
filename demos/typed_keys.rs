#![allow(clippy::print_stdout, clippy::unwrap_used)]

/// Typed query access example
use query_wrangler::{QueryKey, QueryWrangler};
use url::Url;

const PAGE: QueryKey<u32> = QueryKey::new("page");
const SORT: QueryKey<String> = QueryKey::new("sort");
const DESC: QueryKey<bool> = QueryKey::new("desc");

fn main() {
    let url = Url::parse("https://example.com/list?page=2&sort=name&desc=1").unwrap();
    let mut wrangler = QueryWrangler::from(&url);

    // Typed reads
    println!("page: {:?}", wrangler.get(PAGE)); // Some(2)
    println!("sort: {:?}", wrangler.get(SORT)); // Some("name")
    println!("desc: {:?}", wrangler.get(DESC)); // Some(true)
    println!();

    // Updates keep the key's position
    wrangler.set(PAGE, 3);
    println!("after set: {}", wrangler.serialize()); // ?page=3&sort=name&desc=1
    println!();

    // Setting None deletes the item
    wrangler.set(DESC, None);
    println!("after delete: {}", wrangler.serialize()); // ?page=3&sort=name
    println!();

    // Missing or malformed values degrade to the type's default
    println!("limit (absent): {}", wrangler.get_or_default(QueryKey::<u32>::new("limit"))); // 0
    println!();

    // Iterate in storage order
    for (name, value) in &wrangler {
        println!("  {} = {}", name, value.unwrap_or("<none>"));
    }
}
