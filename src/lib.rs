// Internal modules (not public API)
mod encoding;
mod key;
mod query_item;
mod representable;
mod wrangler;

// Public API
pub use key::QueryKey;
pub use query_item::QueryItem;
pub use representable::QueryRepresentable;
pub use wrangler::QueryWrangler;
