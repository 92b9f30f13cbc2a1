// src/report/mod.rs
// =============================================================================
// Everything that happens after a crawl: listing, statistics, saving.
// =============================================================================

mod output;
mod stats;

pub use output::{print_links, save_links, sorted_links};
pub use stats::LinkStats;
