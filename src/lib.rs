//! In-memory object model for homology search results
//!
//! A search produces one [`QueryResult`] per query sequence. Each holds the
//! [`Hit`]s found in the target database, and each hit holds the [`Hsp`]s
//! (high-scoring aligned regions) between the query and that hit.

pub mod engines;
pub mod modules;

pub use modules::search_io::{
    default_hit_key, Count, Hit, HitKeyFn, Hsp, HspKind, Metadata, QueryResult, SearchError,
    SearchResult, Slot, StickyAttributes, Strand, SummaryFormat, Value,
};
pub use modules::seq::{Alphabet, SeqRecord};
