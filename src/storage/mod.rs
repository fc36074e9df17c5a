//! Storage Module
//!
//! Flat-file persistence for employee records.
//!
//! ## Responsibilities
//! - Issue unique identifiers from a side-channel counter file
//! - Persist the full record collection as one JSON file
//! - Replace both files atomically (temp file + rename)
//!
//! ## Layout
//! ```text
//! {data_dir}/
//! ├── employees.json            [{"id":1,"firstName":"...",...}, ...]
//! └── employee-id-sequence.txt  "1"
//! ```
//!
//! ## Known limitation
//! The two files are persisted independently. A crash between allocating an
//! id and appending its record leaves a gap in the sequence; losing the
//! counter file while records survive would reissue existing ids.

pub mod atomic_file;
mod id_allocator;
mod record_store;

pub use id_allocator::IdAllocator;
pub use record_store::RecordStore;
