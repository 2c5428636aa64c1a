//! Dataset acquisition for the churn preprocessing pipeline.
//!
//! The acquirer is a thin collaborator around the transformer core: it
//! downloads the compressed dataset archive, extracts it, and loads the
//! contained CSV into a Polars `DataFrame`.

pub mod acquire;
pub mod archive;
pub mod download;
mod error;
pub mod reader;

pub use acquire::{acquire, unpack_and_read};
pub use archive::extract_archive;
pub use download::download_archive;
pub use error::AcquireError;
pub use reader::read_raw_csv;
