//! # DigestStore Module
//!
//! This module provides the output side of the channel digest pipeline: the
//! `VideoRecord` produced for every processed video and the sinks those
//! records are persisted to.
//!
//! Every run overwrites the sink wholesale; nothing is carried across runs.

mod datastore;
mod domain;

pub use datastore::json_file::JsonFileStore;
pub use datastore::RecordStore;
pub use domain::VideoRecord;
