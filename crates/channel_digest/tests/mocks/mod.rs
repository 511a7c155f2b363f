#![allow(dead_code)]

pub mod channel_lister;
pub mod completion;
pub mod datastore;
pub mod summarizer;
pub mod transcript_provider;
