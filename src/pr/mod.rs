//! Pull request content derivation.

pub mod content;

pub use content::{
    Commit, CommitPolicy, LINK_HEADING, PrContent, derive_pull_request_content,
    derive_pull_request_content_with, extract_references, merge_unique, reference_link,
    split_summary_and_description,
};
