//! ID prefix constants for store-assigned identifiers.
//!
//! Every entity gets a prefixed hex identifier on insert, e.g.
//! `art-a3f8b2c1`. The random part is generated by the store
//! (`randomblob` SQL), never by application code.

pub const PREFIX_ARTICLE: &str = "art";
pub const PREFIX_AUTHOR: &str = "aut";
pub const PREFIX_TAG: &str = "tag";
pub const PREFIX_REVIEW: &str = "rev";
pub const PREFIX_TRIAL: &str = "tri";

/// All prefixes, for exhaustive tests over ID generation.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_ARTICLE,
    PREFIX_AUTHOR,
    PREFIX_TAG,
    PREFIX_REVIEW,
    PREFIX_TRIAL,
];
