//! Public library API for decoding Apple XML property lists.

/// XML node tree, property list decoding, and value inspection helpers.
pub mod plist;
