//! Embedded vocabulary
//!
//! Word partitions compiled into the binary at build time.

// Include generated vocabulary from build script
include!(concat!(env!("OUT_DIR"), "/vocabulary.rs"));
