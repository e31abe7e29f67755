// feedgist: topic clustering for feed batches
//
// This is the library root. `topics` is the clustering engine (pure
// computation, no I/O); `output` turns its clusters into a prompt block or a
// terminal overview; `config` holds the tunable parameters.

pub mod config;
pub mod output;
pub mod topics;
