pub mod block;
pub mod function;
pub mod stmt;

use std::sync::Arc;

/// Name of a function, channel, parameter or other resource
pub type Identifier = Arc<str>;

/// Capacity of a channel. Zero is an unbuffered channel
pub type ChanSize = u64;
