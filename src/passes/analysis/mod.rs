pub mod reachability;
pub mod silent;
pub mod util;
pub mod validate;
