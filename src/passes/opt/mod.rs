pub mod cleanup;
pub mod silent;
pub mod unreached;
