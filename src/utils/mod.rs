pub mod buffer;
pub mod histogram;
pub mod peak;
pub mod ring;
