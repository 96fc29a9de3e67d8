//! Media probe adapters

pub mod lofty;

pub use self::lofty::LoftyProbe;
