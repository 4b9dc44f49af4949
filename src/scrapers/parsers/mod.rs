pub mod byte_fm;
pub mod rules;
pub mod swr3;

pub use byte_fm::ByteFmParser;
pub use swr3::Swr3Parser;
