pub mod hit_testing;
pub mod outline;

pub use outline::Outline;
