pub mod password;
pub mod strength;

pub use password::generate_with;
pub use strength::{entropy_bits, estimate_strength};
