pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

#[cfg(test)]
mod tests;

pub use r#trait::OtpRepository;
pub use memory::InMemoryOtpRepository;
