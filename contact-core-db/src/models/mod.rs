pub mod bounded_text;
pub mod contact;
pub mod identifiable;
pub mod passport;

// Re-exports
pub use bounded_text::*;
pub use contact::*;
pub use identifiable::*;
pub use passport::*;
