pub mod entities;
pub mod media_signature;
pub mod policies;
