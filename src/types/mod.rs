pub mod entity;
pub mod errors;
pub mod fixture;
pub mod ids;

pub use entity::{EntityRef, PostId, PostRecord, TermRecord, UserRecord};
pub use fixture::{FixtureRow, MetaEntry, NewPost};
