pub mod person;

pub use person::{Person, PersonInput, PersonPatch, ResourceId};
