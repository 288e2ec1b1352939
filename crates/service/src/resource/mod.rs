pub mod memory;
pub mod store;

pub use memory::MemoryResourceStore;
pub use store::ResourceStore;

use crate::errors::ServiceError;
use models::ResourceId;

/// Parse a raw id (as it arrives in a URL path) into a record id.
/// Anything that is not a non-negative integer is an invalid argument,
/// not a missing record.
pub fn parse_id(raw: &str) -> Result<ResourceId, ServiceError> {
    raw.parse::<ResourceId>()
        .map_err(|_| ServiceError::InvalidArgument(format!("id must be an integer, got `{raw}`")))
}
