use serde::{Deserialize, Serialize};

use crate::domain::types::{DestinationId, DestinationName};

/// Remote storage location that receives backup files.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub name: DestinationName,
    pub bucket_name: String,
}
