//! Acronym wire types.

use acronyms_core::{Acronym, NewAcronym};
use serde::{Deserialize, Serialize};

/// Acronym as returned by the API.
///
/// ```json
/// { "id": "5b0e...", "short": "LOL", "long": "laugh out loud" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcronymDto {
    pub id: Option<String>,
    pub short: String,
    pub long: String,
}

impl From<Acronym> for AcronymDto {
    fn from(acronym: Acronym) -> Self {
        Self {
            id: Some(acronym.id.to_string()),
            short: acronym.short,
            long: acronym.long,
        }
    }
}

/// Request body for create and update.
///
/// `short` and `long` are required. Any `id` in the payload is ignored:
/// identity is assigned on create and taken from the path on update.
#[derive(Debug, Clone, Deserialize)]
pub struct AcronymRequest {
    pub short: String,
    pub long: String,
}

impl From<AcronymRequest> for NewAcronym {
    fn from(req: AcronymRequest) -> Self {
        Self::new(req.short, req.long)
    }
}

/// Query string for `/api/acronyms/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
}
