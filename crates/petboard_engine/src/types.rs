use std::fmt;

use serde::Deserialize;

/// One pet record as it appears on the wire.
///
/// Every field may be absent or null in the server JSON; the client
/// tolerates both and renders empty states instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pet {
    pub id: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub created_at: Option<String>,
    pub media_urls: Option<Vec<String>>,
    pub vision_tags: Option<Vec<String>>,
    pub vision_tagged_at: Option<String>,
}

/// Which mutation a completion event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    Create,
    Update,
    Delete,
    Upload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PetsLoaded(Result<Vec<Pet>, ApiFailure>),
    MutationDone {
        op: MutationOp,
        result: Result<(), ApiFailure>,
    },
    TagDone {
        pet_id: String,
        result: Result<(), ApiFailure>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub kind: FailureKind,
    /// Display text: the server-provided message when one exists,
    /// otherwise `HTTP {status}` or a transport description.
    pub message: String,
}

impl ApiFailure {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    /// The upload response carried no `sasUrl` string.
    MissingSasUrl,
    FileRead,
    BadPayload,
}
