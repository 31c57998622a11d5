//! Request body DTOs.

use serde::Deserialize;
use serde_json::Value;

use filebox_entity::file::ParentRef;

use filebox_service::file::CreateRecordRequest;

/// Body of `POST /files`.
///
/// Every field is optional at the deserialization layer; the service
/// applies the real validation so the error ordering stays in one
/// place. `parentId` is kept as raw JSON because the wire accepts both
/// the number `0` and identifier strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub parent_id: Option<Value>,
    #[serde(default)]
    pub is_public: bool,
    pub data: Option<String>,
}

impl From<UploadRequest> for CreateRecordRequest {
    fn from(body: UploadRequest) -> Self {
        CreateRecordRequest {
            name: body.name,
            record_type: body.record_type,
            parent: ParentRef::from_body(body.parent_id.as_ref()),
            is_public: body.is_public,
            data: body.data,
        }
    }
}
