use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subjects.ts")]
pub struct SubjectListQuery {
    pub standard: Option<String>,
}
