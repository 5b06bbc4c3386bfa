//! Purpose: Provide a stable per-input verdict model for the CLI.
//! Exports: `CheckReport`, `CheckStatus`.
//! Role: Shared contract between command dispatch and output rendering.
//! Invariants: The serialized shape is stable once published; fields are additive-only.
//! Invariants: A report always carries the input label as given by the caller.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Valid,
    Invalid,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CheckReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub status: CheckStatus,
}

impl CheckReport {
    pub fn new(input: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            input: input.into(),
            path: None,
            status,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.status == CheckStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckReport, CheckStatus};
    use serde_json::json;

    #[test]
    fn report_carries_label_path_and_verdict() {
        let report =
            CheckReport::new("data.json", CheckStatus::Invalid).with_path("/tmp/data.json");
        assert_eq!(report.input, "data.json");
        assert_eq!(report.path.as_deref(), Some("/tmp/data.json".as_ref()));
        assert!(!report.is_valid());

        let report = CheckReport::new("-", CheckStatus::Valid);
        assert!(report.is_valid());
        assert_eq!(report.path, None);
    }

    #[test]
    fn serialized_shape_is_stable() {
        let report = CheckReport::new("data.json", CheckStatus::Valid).with_path("/tmp/data.json");
        assert_eq!(
            serde_json::to_value(&report).expect("serialize"),
            json!({
                "input": "data.json",
                "path": "/tmp/data.json",
                "status": "valid",
            })
        );

        let report = CheckReport::new("-", CheckStatus::Invalid);
        assert_eq!(
            serde_json::to_value(&report).expect("serialize"),
            json!({ "input": "-", "status": "invalid" })
        );
    }
}
