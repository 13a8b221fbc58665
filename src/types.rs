use aliri_braid::braid;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Name of a remote DICOM modality, as configured in Orthanc (not necessarily its AE title).
#[braid(serde)]
pub struct ModalityName;

/// Identifier of a C-FIND query stored by Orthanc under `/queries`.
#[braid(serde)]
pub struct QueryId;

/// Level of the DICOM model hierarchy.
///
/// Serializes to the strings Orthanc expects for `"Level"` in query bodies,
/// and maps to the REST collection each level lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Patient,
    Study,
    Series,
    Instance,
}

impl ResourceType {
    /// REST collection path segment.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Patient => "patients",
            Self::Study => "studies",
            Self::Series => "series",
            Self::Instance => "instances",
        }
    }

    /// Route of a single resource, e.g. `/studies/{id}`.
    pub(crate) fn route(self, id: &str) -> String {
        format!("/{}/{}", self.as_path(), id)
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(ResourceType::Patient, "/patients/abc")]
    #[case(ResourceType::Study, "/studies/abc")]
    #[case(ResourceType::Series, "/series/abc")]
    #[case(ResourceType::Instance, "/instances/abc")]
    fn test_route(#[case] resource_type: ResourceType, #[case] expected: &str) {
        assert_eq!(resource_type.route("abc"), expected)
    }

    #[test]
    fn test_serializes_as_level() {
        let actual = serde_json::to_string(&ResourceType::Study).unwrap();
        assert_eq!(actual, r#""Study""#)
    }
}
