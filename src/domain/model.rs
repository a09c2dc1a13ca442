use serde::{Deserialize, Serialize};

/// One consumer of a certificate, as listed in INFO and SERVICES.
///
/// Only `service` is required. Absent descriptive fields read as empty and
/// an absent `isPkg` as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub service: String,
    #[serde(rename = "isPkg", default)]
    pub is_pkg: bool,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub subscriber: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub desc: String,
    pub services: Vec<ServiceEntry>,
}

/// Contents of the INFO file, keyed by certificate ID in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertInfo {
    entries: Vec<(String, CertificateRecord)>,
}

impl CertInfo {
    pub fn new(entries: Vec<(String, CertificateRecord)>) -> Self {
        Self { entries }
    }

    /// Parses the INFO document. Key order is kept as written.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        let entries = map
            .into_iter()
            .map(|(id, value)| serde_json::from_value(value).map(|record| (id, record)))
            .collect::<serde_json::Result<Vec<(String, CertificateRecord)>>>()?;
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CertificateRecord)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn get(&self, id: &str) -> Option<&CertificateRecord> {
        self.iter().find(|(key, _)| *key == id).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO: &str = r#"{
        "zZ9kq1": {
            "desc": "",
            "services": [
                {"service": "default", "isPkg": false, "display_name": "DSM Desktop Service",
                 "owner": "root", "subscriber": "system", "display_name_i18n": "common:web_desktop"}
            ],
            "user_deletable": true
        },
        "Ab3xY7": {"desc": "example.org", "services": []}
    }"#;

    #[test]
    fn test_info_keeps_document_order() {
        let info = CertInfo::from_json_str(INFO).unwrap();
        let ids: Vec<&str> = info.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zZ9kq1", "Ab3xY7"]);
        assert_eq!(info.len(), 2);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let info = CertInfo::from_json_str(INFO).unwrap();
        let record = info.get("zZ9kq1").unwrap();
        assert_eq!(record.services[0].display_name, "DSM Desktop Service");
        assert!(!record.services[0].is_pkg);
    }

    #[test]
    fn test_missing_desc_is_rejected() {
        let err = CertInfo::from_json_str(r#"{"abc": {"services": []}}"#).unwrap_err();
        assert!(err.to_string().contains("desc"));
    }

    #[test]
    fn test_sparse_service_entry_is_accepted() {
        let info = CertInfo::from_json_str(
            r#"{"abc": {"desc": "x", "services": [{"service": "FTPS", "subscriber": "smbftpd"}]}}"#,
        )
        .unwrap();
        let service = &info.get("abc").unwrap().services[0];
        assert_eq!(service.subscriber, "smbftpd");
        assert_eq!(service.owner, "");
        assert_eq!(service.display_name, "");
        assert!(!service.is_pkg);
    }

    #[test]
    fn test_service_without_id_is_rejected() {
        let info = r#"{"abc": {"desc": "x", "services": [{"owner": "root"}]}}"#;
        let err = CertInfo::from_json_str(info).unwrap_err();
        assert!(err.to_string().contains("service"));
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(CertInfo::from_json_str("[]").is_err());
        assert!(CertInfo::from_json_str("{\"abc\": ").is_err());
    }
}
