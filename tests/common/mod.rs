#![allow(dead_code)]

use anyhow::Result;
use dsm_cert_info::CertPaths;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const INFO_JSON: &str = r#"{
    "Xq7dYk": {
        "desc": "",
        "services": [
            {"service": "default", "isPkg": false, "display_name": "DSM Desktop Service",
             "display_name_i18n": "common:web_desktop", "owner": "root", "subscriber": "system"},
            {"service": "FTPS", "isPkg": false, "display_name": "FTPS",
             "owner": "root", "subscriber": "smbftpd"}
        ],
        "user_deletable": false
    },
    "Ab12Cd": {
        "desc": "nas.example.org",
        "services": [
            {"service": "WebStation", "isPkg": true, "display_name": "Web Station",
             "owner": "WebStation", "subscriber": "WebStation"}
        ],
        "user_deletable": true
    }
}"#;

pub const SERVICES_JSON: &str = r#"[
    {"service": "default", "isPkg": false, "display_name": "DSM Desktop Service",
     "owner": "root", "subscriber": "system", "multiple_cert": true, "user_setable": true},
    {"service": "WebStation", "isPkg": true, "display_name": "Web Station",
     "owner": "WebStation", "subscriber": "WebStation"}
]"#;

/// A certificate store laid out like DSM's, inside a temp dir.
pub struct Fixture {
    pub dir: TempDir,
    pub paths: CertPaths,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let paths = CertPaths::with_system_root(dir.path().join("syno"), dir.path().join("pkg"));
        fs::create_dir_all(&paths.archive_dir)?;
        fs::write(paths.info_path(), INFO_JSON)?;
        fs::write(paths.default_path(), "Ab12Cd\n")?;
        fs::write(paths.services_path(), SERVICES_JSON)?;
        Ok(Self { dir, paths })
    }

    /// TOML config pointing the tool at this fixture.
    pub fn write_config(&self) -> Result<PathBuf> {
        let config_path = self.dir.path().join("dsm-cert-info.toml");
        let content = format!(
            "[paths]\nsystem_root = \"{}\"\npkg_root = \"{}\"\n",
            self.paths.system_root.display().to_string().replace('\\', "/"),
            self.paths.pkg_root.display().to_string().replace('\\', "/"),
        );
        fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn syno(&self, rest: &str) -> String {
        self.paths.system_root.join(rest).display().to_string()
    }

    pub fn pkg(&self, rest: &str) -> String {
        self.paths.pkg_root.join(rest).display().to_string()
    }
}
