//! SSH key records registered with the cloud account

use serde::{Deserialize, Serialize};

/// A public key registered with the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKeyRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub fingerprint: Option<String>,
}

impl SshKeyRecord {
    /// Whether this record belongs to Launchpad's reserved name space
    pub fn is_reserved(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.name.contains(prefix)
    }
}

/// Find the reusable key record among those registered
pub fn find_reserved<'a>(keys: &'a [SshKeyRecord], prefix: &str) -> Option<&'a SshKeyRecord> {
    keys.iter().find(|k| k.is_reserved(prefix))
}

/// Name for a new key record; the timestamp keeps concurrent runs apart
pub fn reserved_key_name(prefix: &str, unix_timestamp: i64) -> String {
    format!("{}-{}", prefix, unix_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: u64, name: &str) -> SshKeyRecord {
        SshKeyRecord {
            id,
            name: name.to_string(),
            public_key: String::new(),
            fingerprint: None,
        }
    }

    #[test]
    fn finds_first_reserved_key() {
        let keys = vec![
            key(1, "laptop"),
            key(2, "app-deploy-key-1700000000"),
            key(3, "app-deploy-key-1700000500"),
        ];
        assert_eq!(find_reserved(&keys, "app-deploy-key").map(|k| k.id), Some(2));
    }

    #[test]
    fn empty_prefix_never_matches() {
        let keys = vec![key(1, "laptop")];
        assert!(find_reserved(&keys, "").is_none());
    }

    #[test]
    fn reserved_name_embeds_timestamp() {
        let name = reserved_key_name("app-deploy-key", 1_700_000_000);
        assert_eq!(name, "app-deploy-key-1700000000");
        assert!(key(9, &name).is_reserved("app-deploy-key"));
    }
}
