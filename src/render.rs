//! Rendering the decoded mapping into a Secret manifest.

use crate::config::SecretRef;
use crate::decode::SecretData;
use std::fmt::Write;

/// Render the fixed-shape manifest with decoded values under `stringData`.
///
/// Values are emitted byte-for-byte with no quoting or re-encoding, matching
/// the plaintext the cluster will re-encode on admission. Keys appear in
/// sorted order.
pub fn render_manifest(reference: &SecretRef, data: &SecretData) -> String {
    let mut manifest = String::new();

    manifest.push_str("apiVersion: v1\n");
    manifest.push_str("kind: Secret\n");
    manifest.push_str("metadata:\n");
    let _ = writeln!(manifest, "  name: {}", reference.secret);
    let _ = writeln!(manifest, "  namespace: {}", reference.namespace);
    manifest.push_str("type: Opaque\n");
    manifest.push_str("stringData:\n");

    for (key, value) in &data.0 {
        let _ = writeln!(manifest, "  {}: {}", key, value);
    }

    manifest
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn reference() -> SecretRef {
        SecretRef::new(
            "prod".to_string(),
            "team-a".to_string(),
            "db-creds".to_string(),
        )
    }

    fn data(entries: &[(&str, &str)]) -> SecretData {
        SecretData(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_render_fixed_header_and_metadata() {
        let manifest = render_manifest(&reference(), &data(&[]));

        assert_eq!(
            manifest,
            "apiVersion: v1\n\
             kind: Secret\n\
             metadata:\n\
             \x20 name: db-creds\n\
             \x20 namespace: team-a\n\
             type: Opaque\n\
             stringData:\n"
        );
    }

    #[test]
    fn test_render_string_data_entries() {
        let manifest = render_manifest(
            &reference(),
            &data(&[("username", "admin"), ("password", "s3cr3t")]),
        );

        assert!(manifest.contains("stringData:\n"));
        assert!(manifest.contains("  username: admin\n"));
        assert!(manifest.contains("  password: s3cr3t\n"));
    }

    #[test]
    fn test_render_keys_sorted() {
        let manifest = render_manifest(
            &reference(),
            &data(&[("zeta", "1"), ("alpha", "2"), ("mid", "3")]),
        );

        let alpha = manifest.find("  alpha:").unwrap();
        let mid = manifest.find("  mid:").unwrap();
        let zeta = manifest.find("  zeta:").unwrap();
        assert!(alpha < mid && mid < zeta);
    }

    #[test]
    fn test_render_values_verbatim() {
        // Decoded bytes pass through untouched, no quoting added
        let manifest = render_manifest(&reference(), &data(&[("token", "abc=/+123")]));

        assert!(manifest.contains("  token: abc=/+123\n"));
    }

    #[test]
    fn test_rendered_manifest_is_valid_yaml() {
        let manifest = render_manifest(
            &reference(),
            &data(&[("username", "admin"), ("password", "s3cr3t")]),
        );

        let parsed: serde_yaml::Value = serde_yaml::from_str(&manifest).unwrap();

        assert_eq!(parsed["apiVersion"], "v1");
        assert_eq!(parsed["kind"], "Secret");
        assert_eq!(parsed["metadata"]["name"], "db-creds");
        assert_eq!(parsed["metadata"]["namespace"], "team-a");
        assert_eq!(parsed["type"], "Opaque");
        assert_eq!(parsed["stringData"]["username"], "admin");
        assert_eq!(parsed["stringData"]["password"], "s3cr3t");
    }
}
