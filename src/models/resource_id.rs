//! ARM resource identifier parsing.
//!
//! Resource IDs have the shape
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/{namespace}/{type}/{name}`.
//! An ID that does not match this structure is a parse error; there is no
//! fallback to treating the raw string as a name.

use std::error::Error;
use std::fmt;

/// A parsed top-level ARM resource identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    /// Subscription the resource belongs to.
    pub subscription_id: String,
    /// Resource group containing the resource.
    pub resource_group: String,
    /// Provider namespace (e.g. "Microsoft.Network").
    pub provider_namespace: String,
    /// Resource type within the namespace (e.g. "networkInterfaces").
    pub resource_type: String,
    /// Short name of the resource, the final path segment.
    pub name: String,
}

impl ResourceId {
    /// Parse a fully-qualified ARM resource ID.
    ///
    /// The keyword segments (`subscriptions`, `resourceGroups`, `providers`)
    /// are matched case-insensitively, as ARM itself does.
    ///
    /// # Errors
    /// Returns an error describing the malformed input when the ID does not
    /// have the expected eight-segment structure or any segment is empty.
    pub fn parse(id: &str) -> Result<ResourceId, Box<dyn Error>> {
        let rest = id
            .trim()
            .strip_prefix('/')
            .ok_or_else(|| malformed(id, "expected leading '/'"))?;

        let segments: Vec<&str> = rest.split('/').collect();
        if segments.len() != 8 {
            return Err(malformed(
                id,
                &format!("expected 8 path segments, found {}", segments.len()),
            ));
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(malformed(id, "empty path segment"));
        }
        if !segments[0].eq_ignore_ascii_case("subscriptions") {
            return Err(malformed(id, "missing 'subscriptions' segment"));
        }
        if !segments[2].eq_ignore_ascii_case("resourceGroups") {
            return Err(malformed(id, "missing 'resourceGroups' segment"));
        }
        if !segments[4].eq_ignore_ascii_case("providers") {
            return Err(malformed(id, "missing 'providers' segment"));
        }

        Ok(ResourceId {
            subscription_id: segments[1].to_string(),
            resource_group: segments[3].to_string(),
            provider_namespace: segments[5].to_string(),
            resource_type: segments[6].to_string(),
            name: segments[7].to_string(),
        })
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/subscriptions/{}/resourceGroups/{}/providers/{}/{}/{}",
            self.subscription_id,
            self.resource_group,
            self.provider_namespace,
            self.resource_type,
            self.name
        )
    }
}

fn malformed(id: &str, reason: &str) -> Box<dyn Error> {
    format!("malformed ARM resource id '{id}': {reason}").into()
}
