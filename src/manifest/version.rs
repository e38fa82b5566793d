//! Version string validation for manifest directives.

use regex::Regex;
use std::sync::LazyLock;

/// Module versions: `vMAJOR[.MINOR[.PATCH]][-pre][+build]`.
static MODULE_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v(0|[1-9][0-9]*)(?:\.(0|[1-9][0-9]*))?(?:\.(0|[1-9][0-9]*))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )
    .expect("MODULE_VERSION_REGEX must compile")
});

/// Language versions in the `go` directive: `1.21`, `1.21.3`, `1.22rc1`.
static GO_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9][0-9]*\.(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*))?([a-z]+[0-9]+)?$")
        .expect("GO_VERSION_REGEX must compile")
});

/// Malformed `go` versions that still start with a usable `1.N` prefix.
static LAX_GO_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?([1-9][0-9]*\.(0|[1-9][0-9]*))([^0-9].*)$")
        .expect("LAX_GO_VERSION_REGEX must compile")
});

/// Canonicalize a module version.
///
/// Shorthand forms get their missing components filled in (`v1.2` becomes
/// `v1.2.0`) and build metadata is dropped, except for `+incompatible`
/// which carries meaning for major versions without a `go.mod`. Returns
/// `None` if the string is not a valid semantic version.
pub fn canonical_module_version(version: &str) -> Option<String> {
    let caps = MODULE_VERSION_REGEX.captures(version)?;

    let major = &caps[1];
    let minor = caps.get(2).map(|m| m.as_str());
    let patch = caps.get(3).map(|m| m.as_str());
    let pre = caps.get(4).map(|m| m.as_str());
    let build = caps.get(5).map(|m| m.as_str());

    // Shorthand is only accepted without pre-release or build suffixes.
    if (minor.is_none() || patch.is_none()) && (pre.is_some() || build.is_some()) {
        return None;
    }
    if let Some(pre) = pre {
        let leading_zero = pre.split('.').any(|ident| {
            ident.len() > 1 && ident.starts_with('0') && ident.bytes().all(|b| b.is_ascii_digit())
        });
        if leading_zero {
            return None;
        }
    }

    let mut canonical = format!(
        "v{}.{}.{}",
        major,
        minor.unwrap_or("0"),
        patch.unwrap_or("0")
    );
    if let Some(pre) = pre {
        canonical.push('-');
        canonical.push_str(pre);
    }
    if build == Some("incompatible") {
        canonical.push_str("+incompatible");
    }
    Some(canonical)
}

/// Check whether `version` is acceptable in a `go` directive.
pub fn is_valid_go_version(version: &str) -> bool {
    GO_VERSION_REGEX.is_match(version)
}

/// Read a `go` directive version leniently.
///
/// Valid versions are returned as-is. Otherwise a leading `1.N` (optionally
/// prefixed with `v`) followed by a non-digit is kept and the rest dropped,
/// so `1.21.x` reads as `1.21`. Returns `None` when there is no such prefix.
pub fn lax_go_version(version: &str) -> Option<String> {
    if is_valid_go_version(version) {
        return Some(version.to_string());
    }
    LAX_GO_VERSION_REGEX
        .captures(version)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_version_is_unchanged() {
        assert_eq!(
            canonical_module_version("v1.2.3").as_deref(),
            Some("v1.2.3")
        );
    }

    #[test]
    fn shorthand_is_filled_in() {
        assert_eq!(canonical_module_version("v1").as_deref(), Some("v1.0.0"));
        assert_eq!(canonical_module_version("v1.2").as_deref(), Some("v1.2.0"));
    }

    #[test]
    fn pseudo_version_is_accepted() {
        let pseudo = "v0.0.0-20240101120000-abcdef123456";
        assert_eq!(canonical_module_version(pseudo).as_deref(), Some(pseudo));
    }

    #[test]
    fn build_metadata_is_dropped_except_incompatible() {
        assert_eq!(
            canonical_module_version("v1.2.3+meta").as_deref(),
            Some("v1.2.3")
        );
        assert_eq!(
            canonical_module_version("v2.0.0+incompatible").as_deref(),
            Some("v2.0.0+incompatible")
        );
    }

    #[test]
    fn invalid_versions_are_rejected() {
        for bad in ["1.2.3", "v01.2.3", "v1.2-pre", "latest", "", "v1.2.3-01", "v1.2.3.4"] {
            assert!(canonical_module_version(bad).is_none(), "{bad} should be rejected");
        }
    }

    #[test]
    fn go_versions() {
        assert!(is_valid_go_version("1.21"));
        assert!(is_valid_go_version("1.21.3"));
        assert!(is_valid_go_version("1.22rc1"));
        assert!(!is_valid_go_version("v1.21"));
        assert!(!is_valid_go_version("1"));
        assert!(!is_valid_go_version("1.21.x"));
    }

    #[test]
    fn lax_go_version_keeps_usable_prefix() {
        assert_eq!(lax_go_version("1.22.1").as_deref(), Some("1.22.1"));
        assert_eq!(lax_go_version("1.21.x").as_deref(), Some("1.21"));
        assert_eq!(lax_go_version("v1.21").as_deref(), None);
        assert_eq!(lax_go_version("v1.21-custom").as_deref(), Some("1.21"));
        assert_eq!(lax_go_version("1.21beta").as_deref(), Some("1.21"));
    }

    #[test]
    fn lax_go_version_rejects_garbage() {
        for bad in ["1", "go1.21", "latest", "", "1.021"] {
            assert!(lax_go_version(bad).is_none(), "{bad} should be rejected");
        }
    }
}
