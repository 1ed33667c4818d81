//! Extension categories and the ordering used by the OpenXR specification.
//!
//! Extensions are grouped by their author tag:
//!
//! - KHR
//! - EXT (multi-vendor)
//! - single-vendor
//! - provisional/experimental extensions, by author tag:
//!   - KHX
//!   - EXTX
//!   - any other author tag ending in X

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static VENDOR_PROVISIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^XR_[A-Z0-9]+X_").expect("vendor provisional pattern is valid")
});

/// Category an extension belongs to, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionCategory {
    /// `XR_KHR_`
    Khr,
    /// `XR_EXT_`
    Ext,
    /// Any single-vendor author tag
    Vendor,
    /// `XR_KHX_`
    Khx,
    /// `XR_EXTX_`
    Extx,
    /// Any other author tag ending in `X`
    VendorX,
}

impl ExtensionCategory {
    /// All categories in report order.
    pub const ALL: [ExtensionCategory; 6] = [
        ExtensionCategory::Khr,
        ExtensionCategory::Ext,
        ExtensionCategory::Vendor,
        ExtensionCategory::Khx,
        ExtensionCategory::Extx,
        ExtensionCategory::VendorX,
    ];

    /// Classify an extension name.
    ///
    /// KHR and EXT are checked first so the broader "tag ends in X" pattern
    /// never claims them.
    pub fn of(ext_name: &str) -> Self {
        if ext_name.starts_with("XR_KHR_") {
            return ExtensionCategory::Khr;
        }
        if ext_name.starts_with("XR_EXT_") {
            return ExtensionCategory::Ext;
        }
        if ext_name.starts_with("XR_KHX_") {
            return ExtensionCategory::Khx;
        }
        if ext_name.starts_with("XR_EXTX_") {
            return ExtensionCategory::Extx;
        }
        if VENDOR_PROVISIONAL.is_match(ext_name) {
            return ExtensionCategory::VendorX;
        }
        ExtensionCategory::Vendor
    }

    /// Heading shown in the report.
    pub fn caption(&self) -> &'static str {
        match self {
            ExtensionCategory::Khr => "Khronos",
            ExtensionCategory::Ext => "Multi-Vendor",
            ExtensionCategory::Vendor => "Vendor",
            ExtensionCategory::Khx => "Provisional/Experimental Khronos",
            ExtensionCategory::Extx => "Provisional/Experimental Multi-Vendor",
            ExtensionCategory::VendorX => "Provisional/Experimental Vendor",
        }
    }

    /// Short identifier, usable as an HTML anchor.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionCategory::Khr => "khr",
            ExtensionCategory::Ext => "ext",
            ExtensionCategory::Vendor => "vendor",
            ExtensionCategory::Khx => "khx",
            ExtensionCategory::Extx => "extx",
            ExtensionCategory::VendorX => "vendorx",
        }
    }
}

impl fmt::Display for ExtensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

/// Classify an extension name.
pub fn categorize_ext_name(ext_name: &str) -> ExtensionCategory {
    ExtensionCategory::of(ext_name)
}

/// Sort key placing extensions in specification order: by category, then by name.
pub fn ext_name_key(ext_name: &str) -> (ExtensionCategory, &str) {
    (ExtensionCategory::of(ext_name), ext_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_known_prefixes() {
        assert_eq!(
            categorize_ext_name("XR_KHR_composition_layer_depth"),
            ExtensionCategory::Khr
        );
        assert_eq!(categorize_ext_name("XR_EXT_foo"), ExtensionCategory::Ext);
        assert_eq!(categorize_ext_name("XR_ACME_foo"), ExtensionCategory::Vendor);
        assert_eq!(categorize_ext_name("XR_KHX_foo"), ExtensionCategory::Khx);
        assert_eq!(categorize_ext_name("XR_EXTX_foo"), ExtensionCategory::Extx);
        assert_eq!(categorize_ext_name("XR_ACMEX_foo"), ExtensionCategory::VendorX);
    }

    #[test]
    fn test_categorize_real_vendor_tags() {
        assert_eq!(
            categorize_ext_name("XR_MNDX_egl_enable"),
            ExtensionCategory::VendorX
        );
        assert_eq!(
            categorize_ext_name("XR_FB_passthrough"),
            ExtensionCategory::Vendor
        );
        assert_eq!(
            categorize_ext_name("XR_HTCX_vive_tracker_interaction"),
            ExtensionCategory::VendorX
        );
    }

    #[test]
    fn test_categorize_is_total() {
        for name in ["", "XR_", "not an extension", "XR_khr_lower", "XR_KHR"] {
            assert!(ExtensionCategory::ALL.contains(&categorize_ext_name(name)));
        }
        assert_eq!(categorize_ext_name("XR_KHR"), ExtensionCategory::Vendor);
        assert_eq!(categorize_ext_name("XR_X_foo"), ExtensionCategory::Vendor);
    }

    #[test]
    fn test_sort_key_orders_by_category_then_name() {
        let mut names = vec![
            "XR_MNDX_b",
            "XR_EXT_b",
            "XR_FB_a",
            "XR_KHR_z",
            "XR_EXTX_a",
            "XR_KHX_a",
            "XR_KHR_a",
        ];
        names.sort_by(|a, b| ext_name_key(a).cmp(&ext_name_key(b)));
        assert_eq!(
            names,
            vec![
                "XR_KHR_a",
                "XR_KHR_z",
                "XR_EXT_b",
                "XR_FB_a",
                "XR_KHX_a",
                "XR_EXTX_a",
                "XR_MNDX_b"
            ]
        );
    }

    #[test]
    fn test_captions() {
        assert_eq!(ExtensionCategory::Ext.caption(), "Multi-Vendor");
        assert_eq!(
            ExtensionCategory::VendorX.to_string(),
            "Provisional/Experimental Vendor"
        );
    }
}
