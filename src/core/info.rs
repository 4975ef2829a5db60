//! Per-file format metadata.

use crate::util::version::{format_version, VER_4_0_0_2};
use crate::util::ByteOrder;

/// Describes how a file is (or will be) stored: version, vendor sub-versions,
/// byte order, and provenance strings.
///
/// Built once per read or write session and then passed by reference to every
/// codec call. No validation is done on the version numbers; deciding whether a
/// version is supported is up to the reader or writer consuming this record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatMetadata {
    /// Packed format version (see [`crate::util::version`]).
    pub version: u32,
    /// First vendor sub-version.
    pub user_version: u32,
    /// Second vendor sub-version.
    pub user_version2: u32,
    /// Byte order of multi-byte values.
    pub byte_order: ByteOrder,
    /// Name of the person who created the file.
    pub author: String,
    /// Exporter script or program that produced the file.
    pub export_tool_name: String,
    /// More specific exporter options.
    pub export_tool_settings: String,
}

impl FormatMetadata {
    /// Metadata for `version` with both user versions zero.
    ///
    /// Byte order is always little-endian.
    pub fn new(version: u32) -> Self {
        Self::with_user_versions(version, 0, 0)
    }

    /// Metadata for `version` and the two vendor sub-versions.
    ///
    /// Byte order is always little-endian.
    pub fn with_user_versions(version: u32, user_version: u32, user_version2: u32) -> Self {
        Self {
            version,
            user_version,
            user_version2,
            byte_order: ByteOrder::Little,
            author: String::new(),
            export_tool_name: String::new(),
            export_tool_settings: String::new(),
        }
    }

    /// Set the byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the export tool name and settings.
    pub fn with_export_tool(
        mut self,
        name: impl Into<String>,
        settings: impl Into<String>,
    ) -> Self {
        self.export_tool_name = name.into();
        self.export_tool_settings = settings.into();
        self
    }

    /// Dotted form of [`Self::version`].
    pub fn version_string(&self) -> String {
        format_version(self.version)
    }

    /// True if any provenance string is set.
    pub fn has_provenance(&self) -> bool {
        !(self.author.is_empty()
            && self.export_tool_name.is_empty()
            && self.export_tool_settings.is_empty())
    }
}

impl Default for FormatMetadata {
    fn default() -> Self {
        Self::new(VER_4_0_0_2)
    }
}
