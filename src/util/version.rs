//! Packed format versions.
//!
//! A version `a.b.c.d` is stored as a single `u32`: `a << 24 | b << 16 | c << 8 | d`.

use super::{Error, Result};

pub const VER_2_3: u32 = 0x0203_0000;
pub const VER_3_0: u32 = 0x0300_0000;
pub const VER_3_1: u32 = 0x0301_0000;
pub const VER_3_3_0_13: u32 = 0x0303_000D;
/// Baseline version used when none is specified.
pub const VER_4_0_0_2: u32 = 0x0400_0002;
/// First version storing `bool` as a single byte.
pub const VER_4_1_0_1: u32 = 0x0401_0001;
pub const VER_4_1_0_12: u32 = 0x0401_000C;
pub const VER_4_2_0_2: u32 = 0x0402_0002;
pub const VER_4_2_1_0: u32 = 0x0402_0100;
pub const VER_4_2_2_0: u32 = 0x0402_0200;
pub const VER_10_0_1_0: u32 = 0x0A00_0100;
pub const VER_10_0_1_2: u32 = 0x0A00_0102;
pub const VER_10_1_0_0: u32 = 0x0A01_0000;
pub const VER_10_1_0_106: u32 = 0x0A01_006A;
pub const VER_10_2_0_0: u32 = 0x0A02_0000;
pub const VER_20_0_0_4: u32 = 0x1400_0004;
pub const VER_20_0_0_5: u32 = 0x1400_0005;
/// First version storing indexed strings in a shared string table.
pub const VER_20_1_0_1: u32 = 0x1401_0001;
pub const VER_20_1_0_3: u32 = 0x1401_0003;
pub const VER_20_2_0_7: u32 = 0x1402_0007;
pub const VER_20_3_0_9: u32 = 0x1403_0009;
/// Recognised as a version but not handled by any reader.
pub const VER_UNSUPPORTED: u32 = 0xFFFF_FFFE;
/// Not a version at all.
pub const VER_INVALID: u32 = 0xFFFF_FFFF;

/// Pack four components into a version number.
#[inline]
pub const fn pack_version(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) << 24 | (b as u32) << 16 | (c as u32) << 8 | d as u32
}

/// Split a version number into its four components.
#[inline]
pub const fn unpack_version(version: u32) -> [u8; 4] {
    version.to_be_bytes()
}

/// Parse a dotted version string such as `"20.0.0.5"`.
///
/// Up to four components are accepted; missing trailing components are zero.
pub fn parse_version(s: &str) -> Result<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::InvalidVersion(s.to_string()));
    }

    let mut parts = [0u8; 4];
    for (i, part) in s.split('.').enumerate() {
        if i >= 4 {
            return Err(Error::InvalidVersion(s.to_string()));
        }
        parts[i] = part
            .parse::<u8>()
            .map_err(|_| Error::InvalidVersion(s.to_string()))?;
    }

    let [a, b, c, d] = parts;
    Ok(pack_version(a, b, c, d))
}

/// Render a version number as `"a.b.c.d"`.
///
/// Versions up to 3.1 whose last two components are zero render as `"a.b"`,
/// the form their header lines use.
pub fn format_version(version: u32) -> String {
    let [a, b, c, d] = unpack_version(version);
    if version <= VER_3_1 && c == 0 && d == 0 {
        format!("{}.{}", a, b)
    } else {
        format!("{}.{}.{}.{}", a, b, c, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_constants() {
        assert_eq!(pack_version(4, 0, 0, 2), VER_4_0_0_2);
        assert_eq!(pack_version(20, 0, 0, 5), VER_20_0_0_5);
        assert_eq!(pack_version(10, 1, 0, 106), VER_10_1_0_106);
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("20.0.0.5").unwrap(), VER_20_0_0_5);
        assert_eq!(parse_version("3.1").unwrap(), VER_3_1);
        assert_eq!(parse_version(" 4.0.0.2 ").unwrap(), VER_4_0_0_2);
    }

    #[test]
    fn test_parse_version_rejects() {
        assert!(parse_version("").is_err());
        assert!(parse_version("1.2.3.4.5").is_err());
        assert!(parse_version("256.0.0.0").is_err());
        assert!(parse_version("twenty").is_err());
        assert!(parse_version("20..0.5").is_err());
    }

    #[test]
    fn test_format_version() {
        assert_eq!(format_version(VER_20_2_0_7), "20.2.0.7");
        assert_eq!(format_version(VER_4_0_0_2), "4.0.0.2");
        assert_eq!(parse_version(&format_version(VER_10_0_1_2)).unwrap(), VER_10_0_1_2);
    }

    #[test]
    fn test_format_early_versions() {
        assert_eq!(format_version(VER_3_1), "3.1");
        assert_eq!(format_version(VER_3_0), "3.0");
        assert_eq!(format_version(VER_2_3), "2.3");
        assert_eq!(format_version(VER_3_3_0_13), "3.3.0.13");
        assert_eq!(format_version(0x0300_0300), "3.0.3.0");
        for v in [VER_2_3, VER_3_0, VER_3_1, 0x0300_0300, VER_3_3_0_13, VER_4_0_0_2] {
            assert_eq!(parse_version(&format_version(v)).unwrap(), v);
        }
    }
}
