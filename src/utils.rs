use crate::errors::GeoIpError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The loopback spellings eligible for `local_ip_alias` substitution.
pub(crate) const LOCAL_IP_SPELLINGS: [&str; 5] = [
    "127.0.0.1",
    "localhost",
    "::1",
    "0000::1",
    "0:0:0:0:0:0:0:1",
];

/// Apply the configured loopback alias, then the `::1` rewrite.
pub(crate) fn normalize_address<'a>(addr: &'a str, alias: Option<&'a str>) -> &'a str {
    let addr = match alias {
        Some(alias) if LOCAL_IP_SPELLINGS.contains(&addr) => alias,
        _ => addr,
    };
    if addr == "::1" {
        "0.0.0.0"
    } else {
        addr
    }
}

/// Convert an IP address string into the integer a `bits`-deep trie is
/// indexed by.
///
/// Dotted quads are widened to their IPv4-mapped form for 128-bit trees;
/// IPv4-mapped IPv6 literals are narrowed for 32-bit trees. Any other
/// IPv6 literal cannot be looked up in a 32-bit tree.
pub(crate) fn ip_to_number(addr: &str, bits: u32) -> Result<u128, GeoIpError> {
    let parsed: IpAddr = addr
        .parse()
        .map_err(|_| GeoIpError::BadAddress(addr.to_string()))?;
    match (parsed, bits) {
        (IpAddr::V4(v4), 32) => Ok(u128::from(u32::from(v4))),
        (IpAddr::V4(v4), _) => Ok(u128::from(v4.to_ipv6_mapped())),
        (IpAddr::V6(v6), 32) => v6
            .to_ipv4_mapped()
            .map(|v4| u128::from(u32::from(v4)))
            .ok_or_else(|| GeoIpError::BadAddress(addr.to_string())),
        (IpAddr::V6(v6), _) => Ok(u128::from(v6)),
    }
}

/// Render an IP integer the way lookup results report addresses.
pub(crate) fn number_to_ip(number: u128, bits: u32) -> String {
    if bits == 32 {
        Ipv4Addr::from(number as u32).to_string()
    } else {
        Ipv6Addr::from(number).to_string()
    }
}

/// Transcode an ISO-8859-1 byte run to an owned UTF-8 string.
pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| byte as char).collect()
}

/// Scan the NUL-terminated field starting at `pos`.
///
/// Returns the index of the terminator and the decoded field (`None` for
/// an empty field), or `None` when the buffer ends before a terminator.
pub(crate) fn read_terminated(buffer: &[u8], pos: usize) -> Option<(usize, Option<String>)> {
    let mut cur = pos;
    while cur < buffer.len() {
        if buffer[cur] == 0 {
            let data = (cur > pos).then(|| latin1_to_string(&buffer[pos..cur]));
            return Some((cur, data));
        }
        cur += 1;
    }
    None
}

/// Split an `AS<number> <description>` payload into its parts.
///
/// Returns `None` when the payload does not follow that shape; some
/// databases store plain user-type strings in ASN records.
pub(crate) fn parse_asn(raw: &str) -> Option<(String, Option<String>)> {
    let rest = raw.strip_prefix("AS")?;
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits == 0 {
        return None;
    }
    let number = format!("AS{}", &rest[..digits]);
    let tail = &rest[digits..];
    if tail.is_empty() {
        return Some((number, None));
    }
    let mut chars = tail.chars();
    match chars.next() {
        Some(sep) if sep.is_whitespace() => Some((number, Some(chars.as_str().to_string()))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_to_number_ipv4() {
        assert_eq!(ip_to_number("1.32.0.0", 32).unwrap(), 18874368);
        assert_eq!(ip_to_number("192.168.1.1", 32).unwrap(), 3232235777);
    }

    #[test]
    fn test_ip_to_number_ipv6() {
        assert_eq!(
            ip_to_number("2001:0db8:85a3:0000:0000:8a2e:0370:7334", 128).unwrap(),
            42540766452641154071740215577757643572
        );
    }

    #[test]
    fn test_ip_to_number_widens_for_v6_trees() {
        assert_eq!(
            ip_to_number("1.2.3.4", 128).unwrap(),
            u128::from(Ipv4Addr::new(1, 2, 3, 4).to_ipv6_mapped())
        );
    }

    #[test]
    fn test_ip_to_number_narrows_mapped_for_v4_trees() {
        assert_eq!(
            ip_to_number("::ffff:1.2.3.4", 32).unwrap(),
            ip_to_number("1.2.3.4", 32).unwrap()
        );
        assert!(matches!(
            ip_to_number("2001:db8::1", 32),
            Err(GeoIpError::BadAddress(_))
        ));
    }

    #[test]
    fn test_ip_to_number_rejects_garbage() {
        assert!(matches!(
            ip_to_number("not-an-ip", 32),
            Err(GeoIpError::BadAddress(_))
        ));
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(normalize_address("::1", None), "0.0.0.0");
        assert_eq!(normalize_address("8.8.8.8", None), "8.8.8.8");
        assert_eq!(normalize_address("localhost", Some("10.0.0.9")), "10.0.0.9");
        assert_eq!(
            normalize_address("0:0:0:0:0:0:0:1", Some("10.0.0.9")),
            "10.0.0.9"
        );
        assert_eq!(normalize_address("example.org", Some("10.0.0.9")), "example.org");
    }

    #[test]
    fn test_latin1_to_string() {
        assert_eq!(latin1_to_string(b"Z\xfcrich"), "Zürich");
        assert_eq!(latin1_to_string(b"Montr\xe9al"), "Montréal");
    }

    #[test]
    fn test_read_terminated_with_valid_string() {
        let buffer = b"Hello\0World";
        assert_eq!(
            read_terminated(buffer, 0),
            Some((5, Some("Hello".to_string())))
        );
    }

    #[test]
    fn test_read_terminated_with_empty_string() {
        assert_eq!(read_terminated(b"\0World", 0), Some((0, None)));
    }

    #[test]
    fn test_read_terminated_without_terminator() {
        assert_eq!(read_terminated(b"HelloWorld", 0), None);
    }

    #[test]
    fn test_parse_asn() {
        assert_eq!(
            parse_asn("AS15169 Google LLC"),
            Some(("AS15169".to_string(), Some("Google LLC".to_string())))
        );
        assert_eq!(parse_asn("AS701"), Some(("AS701".to_string(), None)));
        assert_eq!(parse_asn("Residential"), None);
        assert_eq!(parse_asn("AS12x34"), None);
        assert_eq!(parse_asn("AS"), None);
    }
}
