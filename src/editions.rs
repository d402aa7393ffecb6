use crate::errors::GeoIpError;
use std::fmt;

/// How an edition locates the boundary between its trie and its data
/// region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentFamily {
    /// Fixed boundary at [`COUNTRY_BEGIN`](crate::constants::COUNTRY_BEGIN).
    Country,
    /// Fixed boundary at [`STATE_BEGIN_REV0`](crate::constants::STATE_BEGIN_REV0).
    RegionRev0,
    /// Fixed boundary at [`STATE_BEGIN_REV1`](crate::constants::STATE_BEGIN_REV1).
    RegionRev1,
    /// Boundary stored in the three bytes after the structure sentinel.
    Variable,
}

/// The edition of an opened database, decoded from the trailing structure
/// marker.
///
/// The edition fixes the width of the IP tree (32 or 128 bits), the width
/// of each trie pointer (3 or 4 bytes) and the schema of the data region,
/// so every lookup dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    Country,
    CityRev1,
    RegionRev1,
    Isp,
    Org,
    CityRev0,
    RegionRev0,
    Proxy,
    Asnum,
    NetSpeed,
    Domain,
    CountryV6,
    LocationA,
    AccuracyRadius,
    LargeCountry,
    LargeCountryV6,
    AsnumV6,
    IspV6,
    OrgV6,
    DomainV6,
    LocationAV6,
    Registrar,
    RegistrarV6,
    UserType,
    UserTypeV6,
    CityRev1V6,
    CityRev0V6,
    NetSpeedRev1,
    NetSpeedRev1V6,
    CountryConf,
    CityConf,
    RegionConf,
    PostalConf,
    AccuracyRadiusV6,
}

impl Edition {
    /// Decode a (normalised) edition byte from the structure marker.
    pub fn from_byte(byte: u8) -> Result<Edition, GeoIpError> {
        Ok(match byte {
            1 => Edition::Country,
            2 => Edition::CityRev1,
            3 => Edition::RegionRev1,
            4 => Edition::Isp,
            5 => Edition::Org,
            6 => Edition::CityRev0,
            7 => Edition::RegionRev0,
            8 => Edition::Proxy,
            9 => Edition::Asnum,
            10 => Edition::NetSpeed,
            11 => Edition::Domain,
            12 => Edition::CountryV6,
            13 => Edition::LocationA,
            14 => Edition::AccuracyRadius,
            17 => Edition::LargeCountry,
            18 => Edition::LargeCountryV6,
            21 => Edition::AsnumV6,
            22 => Edition::IspV6,
            23 => Edition::OrgV6,
            24 => Edition::DomainV6,
            25 => Edition::LocationAV6,
            26 => Edition::Registrar,
            27 => Edition::RegistrarV6,
            28 => Edition::UserType,
            29 => Edition::UserTypeV6,
            30 => Edition::CityRev1V6,
            31 => Edition::CityRev0V6,
            32 => Edition::NetSpeedRev1,
            33 => Edition::NetSpeedRev1V6,
            34 => Edition::CountryConf,
            35 => Edition::CityConf,
            36 => Edition::RegionConf,
            37 => Edition::PostalConf,
            38 => Edition::AccuracyRadiusV6,
            _ => return Err(GeoIpError::UnsupportedEdition(byte)),
        })
    }

    /// Depth of the IP tree: 128 for the IPv6 editions (and PROXY), 32
    /// otherwise.
    pub fn ip_bits(self) -> u32 {
        match self {
            Edition::Proxy
            | Edition::CountryV6
            | Edition::LargeCountryV6
            | Edition::AsnumV6
            | Edition::IspV6
            | Edition::OrgV6
            | Edition::DomainV6
            | Edition::LocationAV6
            | Edition::RegistrarV6
            | Edition::UserTypeV6
            | Edition::CityRev1V6
            | Edition::CityRev0V6
            | Edition::NetSpeedRev1V6
            | Edition::AccuracyRadiusV6 => 128,
            _ => 32,
        }
    }

    /// Width in bytes of one trie pointer.
    pub fn record_length(self) -> usize {
        match self {
            Edition::Org
            | Edition::Isp
            | Edition::Domain
            | Edition::Registrar
            | Edition::UserType
            | Edition::AccuracyRadius
            | Edition::LargeCountry
            | Edition::LocationA
            | Edition::OrgV6
            | Edition::IspV6
            | Edition::DomainV6
            | Edition::RegistrarV6
            | Edition::UserTypeV6
            | Edition::AccuracyRadiusV6
            | Edition::LargeCountryV6
            | Edition::LocationAV6 => crate::constants::ORG_RECORD_LENGTH,
            _ => crate::constants::STANDARD_RECORD_LENGTH,
        }
    }

    pub(crate) fn segment_family(self) -> SegmentFamily {
        match self {
            Edition::Country | Edition::Proxy | Edition::CountryV6 | Edition::NetSpeed => {
                SegmentFamily::Country
            }
            Edition::RegionRev0 => SegmentFamily::RegionRev0,
            Edition::RegionRev1 => SegmentFamily::RegionRev1,
            _ => SegmentFamily::Variable,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edition::Country => "COUNTRY",
            Edition::CityRev1 => "CITY_REV1",
            Edition::RegionRev1 => "REGION_REV1",
            Edition::Isp => "ISP",
            Edition::Org => "ORG",
            Edition::CityRev0 => "CITY_REV0",
            Edition::RegionRev0 => "REGION_REV0",
            Edition::Proxy => "PROXY",
            Edition::Asnum => "ASNUM",
            Edition::NetSpeed => "NETSPEED",
            Edition::Domain => "DOMAIN",
            Edition::CountryV6 => "COUNTRY_V6",
            Edition::LocationA => "LOCATIONA",
            Edition::AccuracyRadius => "ACCURACYRADIUS",
            Edition::LargeCountry => "LARGE_COUNTRY",
            Edition::LargeCountryV6 => "LARGE_COUNTRY_V6",
            Edition::AsnumV6 => "ASNUM_V6",
            Edition::IspV6 => "ISP_V6",
            Edition::OrgV6 => "ORG_V6",
            Edition::DomainV6 => "DOMAIN_V6",
            Edition::LocationAV6 => "LOCATIONA_V6",
            Edition::Registrar => "REGISTRAR",
            Edition::RegistrarV6 => "REGISTRAR_V6",
            Edition::UserType => "USERTYPE",
            Edition::UserTypeV6 => "USERTYPE_V6",
            Edition::CityRev1V6 => "CITY_REV1_V6",
            Edition::CityRev0V6 => "CITY_REV0_V6",
            Edition::NetSpeedRev1 => "NETSPEED_REV1",
            Edition::NetSpeedRev1V6 => "NETSPEED_REV1_V6",
            Edition::CountryConf => "COUNTRYCONF",
            Edition::CityConf => "CITYCONF",
            Edition::RegionConf => "REGIONCONF",
            Edition::PostalConf => "POSTALCONF",
            Edition::AccuracyRadiusV6 => "ACCURACYRADIUS_V6",
        };
        f.write_str(name)
    }
}
