/// Country-level result of a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// The string the caller asked about.
    pub request: String,
    /// The IP address actually looked up.
    pub ip: String,
    /// Index into the country reference tables.
    pub code_id: u32,
    pub iso2: &'static str,
    pub iso3: &'static str,
    pub name: &'static str,
    pub continent: &'static str,
}

/// Region-level result of a lookup against a region edition.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub request: String,
    pub ip: String,
    pub iso2: &'static str,
    pub iso3: &'static str,
    pub name: &'static str,
    pub continent: &'static str,
    /// Two-letter region code for US/CA, empty elsewhere.
    pub region_code: String,
    pub region_name: Option<&'static str>,
    pub time_zone: Option<&'static str>,
}

/// Full city-level result of a lookup against a city edition.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub request: String,
    pub ip: String,
    pub iso2: &'static str,
    pub iso3: &'static str,
    pub name: &'static str,
    pub continent: &'static str,
    pub region_code: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Designated market area, US records of revision-1 databases only.
    pub dma_code: Option<u32>,
    /// Telephone area code, US records of revision-1 databases only.
    pub area_code: Option<u32>,
    pub time_zone: Option<&'static str>,
    pub region_name: Option<&'static str>,
}

/// Autonomous-system result of a lookup against an ASN edition.
#[derive(Debug, Clone, PartialEq)]
pub struct AsnRecord {
    /// The AS number in its textual `AS<digits>` form.
    pub number: String,
    pub description: Option<String>,
}

/// Connection speed: a numeric class in legacy NETSPEED databases, a
/// label such as `Cable/DSL` in revision-1 databases.
#[derive(Debug, Clone, PartialEq)]
pub enum NetSpeed {
    Class(u8),
    Name(String),
}

/// One lookup result.
///
/// The variant is fixed by the edition of the opened database, so callers
/// that know what they opened can match a single arm; `country` on richer
/// editions hands back that edition's variant unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Country(CountryRecord),
    Region(RegionRecord),
    City(Box<CityRecord>),
    Asn(AsnRecord),
    /// ISP, organization, domain, registrar or user-type payload.
    Name(String),
    NetSpeed(NetSpeed),
}

impl Record {
    pub fn as_country(&self) -> Option<&CountryRecord> {
        match self {
            Record::Country(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_region(&self) -> Option<&RegionRecord> {
        match self {
            Record::Region(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_city(&self) -> Option<&CityRecord> {
        match self {
            Record::City(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_asn(&self) -> Option<&AsnRecord> {
        match self {
            Record::Asn(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Record::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_net_speed(&self) -> Option<&NetSpeed> {
        match self {
            Record::NetSpeed(speed) => Some(speed),
            _ => None,
        }
    }

    /// The two-letter country code carried by country, region and city
    /// variants.
    pub fn iso2(&self) -> Option<&'static str> {
        match self {
            Record::Country(record) => Some(record.iso2),
            Record::Region(record) => Some(record.iso2),
            Record::City(record) => Some(record.iso2),
            _ => None,
        }
    }
}
