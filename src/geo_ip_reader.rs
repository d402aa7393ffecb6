use std::fmt;
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, trace};

use crate::byte_source::ByteSource;
use crate::constants::*;
use crate::continent_names::CONTINENT_NAMES;
use crate::countries_codes_three::COUNTRY_CODES_THREE;
use crate::countries_codes_two::COUNTRY_CODES_TWO;
use crate::countries_names::COUNTRY_NAMES;
use crate::editions::{Edition, SegmentFamily};
use crate::errors::GeoIpError;
use crate::records::{AsnRecord, CityRecord, CountryRecord, NetSpeed, Record, RegionRecord};
use crate::region_names::region_name_by_code;
use crate::time_zones::time_zone_by_country;
use crate::utils::{
    ip_to_number, latin1_to_string, normalize_address, number_to_ip, parse_asn, read_terminated,
};

/// Name resolver invoked for query strings that do not parse as IP
/// literals. Returns the resolved address string, or `None` when the name
/// cannot be resolved.
pub type Resolver = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Options controlling how a database is opened.
///
/// # Examples
///
/// ```no_run
/// use ipatlas::geo_ip_reader::OpenOptions;
///
/// let reader = OpenOptions::new()
///     .preload(true)
///     .local_ip_alias("203.0.113.7")
///     .open("GeoIPCity.dat")
///     .unwrap();
/// ```
#[derive(Clone, Default)]
pub struct OpenOptions {
    preload: bool,
    local_ip_alias: Option<String>,
    resolver: Option<Resolver>,
}

impl fmt::Debug for OpenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenOptions")
            .field("preload", &self.preload)
            .field("local_ip_alias", &self.local_ip_alias)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

impl OpenOptions {
    pub fn new() -> OpenOptions {
        OpenOptions::default()
    }

    /// Read the whole file into memory at open instead of issuing
    /// positional reads against it.
    pub fn preload(&mut self, preload: bool) -> &mut OpenOptions {
        self.preload = preload;
        self
    }

    /// Substitute this address for any loopback spelling
    /// (`127.0.0.1`, `localhost`, `::1`, ...) before lookup.
    pub fn local_ip_alias(&mut self, alias: impl Into<String>) -> &mut OpenOptions {
        self.local_ip_alias = Some(alias.into());
        self
    }

    /// Install a name resolver for query strings that are not IP
    /// literals. Without one, such queries fail with `BadAddress`.
    pub fn resolver(
        &mut self,
        resolver: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> &mut OpenOptions {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Open the database at `path` with these options.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<GeoIpReader, GeoIpError> {
        let source = ByteSource::open(path.as_ref(), self.preload)?;
        GeoIpReader::from_source(source, self.local_ip_alias.clone(), self.resolver.clone())
    }
}

/// A reader over one legacy GeoIP database.
///
/// The edition, trie pointer width and segment base are detected once at
/// open and never change, and reads are positional, so a reader can be
/// shared across threads for concurrent lookups. Iteration
/// ([`each`](GeoIpReader::each) and [`each_by_ip`](GeoIpReader::each_by_ip))
/// takes `&mut self` because it holds a cursor over the whole database.
///
/// # Examples
///
/// ```no_run
/// use ipatlas::geo_ip_reader::GeoIpReader;
///
/// let reader = GeoIpReader::open("GeoIP.dat").unwrap();
/// if let Some(record) = reader.country("217.67.16.35").unwrap() {
///     let country = record.as_country().unwrap();
///     println!("{} ({})", country.name, country.iso2);
/// }
/// ```
pub struct GeoIpReader {
    source: ByteSource,
    database_type: Edition,
    record_length: usize,
    database_segments: u32,
    ip_bits: u32,
    local_ip_alias: Option<String>,
    resolver: Option<Resolver>,
}

impl fmt::Debug for GeoIpReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoIpReader")
            .field("database_type", &self.database_type)
            .field("record_length", &self.record_length)
            .field("database_segments", &self.database_segments)
            .field("ip_bits", &self.ip_bits)
            .finish()
    }
}

impl GeoIpReader {
    /// Open the database at `path` with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<GeoIpReader, GeoIpError> {
        OpenOptions::new().open(path)
    }

    fn from_source(
        source: ByteSource,
        local_ip_alias: Option<String>,
        resolver: Option<Resolver>,
    ) -> Result<GeoIpReader, GeoIpError> {
        let (database_type, database_segments) = detect_database_type(&source)?;
        if database_segments == 0 {
            return Err(GeoIpError::CorruptDatabase("zero segment base"));
        }
        debug!(
            edition = %database_type,
            segment_base = database_segments,
            "detected database edition"
        );
        Ok(GeoIpReader {
            source,
            database_type,
            record_length: database_type.record_length(),
            database_segments,
            ip_bits: database_type.ip_bits(),
            local_ip_alias,
            resolver,
        })
    }

    /// The edition detected from the trailing structure marker.
    pub fn database_type(&self) -> Edition {
        self.database_type
    }

    /// Look up country-level information for `addr`.
    ///
    /// City, region and net-speed editions carry their own richer
    /// records, so on those databases this returns that edition's
    /// variant unchanged.
    pub fn country(&self, addr: &str) -> Result<Option<Record>, GeoIpError> {
        match self.database_type {
            Edition::CityRev0
            | Edition::CityRev1
            | Edition::CityRev0V6
            | Edition::CityRev1V6 => self.city(addr),
            Edition::RegionRev0 | Edition::RegionRev1 => self.region(addr),
            Edition::NetSpeed | Edition::NetSpeedRev1 | Edition::NetSpeedRev1V6 => {
                self.netspeed(addr)
            }
            Edition::Country
            | Edition::Proxy
            | Edition::CountryV6
            | Edition::LargeCountry
            | Edition::LargeCountryV6 => {
                let (ip, number) = self.prepare(addr)?;
                let terminal = self.seek_record(number)?;
                self.read_country(addr, &ip, terminal).map(Some)
            }
            _ => Err(GeoIpError::InvalidForEdition(self.database_type)),
        }
    }

    /// Look up region-level information for `addr`.
    ///
    /// Defined for the region editions; city editions answer with their
    /// full city record.
    pub fn region(&self, addr: &str) -> Result<Option<Record>, GeoIpError> {
        match self.database_type {
            Edition::CityRev0
            | Edition::CityRev1
            | Edition::CityRev0V6
            | Edition::CityRev1V6 => self.city(addr),
            Edition::RegionRev0 | Edition::RegionRev1 => {
                let (ip, number) = self.prepare(addr)?;
                let terminal = self.seek_record(number)?;
                if terminal == self.database_segments {
                    return Ok(None);
                }
                self.read_region(addr, &ip, terminal).map(Some)
            }
            _ => Err(GeoIpError::InvalidForEdition(self.database_type)),
        }
    }

    /// Look up the full city record for `addr`.
    ///
    /// Returns `Ok(None)` when the database has no data for the address.
    pub fn city(&self, addr: &str) -> Result<Option<Record>, GeoIpError> {
        match self.database_type {
            Edition::CityRev0
            | Edition::CityRev1
            | Edition::CityRev0V6
            | Edition::CityRev1V6 => {
                let (ip, number) = self.prepare(addr)?;
                let terminal = self.seek_record(number)?;
                if terminal == self.database_segments {
                    return Ok(None);
                }
                Ok(self
                    .read_city(addr, &ip, terminal)?
                    .map(|(record, _)| Record::City(Box::new(record))))
            }
            _ => Err(GeoIpError::InvalidForEdition(self.database_type)),
        }
    }

    /// Look up the ISP or organization name for `addr`.
    pub fn isp(&self, addr: &str) -> Result<Option<Record>, GeoIpError> {
        match self.database_type {
            Edition::Isp
            | Edition::Org
            | Edition::Domain
            | Edition::Registrar
            | Edition::UserType
            | Edition::LocationA
            | Edition::AccuracyRadius
            | Edition::IspV6
            | Edition::OrgV6
            | Edition::DomainV6
            | Edition::RegistrarV6
            | Edition::UserTypeV6
            | Edition::LocationAV6
            | Edition::AccuracyRadiusV6
            | Edition::CountryConf
            | Edition::CityConf
            | Edition::RegionConf
            | Edition::PostalConf => {
                let (_, number) = self.prepare(addr)?;
                let terminal = self.seek_record(number)?;
                self.read_org(terminal)
            }
            _ => Err(GeoIpError::InvalidForEdition(self.database_type)),
        }
    }

    /// Alias for [`isp`](GeoIpReader::isp): organization databases share
    /// the ISP record layout.
    pub fn organization(&self, addr: &str) -> Result<Option<Record>, GeoIpError> {
        self.isp(addr)
    }

    /// Look up the autonomous system for `addr`.
    pub fn asn(&self, addr: &str) -> Result<Option<Record>, GeoIpError> {
        match self.database_type {
            Edition::Asnum | Edition::AsnumV6 => {
                let (_, number) = self.prepare(addr)?;
                let terminal = self.seek_record(number)?;
                self.read_asn(terminal)
            }
            _ => Err(GeoIpError::InvalidForEdition(self.database_type)),
        }
    }

    /// Look up the connection speed for `addr`: a numeric class on
    /// legacy NETSPEED databases, a label on revision-1 databases.
    pub fn netspeed(&self, addr: &str) -> Result<Option<Record>, GeoIpError> {
        match self.database_type {
            Edition::NetSpeed => {
                let (ip, number) = self.prepare(addr)?;
                let terminal = self.seek_record(number)?;
                self.read_country(addr, &ip, terminal).map(Some)
            }
            Edition::NetSpeedRev1 | Edition::NetSpeedRev1V6 => {
                let (_, number) = self.prepare(addr)?;
                let terminal = self.seek_record(number)?;
                self.read_netspeed_name(terminal)
            }
            _ => Err(GeoIpError::InvalidForEdition(self.database_type)),
        }
    }

    /// Visit every city record in the data segment, in database order.
    ///
    /// Only defined for the IPv4 city editions. The cursor starts at data
    /// offset 1 (offset 0 is the "unassigned" cell) and stops at the
    /// first window that no longer frames a complete record.
    pub fn each<F>(&mut self, mut visit: F) -> Result<(), GeoIpError>
    where
        F: FnMut(CityRecord),
    {
        match self.database_type {
            Edition::CityRev0 | Edition::CityRev1 => {}
            _ => return Err(GeoIpError::InvalidForEdition(self.database_type)),
        }
        let mut offset = 1u32;
        loop {
            let terminal = self.database_segments + offset;
            match self.read_city("", "", terminal) {
                Ok(Some((record, consumed))) => {
                    visit(record);
                    offset += consumed as u32;
                }
                Ok(None) | Err(GeoIpError::CorruptDatabase(_)) => break,
                Err(error) => return Err(error),
            }
        }
        Ok(())
    }

    /// Walk the trie depth-first, emitting `(ip_integer, record)` pairs
    /// for every leaf in ascending IP order.
    ///
    /// Leaves at exactly the segment base carry no data and yield `None`.
    pub fn each_by_ip<F>(&mut self, mut visit: F) -> Result<(), GeoIpError>
    where
        F: FnMut(u128, Option<Record>),
    {
        self.walk(0, self.ip_bits, 0, &mut visit)
    }

    fn walk<F>(
        &self,
        node: u32,
        bits_left: u32,
        prefix: u128,
        visit: &mut F,
    ) -> Result<(), GeoIpError>
    where
        F: FnMut(u128, Option<Record>),
    {
        for side in 0..2u32 {
            let pointer = self.read_node_pointer(node, side == 1)?;
            let child_prefix = if side == 1 {
                prefix | 1u128 << (bits_left - 1)
            } else {
                prefix
            };
            if pointer >= self.database_segments {
                let record = if pointer == self.database_segments {
                    None
                } else {
                    let ip = number_to_ip(child_prefix, self.ip_bits);
                    self.decode_record(&ip, &ip, pointer)?
                };
                visit(child_prefix, record);
            } else if bits_left > 1 {
                self.walk(pointer, bits_left - 1, child_prefix, visit)?;
            } else {
                // pointer chain outlives the address width: unassigned
                visit(child_prefix, None);
            }
        }
        Ok(())
    }

    /// Resolve, normalise and convert the query string.
    fn prepare(&self, request: &str) -> Result<(String, u128), GeoIpError> {
        let ip = self.resolve_address(request)?;
        let number = ip_to_number(&ip, self.ip_bits)?;
        Ok((ip, number))
    }

    fn resolve_address(&self, request: &str) -> Result<String, GeoIpError> {
        let addr = normalize_address(request, self.local_ip_alias.as_deref());
        if addr.parse::<IpAddr>().is_ok() {
            return Ok(addr.to_string());
        }
        if let Some(resolver) = &self.resolver {
            if let Some(resolved) = resolver(addr) {
                if resolved.parse::<IpAddr>().is_ok() {
                    return Ok(resolved);
                }
            }
        }
        Err(GeoIpError::BadAddress(request.to_string()))
    }

    /// Descend the index trie for `number`, most significant bit first,
    /// until a pointer crosses into the data segment.
    fn seek_record(&self, number: u128) -> Result<u32, GeoIpError> {
        let mut node: u32 = 0;
        for depth in (0..self.ip_bits).rev() {
            let pointer = self.read_node_pointer(node, (number >> depth) & 1 != 0)?;
            if pointer >= self.database_segments {
                trace!(node, depth, pointer, "trie descent terminated");
                return Ok(pointer);
            }
            node = pointer;
        }
        trace!("trie descent exhausted the address width");
        Ok(self.database_segments)
    }

    /// Read one half of a trie node: the left pointer for bit 0, the
    /// right pointer for bit 1.
    fn read_node_pointer(&self, node: u32, right: bool) -> Result<u32, GeoIpError> {
        let half = if right { self.record_length as u64 } else { 0 };
        let offset = 2 * self.record_length as u64 * u64::from(node) + half;
        let buf = self.source.read(offset, self.record_length)?;
        Ok(LittleEndian::read_uint(&buf, self.record_length) as u32)
    }

    /// Byte length of the index region; the data region starts here.
    fn index_size(&self) -> u64 {
        2 * self.record_length as u64 * u64::from(self.database_segments)
    }

    /// Offset of `terminal` within the data region.
    fn data_offset(&self, terminal: u32) -> Result<u32, GeoIpError> {
        terminal
            .checked_sub(self.database_segments)
            .ok_or(GeoIpError::CorruptDatabase(
                "terminal offset before segment base",
            ))
    }

    /// Dispatch the decoder the opened edition calls for.
    fn decode_record(
        &self,
        request: &str,
        ip: &str,
        terminal: u32,
    ) -> Result<Option<Record>, GeoIpError> {
        match self.database_type {
            Edition::Country
            | Edition::Proxy
            | Edition::CountryV6
            | Edition::LargeCountry
            | Edition::LargeCountryV6
            | Edition::NetSpeed => self.read_country(request, ip, terminal).map(Some),
            Edition::RegionRev0 | Edition::RegionRev1 => {
                self.read_region(request, ip, terminal).map(Some)
            }
            Edition::CityRev0
            | Edition::CityRev1
            | Edition::CityRev0V6
            | Edition::CityRev1V6 => Ok(self
                .read_city(request, ip, terminal)?
                .map(|(record, _)| Record::City(Box::new(record)))),
            Edition::Asnum | Edition::AsnumV6 => self.read_asn(terminal),
            Edition::NetSpeedRev1 | Edition::NetSpeedRev1V6 => self.read_netspeed_name(terminal),
            Edition::Isp
            | Edition::Org
            | Edition::Domain
            | Edition::Registrar
            | Edition::UserType
            | Edition::LocationA
            | Edition::AccuracyRadius
            | Edition::IspV6
            | Edition::OrgV6
            | Edition::DomainV6
            | Edition::RegistrarV6
            | Edition::UserTypeV6
            | Edition::LocationAV6
            | Edition::AccuracyRadiusV6
            | Edition::CountryConf
            | Edition::CityConf
            | Edition::RegionConf
            | Edition::PostalConf => self.read_org(terminal),
        }
    }

    /// Bounds-checked country index of a country-style terminal offset.
    fn country_index(&self, terminal: u32) -> Result<u32, GeoIpError> {
        let index = self.data_offset(terminal)?;
        if index as usize >= COUNTRY_CODES_TWO.len() {
            return Err(GeoIpError::CorruptDatabase("country index out of range"));
        }
        Ok(index)
    }

    fn read_country(&self, request: &str, ip: &str, terminal: u32) -> Result<Record, GeoIpError> {
        let index = self.country_index(terminal)?;
        if self.database_type == Edition::NetSpeed {
            return Ok(Record::NetSpeed(NetSpeed::Class(index as u8)));
        }
        Ok(Record::Country(CountryRecord {
            request: request.to_string(),
            ip: ip.to_string(),
            code_id: index,
            iso2: COUNTRY_CODES_TWO[index as usize],
            iso3: COUNTRY_CODES_THREE[index as usize],
            name: COUNTRY_NAMES[index as usize],
            continent: CONTINENT_NAMES[index as usize],
        }))
    }

    fn read_region(&self, request: &str, ip: &str, terminal: u32) -> Result<Record, GeoIpError> {
        let position = self.data_offset(terminal)?;
        let (index, region_code) = match self.database_type {
            Edition::RegionRev0 => {
                if position >= 1000 {
                    (US_COUNTRY_INDEX, two_letter_region(position - 1000))
                } else {
                    (position, String::new())
                }
            }
            Edition::RegionRev1 => {
                if position < US_OFFSET {
                    (0, String::new())
                } else if position < CANADA_OFFSET {
                    (US_COUNTRY_INDEX, two_letter_region(position - US_OFFSET))
                } else if position < WORLD_OFFSET {
                    (
                        CANADA_COUNTRY_INDEX,
                        two_letter_region(position - CANADA_OFFSET),
                    )
                } else {
                    ((position - WORLD_OFFSET) / FIPS_RANGE, String::new())
                }
            }
            _ => return Err(GeoIpError::InvalidForEdition(self.database_type)),
        };
        if index as usize >= COUNTRY_CODES_TWO.len() {
            return Err(GeoIpError::CorruptDatabase("country index out of range"));
        }
        let iso2 = COUNTRY_CODES_TWO[index as usize];
        Ok(Record::Region(RegionRecord {
            request: request.to_string(),
            ip: ip.to_string(),
            iso2,
            iso3: COUNTRY_CODES_THREE[index as usize],
            name: COUNTRY_NAMES[index as usize],
            continent: CONTINENT_NAMES[index as usize],
            region_name: region_name_by_code(iso2, &region_code),
            time_zone: time_zone_by_country(iso2, &region_code),
            region_code,
        }))
    }

    /// Parse the city record at `terminal`, returning the record and the
    /// number of data bytes it occupies. `Ok(None)` means the window no
    /// longer frames a complete record.
    fn read_city(
        &self,
        request: &str,
        ip: &str,
        terminal: u32,
    ) -> Result<Option<(CityRecord, usize)>, GeoIpError> {
        let offset = self.index_size() + u64::from(self.data_offset(terminal)?);
        let buffer = self.source.read_at_most(offset, FULL_RECORD_LENGTH)?;
        if buffer.is_empty() {
            return Ok(None);
        }

        let index = buffer[0] as usize;
        if index >= COUNTRY_CODES_TWO.len() {
            return Err(GeoIpError::CorruptDatabase("country index out of range"));
        }

        let Some((pos, region_code)) = read_terminated(&buffer, 1) else {
            return Ok(None);
        };
        let Some((pos, city)) = read_terminated(&buffer, pos + 1) else {
            return Ok(None);
        };
        let Some((pos, postal_code)) = read_terminated(&buffer, pos + 1) else {
            return Ok(None);
        };
        let pos = pos + 1;
        if pos + 6 > buffer.len() {
            return Ok(None);
        }
        let latitude = f64::from(LittleEndian::read_u24(&buffer[pos..pos + 3])) / 10000.0 - 180.0;
        let longitude =
            f64::from(LittleEndian::read_u24(&buffer[pos + 3..pos + 6])) / 10000.0 - 180.0;

        let iso2 = COUNTRY_CODES_TWO[index];
        let mut consumed = pos + 6;
        let mut dma_code = None;
        let mut area_code = None;
        if self.database_type == Edition::CityRev1 && iso2 == "US" && pos + 9 <= buffer.len() {
            let dma_area = LittleEndian::read_u24(&buffer[pos + 6..pos + 9]);
            dma_code = Some(dma_area / 1000);
            area_code = Some(dma_area % 1000);
            consumed = pos + 9;
        }

        let region = region_code.as_deref().unwrap_or("");
        let record = CityRecord {
            request: request.to_string(),
            ip: ip.to_string(),
            iso2,
            iso3: COUNTRY_CODES_THREE[index],
            name: COUNTRY_NAMES[index],
            continent: CONTINENT_NAMES[index],
            time_zone: time_zone_by_country(iso2, region),
            region_name: region_name_by_code(iso2, region),
            region_code,
            city,
            postal_code,
            latitude,
            longitude,
            dma_code,
            area_code,
        };
        Ok(Some((record, consumed)))
    }

    /// Read a NUL-terminated string record from the data region,
    /// transcoded to UTF-8.
    fn read_string_record(&self, terminal: u32, max: usize) -> Result<String, GeoIpError> {
        let offset = self.index_size() + u64::from(self.data_offset(terminal)?);
        let buffer = self.source.read_at_most(offset, max)?;
        let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        Ok(latin1_to_string(&buffer[..end]))
    }

    fn read_asn(&self, terminal: u32) -> Result<Option<Record>, GeoIpError> {
        let raw = self.read_string_record(terminal, MAX_ASN_RECORD_LENGTH)?;
        if raw.is_empty() {
            return Ok(None);
        }
        // Some databases misuse the ASN edition for plain user-type
        // strings; hand those back untouched.
        Ok(Some(match parse_asn(&raw) {
            Some((number, description)) => Record::Asn(AsnRecord {
                number,
                description,
            }),
            None => Record::Name(raw),
        }))
    }

    fn read_org(&self, terminal: u32) -> Result<Option<Record>, GeoIpError> {
        let record = self.read_string_record(terminal, MAX_ORG_RECORD_LENGTH)?;
        if record.is_empty() || record.starts_with('*') {
            return Ok(None);
        }
        Ok(Some(Record::Name(record)))
    }

    fn read_netspeed_name(&self, terminal: u32) -> Result<Option<Record>, GeoIpError> {
        let record = self.read_string_record(terminal, MAX_NETSPEED_RECORD_LENGTH)?;
        if record.is_empty() {
            return Ok(None);
        }
        Ok(Some(Record::NetSpeed(NetSpeed::Name(record))))
    }
}

/// Build a two-letter base-26 region code from a regional offset.
fn two_letter_region(value: u32) -> String {
    let high = (value / 26 + 65) as u8 as char;
    let low = (value % 26 + 65) as u8 as char;
    [high, low].iter().collect()
}

/// Scan the trailing STRUCTURE_INFO region for the `0xFF 0xFF 0xFF`
/// sentinel and derive the edition and segment base.
///
/// The raw edition byte is normalised by subtracting 105 when it is at
/// least 106. Without a sentinel the database is taken to be a COUNTRY
/// edition, which historically carries no marker the scan can land on.
fn detect_database_type(source: &ByteSource) -> Result<(Edition, u32), GeoIpError> {
    let total = source.len();
    if total < 3 {
        return Err(GeoIpError::CorruptDatabase("file too small"));
    }
    let mut pos = total - 3;
    for _ in 0..STRUCTURE_INFO_MAX_SIZE {
        let delimiter = source.read(pos, 3)?;
        if delimiter == [255, 255, 255] {
            let mut byte = source.read(pos + 3, 1)?[0];
            if byte >= 106 {
                byte -= 105;
            }
            let edition = Edition::from_byte(byte)?;
            let segments = match edition.segment_family() {
                SegmentFamily::Country => COUNTRY_BEGIN,
                SegmentFamily::RegionRev0 => STATE_BEGIN_REV0,
                SegmentFamily::RegionRev1 => STATE_BEGIN_REV1,
                SegmentFamily::Variable => {
                    let buf = source.read(pos + 4, SEGMENT_RECORD_LENGTH)?;
                    LittleEndian::read_u24(&buf)
                }
            };
            return Ok((edition, segments));
        }
        match pos.checked_sub(4) {
            Some(previous) => pos = previous,
            None => break,
        }
    }
    Ok((Edition::Country, COUNTRY_BEGIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_over(bytes: Vec<u8>) -> Result<GeoIpReader, GeoIpError> {
        GeoIpReader::from_source(ByteSource::Preloaded(bytes), None, None)
    }

    /// Marker for a fixed-segment edition, padded so the backwards scan
    /// lands on the sentinel.
    fn fixed_marker(edition_byte: u8) -> Vec<u8> {
        vec![255, 255, 255, edition_byte, 0, 0, 0]
    }

    #[test]
    fn test_detects_fixed_segment_editions() {
        let mut image = vec![0u8; 64];
        image.extend(fixed_marker(3));
        let reader = reader_over(image).unwrap();
        assert_eq!(reader.database_type(), Edition::RegionRev1);
        assert_eq!(reader.database_segments, STATE_BEGIN_REV1);
        assert_eq!(reader.record_length, 3);
        assert_eq!(reader.ip_bits, 32);
    }

    #[test]
    fn test_detects_variable_segment_editions() {
        let mut image = vec![0u8; 64];
        image.extend([255, 255, 255, 2, 0x2a, 0x00, 0x00]);
        let reader = reader_over(image).unwrap();
        assert_eq!(reader.database_type(), Edition::CityRev1);
        assert_eq!(reader.database_segments, 42);
    }

    #[test]
    fn test_normalises_legacy_edition_bytes() {
        let mut image = vec![0u8; 64];
        // 111 - 105 = 6: CITY_REV0, segment base in the next three bytes
        image.extend([255, 255, 255, 111, 0x10, 0x00, 0x00]);
        let reader = reader_over(image).unwrap();
        assert_eq!(reader.database_type(), Edition::CityRev0);
        assert_eq!(reader.database_segments, 16);
    }

    #[test]
    fn test_defaults_to_country_without_marker() {
        let reader = reader_over(vec![0u8; 128]).unwrap();
        assert_eq!(reader.database_type(), Edition::Country);
        assert_eq!(reader.database_segments, COUNTRY_BEGIN);
    }

    #[test]
    fn test_rejects_unknown_edition_byte() {
        let mut image = vec![0u8; 64];
        image.extend(fixed_marker(99));
        assert!(matches!(
            reader_over(image),
            Err(GeoIpError::UnsupportedEdition(99))
        ));
    }

    #[test]
    fn test_rejects_zero_segment_base() {
        let mut image = vec![0u8; 64];
        image.extend([255, 255, 255, 2, 0, 0, 0]);
        assert!(matches!(
            reader_over(image),
            Err(GeoIpError::CorruptDatabase(_))
        ));
    }

    #[test]
    fn test_exhausted_descent_reports_no_data() {
        // an all-zero index loops on node 0 until the bits run out
        let reader = reader_over(vec![0u8; 128]).unwrap();
        assert_eq!(reader.seek_record(0x01020304).unwrap(), COUNTRY_BEGIN);
        let record = reader.country("1.2.3.4").unwrap().unwrap();
        let country = record.as_country().unwrap();
        assert_eq!(country.code_id, 0);
        assert_eq!(country.iso2, "--");
    }

    #[test]
    fn test_two_letter_region() {
        assert_eq!(two_letter_region(0), "AA");
        assert_eq!(two_letter_region(52), "CA");
        assert_eq!(two_letter_region(675), "ZZ");
    }
}
