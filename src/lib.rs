//! # IPAtlas
//!
//! Decode IP addresses into country, region, city, coordinates, ISP, ASN
//! and connection speed from legacy MaxMind GeoIP binary databases,
//! without the need to connect to the internet and zero API calls.
//!
//! The edition of a database (country, region, city, ISP, organization,
//! ASN, net speed, and their IPv6 variants) is detected automatically
//! from the trailing structure marker, and every lookup dispatches on it.
//!
//! ## Quick Start
//!
//! 1. Install the `ipatlas` crate by adding the following line to your
//!    `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! ipatlas = "0.1.0"
//! ```
//!
//! 2. Open a database and look up an address:
//!
//! ```no_run
//! use ipatlas::geo_ip_reader::GeoIpReader;
//!
//! let reader = GeoIpReader::open("GeoIPCity.dat").unwrap();
//! match reader.city("108.95.4.105").unwrap() {
//!     Some(record) => {
//!         let city = record.as_city().unwrap();
//!         println!("{:?} {:?}", city.city, city.time_zone);
//!     }
//!     None => println!("no data for this address"),
//! }
//! ```
//!
//! ## Open options
//!
//! | Option           | Description                                                       |
//! |------------------|-------------------------------------------------------------------|
//! | `preload`        | Read the whole database into memory at open.                      |
//! | `local_ip_alias` | Substitute this address for loopback spellings before lookup.     |
//! | `resolver`       | Resolve non-literal query strings (hostnames) to an address.      |
//!
//! Readers issue positional reads and can be shared across threads;
//! iteration (`each`, `each_by_ip`) takes the reader exclusively.

pub mod constants;
pub mod continent_names;
pub mod countries_codes_three;
pub mod countries_codes_two;
pub mod countries_names;
pub mod editions;
pub mod errors;
pub mod geo_ip_reader;
pub mod records;
pub mod region_names;
pub mod time_zones;

mod byte_source;
mod utils;

pub use editions::Edition;
pub use errors::GeoIpError;
pub use geo_ip_reader::{GeoIpReader, OpenOptions, Resolver};
pub use records::{AsnRecord, CityRecord, CountryRecord, NetSpeed, Record, RegionRecord};
