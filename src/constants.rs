// Database structure constants
pub const COUNTRY_BEGIN: u32 = 16776960; // Country data begin offset
pub const STATE_BEGIN_REV0: u32 = 16700000; // State data begin offset (database revision 0)
pub const STATE_BEGIN_REV1: u32 = 16000000; // State data begin offset (database revision 1)
pub const STRUCTURE_INFO_MAX_SIZE: u32 = 20; // Maximum size of structure information

pub const SEGMENT_RECORD_LENGTH: usize = 3; // Length of the trailing segment-base record
pub const STANDARD_RECORD_LENGTH: usize = 3; // Standard trie pointer width
pub const ORG_RECORD_LENGTH: usize = 4; // Trie pointer width of the org-style editions
pub const FULL_RECORD_LENGTH: usize = 50; // Upper bound of one city record
pub const MAX_ASN_RECORD_LENGTH: usize = 300; // Upper bound of one ASN record
pub const MAX_ORG_RECORD_LENGTH: usize = 300; // Upper bound of one ISP/organization record
pub const MAX_NETSPEED_RECORD_LENGTH: usize = 20; // Upper bound of one rev1 net speed record

// Region offsets (region edition, database revision 1)
pub const US_OFFSET: u32 = 1;
pub const CANADA_OFFSET: u32 = 677;
pub const WORLD_OFFSET: u32 = 1353;
pub const FIPS_RANGE: u32 = 360;

// Country-table indices the region editions hardcode
pub const US_COUNTRY_INDEX: u32 = 225;
pub const CANADA_COUNTRY_INDEX: u32 = 38;
