#![allow(dead_code)]

use std::io::Write;
use std::net::{Ipv4Addr, Ipv6Addr};
use tempfile::NamedTempFile;

pub const COUNTRY_BEGIN: u32 = 16776960;
pub const STATE_BEGIN_REV0: u32 = 16700000;
pub const STATE_BEGIN_REV1: u32 = 16000000;

/// Builds legacy database images byte by byte: a packed little-endian
/// trie, a data region, and the trailing structure marker.
///
/// Pointers below the segment base are node indices; a pointer of
/// exactly the segment base marks "no data"; anything above addresses
/// the data region.
pub struct DbBuilder {
    ip_bits: u32,
    record_length: usize,
    segment_base: u32,
    pad_index_to_base: bool,
    nodes: Vec<[u32; 2]>,
    data: Vec<u8>,
    trailer: Vec<u8>,
}

impl DbBuilder {
    /// An edition with a fixed segment base (country, region, legacy
    /// net speed). The marker carries no segment bytes, only padding so
    /// the backwards scan lands on the sentinel.
    pub fn fixed(edition_byte: u8, segment_base: u32, ip_bits: u32) -> DbBuilder {
        DbBuilder {
            ip_bits,
            record_length: 3,
            segment_base,
            pad_index_to_base: false,
            nodes: vec![[segment_base; 2]],
            data: Vec::new(),
            trailer: vec![255, 255, 255, edition_byte, 0, 0, 0],
        }
    }

    /// An edition whose segment base rides in the three bytes after the
    /// marker (city, ISP, org, ASN, rev1 net speed).
    pub fn varseg(
        edition_byte: u8,
        segment_base: u32,
        ip_bits: u32,
        record_length: usize,
    ) -> DbBuilder {
        let seg = segment_base.to_le_bytes();
        DbBuilder {
            ip_bits,
            record_length,
            segment_base,
            pad_index_to_base: true,
            nodes: vec![[segment_base; 2]],
            // data offset 0 is the unassigned cell
            data: vec![0],
            trailer: vec![255, 255, 255, edition_byte, seg[0], seg[1], seg[2]],
        }
    }

    /// Append a record to the data region, returning its data offset.
    pub fn push_data(&mut self, record: &[u8]) -> u32 {
        let offset = self.data.len() as u32;
        self.data.extend_from_slice(record);
        offset
    }

    /// Route the `prefix_len` leading bits of `ip` to `data_offset`.
    pub fn insert(&mut self, ip: u128, prefix_len: u32, data_offset: u32) {
        let pointer = self.segment_base + data_offset;
        let mut node = 0usize;
        for bit in 0..prefix_len {
            let side = ((ip >> (self.ip_bits - 1 - bit)) & 1) as usize;
            if bit == prefix_len - 1 {
                self.nodes[node][side] = pointer;
            } else {
                let next = self.nodes[node][side];
                node = if next >= self.segment_base {
                    let grown = self.nodes.len();
                    self.nodes.push([self.segment_base; 2]);
                    self.nodes[node][side] = grown as u32;
                    grown
                } else {
                    next as usize
                };
            }
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let count = if self.pad_index_to_base {
            assert!(
                self.nodes.len() <= self.segment_base as usize,
                "trie outgrew the segment base"
            );
            self.segment_base as usize
        } else {
            self.nodes.len()
        };
        let mut image = Vec::new();
        for index in 0..count {
            let node = self
                .nodes
                .get(index)
                .copied()
                .unwrap_or([self.segment_base; 2]);
            for pointer in node {
                image.extend_from_slice(&pointer.to_le_bytes()[..self.record_length]);
            }
        }
        image.extend_from_slice(&self.data);
        image.extend_from_slice(&self.trailer);
        image
    }

    /// Write the image to a temp file; the file lives as long as the
    /// returned handle.
    pub fn write(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&self.build()).unwrap();
        file.flush().unwrap();
        file
    }
}

/// Encode one city record: country index, three NUL-terminated fields,
/// two coordinate triples and an optional DMA/area triple.
pub fn city_record(
    country_index: u8,
    region: &[u8],
    city: &[u8],
    postal: &[u8],
    latitude: f64,
    longitude: f64,
    dma_area: Option<u32>,
) -> Vec<u8> {
    let mut record = vec![country_index];
    for field in [region, city, postal] {
        record.extend_from_slice(field);
        record.push(0);
    }
    for value in [latitude, longitude] {
        let raw = ((value + 180.0) * 10000.0).round() as u32;
        record.extend_from_slice(&raw.to_le_bytes()[..3]);
    }
    if let Some(value) = dma_area {
        record.extend_from_slice(&value.to_le_bytes()[..3]);
    }
    record
}

/// A NUL-terminated string record (ISP, org, ASN, rev1 net speed).
pub fn string_record(payload: &[u8]) -> Vec<u8> {
    let mut record = payload.to_vec();
    record.push(0);
    record
}

pub fn ipv4(addr: &str) -> u128 {
    u128::from(u32::from(addr.parse::<Ipv4Addr>().unwrap()))
}

pub fn ipv6(addr: &str) -> u128 {
    u128::from(addr.parse::<Ipv6Addr>().unwrap())
}
