//! Share codes: the URL-safe wire format for placed-tile lists.
//!
//! A share code is a base64url string (no padding) that callers can drop
//! into a query parameter unescaped. The current binary format (v1) packs a
//! 4-bit version header followed by one fixed 14-bit record per tile:
//! 5 bits of kind ordinal, 3 bits each of offset `q`, offset `r` and
//! rotation, most significant bit first, zero-padded to the final byte.
//!
//! Strings produced before the binary format existed are plain base64 over
//! text records (`kind:q,r[,rotation]`, joined by `;`). Decoding always
//! tries the strict binary grammar first and falls back to the legacy one
//! when anything about the binary parse fails; the two parsers are
//! independent and share no state.

mod bits;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Hex;
use crate::tiles::TileKind;
use bits::{BitReader, BitWriter};

/// The version nibble written at the head of every binary share code.
const FORMAT_VERSION: u32 = 1;
/// Bits per tile record: 5 kind + 3 q + 3 r + 3 rotation.
const RECORD_BITS: u32 = 14;
/// Offset added to axial coordinates so they fit an unsigned 3-bit field.
const COORDINATE_OFFSET: i32 = 3;
/// Smallest encodable axial coordinate.
const COORDINATE_MIN: i32 = -3;
/// Largest encodable axial coordinate.
const COORDINATE_MAX: i32 = 4;
/// Largest encodable rotation. 6 and 7 carry no meaning, but they are
/// format-legal and round-trip untouched.
const ROTATION_MAX: u8 = 7;

/// One tile as it crosses the sharing boundary.
///
/// Rotation lives only here: neither the geometry nor the region analysis
/// cares which way a tile faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedTile {
    /// What was placed.
    pub kind: TileKind,
    /// Where it sits.
    pub hex: Hex,
    /// Orientation in 60° steps; 0..=5 are meaningful.
    pub rotation: u8,
}

impl SharedTile {
    /// Creates a sharing record.
    #[inline]
    #[must_use]
    pub const fn new(kind: TileKind, hex: Hex, rotation: u8) -> Self {
        SharedTile {
            kind,
            hex,
            rotation,
        }
    }
}

/// Errors produced while encoding or decoding share codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareCodeError {
    /// An axial coordinate does not fit the 3-bit wire field.
    #[error("axial coordinate {axis} = {value} is outside the encodable range -3..=4")]
    CoordinateOutOfRange {
        /// Which axis overflowed, `'q'` or `'r'`.
        axis: char,
        /// The offending value.
        value: i32,
    },

    /// A rotation does not fit the 3-bit wire field.
    #[error("rotation {0} is outside the encodable range 0..=7")]
    RotationOutOfRange(u8),

    /// The string is neither valid binary nor valid legacy base64.
    #[error("share code is not base64 text: {0}")]
    NotBase64(String),

    /// The legacy payload is not text.
    #[error("legacy share code does not decode to text")]
    NotText,

    /// A legacy record had no `kind:coords` separator.
    #[error("legacy record {0:?} is missing the `kind:` separator")]
    MissingSeparator(String),

    /// A legacy record carried something non-numeric where a number belongs.
    #[error("legacy record {record:?} has a non-numeric field {value:?}")]
    NonNumericField {
        /// The record that failed to parse.
        record: String,
        /// The field that was not a number.
        value: String,
    },

    /// A legacy record carried more fields than `kind:q,r,rotation`.
    #[error("legacy record {0:?} has trailing fields")]
    TrailingFields(String),

    /// A legacy record named a kind that is not in the registry.
    #[error("unknown tile kind {0:?}")]
    UnknownKind(String),
}

/// Why a strict binary parse was abandoned.
///
/// Never surfaced to callers: any of these sends decoding down the legacy
/// path instead.
#[derive(Debug, Error)]
enum BinaryParseError {
    #[error("not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("missing version header")]
    MissingHeader,

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u32),

    #[error("kind ordinal {0} is not in the registry")]
    UnknownOrdinal(u32),

    #[error("{0} bits of trailing data after the last record")]
    TrailingData(usize),
}

/// Encodes placed tiles into a URL-safe share code.
///
/// An empty list encodes to the empty string, not to a header-only payload.
///
/// # Errors
///
/// Fails on the first record whose coordinates or rotation fall outside the
/// wire ranges. Nothing is clamped and no partial string is produced.
pub fn encode_share_code(tiles: &[SharedTile]) -> Result<String, ShareCodeError> {
    if tiles.is_empty() {
        return Ok(String::new());
    }

    let mut writer = BitWriter::default();
    writer.push(FORMAT_VERSION, 4);

    for tile in tiles {
        check_coordinate(tile.hex.q, 'q')?;
        check_coordinate(tile.hex.r, 'r')?;
        if tile.rotation > ROTATION_MAX {
            return Err(ShareCodeError::RotationOutOfRange(tile.rotation));
        }

        writer.push(u32::from(tile.kind.codec_index()), 5);
        writer.push((tile.hex.q + COORDINATE_OFFSET) as u32, 3);
        writer.push((tile.hex.r + COORDINATE_OFFSET) as u32, 3);
        writer.push(u32::from(tile.rotation), 3);
    }

    Ok(URL_SAFE_NO_PAD.encode(writer.into_bytes()))
}

/// Decodes a share code produced by any version of the builder.
///
/// The empty string decodes to an empty list. Otherwise the strict binary
/// grammar is tried first; if any part of it fails, the string is re-read as
/// the legacy text format.
///
/// # Errors
///
/// Only when both grammars reject the string; the error describes the legacy
/// parse failure, since that is the path of last resort.
pub fn decode_share_code(code: &str) -> Result<Vec<SharedTile>, ShareCodeError> {
    if code.is_empty() {
        return Ok(Vec::new());
    }

    match decode_binary(code) {
        Ok(tiles) => Ok(tiles),
        Err(binary_error) => {
            debug!("binary share decode failed ({binary_error}); trying the legacy text format");
            decode_legacy(code)
        }
    }
}

fn check_coordinate(value: i32, axis: char) -> Result<(), ShareCodeError> {
    if (COORDINATE_MIN..=COORDINATE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ShareCodeError::CoordinateOutOfRange { axis, value })
    }
}

/// The strict v1 binary grammar.
fn decode_binary(code: &str) -> Result<Vec<SharedTile>, BinaryParseError> {
    let bytes = URL_SAFE_NO_PAD.decode(code)?;
    let mut reader = BitReader::new(&bytes);

    let version = reader.read(4).ok_or(BinaryParseError::MissingHeader)?;
    if version != FORMAT_VERSION {
        return Err(BinaryParseError::UnsupportedVersion(version));
    }

    let mut tiles = Vec::new();
    while let Some(record) = reader.read(RECORD_BITS) {
        let ordinal = record >> 9;
        let kind = TileKind::from_codec_index(ordinal as u8)
            .ok_or(BinaryParseError::UnknownOrdinal(ordinal))?;

        let q = ((record >> 6) & 0b111) as i32 - COORDINATE_OFFSET;
        let r = ((record >> 3) & 0b111) as i32 - COORDINATE_OFFSET;
        let rotation = (record & 0b111) as u8;

        tiles.push(SharedTile::new(kind, Hex::from_axial(q, r), rotation));
    }

    // Well-formed payloads leave at most 7 bits of byte-boundary padding; a
    // whole unread byte means the stream was cut or grew mid-record.
    if reader.remaining() >= 8 {
        return Err(BinaryParseError::TrailingData(reader.remaining()));
    }

    Ok(tiles)
}

/// The legacy text grammar: base64 over `kind:q,r[,rotation]` records joined
/// by `;`, rotation defaulting to 0.
fn decode_legacy(code: &str) -> Result<Vec<SharedTile>, ShareCodeError> {
    let bytes = decode_base64_lenient(code)?;
    let text = String::from_utf8(bytes).map_err(|_| ShareCodeError::NotText)?;

    let mut tiles = Vec::new();
    for record in text.split(';').filter(|record| !record.is_empty()) {
        let (id, coordinates) = record
            .split_once(':')
            .ok_or_else(|| ShareCodeError::MissingSeparator(record.to_string()))?;
        let kind =
            TileKind::from_id(id).ok_or_else(|| ShareCodeError::UnknownKind(id.to_string()))?;

        let mut fields = coordinates.split(',');
        let q = parse_numeric_field(record, fields.next())?;
        let r = parse_numeric_field(record, fields.next())?;
        let rotation = match fields.next() {
            Some(value) => parse_numeric_field(record, Some(value))? as u8,
            None => 0,
        };
        if fields.next().is_some() {
            return Err(ShareCodeError::TrailingFields(record.to_string()));
        }

        tiles.push(SharedTile::new(kind, Hex::from_axial(q, r), rotation));
    }

    Ok(tiles)
}

fn parse_numeric_field(record: &str, field: Option<&str>) -> Result<i32, ShareCodeError> {
    let value = field.unwrap_or("");

    value
        .trim()
        .parse()
        .map_err(|_| ShareCodeError::NonNumericField {
            record: record.to_string(),
            value: value.to_string(),
        })
}

/// Decodes base64 the way legacy producers wrote it: either alphabet, with
/// or without padding.
fn decode_base64_lenient(code: &str) -> Result<Vec<u8>, ShareCodeError> {
    let normalized: String = code
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|error| ShareCodeError::NotBase64(error.to_string()))
}
