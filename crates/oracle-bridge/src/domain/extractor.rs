//! # Response Extractor
//!
//! Decodes the typed answer out of a raw response text at a configured byte
//! offset. This is a narrow byte scanner, not a general parser: the query
//! template is fixed per bridge, so the answer's position and shape are known
//! in advance and a full response-grammar parser would be unnecessary attack
//! surface. The only grammar knowledge is the delimiter set `,`, `}`, `"`.

use super::errors::{BridgeError, BridgeResult};
use super::value_objects::ResponseKind;

/// Characters that terminate a UINT scan.
const DELIMITERS: [u8; 3] = [b',', b'}', b'"'];

/// Extract the typed answer from `response` starting at `offset`.
///
/// The returned bytes are what gets stored as the finalized value:
/// 32 big-endian bytes for `Uint`, 20 raw bytes for `Address`, 32 decoded
/// bytes for `Bytes32`.
pub fn extract(kind: ResponseKind, response: &[u8], offset: usize) -> BridgeResult<Vec<u8>> {
    match kind {
        ResponseKind::Uint => {
            let (value, _digits) = scan_uint(response, offset)?;
            let mut out = vec![0u8; 16];
            out.extend_from_slice(&value.to_be_bytes());
            Ok(out)
        }
        ResponseKind::Address => Ok(fixed_window(response, offset, 20)?.to_vec()),
        ResponseKind::Bytes32 => {
            let window = fixed_window(response, offset, 64)?;
            let mut out = vec![0u8; 32];
            for (i, chunk) in window.chunks_exact(2).enumerate() {
                out[i] = (hex_nibble(chunk[0]) << 4) | hex_nibble(chunk[1]);
            }
            Ok(out)
        }
    }
}

/// Bounds-checked fixed-width window into the response.
///
/// `offset` is caller-supplied configuration, so `offset + width` must not be
/// trusted to fit in a `usize` either.
fn fixed_window(response: &[u8], offset: usize, width: usize) -> BridgeResult<&[u8]> {
    offset
        .checked_add(width)
        .filter(|&end| end <= response.len())
        .map(|end| &response[offset..end])
        .ok_or(BridgeError::OutOfBounds {
            offset,
            len: response.len(),
        })
}

/// Scan an unsigned decimal integer of unknown length beginning at `offset`.
///
/// Consumes ASCII digits until a delimiter; returns the value and the number
/// of digits consumed. An immediate delimiter yields `(0, 0)` with no error.
/// A non-digit non-delimiter is a hard parse failure, and running off the end
/// of the buffer before a delimiter is out-of-bounds.
pub fn scan_uint(bytes: &[u8], offset: usize) -> BridgeResult<(u128, usize)> {
    // Two-pass: find the trailing delimiter first, then accumulate left to
    // right. Equivalent to weighting the rightmost digit at 10^0 without
    // recursing on adversarial input.
    let mut end = offset;
    loop {
        let Some(&byte) = bytes.get(end) else {
            return Err(BridgeError::OutOfBounds {
                offset: end,
                len: bytes.len(),
            });
        };
        if DELIMITERS.contains(&byte) {
            break;
        }
        if !byte.is_ascii_digit() {
            return Err(BridgeError::InvalidScanCharacter { byte, offset: end });
        }
        end += 1;
    }

    let mut value: u128 = 0;
    for &byte in &bytes[offset..end] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(byte - b'0')))
            .ok_or(BridgeError::UintOverflow { offset })?;
    }
    Ok((value, end - offset))
}

/// Decode one lowercase hex character to its nibble value.
///
/// Characters outside `0-9a-f` decode to zero. That silently-zeroing behavior
/// is deliberate reference behavior; see DESIGN.md before hardening it.
fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => 10 + c - b'a',
        _ => 0,
    }
}
