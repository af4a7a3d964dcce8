//! Primitive word writers and readers.
//!
//! Writers return the number of bytes they emitted so record encoders can
//! total them up. Readers distinguish running out of input
//! ([`CodecError::Truncated`]) from a failing source ([`CodecError::Io`]).

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::{SIZEOF_I16, SIZEOF_U32};

/// Words per chunk when streaming slices.
const CHUNK_WORDS: usize = 256;

// ── Primitive writers ───────────────────────────────────────────

/// Write a 16-bit word.
pub fn write_u16(w: &mut dyn Write, v: u16) -> Result<usize, CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(SIZEOF_I16)
}

/// Write a signed 16-bit word.
pub fn write_i16(w: &mut dyn Write, v: i16) -> Result<usize, CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(SIZEOF_I16)
}

/// Write a 32-bit value as two words, low word first.
pub fn write_u32(w: &mut dyn Write, v: u32) -> Result<usize, CodecError> {
    write_u16(w, (v & 0xFFFF) as u16)?;
    write_u16(w, (v >> 16) as u16)?;
    Ok(SIZEOF_U32)
}

/// Write a sequence of signed words in index order.
pub fn write_i16_slice(w: &mut dyn Write, values: &[i16]) -> Result<usize, CodecError> {
    let mut buf = [0u8; CHUNK_WORDS * SIZEOF_I16];
    for chunk in values.chunks(CHUNK_WORDS) {
        let bytes = &mut buf[..chunk.len() * SIZEOF_I16];
        for (dst, v) in bytes.chunks_exact_mut(SIZEOF_I16).zip(chunk) {
            dst.copy_from_slice(&v.to_le_bytes());
        }
        w.write_all(bytes)?;
    }
    Ok(values.len() * SIZEOF_I16)
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a 16-bit word.
pub fn read_u16(r: &mut dyn Read) -> Result<u16, CodecError> {
    let mut buf = [0u8; SIZEOF_I16];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a signed 16-bit word.
pub fn read_i16(r: &mut dyn Read) -> Result<i16, CodecError> {
    let mut buf = [0u8; SIZEOF_I16];
    r.read_exact(&mut buf)?;
    Ok(i16::from_le_bytes(buf))
}

/// Read a 32-bit value stored as two words, low word first.
pub fn read_u32(r: &mut dyn Read) -> Result<u32, CodecError> {
    let lo = read_u16(r)? as u32;
    let hi = read_u16(r)? as u32;
    Ok(lo | (hi << 16))
}

/// Read `out.len()` signed words into `out`.
///
/// Returns bytes consumed. On truncation `out` may be partly
/// overwritten.
pub fn read_i16_into(r: &mut dyn Read, out: &mut [i16]) -> Result<usize, CodecError> {
    let mut buf = [0u8; CHUNK_WORDS * SIZEOF_I16];
    for chunk in out.chunks_mut(CHUNK_WORDS) {
        let bytes = &mut buf[..chunk.len() * SIZEOF_I16];
        r.read_exact(bytes)?;
        for (dst, src) in chunk.iter_mut().zip(bytes.chunks_exact(SIZEOF_I16)) {
            *dst = i16::from_le_bytes([src[0], src[1]]);
        }
    }
    Ok(out.len() * SIZEOF_I16)
}
