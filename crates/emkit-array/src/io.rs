//! Binary form of [`Int16Arr`].
//!
//! A record is a byte count covering the whole record, the element count,
//! and the elements in index order. The byte count is checked on read, so
//! a record whose header disagrees with its element count is rejected as
//! corrupt.

use std::io::{Read, Write};

use emkit_arena::SharedMemSeg;
use emkit_codec::{read_i16_into, read_u32, write_i16_slice, write_u32, CodecError, SIZEOF_U32};
use emkit_core::{Context, ErrorKind};

use crate::int16_arr::Int16Arr;
use crate::ELEMENT_BYTES;

/// Bytes of record header preceding the elements.
pub const HEADER_BYTES: usize = 2 * SIZEOF_U32;

#[track_caller]
fn raise_codec(ctx: &mut Context, op: &str, e: CodecError) {
    ctx.raise(e.kind(), format!("Int16Arr::{op}: {e}"));
}

impl Int16Arr {
    /// Size in bytes of this array's record.
    pub fn mem_size(&self) -> usize {
        HEADER_BYTES + self.len() * ELEMENT_BYTES
    }

    /// Write this array's record to `w`.
    ///
    /// Returns the bytes written, which equals [`mem_size`](Self::mem_size).
    /// Returns 0 if the context is already in error or the sink fails; a
    /// failing sink raises [`ErrorKind::Io`] and may leave a partial record
    /// behind.
    #[track_caller]
    pub fn mem_write(&self, ctx: &mut Context, w: &mut dyn Write) -> usize {
        if ctx.is_in_error() {
            return 0;
        }
        let (Ok(size), Ok(len)) = (u32::try_from(self.mem_size()), u32::try_from(self.len()))
        else {
            ctx.raise(
                ErrorKind::OutOfRange,
                format!("Int16Arr::mem_write: {} elements exceed the record format", self.len()),
            );
            return 0;
        };

        match self.encode(w, size, len) {
            Ok(n) => n,
            Err(e) => {
                raise_codec(ctx, "mem_write", e);
                0
            }
        }
    }

    /// Read a record from `r` into this array.
    ///
    /// The array is sized with [`create`](Self::create), so an array that
    /// already has storage is resized within its capacity and an empty one
    /// allocates from `seg`. Returns the bytes consumed, or 0 on failure.
    ///
    /// Raises [`ErrorKind::CorruptData`] if the input is cut short or the
    /// recorded size disagrees with the element count. Storage failures
    /// raise whatever [`create`](Self::create) raises.
    #[track_caller]
    pub fn mem_read(&mut self, ctx: &mut Context, r: &mut dyn Read, seg: &SharedMemSeg) -> usize {
        if ctx.is_in_error() {
            return 0;
        }
        let (size, len) = match read_header(r) {
            Ok(h) => h,
            Err(e) => {
                raise_codec(ctx, "mem_read", e);
                return 0;
            }
        };

        self.create(ctx, len as usize, seg);
        if ctx.is_in_error() {
            return 0;
        }
        if let Err(e) = self.with_slice_mut(|s| read_i16_into(r, s)) {
            raise_codec(ctx, "mem_read", e);
            return 0;
        }

        let expected = self.mem_size();
        if size as usize != expected {
            ctx.raise(
                ErrorKind::CorruptData,
                format!(
                    "Int16Arr::mem_read: record claims {size} bytes, {len} elements need {expected}"
                ),
            );
            return 0;
        }
        expected
    }

    fn encode(&self, w: &mut dyn Write, size: u32, len: u32) -> Result<usize, CodecError> {
        let mut n = write_u32(w, size)?;
        n += write_u32(w, len)?;
        n += self.with_slice(|s| write_i16_slice(w, s))?;
        Ok(n)
    }
}

/// Total size and element count.
fn read_header(r: &mut dyn Read) -> Result<(u32, u32), CodecError> {
    let size = read_u32(r)?;
    let len = read_u32(r)?;
    Ok((size, len))
}
