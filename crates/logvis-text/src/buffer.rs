//! Call-scoped scratch storage for code points.
//!
//! Buffers are sized once from the input byte length and never grow. Sizes
//! are computed with checked arithmetic and allocated with
//! `try_reserve_exact`, so oversized inputs surface as errors instead of
//! aborting the process.

use crate::charset::MAX_BYTES_PER_CODE_POINT;
use crate::error::{BidiError, Result};

/// Upper bound on the number of code points decodable from `byte_len`
/// bytes of input (every code point occupies at least one byte).
pub fn scratch_capacity(byte_len: usize) -> Result<usize> {
    // A char buffer of this length must also be addressable in bytes.
    byte_len
        .checked_mul(size_of::<char>())
        .filter(|bytes| *bytes <= isize::MAX as usize)
        .map(|_| byte_len)
        .ok_or(BidiError::CapacityOverflow { len: byte_len })
}

/// Number of output bytes needed to encode `code_points` code points in
/// the worst case.
pub fn output_byte_capacity(code_points: usize) -> Result<usize> {
    code_points
        .checked_mul(MAX_BYTES_PER_CODE_POINT)
        .filter(|bytes| *bytes <= isize::MAX as usize)
        .ok_or(BidiError::CapacityOverflow { len: code_points })
}

/// A fixed-capacity array of code points.
#[derive(Debug)]
pub struct CodePointBuffer {
    units: Vec<char>,
    capacity: usize,
}

impl CodePointBuffer {
    /// Allocate a buffer holding at most `capacity` code points.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut units = Vec::new();
        units
            .try_reserve_exact(capacity)
            .map_err(|source| BidiError::Allocation {
                requested: capacity,
                source,
            })?;
        Ok(Self { units, capacity })
    }

    /// Allocate a buffer sized for decoding `byte_len` bytes of input.
    pub fn for_input(byte_len: usize) -> Result<Self> {
        Self::with_capacity(scratch_capacity(byte_len)?)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append one code point, refusing to write past the capacity.
    pub fn push(&mut self, ch: char) -> Result<()> {
        if self.units.len() >= self.capacity {
            return Err(BidiError::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.units.push(ch);
        Ok(())
    }

    /// Reset the buffer to hold exactly `len` code points and hand out the
    /// slice for an external writer to fill.
    pub fn claim(&mut self, len: usize) -> Result<&mut [char]> {
        if len > self.capacity {
            return Err(BidiError::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.units.clear();
        self.units.resize(len, '\0');
        Ok(&mut self.units)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.units
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }
}
