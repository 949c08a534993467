//! Fixed-width little-endian field codec shared by the account and
//! instruction layouts.
//!
//! Every layout of the lending program is a flat sequence of fields with
//! no length prefixes, so a buffer is written front to back with a
//! [`Writer`] and read back with a [`Reader`] bound to the exact length of
//! the layout.

use crate::{error::LendingError, math::Decimal};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{msg, pubkey::Pubkey};

/// Width of an unsigned integer field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    U8,
    U32,
    U64,
    U128,
}

impl Width {
    /// Number of bytes the field occupies
    pub const fn len(self) -> usize {
        match self {
            Width::U8 => 1,
            Width::U32 => 4,
            Width::U64 => 8,
            Width::U128 => 16,
        }
    }

    /// Largest value the field can hold
    pub const fn max(self) -> u128 {
        match self {
            Width::U8 => u8::MAX as u128,
            Width::U32 => u32::MAX as u128,
            Width::U64 => u64::MAX as u128,
            Width::U128 => u128::MAX,
        }
    }
}

/// Encode `value` as a little-endian field of `width` bytes.
///
/// Values that do not fit are rejected, never truncated.
pub fn encode_uint(value: u128, width: Width) -> Result<Vec<u8>, LendingError> {
    if value > width.max() {
        msg!("Value {} does not fit in {} bytes", value, width.len());
        return Err(LendingError::RangeError);
    }
    Ok(value.to_le_bytes()[..width.len()].to_vec())
}

/// Decode a little-endian field of exactly `width` bytes.
pub fn decode_uint(src: &[u8], width: Width) -> Result<u128, LendingError> {
    if src.len() != width.len() {
        msg!(
            "Expected a {} byte field, got {} bytes",
            width.len(),
            src.len()
        );
        return Err(LendingError::LayoutMismatch);
    }
    let mut bytes = [0u8; 16];
    bytes[..src.len()].copy_from_slice(src);
    Ok(u128::from_le_bytes(bytes))
}

/// Appends fields in declared order
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            buf: Vec::with_capacity(len),
        }
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn put_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_u128(&mut self, value: u128) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_pubkey(&mut self, value: &Pubkey) {
        self.buf.extend_from_slice(value.as_ref());
    }

    pub fn put_bytes(&mut self, value: &[u8]) {
        self.buf.extend_from_slice(value);
    }

    /// Zero filled padding
    pub fn put_zeros(&mut self, len: usize) {
        self.buf.resize(self.buf.len() + len, 0);
    }

    /// WAD value stored as a u128
    pub fn put_decimal(&mut self, value: Decimal) -> Result<(), LendingError> {
        self.put_u128(value.to_scaled_val()?);
        Ok(())
    }

    /// Nested struct whose borsh encoding is its wire layout
    pub fn put<T: BorshSerialize>(&mut self, value: &T) -> Result<(), LendingError> {
        value.serialize(&mut self.buf).map_err(|e| {
            msg!("Failed to serialize field: {}", e);
            LendingError::RangeError
        })
    }

    /// Return the buffer, which must be exactly `expected_len` bytes
    pub fn finish(self, expected_len: usize) -> Result<Vec<u8>, LendingError> {
        if self.buf.len() != expected_len {
            msg!(
                "Packed {} bytes for a {} byte layout",
                self.buf.len(),
                expected_len
            );
            return Err(LendingError::LayoutMismatch);
        }
        Ok(self.buf)
    }
}

/// Reads fields in declared order from a buffer of known length
#[derive(Debug)]
pub struct Reader<'a> {
    src: &'a [u8],
}

impl<'a> Reader<'a> {
    /// Bind to `src`, failing unless it is exactly `expected_len` bytes long
    pub fn new(src: &'a [u8], expected_len: usize) -> Result<Self, LendingError> {
        if src.len() != expected_len {
            msg!(
                "Expected a {} byte buffer, got {} bytes",
                expected_len,
                src.len()
            );
            return Err(LendingError::LayoutMismatch);
        }
        Ok(Self { src })
    }

    /// Borrow the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], LendingError> {
        if self.src.len() < len {
            msg!("Layout overruns buffer by {} bytes", len - self.src.len());
            return Err(LendingError::LayoutMismatch);
        }
        let (bytes, rest) = self.src.split_at(len);
        self.src = rest;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), LendingError> {
        self.read_bytes(len).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, LendingError> {
        let value = decode_uint(self.read_bytes(Width::U8.len())?, Width::U8)?;
        Ok(value as u8)
    }

    pub fn read_u64(&mut self) -> Result<u64, LendingError> {
        let value = decode_uint(self.read_bytes(Width::U64.len())?, Width::U64)?;
        Ok(value as u64)
    }

    pub fn read_u128(&mut self) -> Result<u128, LendingError> {
        decode_uint(self.read_bytes(Width::U128.len())?, Width::U128)
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, LendingError> {
        Ok(Pubkey::new_from_array(self.read_array()?))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], LendingError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub fn read_decimal(&mut self) -> Result<Decimal, LendingError> {
        Ok(Decimal::from_scaled_val(self.read_u128()?))
    }

    /// Nested struct of `len` bytes whose borsh encoding is its wire layout
    pub fn read<T: BorshDeserialize>(&mut self, len: usize) -> Result<T, LendingError> {
        T::try_from_slice(self.read_bytes(len)?).map_err(|e| {
            msg!("Failed to deserialize field: {}", e);
            LendingError::InvariantViolation
        })
    }

    /// Bytes not read yet
    pub fn remaining(&self) -> usize {
        self.src.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn u64_boundary() {
        let max = u64::MAX as u128;
        let bytes = encode_uint(max, Width::U64).unwrap();
        assert_eq!(bytes, vec![0xff; 8]);
        assert_eq!(decode_uint(&bytes, Width::U64), Ok(max));
        assert_eq!(
            encode_uint(max + 1, Width::U64),
            Err(LendingError::RangeError)
        );
    }

    #[test]
    fn little_endian_widths() {
        assert_eq!(encode_uint(0x0102, Width::U32).unwrap(), vec![2, 1, 0, 0]);
        assert_eq!(encode_uint(255, Width::U8).unwrap(), vec![255]);
        assert_eq!(encode_uint(256, Width::U8), Err(LendingError::RangeError));
        assert_eq!(
            decode_uint(&u128::MAX.to_le_bytes(), Width::U128),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn decode_requires_exact_width() {
        assert_eq!(
            decode_uint(&[0u8; 7], Width::U64),
            Err(LendingError::LayoutMismatch)
        );
        assert_eq!(
            decode_uint(&[0u8; 9], Width::U64),
            Err(LendingError::LayoutMismatch)
        );
    }

    #[test]
    fn reader_rejects_wrong_length() {
        assert_eq!(
            Reader::new(&[0u8; 3], 4).unwrap_err(),
            LendingError::LayoutMismatch
        );
        let mut reader = Reader::new(&[1, 2, 3], 3).unwrap();
        assert_eq!(reader.read_u8(), Ok(1));
        assert_eq!(reader.read_u64(), Err(LendingError::LayoutMismatch));
    }

    #[test]
    fn writer_reader_agree() {
        let key = Pubkey::new_unique();
        let mut writer = Writer::with_capacity(58);
        writer.put_u8(7);
        writer.put_u64(u64::MAX - 1);
        writer.put_pubkey(&key);
        writer.put_decimal(Decimal::one()).unwrap();
        writer.put_zeros(1);
        let buf = writer.finish(58).unwrap();

        let mut reader = Reader::new(&buf, 58).unwrap();
        assert_eq!(reader.read_u8(), Ok(7));
        assert_eq!(reader.read_u64(), Ok(u64::MAX - 1));
        assert_eq!(reader.read_pubkey(), Ok(key));
        assert_eq!(reader.read_decimal(), Ok(Decimal::one()));
        reader.skip(1).unwrap();
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn finish_checks_length() {
        let mut writer = Writer::default();
        writer.put_u64(1);
        assert_eq!(writer.finish(9), Err(LendingError::LayoutMismatch));
    }
}
