//! Z-order (Morton) curve used to encode hex coordinates into a single integer.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Morton index interleaving the bits of several values into one `u64` code.
///
/// Each of the `dimensions` values occupies `bits` bits of the code: bit `i` of value `d` is
/// stored at position `i * dimensions + d`.
///
/// Signed values (see [`Morton64::spack`]) use the highest bit of their lane as a sign flag and
/// the remaining `bits - 1` bits for the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morton64 {
    dimensions: u32,
    bits: u32,
}

impl Morton64 {
    /// Creates a new index. Fails if `dimensions * bits` does not fit into 64 bits.
    pub fn new(dimensions: u32, bits: u32) -> Result<Self, EngineError> {
        if dimensions == 0 || bits == 0 || dimensions as u64 * bits as u64 > 64 {
            return Err(EngineError::InvalidIndex { dimensions, bits });
        }

        Ok(Self { dimensions, bits })
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    /// Number of bits of every dimension.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Packs unsigned values into a code.
    pub fn pack(&self, values: &[u64]) -> Result<u64, EngineError> {
        self.check_dimensions(values.len())?;

        let lane_mask = mask(self.bits);
        if let Some(&value) = values.iter().find(|&&v| v & !lane_mask != 0) {
            return Err(EngineError::ValueOutOfRange {
                value: value as i128,
                bits: self.bits,
            });
        }

        let mut code = 0;
        for bit in 0..self.bits {
            for (dimension, value) in values.iter().enumerate() {
                let position = bit * self.dimensions + dimension as u32;
                code |= ((value >> bit) & 1) << position;
            }
        }

        Ok(code)
    }

    /// Unpacks a code into unsigned values.
    pub fn unpack(&self, code: u64) -> Result<Vec<u64>, EngineError> {
        if code & !mask(self.dimensions * self.bits) != 0 {
            return Err(EngineError::CodeOutOfRange(code));
        }

        let mut values = vec![0; self.dimensions as usize];
        for bit in 0..self.bits {
            for (dimension, value) in values.iter_mut().enumerate() {
                let position = bit * self.dimensions + dimension as u32;
                *value |= ((code >> position) & 1) << bit;
            }
        }

        Ok(values)
    }

    /// Packs signed values into a code.
    pub fn spack(&self, values: &[i64]) -> Result<u64, EngineError> {
        self.check_dimensions(values.len())?;

        let unsigned = values
            .iter()
            .map(|&v| self.shift_sign(v))
            .collect::<Result<Vec<_>, _>>()?;
        self.pack(&unsigned)
    }

    /// Unpacks a code into signed values.
    pub fn sunpack(&self, code: u64) -> Result<Vec<i64>, EngineError> {
        Ok(self
            .unpack(code)?
            .into_iter()
            .map(|v| self.unshift_sign(v))
            .collect())
    }

    fn check_dimensions(&self, count: usize) -> Result<(), EngineError> {
        if count != self.dimensions as usize {
            return Err(EngineError::DimensionMismatch {
                expected: self.dimensions as usize,
                actual: count,
            });
        }

        Ok(())
    }

    fn sign_bit(&self) -> u64 {
        1 << (self.bits - 1)
    }

    fn shift_sign(&self, value: i64) -> Result<u64, EngineError> {
        let magnitude = value.unsigned_abs();
        if magnitude >= self.sign_bit() {
            return Err(EngineError::ValueOutOfRange {
                value: value as i128,
                bits: self.bits,
            });
        }

        if value < 0 {
            Ok(magnitude | self.sign_bit())
        } else {
            Ok(magnitude)
        }
    }

    fn unshift_sign(&self, value: u64) -> i64 {
        // Magnitude has at most 63 bits, so the cast is lossless.
        let magnitude = (value & (self.sign_bit() - 1)) as i64;
        if value & self.sign_bit() != 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

fn mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}
