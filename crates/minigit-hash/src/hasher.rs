use crate::Digest;

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Streaming FNV-1a computation.
///
/// Data can be fed incrementally with [`update`](Hasher::update) or through the
/// [`std::io::Write`] implementation, then finalised into a [`Digest`]. Chunk
/// boundaries never affect the result.
#[derive(Debug, Clone)]
pub struct Hasher {
    state: u32,
}

impl Hasher {
    /// Create a hasher seeded with the offset basis.
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state ^= u32::from(byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> Digest {
        Digest::from_u32(self.state)
    }

    /// Convenience: hash data in one call.
    pub fn digest(data: &[u8]) -> Digest {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
