use super::fault::Fault;

/// Bytes of addressable memory. Addresses are a single byte wide, so the
/// whole space is 0x00..=0xFF.
pub const MEMORY_SIZE: usize = 256;

/// Flat 256-byte memory holding program, data and stack. Owned by the
/// machine that uses it; there is no shared global instance.
pub struct Ram {
    ram: [u8; MEMORY_SIZE],
}

impl Ram {
    pub fn new() -> Ram {
        Ram {
            ram: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte, faulting on addresses past the end of memory.
    pub fn read(&self, addr: u16) -> Result<u8, Fault> {
        log::debug!("ram[r] addr: {:#04x}", addr);
        self.ram
            .get(addr as usize)
            .copied()
            .ok_or(Fault::OutOfBounds { addr })
    }

    /// Writes one byte, faulting on addresses past the end of memory.
    pub fn write(&mut self, addr: u16, data: u8) -> Result<(), Fault> {
        log::debug!("ram[w] addr: {:#04x}, data: {:#04x}", addr, data);
        match self.ram.get_mut(addr as usize) {
            Some(cell) => {
                *cell = data;
                Ok(())
            }
            None => Err(Fault::OutOfBounds { addr }),
        }
    }

    /// Non-faulting read for traces and tests. Never logs.
    #[inline]
    pub fn get(&self, addr: u16) -> Option<u8> {
        self.ram.get(addr as usize).copied()
    }

    /// Copies `bytes` into memory starting at `offset`.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> Result<(), Fault> {
        let start = offset as usize;
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            let addr = if start > MEMORY_SIZE {
                offset
            } else {
                MEMORY_SIZE as u16
            };
            return Err(Fault::OutOfBounds { addr });
        }
        self.ram[start..end].copy_from_slice(bytes);
        Ok(())
    }
}
