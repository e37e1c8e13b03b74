extern crate std;

use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::error::Error;
use crate::interface::{Interface, sealed};
use crate::register::{Register, feature_data_status, fifo_fill_level};

const REG_COUNT: usize = 0x80;
const EXT_WORDS: usize = 0x40;

/// Register-level emulation of a BMI3 device.
///
/// - `FIFO_DATA` streams bytes from a queued FIFO image and `FIFO_FILL_LEVEL`
///   reports the words still queued (unless pinned with `with_fill_level`).
/// - `FEATURE_DATA_ADDR` / `FEATURE_DATA_TX` access an extended memory array
///   with auto-increment.
#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u16; REG_COUNT],
    ext: [u16; EXT_WORDS],
    ext_addr: usize,
    fifo: Vec<u8>,
    fifo_pos: usize,
    fill_level_override: Option<u16>,
    writes: Vec<(u8, u16)>,
    write_bursts: Vec<(u8, Vec<u8>)>,
    reads: Vec<(u8, usize)>,
    fail_after_reads: Option<usize>,
}

impl Default for MockInterface {
    fn default() -> Self {
        let mut regs = [0u16; REG_COUNT];
        regs[Register::FeatureDataStatus.addr() as usize] = feature_data_status::DATA_TX_READY;
        Self {
            regs,
            ext: [0u16; EXT_WORDS],
            ext_addr: 0,
            fifo: Vec::new(),
            fifo_pos: 0,
            fill_level_override: None,
            writes: Vec::new(),
            write_bursts: Vec::new(),
            reads: Vec::new(),
            fail_after_reads: None,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: Register, value: u16) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn set_reg(&mut self, reg: Register, value: u16) {
        self.regs[reg.addr() as usize] = value;
    }

    pub(crate) fn reg(&self, reg: Register) -> u16 {
        self.regs[reg.addr() as usize]
    }

    pub(crate) fn with_fifo(mut self, bytes: &[u8]) -> Self {
        self.fifo = bytes.to_vec();
        self.fifo_pos = 0;
        self
    }

    pub(crate) fn with_fill_level(mut self, words: u16) -> Self {
        self.fill_level_override = Some(words);
        self
    }

    pub(crate) fn with_ext(mut self, addr: u8, words: &[u16]) -> Self {
        let start = addr as usize;
        self.ext[start..start + words.len()].copy_from_slice(words);
        self
    }

    pub(crate) fn ext(&self, addr: u8, len: usize) -> &[u16] {
        let start = addr as usize;
        &self.ext[start..start + len]
    }

    pub(crate) fn fail_after_reads(mut self, reads: usize) -> Self {
        self.fail_after_reads = Some(reads);
        self
    }

    pub(crate) fn writes(&self) -> &[(u8, u16)] {
        &self.writes
    }

    pub(crate) fn write_bursts(&self) -> &[(u8, Vec<u8>)] {
        &self.write_bursts
    }

    pub(crate) fn reads(&self) -> &[(u8, usize)] {
        &self.reads
    }

    fn fill_level(&self) -> u16 {
        match self.fill_level_override {
            Some(words) => words,
            None => ((self.fifo.len().saturating_sub(self.fifo_pos) / 2) as u16) & fifo_fill_level::MASK,
        }
    }

    fn word_at(&self, reg: u8) -> u16 {
        if reg == Register::FifoFillLevel.addr() {
            self.fill_level()
        } else {
            self.regs[reg as usize % REG_COUNT]
        }
    }

    fn store_word(&mut self, reg: u8, value: u16) {
        if reg == Register::FeatureDataAddr.addr() {
            self.ext_addr = (value & 0x00FF) as usize;
        } else if reg == Register::FeatureDataTx.addr() {
            self.ext[self.ext_addr % EXT_WORDS] = value;
            self.ext_addr += 1;
        } else {
            self.regs[reg as usize % REG_COUNT] = value;
        }
    }

    fn check_failure(&mut self) -> Result<(), Error> {
        if let Some(limit) = self.fail_after_reads
            && self.reads.len() >= limit
        {
            return Err(Error::Bus);
        }
        Ok(())
    }
}

impl Interface for MockInterface {
    async fn read_reg(&mut self, reg: u8) -> Result<u16, Error> {
        let mut buffer = [0u8; 2];
        self.read_regs(reg, &mut buffer).await?;
        Ok(u16::from_le_bytes(buffer))
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.check_failure()?;
        self.reads.push((reg, buffer.len()));

        if reg == Register::FifoData.addr() {
            for slot in buffer.iter_mut() {
                *slot = self.fifo.get(self.fifo_pos).copied().unwrap_or(0);
                self.fifo_pos += 1;
            }
            return Ok(());
        }

        if reg == Register::FeatureDataTx.addr() {
            for chunk in buffer.chunks_mut(2) {
                let bytes = self.ext[self.ext_addr % EXT_WORDS].to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
                self.ext_addr += 1;
            }
            return Ok(());
        }

        for (index, chunk) in buffer.chunks_mut(2).enumerate() {
            let bytes = self.word_at(reg.wrapping_add(index as u8)).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }

    async fn write_reg(&mut self, reg: u8, value: u16) -> Result<(), Error> {
        self.store_word(reg, value);
        self.writes.push((reg, value));
        Ok(())
    }

    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        let auto_increment = reg != Register::FeatureDataTx.addr();
        for (index, pair) in data.chunks(2).enumerate() {
            let value = u16::from_le_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]);
            let target = if auto_increment {
                reg.wrapping_add(index as u8)
            } else {
                reg
            };
            self.store_word(target, value);
        }
        self.write_bursts.push((reg, data.to_vec()));
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) last_ns: Option<u32>,
    pub(crate) total_ns: u64,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.last_ns = Some(ns);
        self.total_ns += u64::from(ns);
    }
}
