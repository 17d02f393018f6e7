//! APEX Data Memory.
//!
//! A flat, word-addressed array of signed integers, zero-initialized and
//! fixed in size for the lifetime of the simulation. Only the Memory stage
//! touches it.
//!
//! Valid programs never address outside the array. An out-of-range access
//! is logged and otherwise ignored (reads yield zero) so that a faulty
//! program cannot abort the simulation mid-cycle.

/// Word-addressed data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a zeroed memory with `size` words.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size],
        }
    }

    /// Number of addressable words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the memory has no addressable words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn slot(&self, addr: i32) -> Option<usize> {
        usize::try_from(addr).ok().filter(|&a| a < self.words.len())
    }

    /// Reads the word at `addr`.
    pub fn read(&self, addr: i32) -> i32 {
        match self.slot(addr) {
            Some(i) => self.words[i],
            None => {
                tracing::warn!(addr, size = self.words.len(), "load outside data memory");
                0
            }
        }
    }

    /// Writes `val` to the word at `addr`.
    pub fn write(&mut self, addr: i32, val: i32) {
        match self.slot(addr) {
            Some(i) => self.words[i] = val,
            None => {
                tracing::warn!(addr, val, size = self.words.len(), "store outside data memory");
            }
        }
    }

    /// The whole memory image, address 0 first.
    pub fn words(&self) -> &[i32] {
        &self.words
    }

    /// Prints the first `count` words in the APEX state-report format.
    pub fn dump(&self, count: usize) {
        println!("\n============== STATE OF DATA MEMORY =============");
        for (i, val) in self.words.iter().take(count).enumerate() {
            println!("|   MEM[{i:02}]  |   Value = {val:4}  |");
        }
    }
}
