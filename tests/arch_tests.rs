//! Tests for architectural state: register file and data memory.

use apex_sim::core::arch::{DataMemory, RegisterFile};

/// Tests register file initial state.
#[test]
fn test_register_file_initial() {
    let regs = RegisterFile::new();
    for i in 0..32 {
        assert_eq!(regs.read(i), 0);
        assert!(regs.is_valid(i));
    }
}

/// Tests register writes, including R0 which is an ordinary register.
#[test]
fn test_register_file_write() {
    let mut regs = RegisterFile::default();
    regs.write(0, 7);
    regs.write(31, -1);
    assert_eq!(regs.read(0), 7);
    assert_eq!(regs.read(31), -1);
    assert_eq!(regs.values()[0], 7);
    assert!(regs.validity().iter().all(|&v| v));
}

/// Tests data memory reads and writes.
#[test]
fn test_data_memory_rw() {
    let mut mem = DataMemory::new(16);
    assert_eq!(mem.len(), 16);
    assert!(mem.words().iter().all(|&w| w == 0));

    mem.write(5, 15);
    assert_eq!(mem.read(5), 15);
    assert_eq!(mem.words()[5], 15);
}

/// Tests that out-of-range accesses neither panic nor change memory.
#[test]
fn test_data_memory_out_of_range() {
    let mut mem = DataMemory::new(4);
    mem.write(4, 99);
    mem.write(-1, 99);
    assert_eq!(mem.read(4), 0);
    assert_eq!(mem.read(-3), 0);
    assert_eq!(mem.words(), &[0, 0, 0, 0]);
}
