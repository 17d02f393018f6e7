//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and instruction counts together with the reasons the
//! pipeline lost throughput: load-use bubbles, multiply freezes, and
//! control transfers.

use std::time::Instant;

use serde::Serialize;

/// Simulation statistics structure tracking pipeline metrics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Cycles simulated.
    pub cycles: u64,
    /// Instructions that reached Writeback, excluding NOP and HALT.
    pub instructions_committed: u64,
    /// Cycles in which a load-use hazard inserted a bubble.
    pub stalls_data: u64,
    /// Cycles in which the multiplier froze Decode and Fetch.
    pub stalls_mul: u64,
    /// Taken branches and jumps.
    pub redirects: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_committed: 0,
            stalls_data: 0,
            stalls_mul: 0,
            redirects: 0,
        }
    }
}

impl PartialEq for SimStats {
    fn eq(&self, other: &Self) -> bool {
        self.cycles == other.cycles
            && self.instructions_committed == other.instructions_committed
            && self.stalls_data == other.stalls_data
            && self.stalls_mul == other.stalls_mul
            && self.redirects == other.redirects
    }
}

impl Eq for SimStats {}

impl SimStats {
    /// Committed instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_committed as f64 / self.cycles as f64
        }
    }

    /// Prints a formatted summary of the simulation statistics.
    ///
    /// Displays instruction counts, stall breakdown, IPC/CPI and host
    /// execution time in a human-readable format.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = self.cycles.max(1);
        let instr = self.instructions_committed.max(1);
        let cpi = cyc as f64 / instr as f64;
        let pct = |n: u64| (n as f64 / cyc as f64) * 100.0;

        println!("\n==========================================================");
        println!("APEX PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_committed);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("sim_cpi                  {:.4}", cpi);
        println!("----------------------------------------------------------");
        println!("PIPELINE BREAKDOWN");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            pct(self.stalls_data)
        );
        println!(
            "  stalls.mul             {} ({:.2}%)",
            self.stalls_mul,
            pct(self.stalls_mul)
        );
        println!("  redirects              {}", self.redirects);
        println!("==========================================================");
    }
}
