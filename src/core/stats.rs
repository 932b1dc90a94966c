//! Generation run statistics.

use std::fmt;

/// Counters collected over one generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of opcode handlers emitted.
    pub opcodes_emitted: usize,

    /// Number of slow-path requests, including repeats.
    pub slow_path_requests: usize,

    /// Number of distinct slow-path blocks registered.
    pub slow_paths_registered: usize,

    /// Requests satisfied by an identical, already registered block.
    pub slow_path_reuses: usize,

    /// Size of the normalized output in bytes.
    pub output_bytes: usize,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation Statistics:")?;
        writeln!(f, "  Opcodes emitted: {}", self.opcodes_emitted)?;
        writeln!(f, "  Slow path requests: {}", self.slow_path_requests)?;
        writeln!(f, "  Slow paths registered: {}", self.slow_paths_registered)?;
        writeln!(f, "  Slow path reuses: {}", self.slow_path_reuses)?;
        writeln!(f, "  Output size: {} bytes", self.output_bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_display() {
        let stats = GenerationStats {
            opcodes_emitted: 2,
            slow_path_requests: 3,
            slow_paths_registered: 2,
            slow_path_reuses: 1,
            output_bytes: 512,
        };

        let output = format!("{}", stats);
        assert!(output.contains("Opcodes emitted: 2"));
        assert!(output.contains("Slow path reuses: 1"));
        assert!(output.contains("Output size: 512 bytes"));
    }
}
