use clap::{Parser, Subcommand};

use crate::catalogue::IsaFamily;

#[derive(Clone, Debug, Subcommand)]
pub enum Query {
    // List the CPU models in the catalogue.
    Models {
        // Only list models of this ISA family, e.g. "ARMv8-A"
        #[arg(short = 'f', long = "family")]
        family: Option<IsaFamily>,
    },
    // Show one CPU model's profile.
    Model {
        // Model name, e.g. "Cortex-A53"
        name: String,
        // Also list the model's register set
        #[arg(short = 'r', long = "registers")]
        registers: bool,
    },
    // Resolve a register or bitfield by its display name.
    Register {
        // Register display name, e.g. "X0" or "CPSR32.N"
        name: String,
    },
    // Show the named bitfields of a register.
    Fields {
        // Whole-register display name, e.g. "CPSR64"
        name: String,
    },
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Register and CPU model catalogue for the emulation front-end")]
pub struct Options {
    #[command(subcommand)]
    pub query: Query,
}
