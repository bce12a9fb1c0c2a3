//! AArch64 register table.
//!
//! Declaration order is part of the contract: the whole-register row of each
//! id comes first, its named bitfields directly after it.

use crate::engine::Arm64Reg::{self, *};
use crate::engine::RegId;

use super::RegisterDescriptor;

const fn whole(id: Arm64Reg, bits: u32, name: &'static str) -> RegisterDescriptor {
    RegisterDescriptor {
        id: RegId::Arm64(id),
        bit_offset: 0,
        bit_width: bits,
        name,
    }
}

const fn field(id: Arm64Reg, offset: u32, bits: u32, name: &'static str) -> RegisterDescriptor {
    RegisterDescriptor {
        id: RegId::Arm64(id),
        bit_offset: offset,
        bit_width: bits,
        name,
    }
}

pub(crate) static AARCH64_REGISTERS: &[RegisterDescriptor] = &[
    // core registers
    whole(X0, 64, "X0"),
    whole(X1, 64, "X1"),
    whole(X2, 64, "X2"),
    whole(X3, 64, "X3"),
    whole(X4, 64, "X4"),
    whole(X5, 64, "X5"),
    whole(X6, 64, "X6"),
    whole(X7, 64, "X7"),
    whole(X8, 64, "X8"),
    whole(X9, 64, "X9"),
    whole(X10, 64, "X10"),
    whole(X11, 64, "X11"),
    whole(X12, 64, "X12"),
    whole(X13, 64, "X13"),
    whole(X14, 64, "X14"),
    whole(X15, 64, "X15"),
    whole(X16, 64, "X16"),
    whole(X17, 64, "X17"),
    whole(X18, 64, "X18"),
    whole(X19, 64, "X19"),
    whole(X20, 64, "X20"),
    whole(X21, 64, "X21"),
    whole(X22, 64, "X22"),
    whole(X23, 64, "X23"),
    whole(X24, 64, "X24"),
    whole(X25, 64, "X25"),
    whole(X26, 64, "X26"),
    whole(X27, 64, "X27"),
    whole(X28, 64, "X28"),
    whole(X29, 64, "X29"),
    whole(X30, 64, "X30"),
    whole(SP, 64, "SP"),
    whole(PC, 64, "PC"),
    // status register and bitfields
    whole(PSTATE, 32, "CPSR64"),
    field(PSTATE, 0, 1, "CPSR64.SP"),
    field(PSTATE, 2, 2, "CPSR64.EL"),
    field(PSTATE, 4, 1, "CPSR64.nRW"),
    field(PSTATE, 6, 1, "CPSR64.F"),
    field(PSTATE, 7, 1, "CPSR64.I"),
    field(PSTATE, 8, 1, "CPSR64.A"),
    field(PSTATE, 9, 1, "CPSR64.D"),
    field(PSTATE, 20, 1, "CPSR64.IL"),
    field(PSTATE, 21, 1, "CPSR64.SS"),
    field(PSTATE, 28, 1, "CPSR64.V"),
    field(PSTATE, 29, 1, "CPSR64.C"),
    field(PSTATE, 30, 1, "CPSR64.Z"),
    field(PSTATE, 31, 1, "CPSR64.N"),
    // banked status registers and bitfields
    whole(SPSR_EL1, 32, "SPSR_EL1"),
    field(SPSR_EL1, 0, 1, "SPSR_EL1.SP"),
    field(SPSR_EL1, 2, 2, "SPSR_EL1.EL"),
    field(SPSR_EL1, 4, 1, "SPSR_EL1.nRW"),
    field(SPSR_EL1, 6, 1, "SPSR_EL1.F"),
    field(SPSR_EL1, 7, 1, "SPSR_EL1.I"),
    field(SPSR_EL1, 8, 1, "SPSR_EL1.A"),
    field(SPSR_EL1, 9, 1, "SPSR_EL1.D"),
    field(SPSR_EL1, 20, 1, "SPSR_EL1.IL"),
    field(SPSR_EL1, 21, 1, "SPSR_EL1.SS"),
    field(SPSR_EL1, 28, 1, "SPSR_EL1.V"),
    field(SPSR_EL1, 29, 1, "SPSR_EL1.C"),
    field(SPSR_EL1, 30, 1, "SPSR_EL1.Z"),
    field(SPSR_EL1, 31, 1, "SPSR_EL1.N"),
    whole(SPSR_EL2, 32, "SPSR_EL2"),
    field(SPSR_EL2, 0, 1, "SPSR_EL2.SP"),
    field(SPSR_EL2, 2, 2, "SPSR_EL2.EL"),
    field(SPSR_EL2, 4, 1, "SPSR_EL2.nRW"),
    field(SPSR_EL2, 6, 1, "SPSR_EL2.F"),
    field(SPSR_EL2, 7, 1, "SPSR_EL2.I"),
    field(SPSR_EL2, 8, 1, "SPSR_EL2.A"),
    field(SPSR_EL2, 9, 1, "SPSR_EL2.D"),
    field(SPSR_EL2, 20, 1, "SPSR_EL2.IL"),
    field(SPSR_EL2, 21, 1, "SPSR_EL2.SS"),
    field(SPSR_EL2, 28, 1, "SPSR_EL2.V"),
    field(SPSR_EL2, 29, 1, "SPSR_EL2.C"),
    field(SPSR_EL2, 30, 1, "SPSR_EL2.Z"),
    field(SPSR_EL2, 31, 1, "SPSR_EL2.N"),
    whole(SPSR_EL3, 32, "SPSR_EL3"),
    field(SPSR_EL3, 0, 1, "SPSR_EL3.SP"),
    field(SPSR_EL3, 2, 2, "SPSR_EL3.EL"),
    field(SPSR_EL3, 4, 1, "SPSR_EL3.nRW"),
    field(SPSR_EL3, 6, 1, "SPSR_EL3.F"),
    field(SPSR_EL3, 7, 1, "SPSR_EL3.I"),
    field(SPSR_EL3, 8, 1, "SPSR_EL3.A"),
    field(SPSR_EL3, 9, 1, "SPSR_EL3.D"),
    field(SPSR_EL3, 20, 1, "SPSR_EL3.IL"),
    field(SPSR_EL3, 21, 1, "SPSR_EL3.SS"),
    field(SPSR_EL3, 28, 1, "SPSR_EL3.V"),
    field(SPSR_EL3, 29, 1, "SPSR_EL3.C"),
    field(SPSR_EL3, 30, 1, "SPSR_EL3.Z"),
    field(SPSR_EL3, 31, 1, "SPSR_EL3.N"),
    // banked registers
    whole(SP_EL0, 64, "SP_EL0"),
    whole(SP_EL1, 64, "SP_EL1"),
    whole(SP_EL2, 64, "SP_EL2"),
    whole(SP_EL3, 64, "SP_EL3"),
    whole(ELR_EL0, 64, "ELR_EL0"),
    whole(ELR_EL1, 64, "ELR_EL1"),
    whole(ELR_EL2, 64, "ELR_EL2"),
    whole(ELR_EL3, 64, "ELR_EL3"),
    whole(SCTLR_EL1, 64, "SCTLR_EL1"),
    whole(SCTLR_EL2, 64, "SCTLR_EL2"),
    whole(SCTLR_EL3, 64, "SCTLR_EL3"),
    whole(VBAR_EL1, 64, "VBAR_EL1"),
    whole(VBAR_EL2, 64, "VBAR_EL2"),
    whole(VBAR_EL3, 64, "VBAR_EL3"),
    // system registers
    whole(DACR_S, 64, "DACR_S"),
    whole(DACR_NS, 64, "DACR_NS"),
    whole(DACR32, 64, "DACR"),
    whole(HCR_EL2, 64, "HCR_EL2"),
    whole(SCR_EL3, 64, "SCR_EL3"),
    whole(MIDR, 64, "MIDR_EL1"),
    whole(MPIDR, 64, "MPIDR_EL1"),
    whole(VPIDR, 64, "VPIDR_EL2"),
    whole(VMPIDR, 64, "VMPIDR_EL1"),
    // floating point registers
    whole(V0, 64, "V0"),
    whole(V1, 64, "V1"),
    whole(V2, 64, "V2"),
    whole(V3, 64, "V3"),
    whole(V4, 64, "V4"),
    whole(V5, 64, "V5"),
    whole(V6, 64, "V6"),
    whole(V7, 64, "V7"),
    whole(V8, 64, "V8"),
    whole(V9, 64, "V9"),
    whole(V10, 64, "V10"),
    whole(V11, 64, "V11"),
    whole(V12, 64, "V12"),
    whole(V13, 64, "V13"),
    whole(V14, 64, "V14"),
    whole(V15, 64, "V15"),
    whole(V16, 64, "V16"),
    whole(V17, 64, "V17"),
    whole(V18, 64, "V18"),
    whole(V19, 64, "V19"),
    whole(V20, 64, "V20"),
    whole(V21, 64, "V21"),
    whole(V22, 64, "V22"),
    whole(V23, 64, "V23"),
    whole(V24, 64, "V24"),
    whole(V25, 64, "V25"),
    whole(V26, 64, "V26"),
    whole(V27, 64, "V27"),
    whole(V28, 64, "V28"),
    whole(V29, 64, "V29"),
    whole(V30, 64, "V30"),
    whole(V31, 64, "V31"),
    // floating point status registers
    whole(FPSR, 32, "FPSR"),
    whole(FPCR, 32, "FPCR"),
];
