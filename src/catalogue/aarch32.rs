//! ARM32 register table.
//!
//! Same ordering contract as the AArch64 table: whole-register row first,
//! named bitfields directly after it.

use crate::engine::ArmReg::{self, *};
use crate::engine::RegId;

use super::RegisterDescriptor;

const fn whole(id: ArmReg, bits: u32, name: &'static str) -> RegisterDescriptor {
    RegisterDescriptor {
        id: RegId::Arm(id),
        bit_offset: 0,
        bit_width: bits,
        name,
    }
}

const fn field(id: ArmReg, offset: u32, bits: u32, name: &'static str) -> RegisterDescriptor {
    RegisterDescriptor {
        id: RegId::Arm(id),
        bit_offset: offset,
        bit_width: bits,
        name,
    }
}

pub(crate) static AARCH32_REGISTERS: &[RegisterDescriptor] = &[
    // core registers
    whole(R0, 32, "R0"),
    whole(R1, 32, "R1"),
    whole(R2, 32, "R2"),
    whole(R3, 32, "R3"),
    whole(R4, 32, "R4"),
    whole(R5, 32, "R5"),
    whole(R6, 32, "R6"),
    whole(R7, 32, "R7"),
    whole(R8, 32, "R8"),
    whole(R9, 32, "R9"),
    whole(R10, 32, "R10"),
    whole(R11, 32, "R11"),
    whole(R12, 32, "R12"),
    whole(SP, 32, "R13"),
    whole(LR, 32, "R14"),
    whole(PC, 32, "R15"),
    // banked core registers
    whole(R8_USR, 32, "R8_USR"),
    whole(R8_FIQ, 32, "R8_FIQ"),
    whole(R9_USR, 32, "R9_USR"),
    whole(R9_FIQ, 32, "R9_FIQ"),
    whole(R10_USR, 32, "R10_USR"),
    whole(R10_FIQ, 32, "R10_FIQ"),
    whole(R11_USR, 32, "R11_USR"),
    whole(R11_FIQ, 32, "R11_FIQ"),
    whole(R12_USR, 32, "R12_USR"),
    whole(R12_FIQ, 32, "R12_FIQ"),
    whole(R13_USR, 32, "R13_USR"),
    whole(R13_SVC, 32, "R13_SVC"),
    whole(R13_ABT, 32, "R13_ABT"),
    whole(R13_UND, 32, "R13_UND"),
    whole(R13_IRQ, 32, "R13_IRQ"),
    whole(R13_FIQ, 32, "R13_FIQ"),
    whole(R13_HYP, 32, "R13_HYP"),
    whole(R13_MON, 32, "R13_MON"),
    whole(R14_USR, 32, "R14_USR"),
    whole(R14_SVC, 32, "R14_SVC"),
    whole(R14_ABT, 32, "R14_ABT"),
    whole(R14_UND, 32, "R14_UND"),
    whole(R14_IRQ, 32, "R14_IRQ"),
    whole(R14_FIQ, 32, "R14_FIQ"),
    whole(R14_HYP, 32, "R14_HYP"),
    whole(R14_MON, 32, "R14_MON"),
    // status register and bitfields
    whole(CPSR, 32, "CPSR32"),
    field(CPSR, 0, 5, "CPSR32.M"),
    field(CPSR, 5, 1, "CPSR32.T"),
    field(CPSR, 6, 1, "CPSR32.F"),
    field(CPSR, 7, 1, "CPSR32.I"),
    field(CPSR, 8, 1, "CPSR32.A"),
    field(CPSR, 9, 1, "CPSR32.E"),
    field(CPSR, 10, 6, "CPSR32.IT2"),
    field(CPSR, 16, 4, "CPSR32.GE"),
    field(CPSR, 24, 1, "CPSR32.J"),
    field(CPSR, 25, 2, "CPSR32.IT1"),
    field(CPSR, 27, 1, "CPSR32.Q"),
    field(CPSR, 28, 1, "CPSR32.V"),
    field(CPSR, 29, 1, "CPSR32.C"),
    field(CPSR, 30, 1, "CPSR32.Z"),
    field(CPSR, 31, 1, "CPSR32.N"),
    // banked status registers and bitfields
    whole(SPSR_SVC, 32, "SPSR_SVC32"),
    field(SPSR_SVC, 0, 5, "SPSR_SVC32.M"),
    field(SPSR_SVC, 5, 1, "SPSR_SVC32.T"),
    field(SPSR_SVC, 6, 1, "SPSR_SVC32.F"),
    field(SPSR_SVC, 7, 1, "SPSR_SVC32.I"),
    field(SPSR_SVC, 8, 1, "SPSR_SVC32.A"),
    field(SPSR_SVC, 9, 1, "SPSR_SVC32.E"),
    field(SPSR_SVC, 10, 6, "SPSR_SVC32.IT2"),
    field(SPSR_SVC, 16, 4, "SPSR_SVC32.GE"),
    field(SPSR_SVC, 24, 1, "SPSR_SVC32.J"),
    field(SPSR_SVC, 25, 2, "SPSR_SVC32.IT1"),
    field(SPSR_SVC, 27, 1, "SPSR_SVC32.Q"),
    field(SPSR_SVC, 28, 1, "SPSR_SVC32.V"),
    field(SPSR_SVC, 29, 1, "SPSR_SVC32.C"),
    field(SPSR_SVC, 30, 1, "SPSR_SVC32.Z"),
    field(SPSR_SVC, 31, 1, "SPSR_SVC32.N"),
    whole(SPSR_ABT, 32, "SPSR_ABT32"),
    field(SPSR_ABT, 0, 5, "SPSR_ABT32.M"),
    field(SPSR_ABT, 5, 1, "SPSR_ABT32.T"),
    field(SPSR_ABT, 6, 1, "SPSR_ABT32.F"),
    field(SPSR_ABT, 7, 1, "SPSR_ABT32.I"),
    field(SPSR_ABT, 8, 1, "SPSR_ABT32.A"),
    field(SPSR_ABT, 9, 1, "SPSR_ABT32.E"),
    field(SPSR_ABT, 10, 6, "SPSR_ABT32.IT2"),
    field(SPSR_ABT, 16, 4, "SPSR_ABT32.GE"),
    field(SPSR_ABT, 24, 1, "SPSR_ABT32.J"),
    field(SPSR_ABT, 25, 2, "SPSR_ABT32.IT1"),
    field(SPSR_ABT, 27, 1, "SPSR_ABT32.Q"),
    field(SPSR_ABT, 28, 1, "SPSR_ABT32.V"),
    field(SPSR_ABT, 29, 1, "SPSR_ABT32.C"),
    field(SPSR_ABT, 30, 1, "SPSR_ABT32.Z"),
    field(SPSR_ABT, 31, 1, "SPSR_ABT32.N"),
    whole(SPSR_UND, 32, "SPSR_UND32"),
    field(SPSR_UND, 0, 5, "SPSR_UND32.M"),
    field(SPSR_UND, 5, 1, "SPSR_UND32.T"),
    field(SPSR_UND, 6, 1, "SPSR_UND32.F"),
    field(SPSR_UND, 7, 1, "SPSR_UND32.I"),
    field(SPSR_UND, 8, 1, "SPSR_UND32.A"),
    field(SPSR_UND, 9, 1, "SPSR_UND32.E"),
    field(SPSR_UND, 10, 6, "SPSR_UND32.IT2"),
    field(SPSR_UND, 16, 4, "SPSR_UND32.GE"),
    field(SPSR_UND, 24, 1, "SPSR_UND32.J"),
    field(SPSR_UND, 25, 2, "SPSR_UND32.IT1"),
    field(SPSR_UND, 27, 1, "SPSR_UND32.Q"),
    field(SPSR_UND, 28, 1, "SPSR_UND32.V"),
    field(SPSR_UND, 29, 1, "SPSR_UND32.C"),
    field(SPSR_UND, 30, 1, "SPSR_UND32.Z"),
    field(SPSR_UND, 31, 1, "SPSR_UND32.N"),
    whole(SPSR_IRQ, 32, "SPSR_IRQ32"),
    field(SPSR_IRQ, 0, 5, "SPSR_IRQ32.M"),
    field(SPSR_IRQ, 5, 1, "SPSR_IRQ32.T"),
    field(SPSR_IRQ, 6, 1, "SPSR_IRQ32.F"),
    field(SPSR_IRQ, 7, 1, "SPSR_IRQ32.I"),
    field(SPSR_IRQ, 8, 1, "SPSR_IRQ32.A"),
    field(SPSR_IRQ, 9, 1, "SPSR_IRQ32.E"),
    field(SPSR_IRQ, 10, 6, "SPSR_IRQ32.IT2"),
    field(SPSR_IRQ, 16, 4, "SPSR_IRQ32.GE"),
    field(SPSR_IRQ, 24, 1, "SPSR_IRQ32.J"),
    field(SPSR_IRQ, 25, 2, "SPSR_IRQ32.IT1"),
    field(SPSR_IRQ, 27, 1, "SPSR_IRQ32.Q"),
    field(SPSR_IRQ, 28, 1, "SPSR_IRQ32.V"),
    field(SPSR_IRQ, 29, 1, "SPSR_IRQ32.C"),
    field(SPSR_IRQ, 30, 1, "SPSR_IRQ32.Z"),
    field(SPSR_IRQ, 31, 1, "SPSR_IRQ32.N"),
    whole(SPSR_FIQ, 32, "SPSR_FIQ32"),
    field(SPSR_FIQ, 0, 5, "SPSR_FIQ32.M"),
    field(SPSR_FIQ, 5, 1, "SPSR_FIQ32.T"),
    field(SPSR_FIQ, 6, 1, "SPSR_FIQ32.F"),
    field(SPSR_FIQ, 7, 1, "SPSR_FIQ32.I"),
    field(SPSR_FIQ, 8, 1, "SPSR_FIQ32.A"),
    field(SPSR_FIQ, 9, 1, "SPSR_FIQ32.E"),
    field(SPSR_FIQ, 10, 6, "SPSR_FIQ32.IT2"),
    field(SPSR_FIQ, 16, 4, "SPSR_FIQ32.GE"),
    field(SPSR_FIQ, 24, 1, "SPSR_FIQ32.J"),
    field(SPSR_FIQ, 25, 2, "SPSR_FIQ32.IT1"),
    field(SPSR_FIQ, 27, 1, "SPSR_FIQ32.Q"),
    field(SPSR_FIQ, 28, 1, "SPSR_FIQ32.V"),
    field(SPSR_FIQ, 29, 1, "SPSR_FIQ32.C"),
    field(SPSR_FIQ, 30, 1, "SPSR_FIQ32.Z"),
    field(SPSR_FIQ, 31, 1, "SPSR_FIQ32.N"),
    whole(SPSR_HYP, 32, "SPSR_HYP32"),
    field(SPSR_HYP, 0, 5, "SPSR_HYP32.M"),
    field(SPSR_HYP, 5, 1, "SPSR_HYP32.T"),
    field(SPSR_HYP, 6, 1, "SPSR_HYP32.F"),
    field(SPSR_HYP, 7, 1, "SPSR_HYP32.I"),
    field(SPSR_HYP, 8, 1, "SPSR_HYP32.A"),
    field(SPSR_HYP, 9, 1, "SPSR_HYP32.E"),
    field(SPSR_HYP, 10, 6, "SPSR_HYP32.IT2"),
    field(SPSR_HYP, 16, 4, "SPSR_HYP32.GE"),
    field(SPSR_HYP, 24, 1, "SPSR_HYP32.J"),
    field(SPSR_HYP, 25, 2, "SPSR_HYP32.IT1"),
    field(SPSR_HYP, 27, 1, "SPSR_HYP32.Q"),
    field(SPSR_HYP, 28, 1, "SPSR_HYP32.V"),
    field(SPSR_HYP, 29, 1, "SPSR_HYP32.C"),
    field(SPSR_HYP, 30, 1, "SPSR_HYP32.Z"),
    field(SPSR_HYP, 31, 1, "SPSR_HYP32.N"),
    whole(SPSR_MON, 32, "SPSR_MON32"),
    field(SPSR_MON, 0, 5, "SPSR_MON32.M"),
    field(SPSR_MON, 5, 1, "SPSR_MON32.T"),
    field(SPSR_MON, 6, 1, "SPSR_MON32.F"),
    field(SPSR_MON, 7, 1, "SPSR_MON32.I"),
    field(SPSR_MON, 8, 1, "SPSR_MON32.A"),
    field(SPSR_MON, 9, 1, "SPSR_MON32.E"),
    field(SPSR_MON, 10, 6, "SPSR_MON32.IT2"),
    field(SPSR_MON, 16, 4, "SPSR_MON32.GE"),
    field(SPSR_MON, 24, 1, "SPSR_MON32.J"),
    field(SPSR_MON, 25, 2, "SPSR_MON32.IT1"),
    field(SPSR_MON, 27, 1, "SPSR_MON32.Q"),
    field(SPSR_MON, 28, 1, "SPSR_MON32.V"),
    field(SPSR_MON, 29, 1, "SPSR_MON32.C"),
    field(SPSR_MON, 30, 1, "SPSR_MON32.Z"),
    field(SPSR_MON, 31, 1, "SPSR_MON32.N"),
    // system control registers
    whole(SCR, 32, "SCR"),
    whole(VBAR, 32, "VBAR"),
    whole(VBAR_S, 32, "VBAR_S"),
    whole(VBAR_NS, 32, "VBAR_NS"),
    whole(DACR, 32, "DACR32"),
    whole(DACR_S, 32, "DACR32_S"),
    whole(DACR_NS, 32, "DACR32_NS"),
    whole(SCTLR, 32, "SCTLR"),
    whole(SCTLR_S, 32, "SCTLR_S"),
    whole(SCTLR_NS, 32, "SCTLR_NS"),
    whole(FCSEIDR, 32, "FCSEIDR"),
    whole(FCSEIDR_S, 32, "FCSEIDR_S"),
    whole(FCSEIDR_NS, 32, "FCSEIDR_NS"),
    whole(CONTEXTIDR, 32, "CONTEXTIDR"),
    whole(CONTEXTIDR_S, 32, "CONTEXTIDR_S"),
    whole(CONTEXTIDR_NS, 32, "CONTEXTIDR_NS"),
    whole(TTBR0, 32, "TTBR0"),
    whole(TTBR0_S, 32, "TTBR0_S"),
    whole(TTBR0_NS, 32, "TTBR0_NS"),
    whole(TTBR1, 32, "TTBR1"),
    whole(TTBR1_S, 32, "TTBR1_S"),
    whole(TTBR1_NS, 32, "TTBR1_NS"),
    whole(TTBCR, 32, "TTBCR"),
    whole(TTBCR_S, 32, "TTBCR_S"),
    whole(TTBCR_NS, 32, "TTBCR_NS"),
    whole(PRRR, 32, "PRRR"),
    whole(PRRR_S, 32, "PRRR_S"),
    whole(PRRR_NS, 32, "PRRR_NS"),
    whole(NMRR, 32, "NMRR"),
    whole(NMRR_S, 32, "NMRR_S"),
    whole(NMRR_NS, 32, "NMRR_NS"),
    whole(DBGDSCREXT, 32, "DBGDSCREXT"),
    whole(NOIMP, 32, "DBGDTRRX"),
    whole(NOIMP, 32, "DBGDTRTX"),
    whole(MPIDR, 32, "MPIDR"),
    // floating point registers
    whole(D0, 64, "D0"),
    whole(D1, 64, "D1"),
    whole(D2, 64, "D2"),
    whole(D3, 64, "D3"),
    whole(D4, 64, "D4"),
    whole(D5, 64, "D5"),
    whole(D6, 64, "D6"),
    whole(D7, 64, "D7"),
    whole(D8, 64, "D8"),
    whole(D9, 64, "D9"),
    whole(D10, 64, "D10"),
    whole(D11, 64, "D11"),
    whole(D12, 64, "D12"),
    whole(D13, 64, "D13"),
    whole(D14, 64, "D14"),
    whole(D15, 64, "D15"),
    whole(D16, 64, "D16"),
    whole(D17, 64, "D17"),
    whole(D18, 64, "D18"),
    whole(D19, 64, "D19"),
    whole(D20, 64, "D20"),
    whole(D21, 64, "D21"),
    whole(D22, 64, "D22"),
    whole(D23, 64, "D23"),
    whole(D24, 64, "D24"),
    whole(D25, 64, "D25"),
    whole(D26, 64, "D26"),
    whole(D27, 64, "D27"),
    whole(D28, 64, "D28"),
    whole(D29, 64, "D29"),
    whole(D30, 64, "D30"),
    whole(D31, 64, "D31"),
    whole(FPSCR, 32, "FPSCR"),
    whole(FPEXC, 32, "FPEXC"),
    whole(FPSID, 32, "FPSID"),
    whole(MVFR0, 32, "MVFR0"),
    whole(MVFR1, 32, "MVFR1"),
    whole(MVFR2, 32, "MVFR2"),
];
