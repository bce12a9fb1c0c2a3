//! Register numbering of the CPU-emulation engine this front-end drives.
//!
//! The engine exposes one register enumeration per architecture; the enums
//! here mirror those enumerations one-to-one. The catalogue never invents
//! identifiers of its own, it only attaches layout metadata to the engine's.

use strum::Display;

/// Architecture family a register id (and its table) belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum ArchFamily {
    #[strum(serialize = "aarch64")]
    Aarch64,
    #[strum(serialize = "aarch32")]
    Aarch32,
}

/// AArch64 register ids, as numbered by the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[allow(clippy::upper_case_acronyms)]
#[allow(non_camel_case_types)]
pub enum Arm64Reg {
    INVALID,

    // core registers
    X0,
    X1,
    X2,
    X3,
    X4,
    X5,
    X6,
    X7,
    X8,
    X9,
    X10,
    X11,
    X12,
    X13,
    X14,
    X15,
    X16,
    X17,
    X18,
    X19,
    X20,
    X21,
    X22,
    X23,
    X24,
    X25,
    X26,
    X27,
    X28,
    X29,
    X30,
    SP,
    PC,

    // status registers
    PSTATE,
    SPSR_EL1,
    SPSR_EL2,
    SPSR_EL3,

    // banked registers
    SP_EL0,
    SP_EL1,
    SP_EL2,
    SP_EL3,
    ELR_EL0,
    ELR_EL1,
    ELR_EL2,
    ELR_EL3,
    SCTLR_EL1,
    SCTLR_EL2,
    SCTLR_EL3,
    VBAR_EL1,
    VBAR_EL2,
    VBAR_EL3,

    // system registers
    DACR_S,
    DACR_NS,
    DACR32,
    HCR_EL2,
    SCR_EL3,
    MIDR,
    MPIDR,
    VPIDR,
    VMPIDR,

    // floating point registers
    V0,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    V9,
    V10,
    V11,
    V12,
    V13,
    V14,
    V15,
    V16,
    V17,
    V18,
    V19,
    V20,
    V21,
    V22,
    V23,
    V24,
    V25,
    V26,
    V27,
    V28,
    V29,
    V30,
    V31,
    FPSR,
    FPCR,
}

/// ARM32 register ids, as numbered by the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[allow(clippy::upper_case_acronyms)]
#[allow(non_camel_case_types)]
pub enum ArmReg {
    INVALID,

    // core registers
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    SP,
    LR,
    PC,

    // banked core registers
    R8_USR,
    R8_FIQ,
    R9_USR,
    R9_FIQ,
    R10_USR,
    R10_FIQ,
    R11_USR,
    R11_FIQ,
    R12_USR,
    R12_FIQ,
    R13_USR,
    R13_SVC,
    R13_ABT,
    R13_UND,
    R13_IRQ,
    R13_FIQ,
    R13_HYP,
    R13_MON,
    R14_USR,
    R14_SVC,
    R14_ABT,
    R14_UND,
    R14_IRQ,
    R14_FIQ,
    R14_HYP,
    R14_MON,

    // status registers
    CPSR,
    SPSR_SVC,
    SPSR_ABT,
    SPSR_UND,
    SPSR_IRQ,
    SPSR_FIQ,
    SPSR_HYP,
    SPSR_MON,

    // system control registers
    SCR,
    VBAR,
    VBAR_S,
    VBAR_NS,
    DACR,
    DACR_S,
    DACR_NS,
    SCTLR,
    SCTLR_S,
    SCTLR_NS,
    FCSEIDR,
    FCSEIDR_S,
    FCSEIDR_NS,
    CONTEXTIDR,
    CONTEXTIDR_S,
    CONTEXTIDR_NS,
    TTBR0,
    TTBR0_S,
    TTBR0_NS,
    TTBR1,
    TTBR1_S,
    TTBR1_NS,
    TTBCR,
    TTBCR_S,
    TTBCR_NS,
    PRRR,
    PRRR_S,
    PRRR_NS,
    NMRR,
    NMRR_S,
    NMRR_NS,
    DBGDSCREXT,
    /// Placeholder id the engine reports for registers it does not implement.
    NOIMP,
    MPIDR,

    // floating point registers
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D11,
    D12,
    D13,
    D14,
    D15,
    D16,
    D17,
    D18,
    D19,
    D20,
    D21,
    D22,
    D23,
    D24,
    D25,
    D26,
    D27,
    D28,
    D29,
    D30,
    D31,
    FPSCR,
    FPEXC,
    FPSID,
    MVFR0,
    MVFR1,
    MVFR2,
}

/// A register identifier from either of the engine's architecture spaces.
///
/// Wrapping the two enumerations keeps ids from different families distinct
/// by type, so a lookup can never confuse an AArch64 id with an ARM32 one
/// that happens to share the same engine constant value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RegId {
    Arm64(Arm64Reg),
    Arm(ArmReg),
}

impl RegId {
    pub const fn family(&self) -> ArchFamily {
        match self {
            RegId::Arm64(_) => ArchFamily::Aarch64,
            RegId::Arm(_) => ArchFamily::Aarch32,
        }
    }
}

impl From<Arm64Reg> for RegId {
    fn from(reg: Arm64Reg) -> RegId {
        RegId::Arm64(reg)
    }
}

impl From<ArmReg> for RegId {
    fn from(reg: ArmReg) -> RegId {
        RegId::Arm(reg)
    }
}
