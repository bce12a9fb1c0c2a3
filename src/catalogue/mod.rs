//! The static catalogue: register layout descriptors for the two ARM
//! architecture families, CPU model profiles, and the lookups over them.
//!
//! Everything here is plain immutable data. The only failure the catalogue
//! can produce is at build time, when the tables themselves are mis-authored.

use std::collections::BTreeSet;

use anyhow::{Result, anyhow};
use tracing::{debug, error};

use crate::engine::{ArchFamily, RegId};

mod aarch32;
mod aarch64;
mod models;

/// One row of the register catalogue: either a whole physical register or a
/// named bit-range within one.
///
/// Several rows may share an `id`; the whole-register row is declared first,
/// its bitfield rows directly after it.
#[derive(Clone, Copy, Debug)]
pub struct RegisterDescriptor {
    pub id: RegId,
    /// Starting bit of the field within the physical register. Whole-register
    /// rows sit at offset 0.
    pub bit_offset: u32,
    /// Field width in bits; the register's full width for whole-register rows.
    pub bit_width: u32,
    /// Display name, unique across the whole catalogue (checked at build).
    pub name: &'static str,
}

/// Canonical width of a model's core registers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegisterWidth {
    W64,
    W32,
}

impl RegisterWidth {
    pub const fn bits(&self) -> u32 {
        match self {
            RegisterWidth::W64 => 64,
            RegisterWidth::W32 => 32,
        }
    }

    pub const fn family(&self) -> ArchFamily {
        match self {
            RegisterWidth::W64 => ArchFamily::Aarch64,
            RegisterWidth::W32 => ArchFamily::Aarch32,
        }
    }
}

/// Instruction-set family of a CPU model.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, strum::Display, strum::EnumString)]
pub enum IsaFamily {
    #[strum(serialize = "ARMv7-M")]
    Armv7M,
    #[strum(serialize = "ARMv7-R")]
    Armv7R,
    #[strum(serialize = "ARMv7-A")]
    Armv7A,
    #[strum(serialize = "ARMv8-A")]
    Armv8A,
}

/// One CPU model profile.
///
/// Models do not own a register set: every model resolves to the shared table
/// of its architecture family via [`Catalogue::model_registers`].
#[derive(Clone, Copy, Debug)]
pub struct ModelDescriptor {
    pub name: &'static str,
    pub isa_family: IsaFamily,
    pub width: RegisterWidth,
}

/// Two per-family register tables plus the model table.
///
/// Immutable once built; a `&Catalogue` can be read from any number of
/// threads.
#[derive(Clone, Copy, Debug)]
pub struct Catalogue {
    regs_aarch64: &'static [RegisterDescriptor],
    regs_aarch32: &'static [RegisterDescriptor],
    models: &'static [ModelDescriptor],
}

impl Catalogue {
    /// Assemble the built-in tables. The host must call this (and check the
    /// result) before relying on any lookup.
    pub fn build() -> Result<Catalogue> {
        Catalogue::new(
            aarch64::AARCH64_REGISTERS,
            aarch32::AARCH32_REGISTERS,
            models::MODELS,
        )
    }

    /// Assemble a catalogue over caller-supplied tables, rejecting it if any
    /// register name appears twice. A duplicate name means the static data is
    /// mis-authored, so there is nothing a caller could recover into.
    pub fn new(
        regs_aarch64: &'static [RegisterDescriptor],
        regs_aarch32: &'static [RegisterDescriptor],
        models: &'static [ModelDescriptor],
    ) -> Result<Catalogue> {
        let catalogue = Catalogue {
            regs_aarch64,
            regs_aarch32,
            models,
        };
        catalogue.check_register_names()?;

        debug!(
            registers = catalogue.registers().count(),
            models = catalogue.models.len(),
            "catalogue built"
        );
        Ok(catalogue)
    }

    /// Scan for duplicate register names: one diagnostic per duplicate, then
    /// a single error if any were found.
    fn check_register_names(&self) -> Result<()> {
        let mut known_names = BTreeSet::new();
        let mut duplicates = 0usize;
        for reg in self.registers() {
            if !known_names.insert(reg.name) {
                error!("duplicate register name {}", reg.name);
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            return Err(anyhow!(
                "{duplicates} duplicate register name(s) in catalogue"
            ));
        }
        Ok(())
    }

    /// All register rows in declaration order, the 64-bit table first.
    pub fn registers(&self) -> impl Iterator<Item = &'static RegisterDescriptor> {
        self.regs_aarch64.iter().chain(self.regs_aarch32.iter())
    }

    /// First row matching `id`, in declaration order, or `None` on a miss.
    ///
    /// For a register with named bitfields this returns the whole-register
    /// row; callers after a bitfield resolve by name instead.
    pub fn lookup_register(&self, id: RegId) -> Option<&'static RegisterDescriptor> {
        self.registers().find(|reg| reg.id == id)
    }

    /// Row whose display name matches exactly (case-sensitive), or `None`.
    ///
    /// Unlike id lookup this can address individual bitfield rows, e.g.
    /// "CPSR32.N".
    pub fn lookup_register_by_name(&self, name: &str) -> Option<&'static RegisterDescriptor> {
        self.registers().find(|reg| reg.name == name)
    }

    /// The named bitfield rows of `id`, skipping the whole-register row.
    /// Empty for registers without a bitfield breakdown.
    pub fn register_fields(&self, id: RegId) -> impl Iterator<Item = &'static RegisterDescriptor> {
        self.registers().filter(move |reg| reg.id == id).skip(1)
    }

    /// First model matching `name` exactly (case-sensitive), or `None`.
    pub fn lookup_model(&self, name: &str) -> Option<&'static ModelDescriptor> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn models(&self) -> &'static [ModelDescriptor] {
        self.models
    }

    /// The shared register table of one architecture family.
    pub fn registers_for(&self, family: ArchFamily) -> &'static [RegisterDescriptor] {
        match family {
            ArchFamily::Aarch64 => self.regs_aarch64,
            ArchFamily::Aarch32 => self.regs_aarch32,
        }
    }

    /// The register set a model exposes. Every model of a given width
    /// resolves to the identical table.
    pub fn model_registers(&self, model: &ModelDescriptor) -> &'static [RegisterDescriptor] {
        self.registers_for(model.width.family())
    }
}
