//! CPU model table.
//!
//! Models carry a width tag rather than a slice of their own: every model of
//! a given width shares that family's register table.

use super::{IsaFamily, ModelDescriptor, RegisterWidth};

const fn model(
    name: &'static str,
    isa_family: IsaFamily,
    width: RegisterWidth,
) -> ModelDescriptor {
    ModelDescriptor {
        name,
        isa_family,
        width,
    }
}

pub(crate) static MODELS: &[ModelDescriptor] = &[
    model("Cortex-M0", IsaFamily::Armv7M, RegisterWidth::W32),
    model("Cortex-M3", IsaFamily::Armv7M, RegisterWidth::W32),
    model("Cortex-M4", IsaFamily::Armv7M, RegisterWidth::W32),
    model("Cortex-M33", IsaFamily::Armv7M, RegisterWidth::W32),
    model("Cortex-R5", IsaFamily::Armv7R, RegisterWidth::W32),
    model("Cortex-R5F", IsaFamily::Armv7R, RegisterWidth::W32),
    model("Cortex-A7", IsaFamily::Armv7A, RegisterWidth::W32),
    model("Cortex-A8", IsaFamily::Armv7A, RegisterWidth::W32),
    model("Cortex-A9", IsaFamily::Armv7A, RegisterWidth::W32),
    model("Cortex-A15", IsaFamily::Armv7A, RegisterWidth::W32),
    model("Cortex-A53", IsaFamily::Armv8A, RegisterWidth::W64),
    model("Cortex-A57", IsaFamily::Armv8A, RegisterWidth::W64),
    model("Cortex-A72", IsaFamily::Armv8A, RegisterWidth::W64),
    model("Cortex-Max", IsaFamily::Armv8A, RegisterWidth::W64),
];
