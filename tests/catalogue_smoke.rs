use anyhow::Result;
use modeldb::catalogue::{Catalogue, IsaFamily};
use modeldb::engine::{ArchFamily, Arm64Reg, ArmReg, RegId};

/// Id lookup returns the first-declared row, which for any register with a
/// bitfield breakdown is the whole-register view.
#[test]
fn register_lookup_by_id_returns_whole_register() -> Result<()> {
    let catalogue = Catalogue::build()?;

    let x0 = catalogue
        .lookup_register(RegId::Arm64(Arm64Reg::X0))
        .expect("X0 should be in the catalogue");
    assert_eq!(x0.name, "X0");
    assert_eq!(x0.bit_offset, 0);
    assert_eq!(x0.bit_width, 64);

    // CPSR has fifteen bitfield rows after it; id lookup must not see them.
    let cpsr = catalogue
        .lookup_register(RegId::Arm(ArmReg::CPSR))
        .expect("CPSR should be in the catalogue");
    assert_eq!(cpsr.name, "CPSR32");
    assert_eq!(cpsr.bit_offset, 0);
    assert_eq!(cpsr.bit_width, 32);

    Ok(())
}

/// An engine id outside the catalogue is a plain miss, never an error.
#[test]
fn register_lookup_miss_is_none() -> Result<()> {
    let catalogue = Catalogue::build()?;

    assert!(
        catalogue
            .lookup_register(RegId::Arm64(Arm64Reg::INVALID))
            .is_none()
    );
    assert!(
        catalogue
            .lookup_register(RegId::Arm(ArmReg::INVALID))
            .is_none()
    );

    Ok(())
}

/// Every row in the catalogue is reachable through id lookup, and the row
/// found always carries the queried id.
#[test]
fn every_row_resolvable_by_its_id() -> Result<()> {
    let catalogue = Catalogue::build()?;

    for reg in catalogue.registers() {
        let found = catalogue
            .lookup_register(reg.id)
            .unwrap_or_else(|| panic!("id {:?} of row {} did not resolve", reg.id, reg.name));
        assert_eq!(
            found.id, reg.id,
            "lookup for {} returned a row with a different id",
            reg.name
        );
    }

    Ok(())
}

/// Name lookup is exact and case-sensitive, and is the way to address an
/// individual bitfield row.
#[test]
fn register_lookup_by_name_addresses_bitfields() -> Result<()> {
    let catalogue = Catalogue::build()?;

    let n_flag = catalogue
        .lookup_register_by_name("CPSR32.N")
        .expect("CPSR32.N should be in the catalogue");
    assert_eq!(n_flag.id, RegId::Arm(ArmReg::CPSR));
    assert_eq!(n_flag.bit_offset, 31);
    assert_eq!(n_flag.bit_width, 1);

    assert!(
        catalogue.lookup_register_by_name("cpsr32.n").is_none(),
        "name match must be case-sensitive"
    );
    assert!(catalogue.lookup_register_by_name("XYZZY").is_none());

    Ok(())
}

/// Field enumeration lists a status register's bitfields in declaration
/// order and is empty for plain registers.
#[test]
fn status_register_field_breakdown() -> Result<()> {
    let catalogue = Catalogue::build()?;

    let fields: Vec<_> = catalogue
        .register_fields(RegId::Arm64(Arm64Reg::PSTATE))
        .collect();
    assert_eq!(fields.len(), 13, "CPSR64 field count changed");
    assert_eq!(fields[0].name, "CPSR64.SP");
    assert_eq!(fields[12].name, "CPSR64.N");

    assert_eq!(
        catalogue.register_fields(RegId::Arm64(Arm64Reg::X0)).count(),
        0,
        "X0 has no named bitfields"
    );

    Ok(())
}

/// Model lookup resolves name, ISA family and width; misses stay misses.
#[test]
fn model_lookup() -> Result<()> {
    let catalogue = Catalogue::build()?;

    let a53 = catalogue
        .lookup_model("Cortex-A53")
        .expect("Cortex-A53 should be in the catalogue");
    assert_eq!(a53.isa_family, IsaFamily::Armv8A);
    assert_eq!(a53.isa_family.to_string(), "ARMv8-A");
    assert_eq!(a53.width.bits(), 64);

    let m0 = catalogue
        .lookup_model("Cortex-M0")
        .expect("Cortex-M0 should be in the catalogue");
    assert_eq!(m0.isa_family, IsaFamily::Armv7M);
    assert_eq!(m0.isa_family.to_string(), "ARMv7-M");
    assert_eq!(m0.width.bits(), 32);

    assert!(
        catalogue.lookup_model("cortex-a53").is_none(),
        "model match must be case-sensitive"
    );
    assert!(catalogue.lookup_model("Cortex-A999").is_none());

    Ok(())
}

/// Models of one width share a single register table; they never hold copies.
#[test]
fn models_share_family_register_tables() -> Result<()> {
    let catalogue = Catalogue::build()?;

    let a53 = catalogue.lookup_model("Cortex-A53").expect("model exists");
    let a72 = catalogue.lookup_model("Cortex-A72").expect("model exists");
    let regs_a53 = catalogue.model_registers(a53);
    let regs_a72 = catalogue.model_registers(a72);
    assert_eq!(regs_a53.len(), regs_a72.len());
    assert!(
        std::ptr::eq(regs_a53, regs_a72),
        "64-bit models must share one table"
    );
    assert!(std::ptr::eq(
        regs_a53,
        catalogue.registers_for(ArchFamily::Aarch64)
    ));

    let m0 = catalogue.lookup_model("Cortex-M0").expect("model exists");
    let r5 = catalogue.lookup_model("Cortex-R5").expect("model exists");
    assert!(
        std::ptr::eq(catalogue.model_registers(m0), catalogue.model_registers(r5)),
        "32-bit models must share one table"
    );

    assert!(
        !std::ptr::eq(regs_a53, catalogue.model_registers(m0)),
        "the two families must not share a table"
    );

    Ok(())
}

/// Each family table holds only ids of its own architecture, so a model's
/// register count is exactly its family table's length.
#[test]
fn family_tables_are_homogeneous() -> Result<()> {
    let catalogue = Catalogue::build()?;

    for reg in catalogue.registers_for(ArchFamily::Aarch64) {
        assert!(
            matches!(reg.id, RegId::Arm64(_)),
            "{} is not an aarch64 id",
            reg.name
        );
    }
    for reg in catalogue.registers_for(ArchFamily::Aarch32) {
        assert!(
            matches!(reg.id, RegId::Arm(_)),
            "{} is not an aarch32 id",
            reg.name
        );
    }

    for model in catalogue.models() {
        assert_eq!(
            catalogue.model_registers(model).len(),
            catalogue.registers_for(model.width.family()).len(),
            "register count for {} does not track its family table",
            model.name
        );
    }

    Ok(())
}
