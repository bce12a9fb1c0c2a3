use anyhow::Result;
use modeldb::catalogue::{
    Catalogue, IsaFamily, ModelDescriptor, RegisterDescriptor, RegisterWidth,
};
use modeldb::engine::{Arm64Reg, ArmReg, RegId};

static NO_REGS: &[RegisterDescriptor] = &[];
static NO_MODELS: &[ModelDescriptor] = &[];

/// Two rows with the same display name poison the whole catalogue: the build
/// fails before any lookup can be served.
#[test]
fn duplicate_register_name_rejects_catalogue() {
    static DUPED: &[RegisterDescriptor] = &[
        RegisterDescriptor {
            id: RegId::Arm64(Arm64Reg::X0),
            bit_offset: 0,
            bit_width: 64,
            name: "X0",
        },
        RegisterDescriptor {
            id: RegId::Arm64(Arm64Reg::X1),
            bit_offset: 0,
            bit_width: 64,
            name: "X0",
        },
    ];

    let err = Catalogue::new(DUPED, NO_REGS, NO_MODELS)
        .err()
        .expect("duplicate names must fail the build");
    assert!(
        err.to_string().contains("duplicate register name"),
        "unexpected error: {err:#}"
    );
}

/// The uniqueness rule spans both family tables, not each one in isolation.
#[test]
fn duplicate_name_across_families_rejects_catalogue() {
    static REGS_64: &[RegisterDescriptor] = &[RegisterDescriptor {
        id: RegId::Arm64(Arm64Reg::X0),
        bit_offset: 0,
        bit_width: 64,
        name: "X0",
    }];
    static REGS_32: &[RegisterDescriptor] = &[RegisterDescriptor {
        id: RegId::Arm(ArmReg::R0),
        bit_offset: 0,
        bit_width: 32,
        name: "X0",
    }];

    assert!(
        Catalogue::new(REGS_64, REGS_32, NO_MODELS).is_err(),
        "a name shared across families must fail the build"
    );
}

/// A clean synthetic catalogue builds and serves lookups afterward.
#[test]
fn clean_catalogue_builds_and_serves_lookups() -> Result<()> {
    static REGS_64: &[RegisterDescriptor] = &[RegisterDescriptor {
        id: RegId::Arm64(Arm64Reg::X0),
        bit_offset: 0,
        bit_width: 64,
        name: "X0",
    }];
    static REGS_32: &[RegisterDescriptor] = &[RegisterDescriptor {
        id: RegId::Arm(ArmReg::R0),
        bit_offset: 0,
        bit_width: 32,
        name: "R0",
    }];
    static MODELS: &[ModelDescriptor] = &[ModelDescriptor {
        name: "TestCore",
        isa_family: IsaFamily::Armv8A,
        width: RegisterWidth::W64,
    }];

    let catalogue = Catalogue::new(REGS_64, REGS_32, MODELS)?;

    let x0 = catalogue
        .lookup_register(Arm64Reg::X0.into())
        .expect("X0 should resolve");
    assert_eq!(x0.name, "X0");
    let r0 = catalogue
        .lookup_register(ArmReg::R0.into())
        .expect("R0 should resolve");
    assert_eq!(r0.name, "R0");

    let model = catalogue
        .lookup_model("TestCore")
        .expect("TestCore should resolve");
    assert_eq!(model.width.bits(), 64);
    assert_eq!(catalogue.model_registers(model).len(), 1);

    Ok(())
}

/// The built-in tables pass the consistency check.
#[test]
fn built_in_tables_are_consistent() -> Result<()> {
    let catalogue = Catalogue::build()?;

    assert_eq!(catalogue.models().len(), 14);
    assert!(
        catalogue.registers().count() > 300,
        "register tables look truncated"
    );

    Ok(())
}
