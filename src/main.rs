use anyhow::{Result, anyhow};
use clap::Parser;
use modeldb::{
    catalogue::Catalogue,
    options::{Options, Query},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();

    // The tables are static data; refuse to serve queries over a mis-authored
    // set of them.
    let catalogue = Catalogue::build()?;

    match options.query {
        Query::Models { family } => {
            for model in catalogue.models() {
                if let Some(family) = family
                    && model.isa_family != family
                {
                    continue;
                }
                println!(
                    "{:<12} {:<8} {:>2}-bit  {} registers",
                    model.name,
                    model.isa_family,
                    model.width.bits(),
                    catalogue.model_registers(model).len()
                );
            }
        }
        Query::Model { name, registers } => {
            let model = catalogue
                .lookup_model(&name)
                .ok_or_else(|| anyhow!("unknown model: {:?}", name))?;
            println!(
                "{}: {}, {}-bit, {} registers",
                model.name,
                model.isa_family,
                model.width.bits(),
                catalogue.model_registers(model).len()
            );
            if registers {
                for reg in catalogue.model_registers(model) {
                    println!(
                        "  {:<16} {:>2} bits at bit {}",
                        reg.name, reg.bit_width, reg.bit_offset
                    );
                }
            }
        }
        Query::Register { name } => {
            let reg = catalogue
                .lookup_register_by_name(&name)
                .ok_or_else(|| anyhow!("unknown register: {:?}", name))?;
            println!(
                "{} [{}] {} bits at bit {} (engine id {:?})",
                reg.name,
                reg.id.family(),
                reg.bit_width,
                reg.bit_offset,
                reg.id
            );
        }
        Query::Fields { name } => {
            let reg = catalogue
                .lookup_register_by_name(&name)
                .ok_or_else(|| anyhow!("unknown register: {:?}", name))?;
            let mut found_any = false;
            for f in catalogue.register_fields(reg.id) {
                println!(
                    "{:<16} bits [{}..{}]",
                    f.name,
                    f.bit_offset,
                    f.bit_offset + f.bit_width - 1
                );
                found_any = true;
            }
            if !found_any {
                println!("{} has no named bitfields", reg.name);
            }
        }
    }

    Ok(())
}
