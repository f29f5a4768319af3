use anyhow::{Result, bail};
use procmem::{
    MemoryProbe, options,
    utils::data_units::{gb, kb, mb},
};

fn main() -> Result<()> {
    let args = options::args::get_args();

    #[cfg(all(feature = "fern", debug_assertions))]
    {
        procmem::utils::logging::init_logger(log::LevelFilter::Debug, None)?;
    }

    let convert: fn(f64) -> f64 = match args.unit.as_str() {
        "bytes" => |bytes| bytes,
        "kb" => kb,
        "mb" => mb,
        "gb" => gb,
        unit => bail!("'{unit}' is not a valid unit; use one of bytes, kb, mb, gb."),
    };

    let mut probe = match args.pid {
        Some(pid) => MemoryProbe::from_pid(pid),
        None => MemoryProbe::new(),
    };
    if let Some(mem_type) = args.mem_type {
        probe.set_mem_type(mem_type);
    }

    println!("{}", convert(probe.bytes()));

    Ok(())
}
