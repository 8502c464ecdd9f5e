use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use zz4l::converter::EventRecord;
use zz4l::generator::Generator;

/// Generate toy four-lepton events
#[derive(Debug, Parser)]
#[clap(about, author, version)]
struct Opt {
    /// Output file
    #[clap(long, short)]
    outfile: PathBuf,

    /// Number of events to generate
    #[clap(long, short, default_value = "1000")]
    nevents: usize,

    /// Random number generator seed
    #[clap(long, short, default_value = "0")]
    seed: u64,

    /// Mean number of soft leptons on top of the boson decays
    #[clap(long, default_value = "0.5")]
    mean_extra_leptons: f64,

    /// Verbosity level
    #[clap(short, long, default_value = "Info")]
    loglevel: String,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    let env = Env::default().filter_or("ZZ4L_LOG", &opt.loglevel);
    env_logger::init_from_env(env);

    let rng = Xoshiro256Plus::seed_from_u64(opt.seed);
    let mut generator =
        Generator::new(rng).mean_extra_leptons(opt.mean_extra_leptons);

    let out = File::create(&opt.outfile).with_context(|| {
        format!("Failed to create output file {:?}", opt.outfile)
    })?;
    let mut out = BufWriter::new(out);
    for id in 0..opt.nevents {
        let event = generator.gen_event(id);
        let record = EventRecord::from(&event);
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!("Wrote {} events to {:?}", opt.nevents, opt.outfile);
    Ok(())
}
