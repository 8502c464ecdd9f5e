mod opt;

use crate::opt::Opt;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use zz4l::analysis::AnalysisBuilder;
use zz4l::config::AnalysisConfig;
use zz4l::converter::RecordConverter;
use zz4l::reader::CombinedReader;
use zz4l::reconstruct::StandardReconstruction;
use zz4l::selection::StandardSelection;
use zz4l::writer::FileWriterBuilder;
use zz4l::{GIT_BRANCH, GIT_REV, VERSION};

fn main() -> Result<()> {
    let args = argfile::expand_args_from(
        std::env::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )
    .with_context(|| "Failed to read argument file")?;
    let opt = Opt::parse_from(args);

    let env = Env::default().filter_or("ZZ4L_LOG", &opt.loglevel);
    env_logger::init_from_env(env);

    rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build_global()?;

    if let (Some(rev), Some(branch)) = (GIT_REV, GIT_BRANCH) {
        info!("zz4l {VERSION} rev {rev} ({branch})");
    } else {
        info!("zz4l {VERSION}");
    }

    debug!("settings: {:#?}", opt);

    let config = match &opt.config {
        Some(path) => AnalysisConfig::from_yaml_file(path)?,
        None => AnalysisConfig::default(),
    };
    debug!("analysis configuration: {:#?}", config);

    let reader = CombinedReader::from_files(opt.infiles)?;

    let mut converter = RecordConverter::new();
    if let Some(objects) = config.objects {
        converter = converter.with_object_selection(objects);
    }

    let writer = FileWriterBuilder::default()
        .filename(opt.outfile)
        .format(opt.outformat.into())
        .build()?;

    let mut analysis = AnalysisBuilder {
        reader,
        converter,
        reconstructor: StandardReconstruction::default(),
        selector: StandardSelection::new(config.cuts),
        writer,
    }
    .build();
    analysis.run()?;

    info!("done");
    Ok(())
}
