// minimal example: generate toy events and run the candidate
// reconstruction and selection in memory
// run with `cargo run --release --example minimal`
// set the environment variable `RUST_LOG=info` for command-line output
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use zz4l::prelude::*;

fn main() {
    // initialise logging from the RUST_LOG environment variable
    env_logger::init();

    // a reproducible batch of toy events
    let rng = Xoshiro256Plus::seed_from_u64(1);
    let mut generator = Generator::new(rng);
    let events = generator.gen_events(100);

    // the standard selection with default thresholds
    let selector = StandardSelection::new(SelectionCuts::default());

    let mut n_accept = 0;
    for event in &events {
        let candidates = StandardReconstruction::default().reconstruct(event);
        let result = selector.select(event, &candidates);
        if result.accepted() {
            n_accept += 1;
        }
    }
    println!("{n_accept} of {} events accepted", events.len());
}
