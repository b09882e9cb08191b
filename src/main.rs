#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use std::process::ExitCode;

use scan::{Profile, ScanSettings, run_scan};
use tau::Strategy;
use tracing::error;
use utils::init_tracing;

const PROFILE: Profile = Profile::LEMMA_7_2_I;
const STRATEGY: Strategy = Strategy::Sequential;

fn main() -> ExitCode {
    init_tracing();
    match run_scan(&ScanSettings::new(PROFILE, STRATEGY)) {
        Ok(report) => {
            println!("\n{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(kind = %err.kind(), "{err}, terminating");
            ExitCode::FAILURE
        }
    }
}
