use std::process::ExitCode;

use ghinit::engine::SeedError;
use ghinit::ui::output;

fn main() -> ExitCode {
    match ghinit::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e);
            if let Some(hint) = e.downcast_ref::<SeedError>().and_then(SeedError::hint) {
                output::hint(hint);
            }
            ExitCode::FAILURE
        }
    }
}
