//! glucograph main entrypoint.

use glucograph::run;
use glucograph::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
