//! ramostamp main entrypoint.

use ramostamp::run;
use ramostamp::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
