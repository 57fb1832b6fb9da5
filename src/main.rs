//! timereport main entrypoint.

use timereport::run;
use timereport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        tracing::error!(category = e.category(), "command_failed");
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
