//! kehadiran main entrypoint.

use env_logger::Env;
use kehadiran::run;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    if let Err(e) = run() {
        kehadiran::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
