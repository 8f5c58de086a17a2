#![forbid(unsafe_code)]

fn main() {
    reel_demo::init_logging();
    if let Err(error) = reel_demo::run_from_env() {
        eprintln!("reel-demo: {error}");
        std::process::exit(error.exit_code());
    }
}
