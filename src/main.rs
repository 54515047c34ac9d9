extern crate env_logger;
#[macro_use]
extern crate log;
extern crate nmea_fix;

use std::process;

use nmea_fix::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env();
    if let Err(e) = nmea_fix::run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}
