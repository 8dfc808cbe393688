use clap::Parser as _;

mod cli;
mod config;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();
    if let Err(err) = cli::run(args) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
