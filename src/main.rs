use clap::Parser;
use resolve_deps::cli::{default_log_level, run, Args};

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(args.verbose)),
    )
    .init();

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
