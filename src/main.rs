use larder::{
    cli::{get_log_level_from_verbose, parse_cli, run},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(cli.verbose))
        .init();

    if let Err(err) = run(cli) {
        default_error_handler(err);
    }
}
