use pj_init::{
    cli::{get_log_level_from_verbose, parse_cli, run_init, run_list, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let lvl = get_log_level_from_verbose(cli.command.verbose());
    env_logger::Builder::new().filter_level(lvl).init();

    let dispatch_result = match cli.command {
        Commands::Init(args) => run_init(args),
        Commands::List(args) => run_list(args),
    };

    if let Err(err) = dispatch_result {
        default_error_handler(err);
    }
}
