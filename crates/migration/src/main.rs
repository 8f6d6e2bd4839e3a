use ::error::AppError;
use sea_orm_migration::prelude::*;

fn main() {
    dotenvy::dotenv().ok();

    // The stock CLI reads DATABASE_URL; derive it from HNTB_DATABASE_* when unset.
    // Set before the runtime starts any worker threads.
    if std::env::var("DATABASE_URL").is_err() {
        match migration::db::load_config_from_env() {
            Ok(config) => unsafe {
                std::env::set_var("DATABASE_URL", config.build_connection_string());
            },
            Err(err) => exit_with(err),
        }
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => exit_with(AppError::from(err)),
    };
    runtime.block_on(cli::run_cli(migration::Migrator));
}

fn exit_with(err: AppError) -> ! {
    eprintln!("{}", err);
    std::process::exit(err.exit_code());
}
