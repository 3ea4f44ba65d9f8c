//! Writes the GraphQL schema as SDL to stdout or to the path given as the
//! first argument.

use std::env;
use std::fs;

use pushkind_leads::graphql::export_schema_sdl;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let sdl = export_schema_sdl();

    match env::args().nth(1) {
        Some(path) => {
            if let Err(err) = fs::write(&path, sdl) {
                log::error!("Failed to write schema to {path}: {err}");
                std::process::exit(1);
            }
            log::info!("Schema written to {path}");
        }
        None => print!("{sdl}"),
    }
}
