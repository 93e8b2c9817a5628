use std::error::Error;
use std::process::ExitCode;

use mirror_spheres::RenderConfig;

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RenderConfig::default();

    match mirror_spheres::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(": ");
                message.push_str(&cause.to_string());
                source = cause.source();
            }
            log::error!("{message}");
            ExitCode::FAILURE
        }
    }
}
