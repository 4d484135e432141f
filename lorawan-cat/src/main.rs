use std::process::ExitCode;

use lorawan_cat::Error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = std::io::stdout().lock();

    let result = lorawan_cat::run(std::env::args_os(), &mut stdout);

    match &result {
        Ok(()) => {}
        Err(Error::Usage) => {
            if let Err(e) = lorawan_cat::usage(&mut stdout) {
                log::warn!("unable to write usage: {e}");
            }
        }
        Err(Error::Help(e)) => {
            if let Err(e) = e.print() {
                log::warn!("unable to write help: {e}");
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }

    ExitCode::from(lorawan_cat::exit_code(&result))
}
