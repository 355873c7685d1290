mod cli;

use calcplot::error_report::report_error;
use calcplot::render::{png_path, render_png};
use calcplot::summary::write_table;
use calcplot::{run, Session, Summary};
use clap::Parser;
use cli::Cli;
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::process;

/// Exit code for failures after a successful computation.
const EXIT_RENDER: i32 = 5;

fn init_logging(level: LevelFilter) {
    let logger = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    if let Err(e) = logger {
        eprintln!("warning: logging unavailable: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());
    info!("calcplot started");

    let code = if cli.interactive {
        interactive(&cli)
    } else {
        single_plot(&cli)
    };
    process::exit(code);
}

fn single_plot(cli: &Cli) -> i32 {
    let request = cli.request();

    let curves = match run(&request, &cli.options()) {
        Ok(curves) => curves,
        Err(e) => {
            if report_error(&request, &e).is_err() {
                eprintln!("error: {}", e);
            }
            return e.exit_code();
        }
    };

    let printed = {
        let mut out = io::stdout().lock();
        write!(out, "{}", Summary::of(&curves)).and_then(|()| {
            if cli.table {
                write_table(&curves, &mut out)
            } else {
                Ok(())
            }
        })
    };
    if let Err(e) = printed {
        error!("cannot write to stdout: {}", e);
        return EXIT_RENDER;
    }

    if !cli.no_plot {
        let path = png_path(&cli.output);
        if let Err(e) = render_png(&curves, &path, &cli.settings()) {
            eprintln!("error: {}", e);
            return EXIT_RENDER;
        }
        println!("saved {}", path.display());
    }
    0
}

fn interactive(cli: &Cli) -> i32 {
    let output = (!cli.no_plot).then(|| cli.output.clone());
    let mut session = Session::new(cli.request(), cli.options(), cli.settings(), output);

    println!("calcplot interactive session; type 'help' for commands");
    let stdin = io::stdin();
    let result = session.run_lines(stdin.lock(), &mut io::stdout(), &mut io::stderr());
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("session ended: {}", e);
            EXIT_RENDER
        }
    }
}
