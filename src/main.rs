use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tumbleweed::application::{Config, SessionMetricsLogger, SinkKind};
use tumbleweed::domain::TumbleweedError;
use tumbleweed::infrastructure::{ConsoleRenderer, RecordedSession, StdoutPrinter, TracingPrinter};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let (input, force_log) = match parse_args(&args) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    let mut config = Config::from_env();
    if force_log {
        config = config.with_sink(SinkKind::Log);
    }

    match run(&input, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.class.exit_code() as u8)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tumbleweed=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> Result<(String, bool), String> {
    let mut input = None;
    let mut log = false;

    for arg in args.iter().skip(1) {
        if arg == "--log" || arg == "-l" {
            log = true;
        } else if arg == "--help" || arg == "-h" {
            return Err(usage());
        } else if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option: {}\n\n{}", arg, usage()));
        } else if input.is_none() {
            input = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument: {}\n\n{}", arg, usage()));
        }
    }

    match input {
        Some(i) => Ok((i, log)),
        None => Err(usage()),
    }
}

fn usage() -> String {
    "usage: tumbleweed [--log] <FILE|->\n\n\
    Renders a recorded session (JSON) as a per-phase timeline.\n\n\
    Options:\n  \
      --log, -l    Emit the timeline through the log instead of stdout\n\n\
    Environment:\n  \
      TUMBLEWEED_LABEL_WIDTH     Label column width [default: 18]\n  \
      TUMBLEWEED_BAR_WIDTH       Bar column width incl. borders [default: 82]\n  \
      TUMBLEWEED_DURATION_WIDTH  Duration column width [default: 8]\n  \
      TUMBLEWEED_FILL            Bar fill character [default: #]\n  \
      TUMBLEWEED_BLANK           Bar blank character [default: space]\n  \
      TUMBLEWEED_BORDER          Bar border character [default: |]\n  \
      TUMBLEWEED_SINK            stdout or log [default: stdout]\n  \
      RUST_LOG                   Log filter [default: tumbleweed=info]".to_string()
}

fn run(input: &str, config: Config) -> Result<(), TumbleweedError> {
    config.validate()?;

    let text = read_input(input)?;
    let session = RecordedSession::from_json(&text)?;

    let renderer = ConsoleRenderer::new().with_layout(config.layout);
    let renderer = match config.sink {
        SinkKind::Stdout => renderer.with_printer(StdoutPrinter::new()),
        SinkKind::Log => renderer.with_printer(TracingPrinter::new()),
    };

    SessionMetricsLogger::new(renderer).did_finish_collecting(&session);
    Ok(())
}

fn read_input(input: &str) -> Result<String, TumbleweedError> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)
            .map_err(|e| TumbleweedError::io(format!("failed to read stdin: {}", e)))?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).map_err(|e| TumbleweedError::io(format!("failed to read '{}': {}", input, e)))
    }
}
