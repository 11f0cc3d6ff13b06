use std::io::{self, Write};

use anyhow::{bail, Context};
use clap::Parser;
use glam::DVec3;
use transform_calc::{render_report, TransformInput};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Translation along X
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    tx: f64,

    /// Translation along Y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    ty: f64,

    /// Translation along Z
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    tz: f64,

    /// Rotation about X in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rx: f64,

    /// Rotation about Y in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    ry: f64,

    /// Rotation about Z in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rz: f64,

    /// Read "tx ty tz rx ry rz" lines from stdin instead of the flags
    #[arg(long)]
    interactive: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.interactive {
        return run_interactive();
    }

    let input = TransformInput::new(
        DVec3::new(args.tx, args.ty, args.tz),
        DVec3::new(args.rx, args.ry, args.rz),
    );
    println!("{}", render_report(&input.compute()));
    Ok(())
}

/// One computation per input line; empty line or EOF exits. A malformed line
/// is reported and skipped, the loop keeps accepting input.
fn run_interactive() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin
            .read_line(&mut line)
            .context("failed to read from stdin")?
            == 0
        {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        match parse_line(line) {
            Ok(input) => println!("{}", render_report(&input.compute())),
            Err(err) => eprintln!("error: {err:#}"),
        }
    }
    Ok(())
}

fn parse_line(line: &str) -> anyhow::Result<TransformInput> {
    let values = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("invalid number {tok:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if values.len() != 6 {
        bail!("expected 6 values (tx ty tz rx ry rz), got {}", values.len());
    }
    Ok(TransformInput::new(
        DVec3::new(values[0], values[1], values[2]),
        DVec3::new(values[3], values[4], values[5]),
    ))
}
