use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::{error, info};
use nbtfile::DecodeOpts;
use nbtfile_tools::{decode_input, read_file, write_tree};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn run(args: &ArgMatches) -> Result<()> {
    let mut opts = DecodeOpts::new();
    if let Some(depth) = args.value_of("max-depth") {
        opts = opts.max_depth(depth.parse()?);
    }

    let input = args.value_of("input").ok_or("no input given")?;
    let value = match input {
        "-" => decode_input(io::stdin().lock(), opts)?,
        path => read_file(Path::new(path), opts)?,
    };
    info!("decoded {:?} tag from {}", value.tag(), input);

    let mut out: Box<dyn Write> = match args.value_of("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if args.is_present("json") {
        serde_json::to_writer_pretty(&mut out, &value)?;
        writeln!(out)?;
    } else {
        write_tree(&mut out, &value)?;
    }

    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Dump the structure and contents of an NBT file")
        .arg(
            Arg::with_name("input")
                .takes_value(true)
                .required(true)
                .help("NBT file, optionally gzip compressed, or - for stdin"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false)
                .help("File to dump to instead of stdout"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .required(false)
                .help("Dump payloads as JSON rather than an indented tree"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .required(false)
                .help("Maximum nesting of lists and compounds"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}
