use std::{
    fs::OpenOptions,
    io::{stdin, stdout, Read, Write},
};

use clap::{builder::PossibleValue, value_parser, Arg, ArgAction, ArgGroup, Command, ValueEnum};

use stylekit::{
    declarations_from_path, extract_color, keyframes_from_path, parse_declarations,
    parse_keyframes, serialize_declarations, serialize_keyframes, Options, OutputStyle,
};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Style {
    Expanded,
    Compressed,
}

impl ValueEnum for Style {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Expanded, Self::Compressed]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Expanded => PossibleValue::new("expanded"),
            Self::Compressed => PossibleValue::new("compressed"),
        })
    }
}

fn cli() -> Command {
    Command::new("stylekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize CSS declaration blocks and @keyframes frames")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true)
        )
        .arg(
            Arg::new("STDIN")
                .action(ArgAction::SetTrue)
                .long("stdin")
                .help("Read the declarations or keyframes from stdin"),
        )
        .arg(
            Arg::new("KEYFRAMES")
                .short('k')
                .long("keyframes")
                .help("Treat the input as keyframes and write them as a @keyframes rule with this name")
                .num_args(1)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("EXTRACT_COLOR")
                .long("extract-color")
                .help("Print the prefix, color and suffix of a value on separate lines")
                .num_args(1)
                .value_parser(value_parser!(String))
                .conflicts_with_all(["STDIN", "KEYFRAMES", "INPUT"]),
        )
        .arg(
            Arg::new("STYLE")
                .short('s')
                .long("style")
                .help("Minified or expanded output")
                .default_value("expanded")
                .ignore_case(true)
                .num_args(1)
                .value_parser(value_parser!(Style)),
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings about dropped declarations or frames."),
        )
        .arg(
            Arg::new("INPUT")
                .value_parser(value_parser!(String))
                .help("File containing declarations or keyframes"),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Output CSS file")
        )
        .group(
            ArgGroup::new("SOURCE")
                .args(["STDIN", "INPUT", "EXTRACT_COLOR"])
                .required(true)
        )
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    if let Some(value) = matches.get_one::<String>("EXTRACT_COLOR") {
        match extract_color(value) {
            Some(extraction) => {
                println!("{}", extraction.prefix);
                println!("{}", extraction.color);
                println!("{}", extraction.suffix);
                return Ok(());
            }
            None => std::process::exit(1),
        }
    }

    let style = match matches.get_one::<Style>("STYLE") {
        Some(Style::Compressed) => OutputStyle::Compressed,
        Some(Style::Expanded) | None => OutputStyle::Expanded,
    };

    let options = &Options::default()
        .style(style)
        .quiet(matches.get_flag("QUIET"));

    let keyframes_name = matches.get_one::<String>("KEYFRAMES");

    let (mut stdout_write, mut file_write);
    let buf_out: &mut dyn Write = if let Some(path) = matches.get_one::<String>("OUTPUT") {
        file_write = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        &mut file_write
    } else {
        stdout_write = stdout();
        &mut stdout_write
    };

    let css = if let Some(path) = matches.get_one::<String>("INPUT") {
        match keyframes_name {
            Some(name) => keyframes_from_path(path, options)
                .map(|frames| serialize_keyframes(name, &frames, options)),
            None => declarations_from_path(path, options)
                .map(|block| serialize_declarations(&block, options)),
        }
    } else {
        let mut buffer = String::new();
        stdin().read_to_string(&mut buffer)?;

        Ok(match keyframes_name {
            Some(name) => serialize_keyframes(name, &parse_keyframes(&buffer, options), options),
            None => serialize_declarations(&parse_declarations(&buffer, options), options),
        })
    }
    .unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1)
    });

    buf_out.write_all(css.as_bytes())?;
    buf_out.write_all(b"\n")?;

    Ok(())
}
