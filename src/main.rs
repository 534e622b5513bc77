use clap::{Arg, ArgAction, ArgMatches, Command};
use resbundle::key::derive_key;
use resbundle::loader::load_messages_for_locale;
use resbundle::{BundleOptions, ContentType, MessageMap, MissingPolicy, ResBundle, parse_locale};
use std::fs;
use std::path::Path;

fn locale_arg() -> Arg {
    Arg::new("locale")
        .long("locale")
        .short('l')
        .help("Target locale, e.g. uk-UA or zxx (default: en-US)")
}

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .short('t')
        .help("Content type: raw, html, xml or java (default: raw)")
}

fn no_lengthen_arg() -> Arg {
    Arg::new("no-lengthen")
        .long("no-lengthen")
        .help("Do not append padding digits to pseudo-localized strings")
        .action(ArgAction::SetTrue)
}

/// Start from `--config` when given, then apply individual flags on top.
fn bundle_options(matches: &ArgMatches) -> Result<BundleOptions, Box<dyn std::error::Error>> {
    let mut options = match matches.try_get_one::<String>("config").ok().flatten() {
        Some(path) => BundleOptions::from_json(&fs::read_to_string(path)?)?,
        None => BundleOptions::default(),
    };

    if let Some(locale) = matches.get_one::<String>("locale") {
        options.locale = locale.clone();
    }
    if let Some(content_type) = matches.get_one::<String>("type") {
        options.content_type = content_type.parse::<ContentType>()?;
    }
    if let Some(missing) = matches.try_get_one::<String>("missing").ok().flatten() {
        options.missing = missing.parse::<MissingPolicy>()?;
    }
    if matches.get_flag("no-lengthen") {
        options.lengthen = false;
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("resbundle")
        .version("0.1.0")
        .about("Resource bundle lookup and pseudo-localization")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log lookups and fallbacks to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("key")
                .about("Print the resource key derived from each source string")
                .arg(
                    Arg::new("source")
                        .help("Source strings")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("pseudo")
                .about("Pseudo-localize a source string")
                .arg(
                    Arg::new("source")
                        .help("Source string")
                        .required(true)
                        .index(1),
                )
                .arg(locale_arg())
                .arg(type_arg())
                .arg(no_lengthen_arg()),
        )
        .subcommand(
            Command::new("resolve")
                .about("Look a string up in JSON resource files")
                .arg(
                    Arg::new("source")
                        .help("Source string")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("messages")
                        .long("messages")
                        .short('m')
                        .help("JSON file mapping keys to translations, or a directory of <locale>.json files")
                        .required(true),
                )
                .arg(
                    Arg::new("key")
                        .long("key")
                        .short('k')
                        .help("Resource key (default: derived from the source)"),
                )
                .arg(
                    Arg::new("missing")
                        .long("missing")
                        .help("Missing translation policy: source, pseudo, empty or placeholder"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("JSON file with bundle options"),
                )
                .arg(locale_arg())
                .arg(type_arg())
                .arg(no_lengthen_arg()),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        "resbundle=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("key", sub)) => {
            for source in sub.get_many::<String>("source").into_iter().flatten() {
                println!("{}\t{}", derive_key(source), source);
            }
        }
        Some(("pseudo", sub)) => {
            let source = sub.get_one::<String>("source").unwrap();
            let options = bundle_options(sub)?;
            let bundle = ResBundle::from_options(MessageMap::new(), &options)?;
            println!("{}", bundle.pseudo_localize(source));
        }
        Some(("resolve", sub)) => {
            let source = sub.get_one::<String>("source").unwrap();
            let messages_path = sub.get_one::<String>("messages").unwrap();
            let key = sub.get_one::<String>("key").map(String::as_str);

            let options = bundle_options(sub)?;
            let locale = parse_locale(&options.locale)?;
            let messages = load_messages_for_locale(Path::new(messages_path), &locale)?;
            let bundle = ResBundle::from_options(messages, &options)?;
            println!("{}", bundle.resolve(Some(source), key).unwrap_or_default());
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}
