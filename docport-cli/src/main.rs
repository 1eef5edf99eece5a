// Command-line interface for docport
//
// This binary ports one Markdown document from a repository layout to a
// documentation site layout. The transformation itself lives in docport-babel;
// this crate only reads the file, picks the link rewrite rules for it, and
// writes the result.
//
// Converting:
//
// Link rewrite rules depend on the group the document belongs to. The group is
// detected from the input path and can be forced with --group.
// Usage:
//  docport <input> [--group <group>] [--output <file>]          - Convert (default)
//  docport convert <input> [--group <group>] [--output <file>]  - Same as above (explicit)
//
// Configuration is read from ./docport.toml when present, then from --config.
// Set RUST_LOG (or pass --verbose) to see what each pass changed.

use clap::{Arg, ArgAction, Command, ValueHint};
use docport_babel::{Pipeline, Tables};
use docport_config::{DocportConfig, Group, Loader};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const GROUP_NAMES: &[&str] = &["root", "nested", "rule"];

fn build_cli() -> Command {
    Command::new("docport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Port repository Markdown docs to a documentation site")
        .long_about(
            "docport rewrites one Markdown document for a documentation site generator.\n\n\
            It converts Note/Warning callouts to admonitions, wraps rule examples,\n\
            labels status symbols, rewrites links and prepends front matter.\n\n\
            Examples:\n  \
            docport README.md                                # Convert to stdout\n  \
            docport lib/rules/indentation/README.md -o out.md\n  \
            docport docs/user-guide/cli.md --group nested    # Force the rule group",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docport.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each converted file and pass counts")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert one document (default command)")
                .long_about(
                    "Convert one Markdown document.\n\n\
                    Groups select the link rewrite rules:\n  \
                    - rule:   README.md inside a rules/ directory\n  \
                    - nested: anything inside a docs/ directory\n  \
                    - root:   everything else\n\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("group")
                        .long("group")
                        .help("Link rewrite group (detected from the path if not specified)")
                        .value_parser(clap::builder::PossibleValuesParser::new(GROUP_NAMES))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file path means "convert"
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let group = resolve_group(
                input,
                sub_matches.get_one::<String>("group").map(|s| s.as_str()),
                &config,
            );
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, group, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// --verbose enables INFO, otherwise RUST_LOG or WARN.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(input: &str, group: Group, output: Option<&str>, config: &DocportConfig) {
    let rewriter = config.rewriter(group).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let tables = Tables::standard();
    let converted = Pipeline::new(&tables)
        .convert(&source, |url| rewriter.rewrite(url))
        .unwrap_or_else(|e| {
            eprintln!("Error converting '{input}': {e}");
            std::process::exit(1);
        });

    tracing::info!(
        input,
        %group,
        title = %converted.metadata.title,
        links = converted.report.links,
        examples = converted.report.examples,
        admonitions = converted.report.admonitions,
        symbols = converted.report.symbols,
        "converted"
    );

    match output {
        Some(path) => {
            fs::write(path, &converted.text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{}", converted.text),
    }
}

fn resolve_group(input: &str, explicit: Option<&str>, config: &DocportConfig) -> Group {
    match explicit {
        Some(name) => name.parse().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None if config.convert.detect_group => detect_group(Path::new(input)),
        None => Group::Root,
    }
}

/// Rule pages are `rules/<name>/README.md`, nested docs live under `docs/`.
fn detect_group(path: &Path) -> Group {
    let under = |dir: &str| {
        path.parent()
            .is_some_and(|parent| parent.components().any(|c| c.as_os_str() == dir))
    };
    let is_readme = path.file_name().is_some_and(|name| name == "README.md");

    if is_readme && under("rules") {
        Group::Rule
    } else if under("docs") {
        Group::Nested
    } else {
        Group::Root
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DocportConfig {
    let loader = Loader::new().with_optional_file("docport.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn group_names_match_config_groups() {
        let names: Vec<&str> = Group::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(names, GROUP_NAMES);
    }

    #[test]
    fn detects_rule_pages() {
        assert_eq!(detect_group(Path::new("lib/rules/indentation/README.md")), Group::Rule);
        assert_eq!(detect_group(Path::new("/src/stylelint/lib/rules/a/README.md")), Group::Rule);
    }

    #[test]
    fn detects_nested_docs() {
        assert_eq!(detect_group(Path::new("docs/user-guide/cli.md")), Group::Nested);
        assert_eq!(detect_group(Path::new("docs/README.md")), Group::Nested);
    }

    #[test]
    fn everything_else_is_root() {
        assert_eq!(detect_group(Path::new("README.md")), Group::Root);
        assert_eq!(detect_group(Path::new("CHANGELOG.md")), Group::Root);
        // Only README.md counts as a rule page
        assert_eq!(detect_group(Path::new("lib/rules/index.md")), Group::Root);
    }

    #[test]
    fn explicit_group_wins_over_detection() {
        let config = Loader::new().build().unwrap();
        assert_eq!(resolve_group("README.md", Some("nested"), &config), Group::Nested);
    }

    #[test]
    fn detection_can_be_disabled() {
        let config = Loader::new()
            .set_override("convert.detect_group", false)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(resolve_group("docs/user-guide/cli.md", None, &config), Group::Root);
    }

    #[test]
    fn convert_subcommand_parses_group_and_output() {
        let matches = build_cli()
            .try_get_matches_from(["docport", "convert", "a.md", "--group", "rule", "-o", "b.md"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "convert");
        assert_eq!(sub.get_one::<String>("group").map(String::as_str), Some("rule"));
        assert_eq!(sub.get_one::<String>("output").map(String::as_str), Some("b.md"));
    }

    #[test]
    fn unknown_group_is_rejected_by_the_parser() {
        let result = build_cli().try_get_matches_from(["docport", "convert", "a.md", "--group", "blog"]);
        assert!(result.is_err());
    }
}
