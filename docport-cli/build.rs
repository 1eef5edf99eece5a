use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the group names in docport-config; build scripts can't depend on
// workspace crates that are not build-dependencies.
const GROUPS: &[&str] = &["root", "nested", "rule"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("docport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Port repository Markdown docs to a documentation site")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("group")
                        .long("group")
                        .value_parser(clap::builder::PossibleValuesParser::new(GROUPS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        );

    generate_to(Bash, &mut cmd, "docport", &outdir)?;
    generate_to(Zsh, &mut cmd, "docport", &outdir)?;
    generate_to(Fish, &mut cmd, "docport", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
