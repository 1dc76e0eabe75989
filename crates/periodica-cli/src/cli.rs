use crate::utils::parser::{AtomCount, parse_atom_count, parse_element_count};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Periodica CLI - derive hadron, atom and molecule properties from the records of their constituents.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for the periodic-table sweep.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Calibration file in TOML format. Missing keys keep their fitted defaults.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub calibration: Option<PathBuf>,

    /// Override a single calibration value. Can be used multiple times.
    /// Example: -S nuclear.pairing=12.0
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive a hadron from a list of quark records.
    Hadron(HadronArgs),
    /// Derive an atom from proton, neutron and electron records.
    Atom(AtomArgs),
    /// Derive a molecule from element records and their counts.
    Molecule(MoleculeArgs),
    /// Resolve all 118 elements with their most abundant isotope.
    Table(TableArgs),
    /// Build a molecule from up quarks, down quarks and electrons alone.
    Chain(ChainArgs),
}

/// Where a command writes its JSON result.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file. Defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct HadronArgs {
    /// JSON file holding an array of quark records.
    #[arg(long, required = true, value_name = "PATH")]
    pub quarks: PathBuf,

    #[arg(long, default_value = "Custom Hadron")]
    pub name: String,

    #[arg(long, default_value = "X")]
    pub symbol: String,

    /// Resolve the spin-aligned excited state instead of the ground state.
    #[arg(long)]
    pub excited: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Nucleon and electron record files shared by atom-level commands.
#[derive(Args, Debug, Clone)]
pub struct ConstituentArgs {
    #[arg(long, required = true, value_name = "PATH")]
    pub proton: PathBuf,

    #[arg(long, required = true, value_name = "PATH")]
    pub neutron: PathBuf,

    #[arg(long, required = true, value_name = "PATH")]
    pub electron: PathBuf,
}

#[derive(Args, Debug)]
pub struct AtomArgs {
    #[command(flatten)]
    pub constituents: ConstituentArgs,

    /// Number of protons (atomic number).
    #[arg(short = 'Z', long, value_name = "INT")]
    pub protons: u32,

    /// Number of neutrons.
    #[arg(short = 'N', long, value_name = "INT")]
    pub neutrons: u32,

    /// Number of electrons. Defaults to the neutral atom.
    #[arg(short = 'e', long, value_name = "INT")]
    pub electrons: Option<u32>,

    /// Name for an element outside the periodic table.
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub symbol: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct MoleculeArgs {
    /// Element record and count, as FILE:COUNT. Repeat once per element.
    #[arg(long = "atom", required = true, value_name = "FILE:COUNT", value_parser = parse_atom_count)]
    pub atoms: Vec<AtomCount>,

    #[arg(long)]
    pub name: Option<String>,

    /// Formula to report instead of the Hill-order one.
    #[arg(long)]
    pub formula: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub constituents: ConstituentArgs,

    #[arg(short, long, value_enum, default_value_t = TableFormat::Json)]
    pub format: TableFormat,

    /// Hide the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ChainArgs {
    #[arg(long = "up", required = true, value_name = "PATH")]
    pub up_quark: PathBuf,

    #[arg(long = "down", required = true, value_name = "PATH")]
    pub down_quark: PathBuf,

    #[arg(long, required = true, value_name = "PATH")]
    pub electron: PathBuf,

    /// Atomic number and count, as Z:COUNT. Repeat once per element.
    #[arg(long = "element", required = true, value_name = "Z:COUNT", value_parser = parse_element_count)]
    pub composition: Vec<(u32, u32)>,

    #[arg(long, default_value = "Custom Molecule")]
    pub name: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "periodica",
            "hadron",
            "--quarks",
            "uud.json",
            "-vv",
            "-S",
            "nuclear.pairing=12.0",
            "-S",
            "hadron.hyperfine-coupling-meson=7e7",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.set_values.len(), 2);
        match cli.command {
            Commands::Hadron(args) => {
                assert_eq!(args.quarks, PathBuf::from("uud.json"));
                assert_eq!(args.name, "Custom Hadron");
                assert!(!args.excited);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["periodica", "-q", "-v", "hadron", "--quarks", "q.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn molecule_atoms_use_the_file_count_parser() {
        let cli = Cli::try_parse_from([
            "periodica",
            "molecule",
            "--atom",
            "h.json:2",
            "--atom",
            "o.json:1",
            "--name",
            "Water",
        ])
        .unwrap();
        let Commands::Molecule(args) = cli.command else {
            panic!("expected molecule command");
        };
        assert_eq!(args.atoms.len(), 2);
        assert_eq!(args.atoms[0].count, 2);
        assert_eq!(args.atoms[1].path, PathBuf::from("o.json"));
        assert!(
            Cli::try_parse_from(["periodica", "molecule", "--atom", "h.json"]).is_err()
        );
    }

    #[test]
    fn atom_takes_short_nucleon_counts() {
        let cli = Cli::try_parse_from([
            "periodica", "atom", "--proton", "p.json", "--neutron", "n.json", "--electron",
            "e.json", "-Z", "6", "-N", "6",
        ])
        .unwrap();
        let Commands::Atom(args) = cli.command else {
            panic!("expected atom command");
        };
        assert_eq!((args.protons, args.neutrons, args.electrons), (6, 6, None));
    }

    #[test]
    fn table_format_defaults_to_json() {
        let cli = Cli::try_parse_from([
            "periodica", "table", "--proton", "p.json", "--neutron", "n.json", "--electron",
            "e.json", "--format", "csv", "-o", "atoms.csv",
        ])
        .unwrap();
        let Commands::Table(args) = cli.command else {
            panic!("expected table command");
        };
        assert_eq!(args.format, TableFormat::Csv);
        assert_eq!(args.output.output, Some(PathBuf::from("atoms.csv")));
    }

    #[test]
    fn chain_reads_element_counts() {
        let cli = Cli::try_parse_from([
            "periodica", "chain", "--up", "u.json", "--down", "d.json", "--electron", "e.json",
            "--element", "1:2", "--element", "8:1", "--name", "Water",
        ])
        .unwrap();
        let Commands::Chain(args) = cli.command else {
            panic!("expected chain command");
        };
        assert_eq!(args.composition, vec![(1, 2), (8, 1)]);
    }
}
