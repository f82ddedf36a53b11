use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use geometry_analysis::{
    calculate_distance, checked_angle, config::ConfigMolecule, BondCriteria, Molecule, Point,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: GeometryCommand,

    /// Log bond list rebuilds. RUST_LOG takes precedence
    #[arg(long, short, action = ArgAction::SetTrue, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum GeometryCommand {
    /// Build a molecule with random coordinates, then move its first atom away and
    /// report how the bonds changed
    #[command(name = "random")]
    Random {
        /// How many atoms the molecule should have
        #[arg(long, short, default_value_t = 3)]
        atoms: usize,
        /// How far the first atom is moved along every axis
        #[arg(long, short, default_value_t = 100.0, allow_hyphen_values = true)]
        shift: f64,
        /// Seed for the coordinate generator. A random seed is used if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the atoms and bonds of a molecule stored as json
    #[command(name = "analyze")]
    Analyze {
        /// A path to the molecule
        molecule: PathBuf,
        /// Overrides the maximum bond length of the molecule file
        #[arg(long)]
        max_bond: Option<f64>,
        /// Overrides the minimum bond length of the molecule file
        #[arg(long, allow_hyphen_values = true)]
        min_bond: Option<f64>,
    },
    /// Distance between two points, given as x,y,z
    #[command(name = "distance")]
    Distance {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
    },
    /// Angle at `vertex` between the points a and c, given as x,y,z
    #[command(name = "angle")]
    Angle {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        vertex: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        c: Point,
        /// Report the angle in degrees instead of radians
        #[arg(long, short)]
        degrees: bool,
    },
}

fn parse_point(value: &str) -> Result<Point, String> {
    let components = value
        .split(',')
        .map(|component| component.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid coordinate in {value:?}: {err}"))?;

    match components.as_slice() {
        &[x, y, z] => Ok(Point::new(x, y, z)),
        _ => Err(format!(
            "expected three comma separated coordinates, got {}",
            components.len()
        )),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.parse_env("RUST_LOG").init();
}

fn print_molecule(molecule: &Molecule) {
    println!("There are {} bonds", molecule.bonds().len());
    println!("The coordinates are");
    for (index, position) in molecule.coordinates().iter().enumerate() {
        let symbol = molecule
            .symbols()
            .get(index)
            .map(String::as_str)
            .unwrap_or("?");
        println!(
            "  {index:<4} {symbol:<3} {:>10.4} {:>10.4} {:>10.4}",
            position.x, position.y, position.z
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        GeometryCommand::Random { atoms, shift, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let mut coordinates = (0..atoms)
                .map(|_| Point::new(rng.gen(), rng.gen(), rng.gen()))
                .collect::<Vec<_>>();
            let symbols = ["H", "O", "H"]
                .iter()
                .cycle()
                .take(atoms)
                .map(|symbol| symbol.to_string())
                .collect();

            let mut molecule = Molecule::new("my molecule", symbols, coordinates.clone());
            print_molecule(&molecule);

            if let Some(first) = coordinates.first_mut() {
                first.add_scalar_mut(shift);
            }
            molecule.set_coordinates(coordinates);
            print_molecule(&molecule);
        }

        GeometryCommand::Analyze {
            molecule,
            max_bond,
            min_bond,
        } => {
            let config = ConfigMolecule::load(&molecule)
                .with_context(|| format!("failed to read {}", molecule.display()))?;
            let mut molecule = Molecule::try_from(config)?;

            if max_bond.is_some() || min_bond.is_some() {
                let current = *molecule.bond_criteria();
                molecule.set_bond_criteria(BondCriteria::new(
                    max_bond.unwrap_or(current.max_bond),
                    min_bond.unwrap_or(current.min_bond),
                ));
            }

            println!(
                "{} ({} atoms, bonds between {} and {})",
                molecule.name(),
                molecule.num_atoms(),
                molecule.bond_criteria().min_bond,
                molecule.bond_criteria().max_bond,
            );
            print_molecule(&molecule);
            for ((atom1, atom2), distance) in molecule.bonds().iter() {
                println!("  {atom1:<4} - {atom2:<4} {distance:.4}");
            }
        }

        GeometryCommand::Distance { a, b } => {
            println!("{}", calculate_distance(&a, &b));
        }

        GeometryCommand::Angle {
            a,
            vertex,
            c,
            degrees,
        } => {
            println!("{}", checked_angle(&a, &vertex, &c, degrees)?);
        }
    }

    Ok(())
}
