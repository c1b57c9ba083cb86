#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use log::info;
use thiserror::Error;

use std::fs::File;
use std::io::{self, Read};

use geometry::{Grid, GridOutcome, Point};
use searcher::{Algorithm, Outcome};

type Error = anyhow::Error;
type BoxedRead = Box<dyn Read + 'static>;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub map: Option<String>,
    pub algorithms: Vec<Algorithm>,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

fn app() -> App<'static, 'static> {
    App::new("Pathfinder")
        .version("1.0")
        .about("Search a grid map for a path from S to E")
        .arg(
            Arg::with_name("map")
                .value_name("MAP")
                .help("Map file to search, or - for stdin")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .possible_values(&["dfs", "bfs", "ucs", "astar", "all"])
                .default_value("all")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("X,Y")
                .help("Start somewhere other than S")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("end")
                .long("end")
                .value_name("X,Y")
                .help("End somewhere other than E")
                .takes_value(true),
        )
}

fn optional_point(matches: &ArgMatches, name: &str) -> Result<Option<Point>, Error> {
    if matches.is_present(name) {
        Ok(Some(value_t!(matches, name, Point)?))
    } else {
        Ok(None)
    }
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let algorithms = match matches.value_of("algorithm") {
            None | Some("all") => Algorithm::ALL.to_vec(),
            Some(name) => vec![name.parse()?],
        };

        Ok(Config {
            map: matches.value_of("map").map(str::to_string),
            algorithms,
            start: optional_point(matches, "start")?,
            end: optional_point(matches, "end")?,
        })
    }

    /// Read the map this configuration points at, with any
    /// endpoint overrides applied.
    pub fn grid(&self) -> Result<Grid, Error> {
        let mut text = String::new();
        get_input_reader(self.map.as_deref())?.read_to_string(&mut text)?;
        self.apply(text.parse()?)
    }

    fn apply(&self, grid: Grid) -> Result<Grid, Error> {
        if self.start.is_none() && self.end.is_none() {
            return Ok(grid);
        }
        let start = self.start.unwrap_or_else(|| grid.start());
        let end = self.end.unwrap_or_else(|| grid.end());
        Ok(grid.with_endpoints(start, end)?)
    }
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    let config = Config::from_matches(&matches)?;
    let grid = config.grid()?;
    info!(
        "Loaded a {}x{} map from {} to {}",
        grid.width(),
        grid.height(),
        grid.start(),
        grid.end()
    );

    for algorithm in config.algorithms.iter() {
        let outcome = grid.search(*algorithm)?;
        println!("{}", report(*algorithm, &outcome));
    }

    Ok(())
}

/// Summarise the outcome of one search in a line or two.
pub fn report(algorithm: Algorithm, outcome: &GridOutcome) -> String {
    match outcome {
        Outcome::Solution(solution) => {
            let moves: String = solution.actions().iter().map(|d| d.arrow()).collect();
            format!(
                "{}: cost {}, {} steps, {} states reached\n  {}",
                algorithm,
                solution.cost(),
                solution.len(),
                solution.reached().len(),
                moves
            )
        }
        Outcome::NoSolution(failure) => format!(
            "{}: no path, {} states reached",
            algorithm,
            failure.reached().len()
        ),
    }
}

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => {
            let f = File::open(path).map_err(|e| PathfinderError::MapNotFound(path.into(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum PathfinderError {
    #[error("Map not found: {0}")]
    MapNotFound(String, #[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        let mut argv = vec!["pathfinder"];
        argv.extend_from_slice(args);
        Config::from_matches(&app().get_matches_from(argv)).unwrap()
    }

    #[test]
    fn arguments() {
        let c = config(&["maps/open.txt"]);
        assert_eq!(c.map.as_deref(), Some("maps/open.txt"));
        assert_eq!(c.algorithms, Algorithm::ALL.to_vec());
        assert_eq!(c.start, None);

        let c = config(&["-a", "astar", "--start", "1,2", "--end", "3,3"]);
        assert_eq!(c.map, None);
        assert_eq!(c.algorithms, vec![Algorithm::AStar]);
        assert_eq!(c.start, Some(Point::new(1, 2)));
        assert_eq!(c.end, Some(Point::new(3, 3)));
    }

    #[test]
    fn bad_point() {
        let matches = app().get_matches_from(vec!["pathfinder", "--start", "nowhere"]);
        assert!(Config::from_matches(&matches).is_err());
    }

    #[test]
    fn overrides() {
        let grid: Grid = "S..\n...\n..E".parse().unwrap();
        let c = config(&["--end", "1,1"]);
        let grid = c.apply(grid).unwrap();
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.end(), Point::new(1, 1));

        let c = config(&["--start", "5,5"]);
        assert!(c.apply(grid).is_err());
    }

    #[test]
    fn reports() {
        let grid: Grid = "S.E".parse().unwrap();
        let found = grid.search(Algorithm::UniformCost).unwrap();
        assert_eq!(
            report(Algorithm::UniformCost, &found),
            "ucs: cost 2, 2 steps, 3 states reached\n  >>"
        );

        let grid: Grid = "S#E".parse().unwrap();
        let missing = grid.search(Algorithm::BreadthFirst).unwrap();
        assert_eq!(
            report(Algorithm::BreadthFirst, &missing),
            "bfs: no path, 1 states reached"
        );
    }

    #[test]
    fn missing_map() {
        assert!(get_input_reader(Some("no/such/map.txt")).is_err());
    }
}
