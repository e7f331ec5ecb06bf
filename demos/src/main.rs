//! # planar demo
//!
//! Builds a random weighted grid and a random point cloud, then runs an A*
//! search over the grid and range queries over a quadtree of the points.

use std::error::Error;
use std::io::Write;

use clap::Parser;
use log::{info, warn};
use planar_core::{Circle, Point, Point2, Rect, distance, number, seq};
use planar_paths::{GridCell, GridPathfinder, SearchOptions};
use planar_spatial::QuadTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Command line arguments for the planar demo.
#[derive(Parser, Debug)]
#[command(name = "planar-demo")]
#[command(about = "Random grid pathfinding and quadtree queries")]
#[command(version)]
struct Args {
    /// Random seed; a fresh one is drawn when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Side length of the square grid
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(i32).range(2..=MAX_SIZE))]
    size: i32,

    /// Percentage of cells turned into walls
    #[arg(long, default_value_t = 20.0)]
    wall_pct: f64,

    /// Allow diagonal moves
    #[arg(long)]
    diagonal: bool,

    /// Fall back to the closest reachable cell when the corner is walled off
    #[arg(long)]
    closest: bool,

    /// Number of points inserted into the quadtree
    #[arg(long, default_value_t = 500)]
    points: usize,

    /// Objects per quadtree node before it subdivides
    #[arg(long, default_value_t = planar_spatial::DEFAULT_CAPACITY)]
    capacity: usize,
}

/// Weights drawn for passable cells; plain ground is the most common.
const WEIGHTS: [Option<f64>; 5] = [None, None, None, Some(2.0), Some(3.0)];

/// Largest accepted `--size`.
const MAX_SIZE: i64 = 4096;

/// Half-extent of the square point cloud.
const FIELD: f64 = 100.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    run_pathfinding(&args, &mut rng)?;
    run_quadtree(&args, &mut rng);
    Ok(())
}

/// Random `size × size` grid. The corners `(0, 0)` and `(size-1, size-1)`
/// are never walls.
fn random_grid(rng: &mut impl Rng, size: i32, wall_pct: f64) -> Vec<GridCell> {
    let wall_chance = number::clamp(0.0, wall_pct / 100.0, 1.0);
    let corner = Point::new(size - 1, size - 1);
    let mut cells = Vec::with_capacity((size.max(0) as usize).pow(2));
    for y in 0..size {
        for x in 0..size {
            let pos = Point::new(x, y);
            let endpoint = pos == Point::ZERO || pos == corner;
            let weight = if !endpoint && rng.random::<f64>() < wall_chance {
                Some(0.0)
            } else {
                seq::pick_random(rng, &WEIGHTS).copied().flatten()
            };
            cells.push(GridCell { pos, weight });
        }
    }
    cells
}

fn render(size: i32, pf: &GridPathfinder, path: &[Point]) -> String {
    let mut out = String::new();
    for y in 0..size {
        for x in 0..size {
            let p = Point::new(x, y);
            let ch = if p == Point::ZERO {
                'S'
            } else if path.last() == Some(&p) {
                'D'
            } else if path.contains(&p) {
                '*'
            } else {
                match pf.cell(p).and_then(|c| c.weight) {
                    Some(w) if w == 0.0 => '#',
                    Some(w) if w >= 3.0 => ':',
                    Some(w) if w >= 2.0 => '.',
                    _ => ' ',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn run_pathfinding(args: &Args, rng: &mut impl Rng) -> Result<(), Box<dyn Error>> {
    let pf = GridPathfinder::new(random_grid(rng, args.size, args.wall_pct));
    let start = Point::ZERO;
    let dest = Point::new(args.size - 1, args.size - 1);
    let options = SearchOptions {
        closest: args.closest,
        diagonal: args.diagonal,
    };

    let path = pf.search(start, dest, options)?;
    match path.last() {
        Some(&end) if end == dest => info!("reached {dest} in {} steps", path.len()),
        Some(&end) => warn!("{dest} unreachable, stopped at {end} after {} steps", path.len()),
        None => warn!("{dest} unreachable from {start}"),
    }
    print!("{}", render(args.size, &pf, &path));
    Ok(())
}

fn run_quadtree(args: &Args, rng: &mut impl Rng) {
    let mut qt = QuadTree::new(Rect::new(0.0, 0.0, FIELD, FIELD), args.capacity);
    let points: Vec<Point2> = (0..args.points)
        .map(|_| {
            Point2::new(
                number::random_range(rng, FIELD, None),
                number::random_range(rng, FIELD, None),
            )
        })
        .collect();
    for p in &points {
        qt.insert(*p);
    }
    info!(
        "quadtree holds {} objects over {} levels",
        qt.len(),
        qt.depth()
    );

    let center = Point2::new(
        number::random_range(rng, FIELD / 2.0, None),
        number::random_range(rng, FIELD / 2.0, None),
    );
    let circle = Circle::new(center.x, center.y, FIELD / 5.0);
    let hits = qt.query_circle(&circle);
    let expected = distance::within(center, &points, |d| d <= circle.radius);
    info!(
        "circle query at {center}: {} hits ({} by brute force)",
        hits.len(),
        expected.len()
    );

    let range = Rect::new(center.x, center.y, FIELD / 4.0, FIELD / 8.0);
    info!("rect query {range}: {} hits", qt.query_rect(&range).len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_keeps_corners_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let cells = random_grid(&mut rng, 6, 100.0);
        assert_eq!(cells.len(), 36);
        let open: Vec<Point> = cells
            .iter()
            .filter(|c| c.weight != Some(0.0))
            .map(|c| c.pos)
            .collect();
        assert_eq!(open, vec![Point::ZERO, Point::new(5, 5)]);
    }

    #[test]
    fn render_marks_path() {
        let cells: Vec<GridCell> = (0..2)
            .flat_map(|y| (0..2).map(move |x| GridCell::new(x, y)))
            .collect();
        let pf = GridPathfinder::new(cells);
        let path = vec![Point::new(1, 0), Point::new(1, 1)];
        assert_eq!(render(2, &pf, &path), "S*\n D\n");
    }

    #[test]
    fn args_parse() {
        let args = Args::parse_from(["planar-demo", "--seed", "9", "--diagonal", "--size", "8"]);
        assert_eq!(args.seed, Some(9));
        assert!(args.diagonal);
        assert!(!args.closest);
        assert_eq!(args.size, 8);
        assert_eq!(args.capacity, planar_spatial::DEFAULT_CAPACITY);
    }

    #[test]
    fn size_is_bounded() {
        assert!(Args::try_parse_from(["planar-demo", "--size", "1"]).is_err());
        assert!(Args::try_parse_from(["planar-demo", "--size", "100000"]).is_err());
        let args = Args::try_parse_from(["planar-demo", "--size", "4096"]).unwrap();
        assert_eq!(args.size, 4096);
    }
}
