use crate::data::{Dir, Pos};
use crate::layout::Layout;
use crate::reach;
use crate::vec2d::Vec2d;

/// What the geometry alone says about a warehouse: which cells the
/// worker can ever stand on and which cells no box may be pushed onto.
#[derive(Debug)]
pub(crate) struct Analysis {
    pub(crate) interior: Vec2d<bool>,
    pub(crate) taboo: Vec2d<bool>,
}

/// Finds cells that make a puzzle unsolvable as soon as a box lands on
/// them: non-target corners of the interior, plus target-free runs of
/// cells that connect two such corners along an unbroken wall.
pub(crate) fn analyze(layout: &Layout, worker: Pos) -> Analysis {
    let interior = reach::reachable_cells(layout, worker, &[]);

    let mut taboo = layout.grid.scratchpad();
    for pos in layout.grid.positions() {
        if interior[pos] && !layout.is_target(pos) && is_corner(layout, pos) {
            taboo[pos] = true;
        }
    }

    // runs that reach the edge of the grid are never marked
    for r in 1..layout.grid.rows() - 1 {
        let mut run = Vec::new();
        for c in 1..layout.grid.cols() - 1 {
            let pos = Pos::new(r, c);
            if layout.is_wall(pos) {
                run.clear();
            } else if taboo[pos] {
                mark_run(layout, &mut taboo, &mut run, Dir::Up, Dir::Down);
            } else {
                run.push(pos);
            }
        }
    }
    for c in 1..layout.grid.cols() - 1 {
        let mut run = Vec::new();
        for r in 1..layout.grid.rows() - 1 {
            let pos = Pos::new(r, c);
            if layout.is_wall(pos) {
                run.clear();
            } else if taboo[pos] {
                mark_run(layout, &mut taboo, &mut run, Dir::Left, Dir::Right);
            } else {
                run.push(pos);
            }
        }
    }

    let analysis = Analysis { interior, taboo };
    debug!("interior:\n{}taboo:\n{}", analysis.interior, analysis.taboo);
    analysis
}

fn is_corner(layout: &Layout, pos: Pos) -> bool {
    let vertical = layout.is_wall(pos + Dir::Up) || layout.is_wall(pos + Dir::Down);
    let horizontal = layout.is_wall(pos + Dir::Left) || layout.is_wall(pos + Dir::Right);
    vertical && horizontal
}

/// Marks a finished run and resets it. The run is taboo if the whole
/// wall on one of its flanks is unbroken and no cell in it is a target.
fn mark_run(
    layout: &Layout,
    taboo: &mut Vec2d<bool>,
    run: &mut Vec<Pos>,
    flank_a: Dir,
    flank_b: Dir,
) {
    if !run.is_empty() {
        let all_a = run.iter().all(|&pos| layout.is_wall(pos + flank_a));
        let all_b = run.iter().all(|&pos| layout.is_wall(pos + flank_b));
        let no_target = run.iter().all(|&pos| !layout.is_target(pos));
        if (all_a || all_b) && no_target {
            for &pos in run.iter() {
                taboo[pos] = true;
            }
        }
    }
    run.clear();
}
