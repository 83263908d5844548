use crate::config::Method;
use crate::data::{Dir, Pos, Push};
use crate::formatter::TabooFormatter;
use crate::puzzle::{ElementaryProblem, MacroProblem, Puzzle};
use crate::reach;
use crate::search::{self, Solution};
use crate::taboo;
use crate::warehouse::Warehouse;

pub use crate::validator::check_action_seq;

/// Renders the cells no box may ever be pushed onto: walls as `#`,
/// taboo cells as `X`. The worker and boxes are left out on purpose -
/// the result depends on the layout only.
pub fn taboo_cells(warehouse: &Warehouse) -> String {
    let analysis = taboo::analyze(&warehouse.layout, warehouse.worker());
    TabooFormatter::new(&warehouse.layout.grid, &analysis.taboo).to_string()
}

/// Solves a warehouse one worker move at a time.
pub fn solve_elementary(
    warehouse: &Warehouse,
    method: Method,
    allow_taboo_push: bool,
    print_status: bool,
) -> Solution<Dir> {
    debug!("Analyzing warehouse...");
    let puzzle = Puzzle::new(warehouse, allow_taboo_push);
    let problem = ElementaryProblem::new(&puzzle);
    debug!("Search called...");
    match method {
        Method::Bfs => search::breadth_first(&problem, print_status),
        Method::AStar => search::a_star(&problem, print_status),
    }
}

/// Solves a warehouse one box push at a time.
pub fn solve_macro(
    warehouse: &Warehouse,
    method: Method,
    allow_taboo_push: bool,
    print_status: bool,
) -> Solution<Push> {
    debug!("Analyzing warehouse...");
    let puzzle = Puzzle::new(warehouse, allow_taboo_push);
    let problem = MacroProblem::new(&puzzle);
    debug!("Search called...");
    match method {
        Method::Bfs => search::breadth_first(&problem, print_status),
        Method::AStar => search::a_star(&problem, print_status),
    }
}

/// Whether the worker can walk to `dest` without pushing anything.
pub fn can_go_there(warehouse: &Warehouse, dest: Pos) -> bool {
    let reachable =
        reach::reachable_cells(&warehouse.layout, warehouse.worker(), warehouse.boxes());
    warehouse.layout.grid.contains(dest) && reachable[dest]
}
