use crate::data::{Dir, Pos, Push, DIRECTIONS};
use crate::heuristic;
use crate::layout::Layout;
use crate::reach;
use crate::search::Problem;
use crate::state::State;
use crate::taboo::{self, Analysis};
use crate::warehouse::Warehouse;

/// A warehouse prepared for solving: the layout is analyzed once and
/// both problem flavors share the result.
///
/// With `allow_taboo_push` set, pushes onto taboo cells are legal -
/// the search space gets bigger but no solution is ever missed even
/// if the analysis marked a cell it should not have.
#[derive(Debug)]
pub struct Puzzle {
    pub(crate) layout: Layout,
    pub(crate) initial: State,
    pub(crate) analysis: Analysis,
    pub(crate) allow_taboo_push: bool,
}

impl Puzzle {
    pub fn new(warehouse: &Warehouse, allow_taboo_push: bool) -> Puzzle {
        let analysis = taboo::analyze(&warehouse.layout, warehouse.state.worker);
        Puzzle {
            layout: warehouse.layout.clone(),
            initial: warehouse.state.clone(),
            analysis,
            allow_taboo_push,
        }
    }

    /// Whether a box may be pushed onto `dest` in `state`.
    fn can_push_to(&self, state: &State, dest: Pos) -> bool {
        if self.layout.is_blocked(dest) || state.has_box(dest) {
            return false;
        }
        self.allow_taboo_push || !self.analysis.taboo[dest]
    }

    fn is_solved(&self, state: &State) -> bool {
        // TODO if many boxes are already on targets, comparing against
        // the number of free targets might be faster
        state.boxes.iter().all(|&box_pos| self.layout.is_target(box_pos))
    }
}

/// One action moves the worker by one cell, pushing a box ahead of it
/// if there is one.
#[derive(Debug, Clone, Copy)]
pub struct ElementaryProblem<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> ElementaryProblem<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        ElementaryProblem { puzzle }
    }
}

impl Problem for ElementaryProblem<'_> {
    type State = State;
    type Action = Dir;

    fn initial_state(&self) -> State {
        self.puzzle.initial.clone()
    }

    fn actions(&self, state: &State) -> Vec<Dir> {
        let mut actions = Vec::new();
        for &dir in &DIRECTIONS {
            let dest = state.worker + dir;
            if self.puzzle.layout.is_blocked(dest) {
                continue;
            }
            if state.has_box(dest) {
                if self.puzzle.can_push_to(state, dest + dir) {
                    actions.push(dir);
                }
            } else {
                actions.push(dir);
            }
        }
        actions
    }

    fn result(&self, state: &State, dir: Dir) -> State {
        let dest = state.worker + dir;
        assert!(
            !self.puzzle.layout.is_blocked(dest),
            "worker walked into a wall: {}",
            dir
        );
        if let Ok(i) = state.boxes.binary_search(&dest) {
            let push_dest = dest + dir;
            assert!(
                self.puzzle.can_push_to(state, push_dest),
                "illegal push: {}",
                dir
            );
            let mut boxes = state.boxes.clone();
            boxes[i] = push_dest;
            State::new(dest, boxes)
        } else {
            State::new(dest, state.boxes.clone())
        }
    }

    fn is_goal(&self, state: &State) -> bool {
        self.puzzle.is_solved(state)
    }

    fn heuristic(&self, state: &State) -> u32 {
        heuristic::estimate(&self.puzzle.layout, state)
    }
}

/// One action pushes a box by one cell. The worker must be able to
/// walk to the cell behind the box and ends up where the box was.
#[derive(Debug, Clone, Copy)]
pub struct MacroProblem<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> MacroProblem<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        MacroProblem { puzzle }
    }
}

impl Problem for MacroProblem<'_> {
    type State = State;
    type Action = Push;

    fn initial_state(&self) -> State {
        self.puzzle.initial.clone()
    }

    fn actions(&self, state: &State) -> Vec<Push> {
        let reachable = reach::reachable_cells(&self.puzzle.layout, state.worker, &state.boxes);

        let mut actions = Vec::new();
        for &box_pos in &state.boxes {
            for &dir in &DIRECTIONS {
                let stand = box_pos - dir;
                if !self.puzzle.layout.grid.contains(stand) || !reachable[stand] {
                    continue;
                }
                if self.puzzle.can_push_to(state, box_pos + dir) {
                    actions.push(Push { box_pos, dir });
                }
            }
        }
        actions
    }

    fn result(&self, state: &State, push: Push) -> State {
        let i = state
            .boxes
            .binary_search(&push.box_pos)
            .expect("pushed box is not in this state");
        let push_dest = push.box_pos + push.dir;
        assert!(
            self.puzzle.can_push_to(state, push_dest),
            "illegal push: {}",
            push
        );
        let mut boxes = state.boxes.clone();
        boxes[i] = push_dest;
        State::new(push.box_pos, boxes)
    }

    fn is_goal(&self, state: &State) -> bool {
        self.puzzle.is_solved(state)
    }

    fn heuristic(&self, state: &State) -> u32 {
        heuristic::estimate(&self.puzzle.layout, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(input: &str, allow_taboo_push: bool) -> Puzzle {
        let warehouse: Warehouse = input.parse().unwrap();
        Puzzle::new(&warehouse, allow_taboo_push)
    }

    #[test]
    fn elementary_actions_prune_taboo_pushes() {
        let input = r"
#####
#@$ #
# . #
#####
";
        // pushing right would put the box into the corner at (1, 3)
        let strict = puzzle(input, false);
        let problem = ElementaryProblem::new(&strict);
        assert_eq!(problem.actions(&strict.initial), [Dir::Down]);

        let relaxed = puzzle(input, true);
        let problem = ElementaryProblem::new(&relaxed);
        assert_eq!(problem.actions(&relaxed.initial), [Dir::Right, Dir::Down]);
    }

    #[test]
    fn elementary_push_moves_box_and_worker() {
        let strict = puzzle("#####\n#@$.#\n#####", false);
        let problem = ElementaryProblem::new(&strict);
        let next = problem.result(&strict.initial, Dir::Right);
        assert_eq!(next.worker(), Pos::new(1, 2));
        assert_eq!(next.boxes(), [Pos::new(1, 3)]);
        assert!(problem.is_goal(&next));
    }

    #[test]
    fn macro_actions_require_a_reachable_stand() {
        let input = r"
####
#@ #
##$#
#. #
####
";
        // the worker cannot get below the box, so only a push down is left
        let relaxed = puzzle(input, true);
        let problem = MacroProblem::new(&relaxed);
        let expected = Push {
            box_pos: Pos::new(2, 2),
            dir: Dir::Down,
        };
        assert_eq!(problem.actions(&relaxed.initial), [expected]);

        let next = problem.result(&relaxed.initial, expected);
        assert_eq!(next.worker(), Pos::new(2, 2));
        assert_eq!(next.boxes(), [Pos::new(3, 2)]);
    }

    #[test]
    fn macro_actions_prune_taboo_pushes() {
        let input = r"
#####
#@  #
# $ #
# . #
#####
";
        let strict = puzzle(input, false);
        let problem = MacroProblem::new(&strict);
        let expected = Push {
            box_pos: Pos::new(2, 2),
            dir: Dir::Down,
        };
        assert_eq!(problem.actions(&strict.initial), [expected]);

        // everything physically possible once taboo cells are allowed
        let relaxed = puzzle(input, true);
        let problem = MacroProblem::new(&relaxed);
        assert_eq!(problem.actions(&relaxed.initial).len(), 4);
    }

    #[test]
    fn actions_are_stateless() {
        let strict = puzzle("######\n#@$ .#\n######", false);
        let problem = ElementaryProblem::new(&strict);
        let first = problem.actions(&strict.initial);
        let second = problem.actions(&strict.initial);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn transitions_preserve_state_invariants() {
        let strict = puzzle("######\n#    #\n# $$ #\n# .. #\n#@   #\n######", false);
        let problem = ElementaryProblem::new(&strict);

        // walk a few plies of the whole tree and check every state
        let mut states = vec![strict.initial.clone()];
        for _ in 0..3 {
            let mut next_states = Vec::new();
            for state in &states {
                for dir in problem.actions(state) {
                    let next = problem.result(state, dir);
                    assert_eq!(next, problem.result(state, dir));
                    assert_eq!(next.boxes().len(), 2);
                    assert!(!strict.layout.is_blocked(next.worker()));
                    for &box_pos in next.boxes() {
                        assert!(!strict.layout.is_blocked(box_pos));
                        assert_ne!(box_pos, next.worker());
                    }
                    next_states.push(next);
                }
            }
            states = next_states;
        }

        let problem = MacroProblem::new(&strict);
        for push in problem.actions(&strict.initial) {
            let next = problem.result(&strict.initial, push);
            assert_eq!(next, problem.result(&strict.initial, push));
            assert_eq!(next.boxes().len(), 2);
            assert_eq!(next.worker(), push.box_pos);
            assert!(!strict.layout.is_blocked(next.boxes()[0]));
            assert!(!strict.layout.is_blocked(next.boxes()[1]));
        }
    }
}
