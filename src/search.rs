use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use fnv::{FnvHashMap, FnvHashSet};
use prettytable::{format, Table};
use separator::Separatable;
use typed_arena::Arena;

/// A state-space search problem.
///
/// The implementor only describes the moves, the engine owns the whole
/// exploration including the visited set. `result` may assume it is
/// only called with actions returned by `actions` for the same state.
pub trait Problem {
    type State: Clone + Eq + Hash;
    type Action: Copy;

    fn initial_state(&self) -> Self::State;
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated distance to the nearest goal. The default never
    /// prunes anything.
    fn heuristic(&self, _state: &Self::State) -> u32 {
        0
    }
}

/// The actions that solve a problem (`None` if there are none)
/// plus counters describing the search that found them.
pub struct Solution<A> {
    pub actions: Option<Vec<A>>,
    pub stats: Stats,
}

impl<A> Solution<A> {
    fn new(actions: Option<Vec<A>>, stats: Stats) -> Solution<A> {
        Solution { actions, stats }
    }
}

impl<A> Debug for Solution<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.actions {
            None => writeln!(f, "No solution")?,
            Some(ref actions) => writeln!(f, "Solution length: {}", actions.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

#[derive(PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Stats {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Stats::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: u32) -> bool {
        Stats::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Stats::add(&mut self.duplicate_states, depth)
    }

    /// Returns true if a new depth was reached.
    fn add(counts: &mut Vec<i32>, depth: u32) -> bool {
        let mut new_depth = false;
        // while because some depths might be skipped
        while depth as usize >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[depth as usize] += 1;
        new_depth
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "Unique visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row!["Depth", "Created", "Unique", "Duplicates"]);
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            table.add_row(row![depth, created, visited, duplicates]);
        }
        write!(f, "{}", table)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(
            f,
            "total created: {}, visited: {}, duplicates: {}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

struct SearchNode<'a, S, A> {
    state: &'a S,
    prev: Option<(&'a S, A)>,
    dist: u32,
    cost: u32,
}

impl<S, A> PartialEq for SearchNode<'_, S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S, A> Eq for SearchNode<'_, S, A> {}

impl<S, A> PartialOrd for SearchNode<'_, S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for SearchNode<'_, S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

/// Best-first search ordered by distance plus the problem's heuristic.
/// With an admissible heuristic the solution is the shortest one.
pub fn a_star<P: Problem>(problem: &P, print_status: bool) -> Solution<P::Action> {
    debug!("A* search called");

    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut to_visit = BinaryHeap::new();
    let mut closed = FnvHashSet::default();
    let mut prevs = FnvHashMap::default();

    let initial: &P::State = arena.alloc(problem.initial_state());
    stats.add_created(0);
    to_visit.push(Reverse(SearchNode {
        state: initial,
        prev: None,
        dist: 0,
        cost: problem.heuristic(initial),
    }));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if closed.contains(cur_node.state) {
            stats.add_reached_duplicate(cur_node.dist);
            continue;
        }
        if stats.add_unique_visited(cur_node.dist) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        // insert here and not as soon as we discover it
        // otherwise we overwrite the shortest path with longer ones
        if let Some(prev) = cur_node.prev {
            prevs.insert(cur_node.state, prev);
        }

        if problem.is_goal(cur_node.state) {
            debug!("Solved, backtracking path");
            return Solution::new(Some(backtrack_actions(&prevs, cur_node.state)), stats);
        }

        for action in problem.actions(cur_node.state) {
            let next_state: &P::State = arena.alloc(problem.result(cur_node.state, action));
            let next_dist = cur_node.dist + 1;
            stats.add_created(next_dist);
            to_visit.push(Reverse(SearchNode {
                state: next_state,
                prev: Some((cur_node.state, action)),
                dist: next_dist,
                cost: next_dist + problem.heuristic(next_state),
            }));
        }

        closed.insert(cur_node.state);
    }

    Solution::new(None, stats)
}

/// Breadth-first search. All actions cost one so the solution is
/// always the shortest one.
pub fn breadth_first<P: Problem>(problem: &P, print_status: bool) -> Solution<P::Action> {
    debug!("BFS called");

    let arena = Arena::new();
    let mut stats = Stats::new();

    let initial: &P::State = arena.alloc(problem.initial_state());
    stats.add_created(0);
    stats.add_unique_visited(0);
    if problem.is_goal(initial) {
        return Solution::new(Some(vec![]), stats);
    }

    let mut visited = FnvHashSet::default();
    visited.insert(initial);
    let mut prevs = FnvHashMap::default();
    let mut to_visit = VecDeque::new();
    to_visit.push_back((initial, 0));

    while let Some((cur_state, dist)) = to_visit.pop_front() {
        for action in problem.actions(cur_state) {
            let next_state = problem.result(cur_state, action);
            let next_dist = dist + 1;
            stats.add_created(next_dist);
            if visited.contains(&next_state) {
                stats.add_reached_duplicate(next_dist);
                continue;
            }

            let next_state: &P::State = arena.alloc(next_state);
            visited.insert(next_state);
            prevs.insert(next_state, (cur_state, action));
            if stats.add_unique_visited(next_dist) && print_status {
                println!("Visited new depth: {}", next_dist);
                println!("{:?}", stats);
            }

            if problem.is_goal(next_state) {
                debug!("Solved, backtracking path");
                return Solution::new(Some(backtrack_actions(&prevs, next_state)), stats);
            }
            to_visit.push_back((next_state, next_dist));
        }
    }

    Solution::new(None, stats)
}

fn backtrack_actions<'a, S, A>(
    prevs: &FnvHashMap<&'a S, (&'a S, A)>,
    final_state: &'a S,
) -> Vec<A>
where
    S: Eq + Hash,
    A: Copy,
{
    let mut actions = Vec::new();
    let mut cur = final_state;
    while let Some(&(prev, action)) = prevs.get(cur) {
        actions.push(action);
        cur = prev;
    }
    actions.reverse();
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Climb from 0 towards `goal` using the available step sizes,
    /// capped at `limit` so the state space stays finite.
    struct Climb {
        goal: u32,
        limit: u32,
        steps: &'static [u32],
    }

    impl Problem for Climb {
        type State = u32;
        type Action = u32;

        fn initial_state(&self) -> u32 {
            0
        }

        fn actions(&self, _state: &u32) -> Vec<u32> {
            self.steps.to_vec()
        }

        fn result(&self, state: &u32, action: u32) -> u32 {
            (state + action).min(self.limit)
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == self.goal
        }

        fn heuristic(&self, state: &u32) -> u32 {
            // remaining distance divided by the largest step, rounded up,
            // so it never overestimates the number of actions left
            let remaining = self.goal.saturating_sub(*state);
            let max_step = self.steps.iter().cloned().max().unwrap_or(1);
            (remaining + max_step - 1) / max_step
        }
    }

    #[test]
    fn bfs_shortest_path() {
        let problem = Climb {
            goal: 10,
            limit: 20,
            steps: &[1, 3],
        };
        let solution = breadth_first(&problem, false);
        let actions = solution.actions.unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions.iter().sum::<u32>(), 10);
    }

    #[test]
    fn a_star_shortest_path() {
        let problem = Climb {
            goal: 10,
            limit: 20,
            steps: &[1, 3],
        };
        let solution = a_star(&problem, false);
        let actions = solution.actions.unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions.iter().sum::<u32>(), 10);
    }

    #[test]
    fn already_at_goal() {
        let problem = Climb {
            goal: 0,
            limit: 20,
            steps: &[1],
        };
        assert_eq!(breadth_first(&problem, false).actions, Some(vec![]));
        assert_eq!(a_star(&problem, false).actions, Some(vec![]));
    }

    #[test]
    fn exhausting_the_space() {
        // 10 is not a multiple of 4 so the goal is never reached
        let problem = Climb {
            goal: 10,
            limit: 20,
            steps: &[4],
        };
        let bfs = breadth_first(&problem, false);
        assert_eq!(bfs.actions, None);
        let astar = a_star(&problem, false);
        assert_eq!(astar.actions, None);
        // 0, 4, 8, 12, 16, 20
        assert_eq!(bfs.stats.total_unique_visited(), 6);
    }

    #[test]
    fn stats_accounting() {
        let problem = Climb {
            goal: 10,
            limit: 20,
            steps: &[1, 3],
        };
        let solution = breadth_first(&problem, false);
        let stats = solution.stats;
        assert!(stats.total_unique_visited() >= 1);
        // every state is created before it is visited or rejected
        assert!(
            stats.total_created()
                >= stats.total_unique_visited() + stats.total_reached_duplicates()
        );
    }

    #[test]
    fn depth_skipping() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_created(2));
        assert!(!stats.add_created(1));
        assert_eq!(stats.total_created(), 3);
    }
}
