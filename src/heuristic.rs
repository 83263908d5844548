use crate::layout::Layout;
use crate::state::State;

/// Estimated distance to the goal: the worker's distance to the
/// nearest box plus a greedy matching of boxes to targets.
///
/// The greedy matching can exceed the optimal assignment, so the
/// estimate is not admissible and A* may return solutions longer
/// than the shortest one.
pub(crate) fn estimate(layout: &Layout, state: &State) -> u32 {
    let worker_dist = state
        .boxes
        .iter()
        .map(|&box_pos| u32::from(state.worker.dist(box_pos)))
        .min()
        .unwrap_or(0);

    let mut boxes = state.boxes.clone();
    let mut targets = layout.targets.clone();
    let mut matched_dist = 0;
    while !boxes.is_empty() && !targets.is_empty() {
        // ties go to the first pair in box-major order
        let mut best_box = 0;
        let mut best_target = 0;
        let mut best_dist = u16::max_value();
        for (b, &box_pos) in boxes.iter().enumerate() {
            for (t, &target) in targets.iter().enumerate() {
                let dist = box_pos.dist(target);
                if dist < best_dist {
                    best_box = b;
                    best_target = t;
                    best_dist = dist;
                }
            }
        }
        matched_dist += u32::from(best_dist);
        boxes.remove(best_box);
        targets.remove(best_target);
    }

    worker_dist + matched_dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warehouse::Warehouse;

    fn estimate_initial(input: &str) -> u32 {
        let warehouse: Warehouse = input.parse().unwrap();
        estimate(warehouse.layout(), warehouse.state())
    }

    #[test]
    fn single_box() {
        // worker to box 1, box to target 1
        assert_eq!(estimate_initial("#####\n#@$.#\n#####"), 2);
    }

    #[test]
    fn box_on_target_still_counts_worker() {
        // matching is 0 but the worker is 2 cells from the box
        assert_eq!(estimate_initial("#####\n#@ *#\n#####"), 2);
    }

    #[test]
    fn walls_are_ignored() {
        // manhattan distance right through the wall
        assert_eq!(estimate_initial("#####\n#@$##\n### #\n##. #\n#####"), 3);
    }

    #[test]
    fn greedy_matching_overestimates() {
        // the closest pair is matched first, which can strand a far
        // box-target pair; here greedy yields 6 where optimal is 4
        let input = "########\n#.  $.$#\n#@     #\n########";
        assert_eq!(estimate_initial(input), 10);
    }
}
