use std::collections::VecDeque;

use crate::data::{Pos, DIRECTIONS};
use crate::layout::Layout;
use crate::vec2d::Vec2d;

/// Flood fills the cells the worker can walk to from `start` without
/// pushing anything. `boxes` must be sorted and act as obstacles;
/// pass an empty slice to ignore them. The fill never leaves the grid.
pub(crate) fn reachable_cells(layout: &Layout, start: Pos, boxes: &[Pos]) -> Vec2d<bool> {
    let mut reachable = layout.grid.scratchpad();
    if layout.is_blocked(start) {
        return reachable;
    }

    reachable[start] = true;
    let mut to_visit = VecDeque::new();
    to_visit.push_back(start);

    while let Some(cur) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            let next = cur + dir;
            if layout.is_blocked(next) || reachable[next] || boxes.binary_search(&next).is_ok() {
                continue;
            }
            reachable[next] = true;
            to_visit.push_back(next);
        }
    }

    reachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warehouse::Warehouse;

    #[test]
    fn fill_around_walls() {
        let warehouse: Warehouse = r"
#####
#@# #
#   #
#####
"
        .parse()
        .unwrap();
        let reachable = reachable_cells(warehouse.layout(), warehouse.worker(), &[]);
        assert_eq!(reachable.to_string(), "00000\n01010\n01110\n00000\n");
    }

    #[test]
    fn boxes_block_fill() {
        let warehouse: Warehouse = r"
#####
#@# #
#   #
#####
"
        .parse()
        .unwrap();
        let boxes = [Pos::new(2, 2)];
        let reachable = reachable_cells(warehouse.layout(), warehouse.worker(), &boxes);
        assert_eq!(reachable.to_string(), "00000\n01000\n01000\n00000\n");
    }

    #[test]
    fn blocked_start_reaches_nothing() {
        let warehouse: Warehouse = r"
#####
#@# #
#   #
#####
"
        .parse()
        .unwrap();
        let reachable = reachable_cells(warehouse.layout(), Pos::new(0, 0), &[]);
        assert_eq!(reachable.to_string(), "00000\n00000\n00000\n00000\n");
    }
}
