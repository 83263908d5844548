use crate::data::Dir;
use crate::state::State;
use crate::warehouse::Warehouse;

/// Replays a sequence of worker moves against the laws of the
/// warehouse and returns the warehouse it ends in, or `None` as soon
/// as one move fails.
///
/// A move fails if it walks into a wall, pushes a box into a wall or
/// into another box, or leaves the grid. Pushes onto taboo cells are
/// fine here - they are just bad ideas, not illegal ones.
pub fn check_action_seq(warehouse: &Warehouse, actions: &[Dir]) -> Option<Warehouse> {
    let layout = &warehouse.layout;
    let mut worker = warehouse.state.worker;
    let mut boxes = warehouse.state.boxes.clone();

    for &dir in actions {
        let dest = worker + dir;
        if layout.is_blocked(dest) {
            return None;
        }
        if let Ok(i) = boxes.binary_search(&dest) {
            let push_dest = dest + dir;
            if layout.is_blocked(push_dest) || boxes.binary_search(&push_dest).is_ok() {
                return None;
            }
            boxes[i] = push_dest;
            boxes.sort();
        }
        worker = dest;
    }

    Some(Warehouse::new(layout.clone(), State::new(worker, boxes)))
}
