use crate::data::Pos;

/// The movable part of a warehouse - worker and box positions.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub(crate) worker: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub(crate) fn new(worker: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort(); // sort to detect equal states when we reorder boxes
        State { worker, boxes }
    }

    pub fn worker(&self) -> Pos {
        self.worker
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub(crate) fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }
}
