/// Conway's B3/S23: a live cell survives with two or three live neighbors,
/// a dead cell is born with exactly three.
pub fn next_state(alive: bool, alive_neighbors: usize) -> bool {
    matches!((alive, alive_neighbors), (true, 2) | (true, 3) | (false, 3))
}
