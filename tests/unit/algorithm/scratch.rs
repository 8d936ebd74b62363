//! Tests for per-pass visit marks, scores and back-pointers

#[cfg(test)]
mod tests {
    use mazegraph::algorithm::scratch::{SearchState, VisitMarks};
    use mazegraph::spatial::{MazeGraph, NodeId, Position};

    fn star() -> (MazeGraph, [NodeId; 4]) {
        let mut graph = MazeGraph::new(5, 5);
        let centre = graph.add_node(Position::new(2, 2));
        let up = graph.add_node(Position::new(2, 0));
        let left = graph.add_node(Position::new(0, 2));
        let right = graph.add_node(Position::new(4, 2));
        graph.connect(centre, up);
        graph.connect(centre, left);
        graph.connect(centre, right);
        (graph, [centre, up, left, right])
    }

    // Tests visiting reports first visits only
    // Verified by always returning true from visit
    #[test]
    fn test_visit_marks() {
        let (graph, [centre, up, ..]) = star();
        let mut marks = VisitMarks::new(&graph);

        assert!(!marks.is_visited(centre));
        assert!(marks.visit(centre));
        assert!(!marks.visit(centre));
        assert!(marks.is_visited(centre));
        assert!(!marks.is_visited(up));
        assert_eq!(marks.count(), 1);
        assert!(!marks.visit(NodeId::new(99)));
    }

    // Tests unvisited connections keep connection order
    // Verified by sorting the frontier
    #[test]
    fn test_unvisited_connections() {
        let (graph, [centre, up, left, right]) = star();
        let mut marks = VisitMarks::new(&graph);

        assert_eq!(marks.unvisited(&graph, centre), vec![up, left, right]);
        marks.visit(left);
        assert_eq!(marks.unvisited(&graph, centre), vec![up, right]);
    }

    // Tests f only exists once both g and h are set
    // Verified by defaulting missing parts to zero
    #[test]
    fn test_f_requires_both_scores() {
        let (graph, [centre, ..]) = star();
        let mut state = SearchState::new(&graph);

        assert_eq!(state.f(centre), None);
        state.set_g(centre, 3);
        assert_eq!(state.f(centre), None);
        state.ensure_h(centre, || 4);
        assert_eq!(state.f(centre), Some(7));
    }

    // Tests h is computed once while g can be overwritten
    // Verified by overwriting h unconditionally
    #[test]
    fn test_h_set_once_g_overwritten() {
        let (graph, [_, up, ..]) = star();
        let mut state = SearchState::new(&graph);

        state.ensure_h(up, || 10);
        state.ensure_h(up, || 1);
        state.set_g(up, 5);
        state.set_g(up, 2);

        assert_eq!(state.h(up), Some(10));
        assert_eq!(state.g(up), Some(2));
    }

    // Tests back-pointer chains are returned root first
    // Verified by returning the chain without reversing it
    #[test]
    fn test_trace() {
        let (graph, [centre, up, left, _]) = star();
        let mut state = SearchState::new(&graph);

        state.set_came_from(centre, up);
        state.set_came_from(left, centre);

        assert_eq!(state.trace(left), vec![up, centre, left]);
        assert_eq!(state.trace(up), vec![up]);
        assert_eq!(state.came_from(up), None);
    }

    // Tests a cyclic chain terminates
    // Verified by removing the length bound on the walk
    #[test]
    fn test_trace_cycle_is_bounded() {
        let (graph, [centre, up, ..]) = star();
        let mut state = SearchState::new(&graph);

        state.set_came_from(centre, up);
        state.set_came_from(up, centre);

        assert!(state.trace(centre).len() <= graph.len() + 1);
    }

    // Tests fresh state carries nothing over from an earlier pass
    // Verified by sharing storage between states
    #[test]
    fn test_fresh_state_per_pass() {
        let (graph, [centre, up, ..]) = star();
        let mut first = SearchState::new(&graph);
        first.visit(centre);
        first.set_g(up, 1);
        first.set_came_from(up, centre);

        let second = SearchState::new(&graph);
        assert!(!second.is_visited(centre));
        assert_eq!(second.g(up), None);
        assert_eq!(second.came_from(up), None);
        assert_eq!(second.marks().count(), 0);
        assert_eq!(second.frontier(&graph, centre).len(), 3);
    }
}
