//! Tests for node discovery: dead ends, turns, junctions and corridor skipping

#[cfg(test)]
mod tests {
    use mazegraph::algorithm::extraction::{
        extract, is_node, is_node_shape, neighbours, open_neighbours,
    };
    use mazegraph::spatial::{OpenField, PixelOracle, Position};

    const TURNS: [&str; 5] = ["#.###", "#...#", "###.#", "#...#", "#.###"];

    fn positions_of(field: &OpenField) -> Vec<Position> {
        let graph = extract(field).unwrap();
        graph
            .nodes()
            .map(|(_, node)| node.position())
            .collect()
    }

    // Tests neighbours are clipped to the field and listed right, down, left, up
    // Verified by reordering the candidate array
    #[test]
    fn test_neighbours_order_and_bounds() {
        let field = OpenField::new(3, 3);

        assert_eq!(
            neighbours(&field, Position::new(1, 1)),
            vec![
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(1, 0),
            ]
        );
        assert_eq!(
            neighbours(&field, Position::new(0, 0)),
            vec![Position::new(1, 0), Position::new(0, 1)]
        );
        assert_eq!(
            neighbours(&field, Position::new(2, 2)),
            vec![Position::new(1, 2), Position::new(2, 1)]
        );
    }

    // Tests only open neighbours are reported
    // Verified by skipping the open check
    #[test]
    fn test_open_neighbours_filters_walls() {
        let field = OpenField::from_rows(&TURNS).unwrap();
        let open = open_neighbours(&field, Position::new(1, 1)).unwrap();
        assert_eq!(open, vec![Position::new(2, 1), Position::new(1, 0)]);
    }

    // Tests neighbour shapes: straight pairs are corridor, everything else is a node
    // Verified by accepting aligned pairs
    #[test]
    fn test_is_node_shape() {
        let horizontal = [Position::new(0, 1), Position::new(2, 1)];
        let vertical = [Position::new(1, 0), Position::new(1, 2)];
        let turn = [Position::new(2, 1), Position::new(1, 0)];

        assert!(!is_node_shape(&horizontal));
        assert!(!is_node_shape(&vertical));
        assert!(is_node_shape(&turn));
        assert!(is_node_shape(&[]));
        assert!(is_node_shape(&horizontal[..1]));
        assert!(is_node_shape(&[
            Position::new(0, 1),
            Position::new(2, 1),
            Position::new(1, 0),
        ]));
    }

    // Tests walls are never nodes even when surrounded by open pixels
    // Verified by dropping the open check in is_node
    #[test]
    fn test_wall_is_not_node() {
        let field = OpenField::from_rows(&["...", ".#.", "..."]).unwrap();
        assert!(!is_node(&field, Position::new(1, 1)).unwrap());
        assert!(is_node(&field, Position::new(0, 0)).unwrap());
        assert!(!is_node(&field, Position::new(1, 0)).unwrap());
    }

    // Tests the turning corridor yields its ends and turns in row-major order
    // Verified by scanning column-major
    #[test]
    fn test_extract_turns() {
        let field = OpenField::from_rows(&TURNS).unwrap();
        assert_eq!(
            positions_of(&field),
            vec![
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(3, 1),
                Position::new(1, 3),
                Position::new(3, 3),
                Position::new(1, 4),
            ]
        );
    }

    // Tests a straight corridor collapses to its two ends
    // Verified by treating two aligned neighbours as a node
    #[test]
    fn test_extract_straight_corridor() {
        let field = OpenField::from_rows(&["#.#", "#.#", "#.#", "#.#"]).unwrap();
        assert_eq!(
            positions_of(&field),
            vec![Position::new(1, 0), Position::new(1, 3)]
        );
    }

    // Tests isolated open pixels become nodes
    // Verified by requiring at least one open neighbour
    #[test]
    fn test_extract_isolated_pixel() {
        let field = OpenField::from_rows(&["###", "#.#", "###"]).unwrap();
        assert_eq!(positions_of(&field), vec![Position::new(1, 1)]);
    }

    // Tests an all-wall field yields no nodes
    // Verified by adding a node for every pixel
    #[test]
    fn test_extract_empty_field() {
        let field = OpenField::new(4, 4);
        let graph = extract(&field).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.dimensions(), (4, 4));
    }

    // Tests every extracted node satisfies the node rule and every other open pixel is corridor
    // Verified by inverting the two-neighbour axis test
    #[test]
    fn test_extract_matches_node_rule_everywhere() {
        let field = OpenField::from_fn(17, 13, |p| (p.x * 7 + p.y * 13 + p.x * p.y) % 5 != 0);
        let graph = extract(&field).unwrap();
        let (width, height) = field.dimensions();

        for y in 0..height {
            for x in 0..width {
                let position = Position::new(x, y);
                let found = graph.find(position).is_some();
                if !field.is_open(position) {
                    assert!(!found, "wall at {position} became a node");
                    continue;
                }
                let open = open_neighbours(&field, position).unwrap();
                let corridor =
                    matches!(open.as_slice(), [a, b] if a.x == b.x || a.y == b.y);
                assert_eq!(found, !corridor, "wrong classification at {position}");
            }
        }
    }
}
