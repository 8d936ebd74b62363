//! Overlay rendering of the node graph and of solution paths

use std::path::Path as FsPath;

use image::{Rgba, RgbaImage};

use crate::algorithm::pathfinder::Path;
use crate::algorithm::scratch::VisitMarks;
use crate::io::configuration::{CONNECTION_COLOR, NODE_COLOR};
use crate::io::error::{MazeError, Result};
use crate::spatial::{MazeGraph, Position};

fn paint(image: &mut RgbaImage, position: Position, color: [u8; 3]) {
    if let Some(pixel) = image.get_pixel_mut_checked(position.x, position.y) {
        *pixel = Rgba([color[0], color[1], color[2], 255]);
    }
}

/// Draw every node and every edge of the graph over a copy of `base`
///
/// Each edge is painted once, from the first of its endpoints in node order.
pub fn render_connections(base: &RgbaImage, graph: &MazeGraph) -> RgbaImage {
    let mut output = base.clone();
    let mut marks = VisitMarks::new(graph);

    for (id, node) in graph.nodes() {
        marks.visit(id);
        paint(&mut output, node.position(), NODE_COLOR);

        for &other in node.connections() {
            if marks.is_visited(other) {
                continue;
            }
            if let Some(other_position) = graph.position(other) {
                for pixel in node.position().between(other_position) {
                    paint(&mut output, pixel, CONNECTION_COLOR);
                }
            }
        }
    }

    output
}

/// Draw a path, including the corridor pixels between its nodes, over a copy of `base`
pub fn render_path(base: &RgbaImage, graph: &MazeGraph, path: &Path) -> RgbaImage {
    let mut output = base.clone();
    let positions = path.positions(graph);

    for position in &positions {
        paint(&mut output, *position, NODE_COLOR);
    }
    for pair in positions.windows(2) {
        if let [a, b] = pair {
            for pixel in a.between(*b) {
                paint(&mut output, pixel, NODE_COLOR);
            }
        }
    }

    output
}

/// Write an image as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image(image: &RgbaImage, output_path: &FsPath) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
