use cube_match3::core::{Board, Cube, CubeConfig};
use cube_match3::term::{render_cube, render_face, render_face_colored, FaceView};
use cube_match3::types::Face;

#[test]
fn render_face_is_the_labelled_debug_map() {
    let board = Board::from_debug_map(Face::B, "ABC\n.Z.\nJJJ").unwrap();
    assert_eq!(render_face(&board), "Face B\nA B C\n. Z .\nJ J J\n");
}

#[test]
fn render_cube_lists_faces_in_order() {
    let cube = Cube::new(CubeConfig {
        extent: 4,
        ..CubeConfig::default()
    })
    .unwrap();
    let text = render_cube(&cube);
    let labels: Vec<&str> = text.lines().filter(|l| l.starts_with("Face")).collect();
    assert_eq!(labels, vec!["Face A", "Face B", "Face C", "Face D", "Face E", "Face F"]);
    assert_eq!(text.lines().count(), 6 * 5 + 5);
}

#[test]
fn colored_render_has_one_line_per_row() {
    let board = Board::from_debug_map(Face::C, "AB.\n...\n..Z").unwrap();
    let text = render_face_colored(&board).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(!text.contains('.'));
}

#[test]
fn view_size_fits_label_and_grid() {
    let view = FaceView::default();
    let small = Board::new(2, Face::A);
    assert_eq!(view.size(&small), (6, 3));
    let large = Board::new(9, Face::A);
    assert_eq!(view.size(&large), (18, 10));
}
