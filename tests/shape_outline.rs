use egui::{Color32, Rect, pos2, vec2};
use shape_placer::{EditorError, Outline, Shape, ShapeKind, ShapeParams};

fn create_test_shape(kind: ShapeKind) -> Shape {
    Shape::new(
        kind,
        ShapeParams {
            color: Color32::from_rgb(0x33, 0x66, 0x99),
            position: pos2(100.0, 100.0),
            width: 40.0,
            height: Some(20.0),
        },
    )
}

#[test]
fn test_shape_creation() {
    let shape = create_test_shape(ShapeKind::Rectangle);
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.position(), pos2(100.0, 100.0));
    assert_eq!(shape.size(), vec2(40.0, 20.0));
    assert_eq!(shape.color(), Color32::from_rgb(0x33, 0x66, 0x99));
}

#[test]
fn test_from_kind() {
    let shape = Shape::from_kind(Some(ShapeKind::Circle), ShapeParams::default()).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Circle);

    let err = Shape::from_kind(None, ShapeParams::default()).unwrap_err();
    assert!(matches!(err, EditorError::ContractViolation(_)));
}

#[test]
fn test_rectangle_hit_testing() {
    let shape = create_test_shape(ShapeKind::Rectangle);
    let outline = shape.outline();

    assert_eq!(
        outline.bounding_rect(),
        Rect::from_min_max(pos2(80.0, 90.0), pos2(120.0, 110.0))
    );
    assert!(outline.contains(pos2(100.0, 100.0)));
    assert!(outline.contains(pos2(81.0, 91.0)));
    assert!(!outline.contains(pos2(100.0, 115.0)));
    assert!(!outline.contains(pos2(79.0, 100.0)));
}

#[test]
fn test_circle_hit_testing() {
    // Radius comes from the width; the height is ignored
    let shape = create_test_shape(ShapeKind::Circle);
    let outline = shape.outline();

    assert_eq!(
        *outline,
        Outline::Circle {
            center: pos2(100.0, 100.0),
            radius: 20.0
        }
    );
    assert!(outline.contains(pos2(100.0, 118.0)));
    assert!(!outline.contains(pos2(115.0, 115.0)));
}

#[test]
fn test_triangle_hit_testing() {
    let shape = create_test_shape(ShapeKind::Triangle);
    let outline = shape.outline();

    assert_eq!(
        *outline,
        Outline::Triangle([pos2(100.0, 90.0), pos2(80.0, 110.0), pos2(120.0, 110.0)])
    );
    // Near the base
    assert!(outline.contains(pos2(85.0, 109.0)));
    // Beside the apex
    assert!(!outline.contains(pos2(85.0, 91.0)));
    assert!(!outline.contains(pos2(100.0, 111.0)));
}

#[test]
fn test_outline_is_deterministic() {
    for kind in ShapeKind::ALL {
        let a = create_test_shape(kind);
        let b = create_test_shape(kind);
        assert_eq!(a.outline(), b.outline());
        assert_ne!(a.id(), b.id());
    }
}
