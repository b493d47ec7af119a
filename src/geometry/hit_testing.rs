use egui::{Pos2, Rect};

/// Inclusive rectangle containment
pub fn point_in_rect(pos: Pos2, rect: Rect) -> bool {
    rect.contains(pos)
}

/// Inclusive circle containment
pub fn point_in_circle(pos: Pos2, center: Pos2, radius: f32) -> bool {
    (pos - center).length_sq() <= radius * radius
}

// Signed area of the parallelogram spanned by (b - a) and (p - a)
fn edge_sign(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Inclusive triangle containment, independent of vertex winding
pub fn point_in_triangle(pos: Pos2, [a, b, c]: [Pos2; 3]) -> bool {
    let d1 = edge_sign(pos, a, b);
    let d2 = edge_sign(pos, b, c);
    let d3 = edge_sign(pos, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Finds the topmost item matching `hit`.
///
/// Items are stored bottom to top (last painted = topmost), so the scan runs
/// in reverse and stops at the first match.
pub fn topmost_hit<T>(items: &[T], mut hit: impl FnMut(&T) -> bool) -> Option<usize> {
    items.iter().rposition(|item| hit(item))
}
