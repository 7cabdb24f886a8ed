//! Physical stamp shapes.

/// Outline of a stamp, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StampShape {
    Rect { w: f64, h: f64 },
    Oval { w: f64, h: f64 },
    Circle { d: f64 },
    /// Right isosceles triangle; `w` is the hypotenuse.
    Triangle45 { w: f64 },
}

impl StampShape {
    /// Horizontal extent of the shape.
    pub fn width(&self) -> f64 {
        match *self {
            StampShape::Rect { w, .. } | StampShape::Oval { w, .. } => w,
            StampShape::Circle { d } => d,
            StampShape::Triangle45 { w } => w,
        }
    }

    /// Area of the bounding box the stamp occupies on an envelope.
    pub fn bbox_area(&self) -> f64 {
        match *self {
            StampShape::Rect { w, h } | StampShape::Oval { w, h } => w * h,
            StampShape::Circle { d } => d * d,
            StampShape::Triangle45 { w } => w * w / 1.41,
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            StampShape::Rect { w, h } => format!("{}x{} mm", w, h),
            StampShape::Oval { w, h } => format!("oval {}x{} mm", w, h),
            StampShape::Circle { d } => format!("circle {} mm", d),
            StampShape::Triangle45 { w } => format!("triangle, long side {} mm", w),
        }
    }
}
